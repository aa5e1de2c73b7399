//! Routes and the navigation capability
//!
//! Screens are addressed by name with optional query parameters, e.g.
//! `detail?Text=Milk`. The editor never touches the host's screen state
//! directly; it is handed a [`Navigator`] at construction and issues
//! navigation requests through it.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::NavigationError;

/// Screen name of the list view
pub const LIST_SCREEN: &str = "list";

/// Screen name of the item detail view
pub const DETAIL_SCREEN: &str = "detail";

/// Query parameter carrying the item text to the detail view
pub const TEXT_PARAM: &str = "Text";

/// A navigation destination: screen name plus ordered query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    screen: String,
    params: Vec<(String, String)>,
}

impl Route {
    pub fn new(screen: &str) -> Self {
        Self {
            screen: screen.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Look up a query parameter by key
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Canonical address form, `screen?key=value&...`
    ///
    /// Parameter values are carried verbatim; the detail address for item
    /// `X` contains the literal `Text=X`.
    pub fn address(&self) -> String {
        if self.params.is_empty() {
            return self.screen.clone();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("{}?{}", self.screen, query.join("&"))
    }

    /// Parse an address produced by [`Route::address`]
    pub fn parse(address: &str) -> Result<Self, NavigationError> {
        let (screen, query) = match address.split_once('?') {
            Some((screen, query)) => (screen, Some(query)),
            None => (address, None),
        };

        if screen.is_empty() {
            return Err(NavigationError::MalformedAddress(address.to_string()));
        }

        let mut route = Route::new(screen);
        if let Some(query) = query {
            for pair in query.split('&') {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| NavigationError::MalformedAddress(address.to_string()))?;
                route = route.with_param(key, value);
            }
        }
        Ok(route)
    }
}

/// Capability to switch the currently displayed screen
///
/// `navigate` completes once the transition has been accepted by the host;
/// requests are delivered in call order.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, route: Route) -> Result<(), NavigationError>;
}

/// Host-side navigator backed by a route table and a delivery channel
///
/// The TUI event loop owns the receiving end and applies transitions
/// between draws. Screen names not present in the table fail fast.
pub struct ShellNavigator {
    known_screens: Vec<String>,
    sender: mpsc::UnboundedSender<Route>,
}

impl ShellNavigator {
    /// Create a navigator for the given screen names, returning the
    /// receiver the host loop drains for pending transitions.
    pub fn new(known_screens: &[&str]) -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let navigator = Self {
            known_screens: known_screens.iter().map(|s| s.to_string()).collect(),
            sender,
        };
        (navigator, receiver)
    }
}

#[async_trait]
impl Navigator for ShellNavigator {
    async fn navigate(&self, route: Route) -> Result<(), NavigationError> {
        if !self.known_screens.iter().any(|s| s == route.screen()) {
            return Err(NavigationError::UnknownScreen(route.screen().to_string()));
        }

        debug!(address = %route.address(), "navigation requested");
        self.sender
            .send(route)
            .map_err(|_| NavigationError::HostGone)?;
        Ok(())
    }
}
