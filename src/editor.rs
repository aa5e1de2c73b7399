//! List editor view-model
//!
//! Owns the ordered item collection and the pending input text, and
//! exposes the three operations the presentation layer can trigger: add,
//! delete, and open-detail. All state is transient; the editor lives and
//! dies with the screen hosting it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::binding::{EditorEvent, SubscriptionId, Subscribers};
use crate::error::NavigationError;
use crate::navigation::{Navigator, Route, DETAIL_SCREEN, TEXT_PARAM};

pub struct ListEditor {
    items: Vec<String>,
    draft: String,
    navigator: Arc<dyn Navigator>,
    subscribers: Subscribers,
}

impl ListEditor {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            navigator,
            subscribers: Subscribers::new(),
        }
    }

    /// Pre-populate the list, e.g. from command-line arguments
    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Write side of the two-way binding on the pending input
    ///
    /// Writing the current value again is not a change and emits nothing,
    /// so a bound widget echoing values back does not loop.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.draft {
            return;
        }
        self.draft = text;
        self.subscribers.notify(&EditorEvent::DraftChanged {
            value: self.draft.clone(),
        });
    }

    /// Register a change-notification callback
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    /// Append the pending input to the list and clear it
    ///
    /// Silent no-op when the input is empty; an empty string never reaches
    /// the list.
    pub fn add(&mut self) {
        if self.draft.is_empty() {
            debug!("add skipped, empty input");
            return;
        }

        let value = std::mem::take(&mut self.draft);
        self.items.push(value.clone());
        info!(item = %value, count = self.items.len(), "item added");

        self.subscribers.notify(&EditorEvent::ItemAdded {
            index: self.items.len() - 1,
            value,
        });
        self.subscribers.notify(&EditorEvent::DraftChanged {
            value: String::new(),
        });
    }

    /// Remove one occurrence of `value` from the list
    ///
    /// With duplicates present the first occurrence goes. Absent values
    /// are a silent no-op.
    pub fn delete(&mut self, value: &str) {
        let Some(index) = self.items.iter().position(|item| item == value) else {
            debug!(item = %value, "delete skipped, not in list");
            return;
        };

        let removed = self.items.remove(index);
        info!(item = %removed, count = self.items.len(), "item removed");

        self.subscribers.notify(&EditorEvent::ItemRemoved {
            index,
            value: removed,
        });
    }

    /// Request navigation to the detail view for `value`
    ///
    /// Suspends until the host accepts the transition. Failures are
    /// returned to the caller; the editor does not retry or recover.
    pub async fn open_detail(&self, value: &str) -> Result<(), NavigationError> {
        let route = Route::new(DETAIL_SCREEN).with_param(TEXT_PARAM, value);
        info!(address = %route.address(), "opening detail view");
        self.navigator.navigate(route).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Navigator that records every route it is asked for
    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                routes: Mutex::new(Vec::new()),
            })
        }

        fn addresses(&self) -> Vec<String> {
            self.routes.lock().unwrap().iter().map(Route::address).collect()
        }
    }

    #[async_trait::async_trait]
    impl Navigator for RecordingNavigator {
        async fn navigate(&self, route: Route) -> Result<(), NavigationError> {
            self.routes.lock().unwrap().push(route);
            Ok(())
        }
    }

    fn editor() -> ListEditor {
        ListEditor::new(RecordingNavigator::new())
    }

    #[test]
    fn test_add_appends_draft_and_clears_it() {
        let mut editor = editor();
        editor.set_draft("Milk");
        editor.add();

        assert_eq!(editor.items(), &["Milk".to_string()]);
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut editor = editor();
        for value in ["A", "B", "C"] {
            editor.set_draft(value);
            editor.add();
        }

        assert_eq!(editor.items().last().map(String::as_str), Some("C"));
        assert_eq!(editor.items().len(), 3);
    }

    #[test]
    fn test_add_with_empty_draft_is_noop() {
        let mut editor = editor();
        editor.add();

        assert!(editor.items().is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_one_occurrence() {
        let mut editor = editor().with_items(vec!["A".into(), "B".into()]);
        editor.delete("A");

        assert_eq!(editor.items(), &["B".to_string()]);
    }

    #[test]
    fn test_delete_absent_value_is_noop() {
        let mut editor = editor().with_items(vec!["A".into()]);
        editor.delete("Z");
        editor.delete("Z");

        assert_eq!(editor.items(), &["A".to_string()]);
    }

    #[test]
    fn test_delete_with_duplicates_removes_first_occurrence() {
        let mut editor =
            editor().with_items(vec!["A".into(), "B".into(), "A".into()]);
        editor.delete("A");

        assert_eq!(editor.items(), &["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_add_delete_scenario() {
        let mut editor = editor();

        editor.set_draft("A");
        editor.add();
        assert_eq!(editor.items(), &["A".to_string()]);

        editor.set_draft("B");
        editor.add();
        assert_eq!(editor.items(), &["A".to_string(), "B".to_string()]);

        editor.delete("A");
        assert_eq!(editor.items(), &["B".to_string()]);
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut editor = editor();

        let sink = seen.clone();
        editor.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        editor.set_draft("A");
        editor.add();
        editor.delete("A");

        let events = seen.lock().unwrap();
        assert_eq!(
            events.as_slice(),
            &[
                EditorEvent::DraftChanged { value: "A".into() },
                EditorEvent::ItemAdded { index: 0, value: "A".into() },
                EditorEvent::DraftChanged { value: String::new() },
                EditorEvent::ItemRemoved { index: 0, value: "A".into() },
            ]
        );
    }

    #[test]
    fn test_set_draft_same_value_emits_nothing() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut editor = editor();
        editor.set_draft("A");

        let sink = seen.clone();
        editor.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        editor.set_draft("A");

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsubscribed_callback_not_invoked() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut editor = editor();

        let sink = seen.clone();
        let id = editor.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        editor.unsubscribe(id);
        editor.set_draft("A");

        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_detail_issues_one_request_with_text_param() {
        let navigator = RecordingNavigator::new();
        let editor = ListEditor::new(navigator.clone());

        editor.open_detail("X").await.unwrap();

        let addresses = navigator.addresses();
        assert_eq!(addresses.len(), 1);
        assert!(addresses[0].contains("Text=X"));
    }

    #[tokio::test]
    async fn test_open_detail_requests_in_call_order() {
        let navigator = RecordingNavigator::new();
        let editor = ListEditor::new(navigator.clone());

        editor.open_detail("A").await.unwrap();
        editor.open_detail("B").await.unwrap();

        assert_eq!(
            navigator.addresses(),
            vec!["detail?Text=A".to_string(), "detail?Text=B".to_string()]
        );
    }
}
