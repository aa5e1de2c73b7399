//! Change notification for view-model state
//!
//! The presentation layer binds to the editor by registering a callback;
//! every mutation of the editor's state is reported as an [`EditorEvent`]
//! carrying the operation kind and the affected index/value. No UI
//! framework machinery is assumed here.

/// Change events emitted by the editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// An item was appended to the list
    ItemAdded { index: usize, value: String },
    /// An item was removed from the list
    ItemRemoved { index: usize, value: String },
    /// The pending input text changed
    DraftChanged { value: String },
}

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe
pub type SubscriptionId = usize;

type Callback = Box<dyn Fn(&EditorEvent) + Send>;

/// Registry of change-notification callbacks
///
/// Callbacks are invoked synchronously, in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback and return its subscription handle
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Drop a previously registered callback; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Deliver an event to every live subscriber
    pub fn notify(&self, event: &EditorEvent) {
        for (_, callback) in &self.entries {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_subscribe_and_notify() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let sink = seen.clone();
        subscribers.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        let event = EditorEvent::ItemAdded {
            index: 0,
            value: "A".to_string(),
        };
        subscribers.notify(&event);

        assert_eq!(seen.lock().unwrap().as_slice(), &[event]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let sink = seen.clone();
        let id = subscribers.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        subscribers.unsubscribe(id);

        subscribers.notify(&EditorEvent::DraftChanged {
            value: "x".to_string(),
        });

        assert!(seen.lock().unwrap().is_empty());
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        for tag in ["first", "second"] {
            let sink = seen.clone();
            subscribers.subscribe(move |_| sink.lock().unwrap().push(tag));
        }

        subscribers.notify(&EditorEvent::DraftChanged {
            value: String::new(),
        });

        assert_eq!(seen.lock().unwrap().as_slice(), &["first", "second"]);
    }
}
