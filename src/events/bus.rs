// src/events/bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in registration order
// 2. Snapshot semantics - handlers added or removed during an emit do not
//    affect the handlers already selected for that emit
// 3. No schema - events are plain names with an optional JSON payload
// 4. No magic - explicit, straightforward code

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use uuid::Uuid;

/// Type-erased event handler function
type EventHandler = Box<dyn Fn(Option<&Value>) + Send + Sync>;

struct HandlerEntry {
    id: Uuid,
    handler: Arc<EventHandler>,
}

type HandlerMap = HashMap<String, Vec<HandlerEntry>>;

/// The Event Bus
///
/// Central signaling point between otherwise decoupled components. A store
/// can ask another part of the app to react ("return to top and refresh")
/// without holding a reference to it.
///
/// Key characteristics:
/// - Synchronous execution, registration order
/// - Emitting to a name with no subscribers is a no-op
/// - Handlers live until explicitly unsubscribed
pub struct EventBus {
    handlers: Arc<RwLock<HandlerMap>>,
}

/// Token returned by [`EventBus::subscribe`]. Removes exactly the handler it
/// was created for. Dropping it without calling [`unsubscribe`] leaves the
/// handler registered.
///
/// [`unsubscribe`]: Subscription::unsubscribe
pub struct Subscription {
    handlers: Arc<RwLock<HandlerMap>>,
    event: String,
    id: Uuid,
}

impl Subscription {
    pub fn unsubscribe(self) {
        let mut handlers = self.handlers.write().unwrap();
        if let Some(entries) = handlers.get_mut(&self.event) {
            entries.retain(|e| e.id != self.id);
            if entries.is_empty() {
                handlers.remove(&self.event);
            }
        }
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a handler for a named event.
    ///
    /// Handlers are executed in the order they are subscribed.
    pub fn subscribe<F>(&self, event: &str, handler: F) -> Subscription
    where
        F: Fn(Option<&Value>) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let entry = HandlerEntry {
            id,
            handler: Arc::new(Box::new(handler)),
        };

        let mut handlers = self.handlers.write().unwrap();
        handlers.entry(event.to_string()).or_default().push(entry);

        Subscription {
            handlers: Arc::clone(&self.handlers),
            event: event.to_string(),
            id,
        }
    }

    /// Emit an event.
    ///
    /// Snapshots the currently registered handlers, releases the registry
    /// lock, then executes the snapshot in order. Re-entrant subscribe and
    /// unsubscribe are therefore safe and do not alter this emission.
    ///
    /// If a handler panics, the panic is caught and logged, but other
    /// handlers still execute.
    pub fn emit(&self, event: &str, payload: Option<Value>) {
        let snapshot: Vec<Arc<EventHandler>> = {
            let handlers = self.handlers.read().unwrap();
            match handlers.get(event) {
                Some(entries) => entries.iter().map(|e| Arc::clone(&e.handler)).collect(),
                None => Vec::new(),
            }
        };

        log::debug!("[EVENT] {} | {} handlers", event, snapshot.len());

        for (idx, handler) in snapshot.iter().enumerate() {
            // Catch panics to prevent one handler from breaking others
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler(payload.as_ref());
            }));

            if let Err(e) = result {
                log::error!("Handler {} for '{}' panicked: {:?}", idx, event, e);
            }
        }
    }

    /// Get the number of subscribers for a named event
    pub fn subscriber_count(&self, event: &str) -> usize {
        let handlers = self.handlers.read().unwrap();
        handlers.get(event).map(|h| h.len()).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Make EventBus cloneable (shared reference)
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}
