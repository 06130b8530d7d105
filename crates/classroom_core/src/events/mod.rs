//! Viewer and notification event plumbing.
//!
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Queuing support (immediate + deferred delivery)
//!
//! The 3D viewer embed and the host environment deliver their signals
//! through this system: asset load completion (success or failure, tagged
//! with the load token of the attempt they belong to), fullscreen changes,
//! and transient upload notifications.

use std::collections::HashMap;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The viewer embed finished loading a model asset
    ModelLoaded,
    /// The viewer embed failed to load a model asset
    ModelLoadFailed,
    /// The host environment's fullscreen status changed
    FullscreenChanged,
    /// An object-storage upload completed
    UploadCompleted,
    /// An object-storage upload failed; the draft is preserved for retry
    UploadFailed,
}

/// Variant for type-safe event arguments
/// Uses key-value pairs to avoid order dependency problems
#[derive(Debug, Clone)]
pub enum EventArg {
    /// Load token generation value
    Token(u64),
    /// Boolean status flag (fullscreen active, ...)
    Active(bool),
    /// A resolvable URL (uploaded asset, ...)
    Url(String),
    /// Human-readable detail for notifications
    Detail(String),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Timestamp when event was created (seconds)
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type and timestamp
    #[must_use]
    pub fn new(event_type: EventType, timestamp: f64) -> Self {
        Self {
            event_type,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    #[must_use]
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get the load token argument if present
    #[must_use]
    pub fn get_load_token(&self) -> Option<u64> {
        if let Some(EventArg::Token(token)) = self.get_arg("token") {
            Some(*token)
        } else {
            None
        }
    }

    /// Get the active-flag argument if present
    #[must_use]
    pub fn get_active(&self) -> Option<bool> {
        if let Some(EventArg::Active(active)) = self.get_arg("active") {
            Some(*active)
        } else {
            None
        }
    }

    /// Get the URL argument if present
    #[must_use]
    pub fn get_url(&self) -> Option<&str> {
        if let Some(EventArg::Url(url)) = self.get_arg("url") {
            Some(url)
        } else {
            None
        }
    }

    /// Get the detail argument if present
    #[must_use]
    pub fn get_detail(&self) -> Option<&str> {
        if let Some(EventArg::Detail(detail)) = self.get_arg("detail") {
            Some(detail)
        } else {
            None
        }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    immediate_queue: Vec<Event>,
    deferred_queue: Vec<(f64, Event)>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
    current_time: f64,
}

impl EventSystem {
    /// Create a new empty event system
    #[must_use]
    pub fn new() -> Self {
        Self {
            immediate_queue: Vec::new(),
            deferred_queue: Vec::new(),
            handlers: HashMap::new(),
            current_time: 0.0,
        }
    }

    /// Update current time (seconds since start)
    pub fn update_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// Current time as last reported through [`Self::update_time`]
    #[must_use]
    pub const fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Send event for immediate handling on the next dispatch
    pub fn send(&mut self, event: Event) {
        self.immediate_queue.push(event);
    }

    /// Post event for deferred delivery at specified time
    pub fn post(&mut self, delivery_time: f64, event: Event) {
        self.deferred_queue.push((delivery_time, event));
    }

    /// Dispatch all pending events
    /// Processes immediate queue first, then due deferred events
    pub fn dispatch(&mut self) {
        let immediate = std::mem::take(&mut self.immediate_queue);
        for event in immediate {
            self.dispatch_event(&event);
        }

        let mut i = 0;
        while i < self.deferred_queue.len() {
            if self.deferred_queue[i].0 <= self.current_time {
                let (_, event) = self.deferred_queue.remove(i);
                self.dispatch_event(&event);
            } else {
                i += 1;
            }
        }
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Event) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Number of events still waiting for their delivery time
    #[must_use]
    pub fn pending_deferred(&self) -> usize {
        self.deferred_queue.len()
    }

    /// Clear all queued events (useful when tearing down a view)
    pub fn clear(&mut self) {
        self.immediate_queue.clear();
        self.deferred_queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}
