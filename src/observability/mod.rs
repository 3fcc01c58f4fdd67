//! Observability for the gateway
//!
//! Structured JSON logging of typed lifecycle and request events.
//!
//! # Usage
//!
//! ```ignore
//! use remote_sqlite::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::DatabaseCreated, &[("namespace", "team"), ("db", "fick")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
