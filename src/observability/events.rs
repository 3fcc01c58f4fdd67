//! Observable gateway events
//!
//! Events are explicit and typed; each maps to a fixed name and severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and data root prepared
    ConfigLoaded,
    /// Listener bound, ready to serve
    GatewayStarted,
    /// Listener closed after shutdown signal
    GatewayStopped,
    /// Gateway running with an empty shared secret
    EmptySecret,

    // Requests
    /// Secret header did not match
    AuthRejected,
    /// Body was malformed or failed validation
    RequestRejected,
    /// Store or bridge returned an error
    OperationFailed,

    // Mutations
    /// Namespace directory created
    NamespaceCreated,
    /// Namespace removed with its databases
    NamespaceDeleted,
    /// Empty database file created
    DatabaseCreated,
    /// Database file removed
    DatabaseDropped,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::GatewayStarted => "GATEWAY_STARTED",
            Event::GatewayStopped => "GATEWAY_STOPPED",
            Event::EmptySecret => "EMPTY_SECRET",
            Event::AuthRejected => "AUTH_REJECTED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::OperationFailed => "OPERATION_FAILED",
            Event::NamespaceCreated => "NAMESPACE_CREATED",
            Event::NamespaceDeleted => "NAMESPACE_DELETED",
            Event::DatabaseCreated => "DATABASE_CREATED",
            Event::DatabaseDropped => "DATABASE_DROPPED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::EmptySecret | Event::AuthRejected | Event::RequestRejected => Severity::Warn,
            Event::OperationFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::GatewayStarted.as_str(), "GATEWAY_STARTED");
        assert_eq!(Event::DatabaseDropped.to_string(), "DATABASE_DROPPED");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::OperationFailed.severity(), Severity::Error);
        assert_eq!(Event::AuthRejected.severity(), Severity::Warn);
        assert_eq!(Event::DatabaseCreated.severity(), Severity::Info);
    }
}
