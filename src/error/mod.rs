use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// A required argument was empty. Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network failure, timeout, non-success HTTP status or an unreadable body.
    #[error("Transport failure{}: {message}", status_suffix(.status))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    /// The vendor answered but flagged an application-level error.
    /// `payload` is the decoded response body, untouched.
    #[error("Vendor error: {payload}")]
    VendorError { payload: Value },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl GatewayError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        GatewayError::TransportFailure {
            status,
            message: message.into(),
        }
    }

    /// HTTP status attached to a transport failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::TransportFailure { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GatewayError::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Serialization(format!("JSON serialization error: {}", error))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        let status = error.status().map(|s| s.as_u16());
        let message = if error.is_timeout() {
            format!("Request timed out: {}", error)
        } else if error.is_connect() {
            format!("Connection failed: {}", error)
        } else {
            format!("Request failed: {}", error)
        };
        GatewayError::TransportFailure { status, message }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_display_includes_status() {
        let err = GatewayError::transport(Some(500), "HTTP error");
        assert_eq!(err.to_string(), "Transport failure (HTTP 500): HTTP error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_transport_display_without_status() {
        let err = GatewayError::transport(None, "connection reset");
        assert_eq!(err.to_string(), "Transport failure: connection reset");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_vendor_error_keeps_payload() {
        let payload = json!({"error": "Invalid token", "errorcode": 1});
        let err = GatewayError::VendorError {
            payload: payload.clone(),
        };
        match err {
            GatewayError::VendorError { payload: p } => assert_eq!(p, payload),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let err: GatewayError = serde_json::from_str::<Value>("{not json").unwrap_err().into();
        assert!(matches!(err, GatewayError::Serialization(_)));
    }
}
