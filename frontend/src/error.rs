use serde_json::Value;
use thiserror::Error;

/// Failure of a single backend call, already classified by HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized { body: Value },
    #[error("validation failed: {body}")]
    Validation { body: Value },
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("request failed with status {status}")]
    Unknown { status: u16, body: Value },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Transport level failure, i.e. no HTTP response at all.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Unreachable(err.0)
    }
}

impl ApiError {
    /// Maps a non-success status to its error class.
    pub fn from_status(status: u16, body: Value) -> Self {
        match status {
            401 => ApiError::Unauthorized { body },
            422 => ApiError::Validation { body },
            _ => ApiError::Unknown { status, body },
        }
    }

    /// Server payload carried by the failure, `null` when there was none.
    pub fn body(&self) -> Value {
        match self {
            ApiError::Unauthorized { body }
            | ApiError::Validation { body }
            | ApiError::Unknown { body, .. } => body.clone(),
            ApiError::Unreachable(_) | ApiError::Decode(_) => Value::Null,
        }
    }

    /// The `message` field of the server payload, if it has one.
    pub fn server_message(&self) -> Option<String> {
        match self.body() {
            Value::Object(map) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_statuses() {
        assert!(ApiError::from_status(401, Value::Null).is_unauthorized());
        assert!(matches!(
            ApiError::from_status(422, json!({"detail": "bad"})),
            ApiError::Validation { .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, Value::Null),
            ApiError::Unknown { status: 500, .. }
        ));
    }

    #[test]
    fn extracts_server_message() {
        let err = ApiError::from_status(400, json!({"message": "Username taken"}));
        assert_eq!(err.server_message().as_deref(), Some("Username taken"));

        let err = ApiError::from_status(400, json!("plain text"));
        assert_eq!(err.server_message(), None);

        let err = ApiError::from(TransportError("connection refused".into()));
        assert_eq!(err.body(), Value::Null);
        assert_eq!(err.server_message(), None);
    }
}
