//! Error taxonomy for API calls.
//!
//! Two failure families reach callers: transport problems (no response at
//! all) and non-2xx responses. The server reports failures as
//! `{"detail": ...}` where detail is either a message string or a list of
//! validation objects carrying `msg`; both forms are flattened into one
//! display string so pages and commands can show it as-is.

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot connect to the server: {0}")]
    Connection(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Status { code: u16, message: String },

    #[error("Invalid response from server: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a non-2xx response from its status code and body
    pub fn from_status(code: u16, body: &str) -> Self {
        let message = extract_detail(body)
            .unwrap_or_else(|| format!("An error occurred ({})", code));
        match code {
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            422 => Self::Validation(message),
            _ => Self::Status { code, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                Self::from_status(code, &body)
            }
            e => Self::Connection(e.to_string()),
        }
    }
}

/// Pull the human-readable message out of a `{"detail": ...}` body.
/// Validation errors arrive as a list of objects; their `msg` fields are
/// joined into one line.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join(", "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ApiError::from_status(404, r#"{"detail": "Equipment not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Equipment not found");
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail": [
            {"loc": ["body", "name"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "item_level"], "msg": "ensure this value is less than or equal to 999", "type": "value_error"}
        ]}"#;
        let err = ApiError::from_status(422, body);
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "field required, ensure this value is less than or equal to 999"
        );
    }

    #[test]
    fn test_forbidden_maps_to_own_variant() {
        let err = ApiError::from_status(403, r#"{"detail": "Not enough permissions"}"#);
        assert!(matches!(err, ApiError::Forbidden(_)));
        assert_eq!(err.to_string(), "Not enough permissions");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = ApiError::from_status(500, "<html>Internal Server Error</html>");
        match err {
            ApiError::Status { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "An error occurred (500)");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ApiError::from_status(400, "");
        assert_eq!(err.to_string(), "An error occurred (400)");
    }

    #[test]
    fn test_detail_present_but_not_string_or_list() {
        let err = ApiError::from_status(400, r#"{"detail": 42}"#);
        assert_eq!(err.to_string(), "An error occurred (400)");
    }
}
