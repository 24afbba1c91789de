use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend or lookup request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response at all (connection refused, DNS, TLS...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// An authenticated request was refused; the stored session is no longer valid.
    #[error("Session rejected by the server")]
    Unauthorized { message: Option<String> },

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no details"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Message the backend sent with the failure, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// Backend message verbatim, or the operation's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub(crate) fn from_status(status: u16, body: &str, authenticated: bool) -> Self {
        let message = extract_message(body);
        if authenticated && (status == 401 || status == 403) {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }
}

/// Pull a human readable message out of an error body.
///
/// The backend answers with a bare JSON string, an object carrying `message`/`error`, or
/// plain text depending on the endpoint.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => non_empty(s),
        Ok(serde_json::Value::Object(map)) => ["message", "error", "detail"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|value| value.as_str().and_then(|s| non_empty(s.to_string()))),
        Ok(_) => None,
        Err(_) => non_empty(trimmed.to_string()),
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() { None } else { Some(s) }
}
