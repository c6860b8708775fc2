use thiserror::Error;

/// Failure of a call to the QuickAid backend or a browser API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Backend answered 2xx with `success: false`
    #[error("Rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

impl ApiError {
    /// Server-provided message if there is one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(m), .. } | ApiError::Rejected(Some(m)) if !m.is_empty() => {
                m.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
