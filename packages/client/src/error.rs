//! Client error types
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-specific error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create an API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Check if this failure should send the user back to login.
    ///
    /// 401/403 responses are classified as `Authentication` at the request
    /// layer; the message-content check covers servers that return auth
    /// failures with other status codes ("Incorrect email or password",
    /// "Could not validate credentials").
    pub fn is_auth_error(&self) -> bool {
        match self {
            ClientError::Authentication(_) => true,
            ClientError::Api(msg) => msg.to_lowercase().contains("credentials"),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let auth_error = ClientError::auth("Invalid or expired token");
        assert!(auth_error.is_auth_error());
        assert!(!auth_error.is_network_error());

        let api_error = ClientError::api("Column not found");
        assert!(!api_error.is_auth_error());

        let sniffed = ClientError::api("Could not validate credentials");
        assert!(sniffed.is_auth_error());
    }

    #[test]
    fn test_error_display() {
        let error = ClientError::auth("Incorrect email or password");
        assert_eq!(
            error.to_string(),
            "Authentication error: Incorrect email or password"
        );

        let error = ClientError::api("Request failed");
        assert_eq!(error.to_string(), "API error: Request failed");
    }
}
