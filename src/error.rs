use std::fmt;

/// Why a remote JSON document could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response (DNS, TLS, offline, CORS).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {}", msg),
            LoadError::Status(code) => write!(f, "HTTP error! status: {}", code),
            LoadError::Parse(msg) => write!(f, "invalid JSON: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}
