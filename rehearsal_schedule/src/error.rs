//! Error types for loading and configuration.
//!
//! Load errors never escape [`ScheduleLoader`](crate::io::ScheduleLoader):
//! each one marks a source attempt as failed and the chain moves on. They are
//! still real values so callers and tests can see why a source was skipped.

/// Result type for source fetch and parse operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Why a single source attempt produced no schedule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Fetch failed: I/O, network, or a non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The body did not have the expected shape.
    #[error("Format error: {0}")]
    Format(String),

    /// The body parsed but yielded no usable rows.
    #[error("Empty result: {0}")]
    EmptyResult(String),
}

impl LoadError {
    /// Short label for the error class, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "transport",
            LoadError::Format(_) => "format",
            LoadError::EmptyResult(_) => "empty",
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Transport(e.to_string())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display_and_kind() {
        let err = LoadError::EmptyResult("no rows after discarding blanks".into());
        assert_eq!(err.kind(), "empty");
        assert_eq!(err.to_string(), "Empty result: no rows after discarding blanks");
    }

    #[test]
    fn test_io_error_is_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "data.json missing");
        let err: LoadError = io.into();
        assert!(matches!(err, LoadError::Transport(msg) if msg.contains("data.json")));
    }
}
