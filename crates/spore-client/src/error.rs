//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Server answered with a non-success status.
    #[error("request to {url} failed with HTTP {status}")]
    RemoteRequestFailed {
        /// HTTP status code.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// Response body was not well-formed XML.
    #[error("failed to parse XML response: {0}")]
    ResponseParseFailed(#[from] xmltree::ParseError),

    /// Download destination could not be created, written or replaced.
    #[error("failed to write {}: {source}", path.display())]
    LocalIoFailed {
        /// Destination path of the download.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Connection, timeout or body-read failure in the transport.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Asset id too short to be sharded into static-content paths.
    #[error("asset id {0} has fewer than 9 digits")]
    InvalidAssetId(u64),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status carried by a failed request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RemoteRequestFailed { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

impl From<spore_config::ConfigError> for Error {
    fn from(err: spore_config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let err = Error::RemoteRequestFailed {
            status: 404,
            url: "http://www.spore.com/rest/user/nobody".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_server_error());

        let err = Error::RemoteRequestFailed {
            status: 503,
            url: String::new(),
        };
        assert!(err.is_server_error());
        assert!(Error::InvalidAssetId(42).status().is_none());
    }

    #[test]
    fn test_display_mentions_status_and_url() {
        let err = Error::RemoteRequestFailed {
            status: 500,
            url: "http://www.spore.com/rest/stats".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/rest/stats"));
    }
}
