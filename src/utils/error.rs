use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for portal operations
pub type BoxResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Error types for portal operations
#[derive(Debug)]
pub enum PortalError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Product manifest could not be read or parsed
    Manifest(String),
    /// Server error
    Server(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Io(err) => write!(f, "IO error: {}", err),
            PortalError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PortalError::Manifest(msg) => write!(f, "Manifest error: {}", msg),
            PortalError::Server(msg) => write!(f, "Server error: {}", msg),
            PortalError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PortalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PortalError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PortalError {
    fn from(err: io::Error) -> Self {
        PortalError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PortalError::Config("port must not be 0".to_string()).to_string(),
            "Configuration error: port must not be 0"
        );
        assert_eq!(PortalError::Generic("boom".to_string()).to_string(), "boom");
    }

    #[test]
    fn test_io_source_preserved() {
        let err = PortalError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error"));
    }
}
