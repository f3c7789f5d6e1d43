use std::fmt;

/// Comprehensive error types for urlex operations
#[derive(Debug)]
pub enum UrlexError {
    /// IO error (input file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Malformed target URL
    Target(url::ParseError),

    /// HTTP transport error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for UrlexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlexError::Io(err) => write!(f, "IO error: {err}"),
            UrlexError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlexError::Target(err) => write!(f, "Target error: {err}"),
            UrlexError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlexError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for UrlexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlexError::Io(err) => Some(err),
            UrlexError::Target(err) => Some(err),
            UrlexError::Http(err) => Some(err),
            UrlexError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlexError {
    fn from(err: std::io::Error) -> Self {
        UrlexError::Io(err)
    }
}

impl From<url::ParseError> for UrlexError {
    fn from(err: url::ParseError) -> Self {
        UrlexError::Target(err)
    }
}

impl From<reqwest::Error> for UrlexError {
    fn from(err: reqwest::Error) -> Self {
        UrlexError::Http(err)
    }
}

impl From<toml::de::Error> for UrlexError {
    fn from(err: toml::de::Error) -> Self {
        UrlexError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlexError
pub type Result<T> = std::result::Result<T, UrlexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = UrlexError::Config("Invalid proxy".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid proxy"
        );

        let io_error = UrlexError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(format!("{io_error}"), "IO error: no such file");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let urlex_error = UrlexError::from(io_error);

        match urlex_error {
            UrlexError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_url_parse() {
        let parse_error = url::Url::parse("http://[invalid").unwrap_err();
        let urlex_error = UrlexError::from(parse_error);

        match urlex_error {
            UrlexError::Target(_) => {} // Expected
            _ => panic!("Expected Target variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let urlex_error = UrlexError::from(toml_error);

        match urlex_error {
            UrlexError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let urlex_error = UrlexError::Io(io_error);

        assert!(urlex_error.source().is_some());

        let config_error = UrlexError::Config("test".to_string());
        assert!(config_error.source().is_none());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let urlex_error = UrlexError::Io(io_error);

        let source = urlex_error.source();
        assert!(source.is_some());

        let source_display = format!("{}", source.unwrap());
        assert!(source_display.contains("file not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlexError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(UrlexError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
    }
}
