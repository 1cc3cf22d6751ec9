use std::path::PathBuf;

/// Crate-level error type.
///
/// The formatter and renderers are total; only file I/O, JSON decoding and
/// configuration loading can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("not a readable regular file: {}", .0.display())]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let e = Error::Config("heading_level must be 1..=6, got 9".to_string());
        assert_eq!(e.to_string(), "invalid config: heading_level must be 1..=6, got 9");
    }

    #[test]
    fn test_invalid_path_display() {
        let e = Error::InvalidPath(PathBuf::from("/no/such/file.txt"));
        assert!(e.to_string().contains("/no/such/file.txt"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let e: Error = err.into();
        assert!(e.to_string().starts_with("invalid JSON"));
    }
}
