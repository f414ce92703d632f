//! Error types for document lookups, conversions and I/O.
//!
//! Parsing itself never returns an error: every lexical or structural problem
//! is folded into [`Document::valid`](crate::Document::valid). The variants here
//! cover what can go wrong *after* a parse, when a caller asks for something
//! the tree does not contain.
//!
//! ## Examples
//!
//! ```rust
//! use omfl::{parse, Error};
//!
//! let doc = parse("port = 8080");
//! assert!(matches!(doc.get("host"), Err(Error::PathNotFound { .. })));
//! ```

use thiserror::Error;

/// Represents every failure reachable from the public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A dotted path named a section that does not exist, or tried to descend
    /// through a leaf.
    #[error("path not found: `{path}`")]
    PathNotFound { path: String },

    /// A typed conversion was attempted on a value with a different tag.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a path-not-found error for `path`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::Error;
    ///
    /// let err = Error::path_not_found("server.port");
    /// assert!(err.to_string().contains("server.port"));
    /// ```
    pub fn path_not_found(path: &str) -> Self {
        Error::PathNotFound {
            path: path.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omfl::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::path_not_found("a.b").to_string(),
            "path not found: `a.b`"
        );
        assert_eq!(
            Error::type_mismatch("float", "boolean").to_string(),
            "type mismatch: expected float, found boolean"
        );
        assert_eq!(Error::io("denied").to_string(), "IO error: denied");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("short read")));
    }
}
