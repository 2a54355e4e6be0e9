use thiserror::Error;

/// Errors surfaced by the ambient, non-algorithmic edges of this crate.
///
/// Construction from an in-memory byte sequence and substring search are
/// both total (see the module docs on [`crate::suffix_tree`]); neither
/// returns this type. The one place a [`SuffixTreeError`] can occur is
/// [`crate::SuffixTree::from_path`], which reads the input off disk first.
#[derive(Debug, Error)]
pub enum SuffixTreeError {
    /// Failed to read suffix tree input from the given path.
    #[error("failed to read suffix tree input from {path}: {source}")]
    FixtureRead {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for the ambient (non-core) operations in this crate.
pub type Result<T> = std::result::Result<T, SuffixTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = SuffixTreeError::FixtureRead {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read suffix tree input from missing.txt: no such file"
        );
    }
}
