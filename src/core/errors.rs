//!    Error handling
//!
//! Application plumbing (CLI validation, storage setup, file I/O) uses
//! anyhow. Decoding the saved canvas has its own typed error in
//! `crate::data::record`, because its caller needs to tell the cases apart
//! before falling back to an empty canvas.

use anyhow::{ensure, Context, Result};

/// Result type alias for convenience throughout the application
pub type PolyResult<T> = Result<T>;

/// Helper functions for creating common error contexts
pub trait PolyContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> PolyResult<T>;
}

impl<T, E> PolyContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<std::path::Path>>(
        self,
        operation: &str,
        path: P,
    ) -> PolyResult<T> {
        self.with_context(|| {
            format!("Failed to {} file: {}", operation, path.as_ref().display())
        })
    }
}

/// A storage directory is fine if it is missing (it gets created) or is a
/// directory. Anything else at that path is an error.
pub fn validate_storage_dir<P: AsRef<std::path::Path>>(
    path: P,
) -> PolyResult<()> {
    let path = path.as_ref();

    if path.exists() {
        ensure!(
            path.is_dir(),
            "Storage path must be a directory: {}",
            path.display()
        );
    }

    Ok(())
}
