// core/src/errors/approval_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApprovalError {
    #[error("not a regular file in changed files list: {path} ({reason})")]
    InvalidInput { path: PathBuf, reason: &'static str },

    #[error("error while reading declaration: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApprovalError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ApprovalError::InvalidInput { .. })
    }
}
