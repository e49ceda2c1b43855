//! Failure taxonomy for a single writer invocation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Every way an invocation can fail. All variants are terminal.
///
/// The `Display` text is the line logged at error level.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Wrong number of positional arguments.
    #[error("Usage: writer <writefile> <writestr>")]
    Usage,

    /// A positional argument was supplied but is empty.
    #[error("Error: '{name}' argument is empty.")]
    InvalidArgument { name: &'static str },

    #[error("Error: Failed to open file '{}' for writing.", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: Failed to write to file '{}'.", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriterError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            WriterError::Usage
            | WriterError::InvalidArgument { .. }
            | WriterError::Open { .. }
            | WriterError::Write { .. } => exit_codes::FAILURE,
        }
    }
}
