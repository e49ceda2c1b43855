//! Stable exit codes for the writer CLI.

/// The content was written to the target file.
pub const OK: i32 = 0;
/// Wrong argument count, empty argument, open failure, or write failure.
pub const FAILURE: i32 = 1;
