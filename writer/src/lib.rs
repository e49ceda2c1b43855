//! Write a single string to a file, logging the outcome.
//!
//! - **[`run`]**: the command runner. Validates `<writefile> <writestr>`,
//!   performs the write and maps the outcome to an exit status.
//! - **[`write`]**: create-or-truncate file write.
//! - **[`logging`]**: the scoped [`logging::LogChannel`] every log line goes
//!   through.

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod run;
#[cfg(test)]
mod test_support;
pub mod write;
