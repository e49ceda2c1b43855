//! Command runner for `writer <writefile> <writestr>`.

use std::error::Error as _;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error};

use crate::error::WriterError;
use crate::exit_codes;
use crate::logging::LogChannel;
use crate::write::write_to_file;

/// Number of argv entries, program name included.
const ARGC: usize = 3;

#[derive(Debug, Parser)]
#[command(
    name = "writer",
    about = "Write a string to a file, logging the outcome",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// File to create or overwrite.
    writefile: OsString,
    /// Text written verbatim into `writefile`.
    writestr: OsString,
}

/// A validated invocation: both arguments present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub writefile: PathBuf,
    pub writestr: OsString,
}

/// Parse `args` (program name first) into a [`WriteRequest`].
///
/// Any argument count other than two is [`WriterError::Usage`]; an empty
/// argument is [`WriterError::InvalidArgument`]. The count is taken from the
/// raw argv and every token after the program name is a value, so `--` and
/// `-n` are ordinary arguments.
pub fn parse_args<I, T>(args: I) -> Result<WriteRequest, WriterError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if argv.len() != ARGC {
        return Err(WriterError::Usage);
    }
    // Escape both values so clap never reads them as flags or a separator.
    argv.insert(1, OsString::from("--"));
    let cli = Cli::try_parse_from(argv).map_err(|_| WriterError::Usage)?;
    if cli.writefile.is_empty() {
        return Err(WriterError::InvalidArgument { name: "writefile" });
    }
    if cli.writestr.is_empty() {
        return Err(WriterError::InvalidArgument { name: "writestr" });
    }
    Ok(WriteRequest {
        writefile: PathBuf::from(cli.writefile),
        writestr: cli.writestr,
    })
}

/// Validate `args`, perform the write, and return the process exit status.
///
/// Errors are logged at error level where they are detected. Once the
/// arguments are valid, a debug line naming the content and target is logged
/// after the write regardless of its outcome.
pub fn run<I, T>(args: I, log: &LogChannel) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    log.scope(|| {
        let request = match parse_args(args) {
            Ok(request) => request,
            Err(err) => {
                report(&err);
                return err.exit_code();
            }
        };

        let outcome = write_to_file(&request.writefile, &request.writestr);
        if let Err(err) = &outcome {
            report(err);
        }
        // Logged even when the write failed.
        debug!(
            "Writing '{}' to '{}'",
            request.writestr.to_string_lossy(),
            request.writefile.display()
        );

        match outcome {
            Ok(()) => exit_codes::OK,
            Err(err) => err.exit_code(),
        }
    })
}

fn report(err: &WriterError) {
    match err.source() {
        Some(cause) => error!(%cause, "{err}"),
        None => error!("{err}"),
    }
}
