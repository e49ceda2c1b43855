//! Scoped log channel for a writer invocation.
//!
//! A [`LogChannel`] is opened once at process start and dropped at process
//! end. While alive it is the thread-default `tracing` subscriber, and every
//! event emitted through [`LogChannel::scope`] is tagged with the channel
//! name and the process id.
//!
//! Reads `RUST_LOG` for filtering. Defaults to `debug` if unset.
//! Output: stderr, compact format.
//!
//! # Example
//! ```bash
//! RUST_LOG=error writer out.txt "hello"
//! ```

use tracing::Span;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Default filter directive when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "debug";

/// Open log channel. Dropping it closes the channel.
pub struct LogChannel {
    // Declared before `_subscriber` so the span closes while its subscriber
    // is still the default.
    span: Span,
    _subscriber: DefaultGuard,
}

impl LogChannel {
    /// Open a channel named `ident` writing to stderr.
    pub fn open(ident: &str) -> Self {
        Self::with_writer(ident, env_filter(), std::io::stderr)
    }

    /// Open a channel with an explicit filter and output sink.
    pub fn with_writer<W>(ident: &str, filter: EnvFilter, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_writer(make_writer)
                .with_ansi(false)
                .with_target(false)
                .compact(),
        );
        let guard = tracing::subscriber::set_default(subscriber);
        let span = tracing::info_span!("log", ident = %ident, pid = std::process::id());
        Self {
            span,
            _subscriber: guard,
        }
    }

    /// Run `f` with the channel's span entered.
    pub fn scope<F, T>(&self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.span.in_scope(f)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
