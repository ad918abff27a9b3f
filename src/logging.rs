//! Diagnostic logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. `RUST_LOG`
//! takes precedence; otherwise `--verbose` selects debug output for this
//! crate and the default is warnings only.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "devmate=debug" } else { "warn" }
}

/// Installs the global tracing subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!crate::output::is_no_color());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
