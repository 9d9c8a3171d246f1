//! Diagnostic logging to stderr

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "CREWGRAPH_LOG";

/// Filter used when `CREWGRAPH_LOG` is unset, from the `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "crewgraph=warn,warn",
        1 => "crewgraph=info,warn",
        2 => "crewgraph=debug,warn",
        _ => "crewgraph=trace,info",
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
