use itertools::Itertools;
use tracing_subscriber::EnvFilter;

/// Uppercase hex bytes joined by dashes, e.g. `C3-28`
pub fn hex_string(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02X}", b)).join("-")
}

/// Shows newlines as a literal `\n` so a status line stays on one line
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Diagnostics go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
