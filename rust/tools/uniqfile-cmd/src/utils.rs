//! Common utilities for uniqfile-cmd

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Parses octal permission bits, with or without a `0`/`0o` prefix.
pub fn parse_mode(text: &str) -> Result<u32, String> {
    let digits = text
        .strip_prefix("0o")
        .or_else(|| text.strip_prefix("0O"))
        .unwrap_or(text);
    let mode = u32::from_str_radix(digits, 8)
        .map_err(|e| format!("invalid octal mode '{text}': {e}"))?;
    if mode > 0o7777 {
        return Err(format!("mode '{text}' is out of range"));
    }
    Ok(mode)
}

/// Routes log output to stderr. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
