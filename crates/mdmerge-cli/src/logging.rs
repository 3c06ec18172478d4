// Rust guideline compliant 2026-02-06

//! Tracing setup for the mdmerge CLI.

use anyhow::anyhow;
use tracing::Level;
use tracing_subscriber::fmt;

/// Initializes the global tracing subscriber.
///
/// Events go to stderr so they never mix with dry-run listings on stdout. At
/// the default `warn` level a successful run stays silent.
///
/// # Errors
///
/// Returns an error if the level string is not recognized.
pub fn init(level: &str) -> anyhow::Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(anyhow!("Invalid log level: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_accepts_known_levels() {
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        assert!(parse_log_level("chatty").is_err());
    }
}
