use anyhow::{anyhow, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(anyhow!("Unsupported log level: {}", other)),
    }
}

/// Installs the stderr logger. Stdout stays reserved for command output.
pub fn init(level: &str) -> Result<()> {
    let filter = parse_level(level)?;
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(filter, config, TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level(" DEBUG ").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("warning").unwrap(), LevelFilter::Warn);
        assert!(parse_level("loud").is_err());
    }
}
