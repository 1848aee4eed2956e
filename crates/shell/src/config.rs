//! Command-line / environment configuration.

use clap::Parser;

use stockroom_observability::LogFormat;

/// In-memory inventory catalog shell.
///
/// Reads one command per line from stdin; type `help` for the list.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about)]
pub struct Config {
    /// Currency label printed in front of the total value.
    #[arg(long, env = "STOCKROOM_CURRENCY", default_value = "₹")]
    pub currency: String,

    /// Name of the catalog (shows up in logs).
    #[arg(long, env = "STOCKROOM_CATALOG", default_value = "default")]
    pub catalog: String,

    /// Log output format (`pretty` or `json`); logs go to stderr.
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Print a `> ` prompt before reading each line.
    #[arg(long)]
    pub prompt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        let parsed = Config::try_parse_from(["stockroom"]).unwrap();
        assert_eq!(parsed.log_format, LogFormat::Pretty);
        assert!(!parsed.prompt);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Config::try_parse_from([
            "stockroom",
            "--currency",
            "USD",
            "--log-format",
            "json",
            "--prompt",
        ])
        .unwrap();
        assert_eq!(parsed.currency, "USD");
        assert_eq!(parsed.log_format, LogFormat::Json);
        assert!(parsed.prompt);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Config::try_parse_from(["stockroom", "--log-format", "xml"]).is_err());
    }
}
