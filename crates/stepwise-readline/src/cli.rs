use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(about = "Stepwise - work through problem-solving methodologies step by step")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Methodology to browse at startup, e.g. `5-whys`
    #[arg(short, long, value_name = "ID")]
    pub methodology: Option<String>,

    /// Log filter directive, overrides the config file
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stepwise"]);
        assert!(cli.config.is_none());
        assert!(cli.methodology.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "stepwise",
            "-m",
            "pdca",
            "--config",
            "/tmp/stepwise.toml",
            "--log-level",
            "debug",
            "--no-color",
        ]);
        assert_eq!(cli.methodology.as_deref(), Some("pdca"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/stepwise.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.no_color);
    }
}
