use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default location of the hosts file.
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

/// Add, list and remove entries in the hosts file.
#[derive(Debug, Clone, Parser)]
#[command(name = "rosty", version, about, long_about = None)]
pub struct Cli {
    /// Path to the hosts file to edit.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_HOSTS_FILE)]
    pub hosts_file: PathBuf,

    /// Output structured JSON to stdout.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Action (`add`, `get`, `del`) followed by its operands.
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Build a CLI value for the given hosts file and raw tokens.
    pub fn for_tokens<I, S>(hosts_file: impl Into<PathBuf>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts_file: hosts_file.into(),
            json: false,
            verbose: 0,
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Maximum log level selected by `-v`.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
