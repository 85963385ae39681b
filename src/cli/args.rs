//! CLI argument definitions for `zkviz`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use zettel_viz::config::ConfigOverrides;
use zettel_viz::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `iterations`, `output_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Render the citation graph of a Zettelkasten.
    ///
    /// Reads every note in the directory, links notes through their
    /// `[[id]]` citations and writes an interactive HTML plot.
    Render {
        /// Notes directory (defaults to config `notes_dir`)
        #[arg(value_name = "DIR")]
        notes_dir: Option<PathBuf>,

        /// Output file; `.html` is appended when missing
        /// (defaults to `<output_dir>/<name>.html`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Open the rendered graph in the default browser
        #[arg(long)]
        open: bool,

        /// Graph name, used as the page title and default file name
        #[arg(long, default_value = "Zettelkasten")]
        name: String,

        /// Number of force-directed simulation steps
        #[arg(long, value_name = "N")]
        iterations: Option<usize>,

        /// Node count from which the random layout is used
        #[arg(long, value_name = "N")]
        random_threshold: Option<usize>,

        /// Seed for reproducible layouts
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "zkviz",
    about = "Visualize a Zettelkasten as an interactive citation graph",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Render flags (`--iterations`, `--seed`, ...) are included when the
    /// render command is used. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            output_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            ..ConfigOverrides::default()
        };

        if let Command::Render {
            notes_dir,
            open,
            iterations,
            random_threshold,
            seed,
            ..
        } = &self.command
        {
            overrides.notes_dir = notes_dir.as_ref().map(|p| p.to_string_lossy().to_string());
            overrides.iterations = *iterations;
            overrides.random_threshold = *random_threshold;
            overrides.seed = *seed;
            overrides.open_browser = open.then_some(true);
        }

        overrides
    }
}
