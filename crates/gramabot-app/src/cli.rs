//! CLI argument definitions for the GramaBot application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gramabot_core::{GramabotConfig, Language, Result};

/// GramaBot: a multilingual assistant for rural government services.
#[derive(Parser, Debug)]
#[command(name = "gramabot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Conversation language (English, Hindi, Telugu, Tamil, Kannada or ISO code).
    #[arg(short = 'L', long = "language")]
    pub language: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed for reproducible reply selection.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat session (default).
    Chat,
    /// Resolve a single message and print the reply.
    Ask {
        /// Message text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the reply as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List government services.
    Services {
        /// Only services whose name or description contains this text.
        #[arg(short, long)]
        search: Option<String>,
        /// Only services in this group (pension, welfare, health, land,
        /// education, grievance or all).
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

impl CliArgs {
    /// The subcommand to run, `chat` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }

    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > GRAMABOT_CONFIG env var > platform default (~/.gramabot/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("GRAMABOT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the conversation language.
    ///
    /// Priority: --language flag > GRAMABOT_LANGUAGE env var > config file value.
    /// An unrecognized flag or env value is an error; an unrecognized config
    /// value falls back to English.
    pub fn resolve_language(&self, config: &GramabotConfig) -> Result<Language> {
        if let Some(ref name) = self.language {
            return name.parse();
        }
        if let Ok(name) = std::env::var("GRAMABOT_LANGUAGE") {
            return name.parse();
        }
        Ok(config.chat.default_language())
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the selection seed.
    ///
    /// Priority: --seed flag > config file value. `None` means random.
    pub fn resolve_seed(&self, config_seed: Option<u64>) -> Option<u64> {
        self.seed.or(config_seed)
    }

    /// Fold every CLI and env override into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut GramabotConfig) -> Result<()> {
        let language = self.resolve_language(config)?;
        config.chat.default_language = language.name().to_string();
        config.general.log_level = self.resolve_log_level(&config.general.log_level);
        config.chat.seed = self.resolve_seed(config.chat.seed);
        Ok(())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".gramabot").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".gramabot").join("config.toml");
    }
    PathBuf::from("config.toml")
}
