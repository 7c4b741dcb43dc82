use crate::primitives::{ConfigError, UnresolvedPolicy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// depcalc CLI - load-order calculation for provide/require sources
#[derive(Debug, Clone, Parser)]
#[command(name = "depcalc")]
#[command(about = "Compute dependency-first load order for annotated script sources")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depcalc commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration: defaults -> .env -> env vars -> CLI arguments
    pub fn load() -> Result<Self, ConfigError> {
        let cli = AppConfig::bootstrap()?;
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Available depcalc commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Resolve inputs and write the dependency manifest
    Deps {
        /// Files or directories whose dependencies are calculated
        #[arg(short, long = "input", required = true, help = "Input files or directories")]
        inputs: Vec<PathBuf>,

        /// Search roots providing candidate dependency files
        #[arg(short, long = "path", help = "Search roots for dependency candidates")]
        paths: Vec<PathBuf>,

        /// Manifest output file
        #[arg(short, long, default_value = "deps.js", help = "Manifest output file")]
        output: PathBuf,

        /// Base directory manifest paths are written relative to
        #[arg(short, long, help = "Write manifest paths relative to this directory")]
        base: Option<PathBuf>,

        /// Policy for requires without a provider
        #[arg(long, value_enum, default_value = "warn")]
        on_unresolved: UnresolvedPolicy,
    },

    /// Print the resolved load order without writing a manifest
    List {
        /// Files or directories whose dependencies are calculated
        #[arg(short, long = "input", required = true, help = "Input files or directories")]
        inputs: Vec<PathBuf>,

        /// Search roots providing candidate dependency files
        #[arg(short, long = "path", help = "Search roots for dependency candidates")]
        paths: Vec<PathBuf>,

        /// Policy for requires without a provider
        #[arg(long, value_enum, default_value = "warn")]
        on_unresolved: UnresolvedPolicy,
    },

    /// Print the provides/requires declared by each file
    Scan {
        /// Files to scan
        #[arg(required = true, help = "Files to scan for annotations")]
        files: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
