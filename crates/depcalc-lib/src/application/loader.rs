//! Configuration loading
//!
//! Coordinates the configuration sources in precedence order before any
//! command runs.

use crate::primitives::ConfigError;
use clap::Parser;

use super::{cli::Cli, config::AppConfig, env::EnvironmentConfig};

impl AppConfig {
    /// Boot sequence: defaults -> .env -> env vars -> CLI
    pub(crate) fn bootstrap() -> Result<Cli, ConfigError> {
        use dotenvy::from_filename;

        // 1. Load .env files (if they exist, don't error if missing)
        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                // Only fail if the file exists but can't be read
                if !e.to_string().contains("not found") && !e.to_string().contains("No such file") {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        // 2. CLI arguments, with DEPCALC_* env vars as per-flag fallbacks
        let mut cli = Cli::parse();

        // 3. Standard environment conventions override the color intent
        let env_config = EnvironmentConfig::load()?;
        cli.config.color = env_config.apply_color_config(cli.config.color);

        Ok(cli)
    }
}
