//! depcalc primitives - core types, errors, and coordination
//!
//! Central collection of shared types that form the foundation of depcalc.
//! Config drives behavior, logger types inform output, errors chain properly.

use clap::ValueEnum;
use std::str::FromStr;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

impl_fromstr_for_value_enum!(LogOutput, "expected 'stderr' or 'stdout'");

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Map a CLI verbosity count to a level, saturating at trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Directive fragment understood by tracing's EnvFilter
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// Human-oriented multi-line output
    Pretty,
}

impl_fromstr_for_value_enum!(LogFormat, "expected 'text', 'json', or 'pretty'");

/// Color output intent, resolved against the standard env conventions
/// (NO_COLOR, FORCE_COLOR, CLICOLOR, CI) before the logger starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorIntent {
    /// Enable color when the selected stream is a terminal
    Auto,
    /// Always emit ANSI color
    Always,
    /// Never emit ANSI color
    Never,
}

impl_fromstr_for_value_enum!(ColorIntent, "expected 'auto', 'always', or 'never'");

/// Policy for a require that no corpus file provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Log and record a diagnostic, keep resolving (reference behavior)
    Warn,
    /// Abort resolution on the first unresolved require
    Fail,
}

impl_fromstr_for_value_enum!(UnresolvedPolicy, "expected 'warn' or 'fail'");

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration combining application config with color intent
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub color: ColorIntent,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed { source: envy::Error },

    #[error("Invalid configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },

    #[error("Failed to resolve current directory: {source}")]
    CurrentDirError { source: std::io::Error },

    #[error("Global configuration already initialized")]
    AlreadyInitialized,
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Logger initialization failed: {reason}")]
    InitializationFailed { reason: String },
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
