//! # depcalc Library
//!
//! Dependency-first load ordering for script sources that declare
//! `goog.provide` / `goog.require` annotations.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared configuration
//! - [`annotations`] - Provide/require extraction and source collection
//! - [`graph`] - Dependency index, namespace registry, and the resolver
//! - [`manifest`] - deps.js manifest serialization
//! - [`logger`] - Structured logging setup
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! // Initialize and run depcalc
//! depcalc_lib::main().unwrap();
//! ```

pub mod annotations;
pub mod application;
pub mod graph;
pub mod logger;
pub mod manifest;
pub mod primitives;

// Re-export commonly used types for convenience
pub use annotations::{AnnotationError, AnnotationSource, FileAnnotations, SourceScanner};
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command};
pub use graph::{
    DependencyIndex, DependencyInfo, Diagnostic, GraphResolver, NamespaceRegistry, Resolution,
    ResolveError,
};
pub use logger::Logger;
pub use manifest::{ManifestError, ManifestWriter};
pub use primitives::{
    ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, UnresolvedPolicy,
};

// Private imports for the main function
use anyhow::Result;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Execute the command
    execute_command(config)
}
