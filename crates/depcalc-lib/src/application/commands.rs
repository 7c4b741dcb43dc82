//! Command execution handlers
//!
//! Thin orchestration over the library: collect source files, resolve the
//! graph, render the result. All real work happens in the graph and
//! manifest modules.

use crate::annotations::{AnnotationSource, SourceScanner, collect_source_files};
use crate::application::cli::{CliConfig, Commands};
use crate::graph::{GraphResolver, Resolution};
use crate::logger::Logger;
use crate::manifest::ManifestWriter;
use crate::primitives::UnresolvedPolicy;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::warn;

/// Execute the selected CLI command
pub fn execute_command(config: CliConfig) -> Result<()> {
    Logger::init(config.app_config.to_logger_config())?;

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            println!("depcalc - dependency-first load order for annotated sources");
            println!("Run 'depcalc --help' for usage information");
            return Ok(());
        }
    };

    execute(command)
}

/// Execute a specific command (logger assumed already initialized)
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Deps {
            inputs,
            paths,
            output,
            base,
            on_unresolved,
        } => handle_deps(inputs, paths, output, base, on_unresolved),
        Commands::List {
            inputs,
            paths,
            on_unresolved,
        } => handle_list(inputs, paths, on_unresolved),
        Commands::Scan { files } => handle_scan(files),
    }
}

fn handle_deps(
    inputs: Vec<PathBuf>,
    paths: Vec<PathBuf>,
    output: PathBuf,
    base: Option<PathBuf>,
    on_unresolved: UnresolvedPolicy,
) -> Result<()> {
    let resolution = resolve(&inputs, &paths, on_unresolved)?;

    let mut writer = ManifestWriter::new(output.clone());
    if let Some(base) = base {
        writer = writer.with_base(base);
    }
    writer
        .write(&resolution.ordered)
        .with_context(|| format!("writing manifest '{}'", output.display()))?;

    for file in resolution.files() {
        println!("{}", file.display());
    }
    Ok(())
}

fn handle_list(
    inputs: Vec<PathBuf>,
    paths: Vec<PathBuf>,
    on_unresolved: UnresolvedPolicy,
) -> Result<()> {
    let resolution = resolve(&inputs, &paths, on_unresolved)?;
    for file in resolution.files() {
        println!("{}", file.display());
    }
    Ok(())
}

fn handle_scan(files: Vec<PathBuf>) -> Result<()> {
    let scanner = SourceScanner::new();
    for file in collect_source_files(&files)? {
        let annotations = scanner
            .extract(&file)
            .with_context(|| format!("scanning '{}'", file.display()))?;
        println!("{}", file.display());
        println!("  provides: [{}]", joined(annotations.provides.iter()));
        println!("  requires: [{}]", joined(annotations.requires.iter()));
    }
    Ok(())
}

fn resolve(
    inputs: &[PathBuf],
    paths: &[PathBuf],
    on_unresolved: UnresolvedPolicy,
) -> Result<Resolution> {
    let input_files = collect_source_files(inputs).context("collecting input files")?;
    let search_files = collect_source_files(paths).context("collecting search corpus")?;

    let scanner = SourceScanner::new();
    let resolution =
        GraphResolver::new(&scanner, on_unresolved).resolve(&input_files, &search_files)?;

    if !resolution.diagnostics.is_empty() {
        warn!(
            count = resolution.diagnostics.len(),
            "resolution completed with diagnostics"
        );
    }
    Ok(resolution)
}

fn joined<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
