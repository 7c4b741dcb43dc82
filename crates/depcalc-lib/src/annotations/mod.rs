//! Provide/require annotation extraction
//!
//! Source files declare the namespaces they define with `goog.provide('ns')`
//! and the namespaces they depend on with `goog.require('ns')`. This module
//! owns the extraction seam: the [`AnnotationSource`] trait is what the graph
//! layer consumes, and [`SourceScanner`] is the default line-grammar
//! implementation. Callers with a different annotation syntax plug in their
//! own source.

use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::trace;

/// Annotation extraction errors
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Failed to read source file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk source root '{path}': {source}")]
    WalkError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// The declared interface of one source file: what it provides, what it
/// requires. Sorted sets so enumeration order is stable run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAnnotations {
    pub provides: BTreeSet<String>,
    pub requires: BTreeSet<String>,
}

/// Extraction seam consumed by the graph layer
pub trait AnnotationSource {
    /// Extract the provide/require declarations of a single file
    fn extract(&self, file: &Path) -> Result<FileAnnotations, AnnotationError>;
}

/// Matches one annotation at the start of a line: `goog.provide('ns')` or
/// `goog.require("ns")`, leading whitespace allowed
fn annotation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^\s*goog\.(provide|require)\s*\(\s*['"]([^'"]+)['"]\s*\)"#)
            .expect("annotation pattern is valid")
    })
}

/// Default [`AnnotationSource`]: line-oriented scanner over the Closure
/// annotation grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceScanner;

impl SourceScanner {
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationSource for SourceScanner {
    fn extract(&self, file: &Path) -> Result<FileAnnotations, AnnotationError> {
        let bytes = std::fs::read(file).map_err(|e| AnnotationError::ReadError {
            path: file.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let mut annotations = FileAnnotations::default();
        for line in content.lines() {
            let Some(captures) = annotation_pattern().captures(line) else {
                continue;
            };
            let namespace = captures[2].to_string();
            match &captures[1] {
                "provide" => annotations.provides.insert(namespace),
                _ => annotations.requires.insert(namespace),
            };
        }

        trace!(
            file = %file.display(),
            provides = annotations.provides.len(),
            requires = annotations.requires.len(),
            "extracted annotations"
        );
        Ok(annotations)
    }
}

/// Expand a mixed list of files and directories into the set of source files
/// to analyze. Directories are walked recursively and contribute their `.js`
/// files; explicit file arguments are taken as given.
pub fn collect_source_files(roots: &[PathBuf]) -> Result<BTreeSet<PathBuf>, AnnotationError> {
    let mut files = BTreeSet::new();
    for root in roots {
        if root.is_dir() {
            for entry in walkdir::WalkDir::new(root) {
                let entry = entry.map_err(|e| AnnotationError::WalkError {
                    path: root.clone(),
                    source: e,
                })?;
                let path = entry.path();
                if entry.file_type().is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some("js")
                {
                    files.insert(path.to_path_buf());
                }
            }
        } else {
            files.insert(root.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
