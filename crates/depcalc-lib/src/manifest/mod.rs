//! deps.js manifest serialization
//!
//! One `goog.addDependency` registration per resolved file, in resolver
//! output order, consumed by the runtime module loader. Paths are written
//! relative to a base directory when one is configured, so the manifest
//! stays valid when the source tree moves.

use crate::graph::DependencyInfo;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Manifest serialization errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to write manifest '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes a resolver ordering as a `goog.addDependency` manifest
pub struct ManifestWriter {
    output: PathBuf,
    base: Option<PathBuf>,
}

impl ManifestWriter {
    pub fn new(output: PathBuf) -> Self {
        Self { output, base: None }
    }

    /// Write manifest paths relative to `base` instead of absolute
    pub fn with_base(mut self, base: PathBuf) -> Self {
        self.base = Some(base);
        self
    }

    /// Create or overwrite the manifest. A filesystem error aborts the
    /// whole write.
    pub fn write(&self, ordered: &[Arc<DependencyInfo>]) -> Result<(), ManifestError> {
        let file = File::create(&self.output).map_err(|e| ManifestError::WriteError {
            path: self.output.clone(),
            source: e,
        })?;
        let mut out = BufWriter::new(file);

        self.line(&mut out, "// This file was autogenerated by depcalc")?;
        for dep in ordered {
            let line = registration_line(dep, self.base.as_deref());
            self.line(&mut out, &line)?;
        }

        info!(
            manifest = %self.output.display(),
            entries = ordered.len(),
            "manifest written"
        );
        Ok(())
    }

    // Flushed per line: a crash mid-write leaves a readable prefix.
    fn line(&self, out: &mut impl Write, text: &str) -> Result<(), ManifestError> {
        writeln!(out, "{text}")
            .and_then(|_| out.flush())
            .map_err(|e| ManifestError::WriteError {
                path: self.output.clone(),
                source: e,
            })
    }
}

/// Render one registration statement
pub fn registration_line(dep: &DependencyInfo, base: Option<&Path>) -> String {
    format!(
        "goog.addDependency('{}', {}, {});",
        manifest_path(&dep.file, base),
        quoted_list(&dep.provides),
        quoted_list(&dep.requires)
    )
}

fn quoted_list(items: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Manifest path for a file: relative to `base` when one is supplied (empty
/// when no relative path exists, e.g. across drives), else the canonical
/// absolute path. Forward slashes either way; loaders treat these as URLs.
fn manifest_path(file: &Path, base: Option<&Path>) -> String {
    let resolved = match base {
        Some(base) => relative_to(base, file).unwrap_or_default(),
        None => std::fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf()),
    };
    resolved
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/")
}

/// Relative path from `base` to `target`, traversing up with `..` when
/// `target` is not underneath `base`. None when the two share no root.
fn relative_to(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = std::fs::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
    let target = std::fs::canonicalize(target).unwrap_or_else(|_| target.to_path_buf());

    let mut base_parts = base.components().peekable();
    let mut target_parts = target.components().peekable();
    while let (Some(b), Some(t)) = (base_parts.peek(), target_parts.peek()) {
        if b != t {
            break;
        }
        base_parts.next();
        target_parts.next();
    }

    let mut relative = PathBuf::new();
    for component in base_parts {
        match component {
            Component::Normal(_) => relative.push(".."),
            // Nothing shared at all, not even the filesystem root
            Component::Prefix(_) | Component::RootDir => return None,
            Component::CurDir | Component::ParentDir => {}
        }
    }
    for component in target_parts {
        relative.push(component.as_os_str());
    }
    Some(relative)
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
