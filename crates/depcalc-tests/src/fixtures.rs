//! Fixture infrastructure for E2E tests
//!
//! Builds small annotated source trees on a real filesystem so the CLI can
//! be exercised end to end.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one source file, creating parent directories as needed
pub fn write_source(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// A canonical three-file project used across the E2E suite
pub struct DemoProject {
    pub root: PathBuf,
    /// Entry point: provides demo.main, requires demo.Widget
    pub main: PathBuf,
    /// Library root: widget.js (provides demo.Widget, requires demo.dom)
    /// and dom.js (provides demo.dom)
    pub lib: PathBuf,
}

/// Lay out the demo project under `dir`
pub fn demo_project(dir: &Path) -> Result<DemoProject> {
    write_source(dir, "lib/dom.js", "goog.provide('demo.dom');\n")?;
    write_source(
        dir,
        "lib/widget.js",
        "goog.provide('demo.Widget');\ngoog.require('demo.dom');\n",
    )?;
    let main = write_source(
        dir,
        "src/main.js",
        "goog.provide('demo.main');\ngoog.require('demo.Widget');\n",
    )?;

    Ok(DemoProject {
        root: dir.to_path_buf(),
        main,
        lib: dir.join("lib"),
    })
}
