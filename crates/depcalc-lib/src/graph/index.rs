//! File-to-interface index

use crate::annotations::{AnnotationError, AnnotationSource, FileAnnotations};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// One source file's declared interface. The file path is the identity key;
/// provides/requires are fixed at construction and never mutated afterwards.
#[derive(Debug, PartialEq, Eq)]
pub struct DependencyInfo {
    pub file: PathBuf,
    pub provides: BTreeSet<String>,
    pub requires: BTreeSet<String>,
}

impl DependencyInfo {
    pub fn new(file: PathBuf, annotations: FileAnnotations) -> Self {
        Self {
            file,
            provides: annotations.provides,
            requires: annotations.requires,
        }
    }
}

/// Mapping from file to its extracted [`DependencyInfo`], built once per
/// resolution pass. Backed by a `BTreeMap` so enumeration is path order and
/// a pass is reproducible run to run.
#[derive(Debug, Default)]
pub struct DependencyIndex {
    entries: BTreeMap<PathBuf, Arc<DependencyInfo>>,
}

impl DependencyIndex {
    /// Extract every file's annotations and index them by file identity.
    /// Repeated files are extracted once; an extraction failure aborts the
    /// whole build step.
    pub fn build<'a>(
        files: impl IntoIterator<Item = &'a PathBuf>,
        source: &dyn AnnotationSource,
    ) -> Result<Self, AnnotationError> {
        let mut entries = BTreeMap::new();
        for file in files {
            if entries.contains_key(file) {
                continue;
            }
            let annotations = source.extract(file)?;
            entries.insert(
                file.clone(),
                Arc::new(DependencyInfo::new(file.clone(), annotations)),
            );
        }
        debug!(files = entries.len(), "dependency index built");
        Ok(Self { entries })
    }

    pub fn get(&self, file: &Path) -> Option<&Arc<DependencyInfo>> {
        self.entries.get(file)
    }

    pub fn contains(&self, file: &Path) -> bool {
        self.entries.contains_key(file)
    }

    /// Entries in path order
    pub fn values(&self) -> impl Iterator<Item = &Arc<DependencyInfo>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    include!("index.test.rs");
}
