//! Namespace-to-provider registry

use super::Diagnostic;
use super::index::{DependencyIndex, DependencyInfo};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Mapping from provided namespace to the single file that owns it.
///
/// When two corpus files declare the same namespace the one encountered
/// later during construction wins. Construction iterates the index in path
/// order, so "later" is lexically later and stable across runs; every
/// overwrite is surfaced as a [`Diagnostic::DuplicateProvide`].
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    providers: HashMap<String, Arc<DependencyInfo>>,
}

impl NamespaceRegistry {
    pub fn build(index: &DependencyIndex) -> (Self, Vec<Diagnostic>) {
        let mut providers: HashMap<String, Arc<DependencyInfo>> = HashMap::new();
        let mut diagnostics = Vec::new();

        for dep in index.values() {
            for namespace in &dep.provides {
                let Some(previous) = providers.insert(namespace.clone(), dep.clone()) else {
                    continue;
                };
                if previous.file == dep.file {
                    continue;
                }
                warn!(
                    namespace = %namespace,
                    kept = %dep.file.display(),
                    replaced = %previous.file.display(),
                    "duplicate provide"
                );
                diagnostics.push(Diagnostic::DuplicateProvide {
                    namespace: namespace.clone(),
                    kept: dep.file.clone(),
                    replaced: previous.file.clone(),
                });
            }
        }

        debug!(namespaces = providers.len(), "namespace registry built");
        (Self { providers }, diagnostics)
    }

    pub fn lookup(&self, namespace: &str) -> Option<&Arc<DependencyInfo>> {
        self.providers.get(namespace)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    include!("registry.test.rs");
}
