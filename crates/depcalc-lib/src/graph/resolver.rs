//! Transitive closure resolution and dependency-first ordering
//!
//! For each input file, the resolver walks its requires against the search
//! corpus depth-first and appends every file only after all of its
//! discoverable dependencies have been appended (post-order). The result is
//! the ordering a sequential loader or compiler needs.
//!
//! The ordering is correct for acyclic require graphs. A cyclic graph still
//! terminates: a file is marked seen before its own requires are walked, so
//! a require chain looping back onto an in-progress file is a no-op. Each
//! cycle participant appears exactly once, placed best-effort.

use super::Diagnostic;
use super::cycles;
use super::index::{DependencyIndex, DependencyInfo};
use super::registry::NamespaceRegistry;
use crate::annotations::{AnnotationError, AnnotationSource};
use crate::primitives::UnresolvedPolicy;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Resolution errors
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Annotation extraction failed: {source}")]
    Extraction {
        #[from]
        source: AnnotationError,
    },

    #[error("No file in the search corpus provides '{namespace}' (required by '{required_by}')")]
    UnresolvedRequire {
        namespace: String,
        required_by: PathBuf,
    },
}

/// Outcome of one resolution pass: the dependency-first ordering plus every
/// non-fatal condition observed along the way
#[derive(Debug)]
pub struct Resolution {
    pub ordered: Vec<Arc<DependencyInfo>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Ordered file list, for feeding a downstream compile step
    pub fn files(&self) -> Vec<PathBuf> {
        self.ordered.iter().map(|dep| dep.file.clone()).collect()
    }
}

/// DFS work frames. `Resolve` looks one namespace up and expands its
/// provider; `Place` appends a file whose requires have all been expanded.
/// An explicit stack instead of recursion keeps require-chain depth off the
/// call stack.
enum Frame {
    Resolve {
        namespace: String,
        required_by: Arc<DependencyInfo>,
    },
    Place(Arc<DependencyInfo>),
}

/// Depth-first resolver over a provide/require corpus
pub struct GraphResolver<'a> {
    source: &'a dyn AnnotationSource,
    policy: UnresolvedPolicy,
}

impl<'a> GraphResolver<'a> {
    pub fn new(source: &'a dyn AnnotationSource, policy: UnresolvedPolicy) -> Self {
        Self { source, policy }
    }

    /// Resolve the transitive closure of `inputs` against `corpus` and order
    /// it dependency-first. Inputs themselves are part of the output, each
    /// placed after its own requires.
    pub fn resolve<'f>(
        &self,
        inputs: impl IntoIterator<Item = &'f PathBuf>,
        corpus: impl IntoIterator<Item = &'f PathBuf>,
    ) -> Result<Resolution, ResolveError> {
        let input_index = DependencyIndex::build(inputs, self.source)?;
        let search_index = DependencyIndex::build(corpus, self.source)?;
        let (registry, mut diagnostics) = NamespaceRegistry::build(&search_index);
        debug!(
            inputs = input_index.len(),
            corpus = search_index.len(),
            namespaces = registry.len(),
            "dependency graph indexed"
        );

        if let Some(members) = cycles::find_require_cycle(&search_index, &registry) {
            warn!(
                cycle = %Diagnostic::RequireCycle { members: members.clone() },
                "require graph is cyclic; ordering inside the cycle is best-effort"
            );
            diagnostics.push(Diagnostic::RequireCycle { members });
        }

        // Per-pass accumulator: seen guards against duplicate placement and
        // cyclic re-entry, ordered is the output.
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut ordered: Vec<Arc<DependencyInfo>> = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();

        for input in input_index.values() {
            if seen.contains(&input.file) {
                continue;
            }
            // Seen before its requires are walked; see the module doc.
            seen.insert(input.file.clone());
            stack.push(Frame::Place(input.clone()));
            push_requires(&mut stack, input);
            self.drain(&mut stack, &registry, &mut seen, &mut ordered, &mut diagnostics)?;
        }

        debug!(placed = ordered.len(), "resolution complete");
        Ok(Resolution {
            ordered,
            diagnostics,
        })
    }

    fn drain(
        &self,
        stack: &mut Vec<Frame>,
        registry: &NamespaceRegistry,
        seen: &mut HashSet<PathBuf>,
        ordered: &mut Vec<Arc<DependencyInfo>>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(), ResolveError> {
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Place(dep) => {
                    trace!(file = %dep.file.display(), "placed");
                    ordered.push(dep);
                }
                Frame::Resolve {
                    namespace,
                    required_by,
                } => {
                    let Some(provider) = registry.lookup(&namespace) else {
                        warn!(
                            namespace = %namespace,
                            required_by = %required_by.file.display(),
                            "unresolved require"
                        );
                        if self.policy == UnresolvedPolicy::Fail {
                            return Err(ResolveError::UnresolvedRequire {
                                namespace,
                                required_by: required_by.file.clone(),
                            });
                        }
                        diagnostics.push(Diagnostic::UnresolvedRequire {
                            namespace,
                            required_by: required_by.file.clone(),
                        });
                        continue;
                    };
                    // Already placed, or in progress further down this very
                    // chain (the cycle guard).
                    if seen.contains(&provider.file) {
                        continue;
                    }
                    seen.insert(provider.file.clone());
                    stack.push(Frame::Place(provider.clone()));
                    push_requires(stack, provider);
                }
            }
        }
        Ok(())
    }
}

/// Push one Resolve frame per require, reversed so they pop lexically
fn push_requires(stack: &mut Vec<Frame>, dep: &Arc<DependencyInfo>) {
    for namespace in dep.requires.iter().rev() {
        stack.push(Frame::Resolve {
            namespace: namespace.clone(),
            required_by: dep.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
