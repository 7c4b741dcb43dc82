//! Dependency graph construction and ordering
//!
//! The pipeline: [`index::DependencyIndex`] extracts each file's declared
//! interface once, [`registry::NamespaceRegistry`] maps every provided
//! namespace to its owning file, and [`resolver::GraphResolver`] walks the
//! require edges depth-first to produce a dependency-first load order.
//! [`cycles`] is a diagnostic probe over the same edges.

pub mod cycles;
pub mod index;
pub mod registry;
pub mod resolver;

pub use index::{DependencyIndex, DependencyInfo};
pub use registry::NamespaceRegistry;
pub use resolver::{GraphResolver, Resolution, ResolveError};

use std::path::PathBuf;

/// Non-fatal conditions observed while indexing or ordering. These never
/// abort a pass by themselves; callers decide whether any of them should
/// fail the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A required namespace with no provider in the search corpus; the
    /// resulting ordering is incomplete along that branch
    UnresolvedRequire {
        namespace: String,
        required_by: PathBuf,
    },

    /// Two corpus files declared the same namespace; the later one (in index
    /// order) owns it
    DuplicateProvide {
        namespace: String,
        kept: PathBuf,
        replaced: PathBuf,
    },

    /// The require graph is cyclic; ordering inside the cycle is best-effort
    RequireCycle { members: Vec<PathBuf> },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedRequire {
                namespace,
                required_by,
            } => write!(
                f,
                "unresolved require '{}' (required by '{}')",
                namespace,
                required_by.display()
            ),
            Self::DuplicateProvide {
                namespace,
                kept,
                replaced,
            } => write!(
                f,
                "namespace '{}' provided by both '{}' and '{}'; keeping '{}'",
                namespace,
                replaced.display(),
                kept.display(),
                kept.display()
            ),
            Self::RequireCycle { members } => {
                let path: Vec<String> = members
                    .iter()
                    .map(|member| member.display().to_string())
                    .collect();
                write!(f, "require cycle: {}", path.join(" -> "))
            }
        }
    }
}
