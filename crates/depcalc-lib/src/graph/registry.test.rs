use super::*;
use crate::annotations::{AnnotationError, AnnotationSource, FileAnnotations};
use std::path::{Path, PathBuf};

#[derive(Default)]
struct StubSource {
    files: std::collections::HashMap<PathBuf, FileAnnotations>,
}

impl StubSource {
    fn with(mut self, file: &str, provides: &[&str], requires: &[&str]) -> Self {
        self.files.insert(
            PathBuf::from(file),
            FileAnnotations {
                provides: provides.iter().map(|s| s.to_string()).collect(),
                requires: requires.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }
}

impl AnnotationSource for StubSource {
    fn extract(&self, file: &Path) -> Result<FileAnnotations, AnnotationError> {
        self.files.get(file).cloned().ok_or_else(|| {
            AnnotationError::ReadError {
                path: file.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "stub miss"),
            }
        })
    }
}

fn index_of(source: &StubSource, names: &[&str]) -> DependencyIndex {
    let files: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
    DependencyIndex::build(&files, source).unwrap()
}

#[test]
fn test_every_provide_is_registered() {
    let source = StubSource::default()
        .with("a.js", &["app.a", "app.a.extra"], &[])
        .with("b.js", &["app.b"], &[]);
    let index = index_of(&source, &["a.js", "b.js"]);

    let (registry, diagnostics) = NamespaceRegistry::build(&index);
    assert_eq!(registry.len(), 3);
    assert!(diagnostics.is_empty());
    assert_eq!(
        registry.lookup("app.a.extra").unwrap().file,
        PathBuf::from("a.js")
    );
    assert!(registry.lookup("app.c").is_none());
}

#[test]
fn test_duplicate_provide_keeps_the_later_file() {
    let source = StubSource::default()
        .with("a.js", &["app.shared"], &[])
        .with("b.js", &["app.shared"], &[]);
    let index = index_of(&source, &["a.js", "b.js"]);

    let (registry, diagnostics) = NamespaceRegistry::build(&index);

    // Index order is path order, so b.js is encountered last and wins
    assert_eq!(
        registry.lookup("app.shared").unwrap().file,
        PathBuf::from("b.js")
    );
    assert_eq!(
        diagnostics,
        vec![Diagnostic::DuplicateProvide {
            namespace: "app.shared".to_string(),
            kept: PathBuf::from("b.js"),
            replaced: PathBuf::from("a.js"),
        }]
    );
}

#[test]
fn test_empty_index_builds_empty_registry() {
    let index = DependencyIndex::default();
    let (registry, diagnostics) = NamespaceRegistry::build(&index);
    assert!(registry.is_empty());
    assert!(diagnostics.is_empty());
}
