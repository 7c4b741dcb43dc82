use super::*;
use crate::annotations::{AnnotationError, AnnotationSource, FileAnnotations};
use std::path::PathBuf;

#[derive(Default)]
struct StubSource {
    files: HashMap<PathBuf, FileAnnotations>,
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

fn graph_of(source: &StubSource, names: &[&str]) -> (DependencyIndex, NamespaceRegistry) {
    let files: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
    let index = DependencyIndex::build(&files, source).unwrap();
    let (registry, _) = NamespaceRegistry::build(&index);
    (index, registry)
}

#[test]
fn test_acyclic_graph_has_no_cycle() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b"])
        .with("b.js", &["app.b"], &["app.c"])
        .with("c.js", &["app.c"], &[]);
    let (index, registry) = graph_of(&source, &["a.js", "b.js", "c.js"]);

    assert!(find_require_cycle(&index, &registry).is_none());
}

#[test]
fn test_two_file_cycle_is_reported() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b"])
        .with("b.js", &["app.b"], &["app.a"]);
    let (index, registry) = graph_of(&source, &["a.js", "b.js"]);

    let members = find_require_cycle(&index, &registry).unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.contains(&PathBuf::from("a.js")));
    assert!(members.contains(&PathBuf::from("b.js")));
}

#[test]
fn test_self_require_is_a_cycle() {
    let source = StubSource::default().with("a.js", &["app.a"], &["app.a"]);
    let (index, registry) = graph_of(&source, &["a.js"]);

    let members = find_require_cycle(&index, &registry).unwrap();
    assert_eq!(members, vec![PathBuf::from("a.js")]);
}

#[test]
fn test_unresolved_requires_contribute_no_edge() {
    let source = StubSource::default().with("a.js", &["app.a"], &["app.gone"]);
    let (index, registry) = graph_of(&source, &["a.js"]);

    assert!(find_require_cycle(&index, &registry).is_none());
}
