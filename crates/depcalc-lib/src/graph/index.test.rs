use super::*;
use std::cell::Cell;
use std::collections::HashMap;

/// In-memory annotation source; errors for any file it was not told about
#[derive(Default)]
struct StubSource {
    files: HashMap<PathBuf, FileAnnotations>,
    extractions: Cell<usize>,
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
        self.extractions.set(self.extractions.get() + 1);
        self.files.get(file).cloned().ok_or_else(|| {
            AnnotationError::ReadError {
                path: file.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "stub miss"),
            }
        })
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn test_build_indexes_every_file_once() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &[])
        .with("b.js", &["app.b"], &["app.a"]);

    let index = DependencyIndex::build(&paths(&["a.js", "b.js"]), &source).unwrap();
    assert_eq!(index.len(), 2);
    assert!(index.contains(Path::new("a.js")));

    let b = index.get(Path::new("b.js")).unwrap();
    assert_eq!(b.provides, BTreeSet::from(["app.b".to_string()]));
    assert_eq!(b.requires, BTreeSet::from(["app.a".to_string()]));
}

#[test]
fn test_build_is_idempotent_under_duplicate_input() {
    let source = StubSource::default().with("a.js", &["app.a"], &[]);

    let index =
        DependencyIndex::build(&paths(&["a.js", "a.js", "a.js"]), &source).unwrap();
    assert_eq!(index.len(), 1);
    // Extraction ran once, not three times
    assert_eq!(source.extractions.get(), 1);
}

#[test]
fn test_build_enumerates_in_path_order() {
    let source = StubSource::default()
        .with("z.js", &[], &[])
        .with("a.js", &[], &[])
        .with("m.js", &[], &[]);

    let index = DependencyIndex::build(&paths(&["z.js", "a.js", "m.js"]), &source).unwrap();
    let order: Vec<&Path> = index.values().map(|dep| dep.file.as_path()).collect();
    assert_eq!(order, vec![Path::new("a.js"), Path::new("m.js"), Path::new("z.js")]);
}

#[test]
fn test_extraction_failure_aborts_the_build() {
    let source = StubSource::default().with("a.js", &[], &[]);

    let result = DependencyIndex::build(&paths(&["a.js", "missing.js"]), &source);
    assert!(matches!(
        result.unwrap_err(),
        AnnotationError::ReadError { .. }
    ));
}
