use super::*;
use crate::annotations::FileAnnotations;
use std::collections::HashMap;
use std::path::Path;

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

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

fn resolve(
    source: &StubSource,
    inputs: &[&str],
    corpus: &[&str],
) -> Result<Resolution, ResolveError> {
    GraphResolver::new(source, UnresolvedPolicy::Warn).resolve(&paths(inputs), &paths(corpus))
}

fn order_of(resolution: &Resolution) -> Vec<String> {
    resolution
        .ordered
        .iter()
        .map(|dep| dep.file.display().to_string())
        .collect()
}

fn position(resolution: &Resolution, file: &str) -> usize {
    resolution
        .ordered
        .iter()
        .position(|dep| dep.file == Path::new(file))
        .unwrap_or_else(|| panic!("{file} not placed"))
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_single_require_places_dependency_first() {
    // The worked example: a.src provides A requires B; b.src provides B
    let source = StubSource::default()
        .with("a.src", &["A"], &["B"])
        .with("b.src", &["B"], &[]);

    let resolution = resolve(&source, &["a.src"], &["b.src"]).unwrap();
    assert_eq!(order_of(&resolution), vec!["b.src", "a.src"]);
    assert_eq!(
        resolution.files(),
        vec![PathBuf::from("b.src"), PathBuf::from("a.src")]
    );
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_transitive_chain_is_dependency_first() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b"])
        .with("b.js", &["app.b"], &["app.c"])
        .with("c.js", &["app.c"], &[]);

    let resolution = resolve(&source, &["a.js"], &["b.js", "c.js"]).unwrap();
    assert_eq!(order_of(&resolution), vec!["c.js", "b.js", "a.js"]);
}

#[test]
fn test_every_transitive_require_precedes_its_dependent() {
    let source = StubSource::default()
        .with("app.js", &["app"], &["ui", "net"])
        .with("ui.js", &["ui"], &["dom", "events"])
        .with("net.js", &["net"], &["events"])
        .with("dom.js", &["dom"], &[])
        .with("events.js", &["events"], &[]);

    let resolution = resolve(
        &source,
        &["app.js"],
        &["ui.js", "net.js", "dom.js", "events.js"],
    )
    .unwrap();

    assert!(position(&resolution, "dom.js") < position(&resolution, "ui.js"));
    assert!(position(&resolution, "events.js") < position(&resolution, "ui.js"));
    assert!(position(&resolution, "events.js") < position(&resolution, "net.js"));
    assert!(position(&resolution, "ui.js") < position(&resolution, "app.js"));
    assert!(position(&resolution, "net.js") < position(&resolution, "app.js"));
}

#[test]
fn test_diamond_dependency_places_shared_file_once() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b", "app.c"])
        .with("b.js", &["app.b"], &["app.d"])
        .with("c.js", &["app.c"], &["app.d"])
        .with("d.js", &["app.d"], &[]);

    let resolution = resolve(&source, &["a.js"], &["b.js", "c.js", "d.js"]).unwrap();
    assert_eq!(order_of(&resolution), vec!["d.js", "b.js", "c.js", "a.js"]);
}

#[test]
fn test_multiple_inputs_share_placed_dependencies() {
    let source = StubSource::default()
        .with("x.js", &["app.x"], &["app.lib"])
        .with("y.js", &["app.y"], &["app.lib"])
        .with("lib.js", &["app.lib"], &[]);

    let resolution = resolve(&source, &["x.js", "y.js"], &["lib.js"]).unwrap();
    assert_eq!(order_of(&resolution), vec!["lib.js", "x.js", "y.js"]);
}

#[test]
fn test_input_reachable_from_another_input_is_not_duplicated() {
    // b.js is both an input and (through the corpus) a dependency of a.js
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b"])
        .with("b.js", &["app.b"], &[]);

    let resolution = resolve(&source, &["a.js", "b.js"], &["a.js", "b.js"]).unwrap();
    assert_eq!(order_of(&resolution), vec!["b.js", "a.js"]);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_resolution_is_deterministic_across_runs() {
    let source = StubSource::default()
        .with("m.js", &["app.m"], &["app.z", "app.a", "app.k"])
        .with("z.js", &["app.z"], &[])
        .with("a.js", &["app.a"], &[])
        .with("k.js", &["app.k"], &[]);

    let first = resolve(&source, &["m.js"], &["z.js", "a.js", "k.js"]).unwrap();
    let second = resolve(&source, &["m.js"], &["k.js", "a.js", "z.js"]).unwrap();

    assert_eq!(order_of(&first), order_of(&second));
    // Requires expand lexically
    assert_eq!(order_of(&first), vec!["a.js", "k.js", "z.js", "m.js"]);
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_require_cycle_terminates_with_each_member_once() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b"])
        .with("b.js", &["app.b"], &["app.a"]);

    let resolution = resolve(&source, &["a.js"], &["a.js", "b.js"]).unwrap();
    assert_eq!(order_of(&resolution), vec!["b.js", "a.js"]);
    assert!(
        resolution
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::RequireCycle { .. }))
    );
}

#[test]
fn test_three_file_cycle_places_every_member() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.b"])
        .with("b.js", &["app.b"], &["app.c"])
        .with("c.js", &["app.c"], &["app.a"]);

    let resolution =
        resolve(&source, &["a.js"], &["a.js", "b.js", "c.js"]).unwrap();
    let order = order_of(&resolution);
    assert_eq!(order.len(), 3);
    for file in ["a.js", "b.js", "c.js"] {
        assert_eq!(order.iter().filter(|f| *f == file).count(), 1);
    }
}

// ============================================================================
// Unresolved Requires
// ============================================================================

#[test]
fn test_unresolved_require_is_a_diagnostic_under_warn() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.gone", "app.b"])
        .with("b.js", &["app.b"], &[]);

    let resolution = resolve(&source, &["a.js"], &["b.js"]).unwrap();

    // The resolvable branch and the input itself are still placed
    assert_eq!(order_of(&resolution), vec!["b.js", "a.js"]);
    assert_eq!(
        resolution.diagnostics,
        vec![Diagnostic::UnresolvedRequire {
            namespace: "app.gone".to_string(),
            required_by: PathBuf::from("a.js"),
        }]
    );
}

#[test]
fn test_unresolved_require_aborts_under_fail() {
    let source = StubSource::default()
        .with("a.js", &["app.a"], &["app.gone"]);

    let result = GraphResolver::new(&source, UnresolvedPolicy::Fail)
        .resolve(&paths(&["a.js"]), &paths(&[]));

    match result.unwrap_err() {
        ResolveError::UnresolvedRequire {
            namespace,
            required_by,
        } => {
            assert_eq!(namespace, "app.gone");
            assert_eq!(required_by, PathBuf::from("a.js"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Failure Propagation
// ============================================================================

#[test]
fn test_extraction_failure_aborts_resolution() {
    let source = StubSource::default().with("a.js", &["app.a"], &[]);

    let result = resolve(&source, &["a.js"], &["missing.js"]);
    assert!(matches!(
        result.unwrap_err(),
        ResolveError::Extraction { .. }
    ));
}

// ============================================================================
// Depth
// ============================================================================

#[test]
fn test_deep_require_chain_does_not_overflow_the_stack() {
    // ns0 requires ns1 requires ... requires ns4999
    let mut source = StubSource::default();
    let depth = 5000;
    let mut corpus = Vec::new();
    for i in 0..depth {
        let file = format!("f{i}.js");
        let provides = [format!("ns{i}")];
        let requires: Vec<String> = if i + 1 < depth {
            vec![format!("ns{}", i + 1)]
        } else {
            Vec::new()
        };
        source.files.insert(
            PathBuf::from(&file),
            FileAnnotations {
                provides: provides.iter().cloned().collect(),
                requires: requires.into_iter().collect(),
            },
        );
        corpus.push(PathBuf::from(file));
    }

    let resolution = GraphResolver::new(&source, UnresolvedPolicy::Warn)
        .resolve(&[PathBuf::from("f0.js")], &corpus)
        .unwrap();

    assert_eq!(resolution.ordered.len(), depth);
    // The far end of the chain loads first
    assert_eq!(
        resolution.ordered[0].file,
        PathBuf::from(format!("f{}.js", depth - 1))
    );
    assert_eq!(
        resolution.ordered[depth - 1].file,
        PathBuf::from("f0.js")
    );
}
