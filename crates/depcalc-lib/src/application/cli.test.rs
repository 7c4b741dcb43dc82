use super::*;
use clap::Parser;

#[test]
fn test_deps_command_parses_inputs_and_paths() {
    let cli = Cli::try_parse_from([
        "depcalc", "deps", "-i", "src/main.js", "-i", "src/extra.js", "-p", "lib", "-o",
        "build/deps.js", "--base", ".",
    ])
    .unwrap();

    match cli.command.unwrap() {
        Commands::Deps {
            inputs,
            paths,
            output,
            base,
            on_unresolved,
        } => {
            assert_eq!(
                inputs,
                vec![PathBuf::from("src/main.js"), PathBuf::from("src/extra.js")]
            );
            assert_eq!(paths, vec![PathBuf::from("lib")]);
            assert_eq!(output, PathBuf::from("build/deps.js"));
            assert_eq!(base, Some(PathBuf::from(".")));
            assert_eq!(on_unresolved, UnresolvedPolicy::Warn);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_deps_command_defaults_output_to_deps_js() {
    let cli = Cli::try_parse_from(["depcalc", "deps", "-i", "a.js"]).unwrap();
    match cli.command.unwrap() {
        Commands::Deps { output, base, .. } => {
            assert_eq!(output, PathBuf::from("deps.js"));
            assert_eq!(base, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_deps_command_requires_an_input() {
    assert!(Cli::try_parse_from(["depcalc", "deps"]).is_err());
}

#[test]
fn test_on_unresolved_accepts_fail() {
    let cli =
        Cli::try_parse_from(["depcalc", "list", "-i", "a.js", "--on-unresolved", "fail"]).unwrap();
    match cli.command.unwrap() {
        Commands::List { on_unresolved, .. } => {
            assert_eq!(on_unresolved, UnresolvedPolicy::Fail);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_scan_command_collects_files() {
    let cli = Cli::try_parse_from(["depcalc", "scan", "a.js", "b.js"]).unwrap();
    match cli.command.unwrap() {
        Commands::Scan { files } => {
            assert_eq!(files, vec![PathBuf::from("a.js"), PathBuf::from("b.js")]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_no_command_is_allowed() {
    let cli = Cli::try_parse_from(["depcalc"]).unwrap();
    assert!(cli.command.is_none());
}
