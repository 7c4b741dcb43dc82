use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    // Saturates rather than wrapping
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn test_log_output_parsing() {
    assert_eq!("stderr".parse::<LogOutput>().unwrap(), LogOutput::Stderr);
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
}

#[test]
fn test_color_intent_parsing() {
    assert_eq!("auto".parse::<ColorIntent>().unwrap(), ColorIntent::Auto);
    assert_eq!("always".parse::<ColorIntent>().unwrap(), ColorIntent::Always);
    assert_eq!("never".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}

#[test]
fn test_unresolved_policy_parsing() {
    assert_eq!(
        "warn".parse::<UnresolvedPolicy>().unwrap(),
        UnresolvedPolicy::Warn
    );
    assert_eq!(
        "fail".parse::<UnresolvedPolicy>().unwrap(),
        UnresolvedPolicy::Fail
    );
    assert!("panic".parse::<UnresolvedPolicy>().is_err());
}
