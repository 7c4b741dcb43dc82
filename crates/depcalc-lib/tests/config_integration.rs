use depcalc_lib::application::config::AppConfig;
use depcalc_lib::primitives::{ColorIntent, LogFormat, LogLevel, LogOutput};

#[test]
fn test_config_default_creation() {
    // Simple test for config creation without loading
    let config = AppConfig::default();

    // Just verify the config has reasonable defaults
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    // Override values should be preserved
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);

    // Default values should remain for non-overridden fields
    assert_eq!(merged.log_format, LogFormat::Text);
    assert_eq!(merged.log_output, LogOutput::Stderr);
}

#[test]
fn test_logger_config_derivation() {
    let config = AppConfig {
        log_level: 2,
        log_format: LogFormat::Json,
        log_output: LogOutput::Stdout,
        color: ColorIntent::Always,
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Info);
    assert_eq!(logger_config.format, LogFormat::Json);
    assert_eq!(logger_config.output, LogOutput::Stdout);
    assert_eq!(logger_config.color, ColorIntent::Always);
}
