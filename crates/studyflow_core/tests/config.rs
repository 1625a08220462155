use std::path::PathBuf;
use std::time::Duration;
use studyflow_core::{ConfigError, StudyConfig};

#[test]
fn empty_document_yields_defaults() {
    let config = StudyConfig::from_json_str("{}").unwrap();

    assert_eq!(config, StudyConfig::default());
    assert_eq!(config.timer.focus_minutes, 25);
    assert_eq!(config.timer.break_minutes, 5);
    assert_eq!(config.timer.tick_interval(), Duration::from_secs(1));
    assert_eq!(config.timer.focus_presets, vec![15, 25, 30, 45, 60]);
    assert_eq!(config.progress.weekly_goal_hours, 25.0);
    assert!(config.logging.dir.is_none());
}

#[test]
fn partial_document_overrides_named_fields_only() {
    let config = StudyConfig::from_json_str(
        r#"{ "timer": { "focus_minutes": 50 }, "logging": { "level": "warn" } }"#,
    )
    .unwrap();

    assert_eq!(config.timer.focus_minutes, 50);
    assert_eq!(config.timer.break_minutes, 5);
    assert_eq!(config.logging.effective_level(), "warn");
}

#[test]
fn unknown_fields_and_bad_json_are_parse_errors() {
    assert!(matches!(
        StudyConfig::from_json_str(r#"{ "timer": { "focus": 50 } }"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        StudyConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn out_of_range_values_are_invalid() {
    for source in [
        r#"{ "timer": { "focus_minutes": 0 } }"#,
        r#"{ "timer": { "break_presets": [5, 2000] } }"#,
        r#"{ "timer": { "tick_interval_ms": 0 } }"#,
        r#"{ "progress": { "weekly_goal_hours": -1.0 } }"#,
        r#"{ "logging": { "dir": "relative/logs" } }"#,
    ] {
        assert!(
            matches!(StudyConfig::from_json_str(source), Err(ConfigError::Invalid(_))),
            "expected invalid: {source}"
        );
    }
}

#[test]
fn load_reports_missing_file_path() {
    let path = PathBuf::from("/nonexistent/studyflow/config.json");

    let err = StudyConfig::load(&path).unwrap_err();

    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other}"),
    }
}

#[test]
fn load_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyflow.json");
    std::fs::write(&path, r#"{ "progress": { "weekly_goal_hours": 30.0 } }"#).unwrap();

    let config = StudyConfig::load(&path).unwrap();

    assert_eq!(config.progress.weekly_goal_hours, 30.0);
}
