//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables are serialised through a mutex.

use course_tasks::config::{load_config, load_config_or_default};
use course_tasks::domain::CourseTasksError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for key in [
        "COURSE_TASKS_APPLICATION_LOG_LEVEL",
        "COURSE_TASKS_SOURCE_HOST",
        "COURSE_TASKS_SOURCE_PAGE_SIZE",
        "COURSE_TASKS_EXPORT_OUTPUT_DIR",
        "COURSE_TASKS_EXPORT_BATCH_SIZE",
        "COURSE_TASKS_LOGGING_LOCAL_ENABLED",
        "COURSE_TASKS_LOGGING_LOCAL_PATH",
        "TEST_COURSE_TASKS_OUT",
    ] {
        std::env::remove_var(key);
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[application]
log_level = "debug"

[source]
host = "https://example.test/api-2.0"
page_size = 500

[export]
output_dir = "/tmp/course-tasks"
batch_size = 3

[logging]
local_enabled = true
local_path = "/tmp/course-tasks-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.source.host, "https://example.test/api-2.0");
    assert_eq!(config.source.page_size, 500);
    assert_eq!(config.export.output_dir.as_deref(), Some("/tmp/course-tasks"));
    assert_eq!(config.export.batch_size, 3);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.export.batch_size, 10);
    assert_eq!(config.source.page_size, 1000);
    assert!(config.export.output_dir.is_none());
}

#[test]
fn test_no_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_config_or_default(None).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.export.batch_size, 10);
}

#[test]
fn test_env_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_COURSE_TASKS_OUT", "/data/tasks");

    let file = config_file(
        r#"
[export]
output_dir = "${TEST_COURSE_TASKS_OUT}"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.export.output_dir.as_deref(), Some("/data/tasks"));

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[export]\noutput_dir = \"${TEST_COURSE_TASKS_OUT}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, CourseTasksError::Configuration(_)));
    assert!(err.to_string().contains("TEST_COURSE_TASKS_OUT"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("COURSE_TASKS_EXPORT_BATCH_SIZE", "7");
    std::env::set_var("COURSE_TASKS_EXPORT_OUTPUT_DIR", "env-out");
    std::env::set_var("COURSE_TASKS_SOURCE_PAGE_SIZE", "not-a-number");
    std::env::set_var("COURSE_TASKS_APPLICATION_LOG_LEVEL", "warn");

    let file = config_file("[export]\nbatch_size = 2\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.export.batch_size, 7);
    assert_eq!(config.export.output_dir.as_deref(), Some("env-out"));
    assert_eq!(config.source.page_size, 1000);
    assert_eq!(config.application.log_level, "warn");

    let defaults = load_config_or_default(None).unwrap();
    assert_eq!(defaults.export.batch_size, 7);

    cleanup_env_vars();
}

#[test]
fn test_invalid_override_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("COURSE_TASKS_EXPORT_BATCH_SIZE", "0");

    let err = load_config_or_default(None).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("batch_size"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file("[export\nbatch_size = ");
    assert!(matches!(
        load_config(file.path()),
        Err(CourseTasksError::Configuration(_))
    ));
}
