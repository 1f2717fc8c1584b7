//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CourseTasksConfig;
use crate::domain::errors::CourseTasksError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of every environment override
pub const ENV_PREFIX: &str = "COURSE_TASKS_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CourseTasksConfig
/// 4. Applies environment variable overrides (COURSE_TASKS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file is missing or unreadable, the
/// TOML is invalid, a referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use course_tasks::config::loader::load_config;
///
/// let config = load_config("course-tasks.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CourseTasksConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CourseTasksError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CourseTasksError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CourseTasksConfig = toml::from_str(&contents)
        .map_err(|e| CourseTasksError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);
    validate(config)
}

/// Loads configuration from an optional file
///
/// Without a path the built-in defaults are used; environment overrides and
/// validation apply either way.
pub fn load_config_or_default(path: Option<&str>) -> Result<CourseTasksConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = CourseTasksConfig::default();
            apply_env_overrides(&mut config);
            validate(config)
        }
    }
}

fn validate(config: CourseTasksConfig) -> Result<CourseTasksConfig> {
    config.validate().map_err(|e| {
        CourseTasksError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CourseTasksError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CourseTasksError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the COURSE_TASKS_* prefix
///
/// Variables follow the pattern COURSE_TASKS_<SECTION>_<KEY>. Values that do
/// not parse as the target type are ignored.
fn apply_env_overrides(config: &mut CourseTasksConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("SOURCE_HOST") {
        config.source.host = val;
    }
    if let Some(val) = env_override("SOURCE_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.source.page_size = size;
        }
    }

    if let Some(val) = env_override("EXPORT_OUTPUT_DIR") {
        config.export.output_dir = Some(val);
    }
    if let Some(val) = env_override("EXPORT_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.export.batch_size = size;
        }
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
