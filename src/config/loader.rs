//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SkjoldConfig;
use crate::domain::errors::SkjoldError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`SkjoldConfig`]
/// 4. Applies environment variable overrides (`SKJOLD_*` prefix)
/// 5. Validates the configuration
pub fn load_config(path: impl AsRef<Path>) -> Result<SkjoldConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SkjoldError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SkjoldError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SkjoldConfig = toml::from_str(&contents)
        .map_err(|e| SkjoldError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config
        .apply_env_overrides()
        .map_err(SkjoldError::Configuration)?;

    config
        .validate()
        .map_err(|e| SkjoldError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Load configuration from an explicit path, or fall back.
///
/// With an explicit path the file must exist. Without one, `skjold.toml` in
/// the working directory is used when present; otherwise the built-in
/// defaults apply.
pub fn load_config_or_default(path: Option<&str>) -> Result<SkjoldConfig> {
    const DEFAULT_PATH: &str = "skjold.toml";

    match path {
        Some(path) => load_config(path),
        None => {
            if Path::new(DEFAULT_PATH).exists() {
                load_config(DEFAULT_PATH)
            } else {
                tracing::debug!("No configuration file found, using defaults");
                Ok(SkjoldConfig::default())
            }
        }
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. A referenced but unset variable is a
/// configuration error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static env-var regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SkjoldError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
            [application]
            log_level = "debug"

            [analysis]
            score_threshold = 0.3
            chunk_size = 8445
        "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.analysis.chunk_size, 8445);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/skjold.toml").unwrap_err();
        assert!(matches!(err, SkjoldError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("this is not = valid [ toml");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, SkjoldError::Configuration(_)));
    }

    #[test]
    fn test_load_invalid_values() {
        let file = write_config(
            r#"
            [analysis]
            score_threshold = 7.5
        "#,
        );
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("score_threshold"));
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("SKJOLD_TEST_LEVEL", "warn");
        let input = "[application]\nlog_level = \"${SKJOLD_TEST_LEVEL}\"\n";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("log_level = \"warn\""));
        std::env::remove_var("SKJOLD_TEST_LEVEL");
    }

    #[test]
    fn test_substitute_missing_var_fails() {
        let input = "value = \"${SKJOLD_DEFINITELY_UNSET_VAR}\"\n";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("SKJOLD_DEFINITELY_UNSET_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# ${SKJOLD_UNSET_IN_COMMENT}\nvalue = 1\n";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${SKJOLD_UNSET_IN_COMMENT}"));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.analysis.language, "nb");
    }
}
