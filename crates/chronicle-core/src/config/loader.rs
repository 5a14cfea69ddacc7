//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Environment variable naming the repository in `owner/repo` form
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Environment variable overriding the GitHub API base URL
pub const ENV_API_URL: &str = "CHRONICLE_API_URL";

/// On-disk syntax of a config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    fn parse(self, content: &str) -> std::result::Result<Config, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(ConfigError::TomlError),
            Self::Yaml => serde_yaml::from_str(content).map_err(ConfigError::YamlError),
        }
    }
}

/// Read, parse and validate one config file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = ConfigFormat::of(path);
    info!(path = %path.display(), ?format, "loading config");

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    let config = format.parse(&content)?;
    validate_config(&config)?;
    debug!(path = %path.display(), "config ready");
    Ok(config)
}

/// Locate the nearest config file, walking up from `start_dir`.
///
/// Within one directory, candidates are tried in [`config_file_names`] order,
/// each both directly and under `.github/`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");

    let found = start_dir.ancestors().find_map(|dir| {
        config_file_names().into_iter().find_map(|name| {
            [dir.join(name), dir.join(".github").join(name)]
                .into_iter()
                .find(|candidate| candidate.is_file())
        })
    });

    match &found {
        Some(path) => info!(path = %path.display(), "found config file"),
        None => debug!("no config file found"),
    }
    found
}

/// Load configuration or use defaults.
///
/// A config file that exists but fails to parse or validate is an error;
/// only a missing file falls back to defaults.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

/// Apply environment overrides from the process environment
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply environment overrides using the given lookup
pub fn apply_overrides_from<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(repository) = lookup(ENV_REPOSITORY).filter(|v| !v.trim().is_empty()) {
        debug!(%repository, "repository overridden from environment");
        config.github.repository = Some(repository.trim().to_string());
    }

    if let Some(api_url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        debug!(%api_url, "API URL overridden from environment");
        config.github.api_url = api_url.trim().trim_end_matches('/').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicle.toml");
        std::fs::write(&config_path, "[release]\ntag_format = \"v{version}\"").unwrap();

        let found = find_config(temp.path());
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_prefers_yaml_over_toml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("chronicle.toml");
        let yaml_path = temp.path().join("chronicle.yaml");
        std::fs::write(&toml_path, "[release]\ntag_format = \"v{version}\"").unwrap();
        std::fs::write(&yaml_path, "release:\n  tag_format: \"v{version}\"").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, yaml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("chronicle.toml");
        std::fs::write(&config_path, "[output]\nformat = \"json\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicle.toml");
        std::fs::write(&config_path, "[output]\nformat = \"json\"").unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config(&nested), Some(config_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicle.toml");
        std::fs::write(
            &config_path,
            "[notes]\nexclude_sections = [\"Chores\"]\ngroup_placement = \"last\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.notes.exclude_sections, vec!["Chores".to_string()]);
        assert_eq!(
            config.notes.group_placement,
            crate::config::GroupPlacement::Last
        );
        // untouched sections keep their defaults
        assert_eq!(config.notes.dependencies_marker, "Dependencies");
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicle.yaml");
        std::fs::write(
            &config_path,
            "github:\n  repository: acme/operator\nrelease:\n  helm_chart_version: 0.4.2\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.github.repository.as_deref(), Some("acme/operator"));
        assert_eq!(config.release.helm_chart_version.as_deref(), Some("0.4.2"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("chronicle.yaml");

        let err = load_config(&missing).unwrap_err();
        assert!(matches!(
            err,
            crate::ChronicleError::Config(ConfigError::NotFound(ref path)) if path == &missing
        ));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("chronicle.yaml")).unwrap();
        let config_path = temp.path().join("chronicle.toml");
        std::fs::write(&config_path, "[output]\nformat = \"json\"").unwrap();

        assert_eq!(find_config(temp.path()), Some(config_path));
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("chronicle.toml");
        std::fs::write(&config_path, "[release]\ntag_format = \"release\"\n").unwrap();

        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path()).unwrap();
        assert!(path.is_none());
        assert_eq!(config.output.format, "markdown");
    }

    #[test]
    fn test_apply_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_REPOSITORY, "acme/operator"),
            (ENV_API_URL, "http://127.0.0.1:8080/"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        apply_overrides_from(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.github.repository.as_deref(), Some("acme/operator"));
        assert_eq!(config.github.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_apply_overrides_ignores_blank_values() {
        let mut config = Config::default();
        config.github.repository = Some("acme/operator".to_string());
        apply_overrides_from(&mut config, |_| Some("  ".to_string()));

        assert_eq!(config.github.repository.as_deref(), Some("acme/operator"));
        assert_eq!(config.github.api_url, "https://api.github.com");
    }
}
