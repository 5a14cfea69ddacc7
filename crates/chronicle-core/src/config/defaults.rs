//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "chronicle.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "chronicle.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".chronicle.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".chronicle.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Chronicle Configuration

release:
  tag_format: "v{version}"
  supported_platforms: []
  date_format: "%Y-%m-%d"

github:
  api_url: https://api.github.com
  token_env: GITHUB_TOKEN
  timeout_secs: 30

notes:
  exclude_sections:
    - Documentation
    - Maintenance
    - Tests
    - Other Changes
  first_contribution_marker: made their first contribution
  dependencies_marker: Dependencies
  dependency_groups:
    - name: go
      title: Bump Go dependencies
      markers:
        - go group
        - go_modules group
    - name: docker
      title: Bump Docker dependencies
      markers:
        - Docker image update
        - docker group
        - docker-images group
        - in /build
  group_placement: first

output:
  format: markdown
"#;

/// Default configuration template (TOML)
pub const DEFAULT_CONFIG_TOML_TEMPLATE: &str = r#"# Chronicle Configuration

[release]
tag_format = "v{version}"
supported_platforms = []
date_format = "%Y-%m-%d"

[github]
api_url = "https://api.github.com"
token_env = "GITHUB_TOKEN"
timeout_secs = 30

[notes]
exclude_sections = ["Documentation", "Maintenance", "Tests", "Other Changes"]
first_contribution_marker = "made their first contribution"
dependencies_marker = "Dependencies"
group_placement = "first"

[[notes.dependency_groups]]
name = "go"
title = "Bump Go dependencies"
markers = ["go group", "go_modules group"]

[[notes.dependency_groups]]
name = "docker"
title = "Bump Docker dependencies"
markers = ["Docker image update", "docker group", "docker-images group", "in /build"]

[output]
format = "markdown"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_templates_parse_to_defaults() {
        let yaml: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let toml: Config = toml::from_str(DEFAULT_CONFIG_TOML_TEMPLATE).unwrap();
        let defaults = Config::default();

        assert_eq!(yaml.notes.dependency_groups, defaults.notes.dependency_groups);
        assert_eq!(toml.notes.dependency_groups, defaults.notes.dependency_groups);
        assert_eq!(toml.notes.exclude_sections, defaults.notes.exclude_sections);
    }
}
