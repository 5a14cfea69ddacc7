//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Chronicle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Release metadata configuration
    pub release: ReleaseConfig,

    /// GitHub release source configuration
    pub github: GitHubConfig,

    /// Release notes transformation rules
    pub notes: NotesConfig,

    /// Rendered output configuration
    pub output: OutputConfig,
}

/// Release metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Tag format (e.g., "v{version}")
    pub tag_format: String,

    /// Helm chart version published alongside the release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_chart_version: Option<String>,

    /// Supported platform versions (e.g. Kubernetes minor versions)
    pub supported_platforms: Vec<String>,

    /// strftime format used for the release date
    pub date_format: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag_format: "v{version}".to_string(),
            helm_chart_version: None,
            supported_platforms: Vec::new(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl ReleaseConfig {
    /// Build the release tag for a version.
    ///
    /// A version that already carries the tag prefix (`v1.2.0` with the
    /// default `v{version}` format) is returned unchanged.
    pub fn tag_for(&self, version: &str) -> String {
        let prefix = self
            .tag_format
            .split("{version}")
            .next()
            .unwrap_or_default();
        if !prefix.is_empty() && version.starts_with(prefix) {
            return version.to_string();
        }
        self.tag_format.replace("{version}", version)
    }
}

/// GitHub release source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository in `owner/repo` form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// REST API base URL
    pub api_url: String,

    /// Environment variable holding the API token
    pub token_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repository: None,
            api_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GitHubConfig {
    /// Split the configured repository into `(owner, repo)`
    pub fn owner_and_repo(&self) -> Option<(&str, &str)> {
        let (owner, repo) = self.repository.as_deref()?.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some((owner, repo))
    }
}

/// Where collapsed dependency groups land relative to ordinary entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPlacement {
    /// Groups precede the individually listed entries
    #[default]
    First,
    /// Groups follow the individually listed entries
    Last,
}

/// A dependency ecosystem whose bump entries collapse into one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGroupConfig {
    /// Ecosystem name (e.g. "go", "docker")
    pub name: String,

    /// Fixed trailing title; the first member's title is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Substrings that assign an entry to this group
    pub markers: Vec<String>,
}

impl DependencyGroupConfig {
    /// Create a group without a fixed title
    pub fn new(name: impl Into<String>, markers: &[&str]) -> Self {
        Self {
            name: name.into(),
            title: None,
            markers: markers.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Set a fixed trailing title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Check whether a change description belongs to this group
    pub fn matches(&self, description: &str) -> bool {
        self.markers.iter().any(|m| description.contains(m.as_str()))
    }
}

/// Release notes transformation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Sections whose title contains any of these are dropped
    pub exclude_sections: Vec<String>,

    /// Phrase marking a "first contribution" notice
    pub first_contribution_marker: String,

    /// Sections whose title contains this get dependency regrouping
    pub dependencies_marker: String,

    /// Dependency ecosystems, in output order
    pub dependency_groups: Vec<DependencyGroupConfig>,

    /// Placement of collapsed groups within a section
    pub group_placement: GroupPlacement,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            exclude_sections: vec![
                "Documentation".to_string(),
                "Maintenance".to_string(),
                "Tests".to_string(),
                "Other Changes".to_string(),
            ],
            first_contribution_marker: "made their first contribution".to_string(),
            dependencies_marker: "Dependencies".to_string(),
            dependency_groups: vec![
                DependencyGroupConfig::new("go", &["go group", "go_modules group"])
                    .with_title("Bump Go dependencies"),
                DependencyGroupConfig::new(
                    "docker",
                    &[
                        "Docker image update",
                        "docker group",
                        "docker-images group",
                        "in /build",
                    ],
                )
                .with_title("Bump Docker dependencies"),
            ],
            group_placement: GroupPlacement::First,
        }
    }
}

impl NotesConfig {
    /// Check if a section title hits the exclusion list
    pub fn is_excluded(&self, title: &str) -> bool {
        self.exclude_sections
            .iter()
            .any(|marker| title.contains(marker.as_str()))
    }

    /// Check if a section title marks a dependencies section
    pub fn is_dependencies_section(&self, title: &str) -> bool {
        title.contains(self.dependencies_marker.as_str())
    }
}

/// Rendered output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (markdown, json)
    pub format: String,

    /// Output file; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Line emitted above the release heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "markdown".to_string(),
            file: None,
            header: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.release.tag_format, "v{version}");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.notes.dependency_groups.len(), 2);
        assert_eq!(config.output.format, "markdown");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("tag_format: v{version}"));
        assert!(yaml.contains("group_placement: first"));
    }

    #[test]
    fn test_tag_for() {
        let release = ReleaseConfig::default();
        assert_eq!(release.tag_for("1.2.0"), "v1.2.0");
        assert_eq!(release.tag_for("v1.2.0"), "v1.2.0");

        let bare = ReleaseConfig {
            tag_format: "{version}".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.tag_for("1.2.0"), "1.2.0");
    }

    #[test]
    fn test_owner_and_repo() {
        let mut github = GitHubConfig::default();
        assert!(github.owner_and_repo().is_none());

        github.repository = Some("acme/operator".to_string());
        assert_eq!(github.owner_and_repo(), Some(("acme", "operator")));

        github.repository = Some("acme".to_string());
        assert!(github.owner_and_repo().is_none());

        github.repository = Some("acme/operator/extra".to_string());
        assert!(github.owner_and_repo().is_none());
    }

    #[test]
    fn test_exclusion_is_case_sensitive_substring() {
        let notes = NotesConfig::default();
        assert!(notes.is_excluded("📝 Documentation"));
        assert!(notes.is_excluded("Other Changes"));
        assert!(!notes.is_excluded("documentation"));
        assert!(!notes.is_excluded("Bug Fixes"));
    }

    #[test]
    fn test_group_matches() {
        let notes = NotesConfig::default();
        let go = &notes.dependency_groups[0];
        let docker = &notes.dependency_groups[1];

        assert!(go.matches("Bump the go group with 3 updates"));
        assert!(go.matches("bump the go_modules group across 1 directory"));
        assert!(docker.matches("Bump golang from 1.21 to 1.22 in /build"));
        assert!(!docker.matches("Bump the go group with 3 updates"));
    }

    #[test]
    fn test_default_group_titles() {
        let notes = NotesConfig::default();
        let titles: Vec<Option<&str>> = notes
            .dependency_groups
            .iter()
            .map(|g| g.title.as_deref())
            .collect();

        assert_eq!(
            titles,
            vec![Some("Bump Go dependencies"), Some("Bump Docker dependencies")]
        );
    }
}
