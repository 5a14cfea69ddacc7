//! Generate command

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use chronicle_core::config::Config;
use chronicle_core::{ReleaseMetadata, RenderError};
use chronicle_notes::{FormatterRegistry, NotesGenerator};
use chronicle_releases::{FileSource, GitHubReleases, ReleaseSource};

use super::{load_cli_config, read_input};
use crate::cli::{output, Cli, OutputFormat};

/// Generate curated release notes for a version
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Version being released (e.g. 1.4.0)
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Read the release body from a file ('-' for stdin) instead of GitHub
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write notes to a file (default: configured file, else stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Release tag (default: derived from release.tag_format)
    #[arg(long)]
    pub tag: Option<String>,

    /// Release date (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Helm chart version published with this release
    #[arg(long, value_name = "VERSION")]
    pub helm_chart_version: Option<String>,

    /// Supported platform versions, comma separated
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    pub platforms: Vec<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = %self.version, input = ?self.input, "executing generate command");
        let (config, _) = load_cli_config(cli)?;

        let tag = self.tag_for(&config);
        let body = self.fetch_body(&config, &tag)?;
        let metadata = self.metadata(&config);

        let format = match cli.format {
            OutputFormat::Json => "json",
            OutputFormat::Text => config.output.format.as_str(),
        };
        let registry = FormatterRegistry::with_markdown_header(config.output.header.clone());
        let formatter = registry
            .get(format)
            .ok_or_else(|| {
                RenderError::UnsupportedFormat(format!(
                    "{} (available: {})",
                    format,
                    registry.names().join(", ")
                ))
            })?;

        let generator = NotesGenerator::new(config.notes.clone()).with_shared_formatter(formatter);
        let notes = generator.generate(metadata, &body)?;
        let rendered = generator.format(&notes)?;

        match self.output.as_ref().or(config.output.file.as_ref()) {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;

                if !cli.quiet {
                    output::success(&format!(
                        "Release notes for {} written to {} ({} entries)",
                        self.version,
                        output::path_style().apply_to(path.display()),
                        notes.entry_count()
                    ));
                }
            }
            None => print!("{}", rendered),
        }

        if notes.is_empty() && !cli.quiet {
            output::warning("No entries survived curation");
        }

        Ok(())
    }

    fn tag_for(&self, config: &Config) -> String {
        self.tag
            .clone()
            .unwrap_or_else(|| config.release.tag_for(&self.version))
    }

    /// Fetch the release body from the configured source
    fn fetch_body(&self, config: &Config, tag: &str) -> anyhow::Result<String> {
        let source: Box<dyn ReleaseSource> = match &self.input {
            Some(path) if path.as_os_str() == "-" => return read_input(path),
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(GitHubReleases::new(&config.github)?),
        };

        info!(source = source.name(), tag, "fetching release body");
        let runtime = tokio::runtime::Runtime::new()?;
        let body = runtime
            .block_on(source.fetch_body(tag))
            .with_context(|| format!("Failed to fetch release {}", tag))?;

        Ok(body)
    }

    /// Release metadata from configuration and command line overrides
    fn metadata(&self, config: &Config) -> ReleaseMetadata {
        let mut metadata = ReleaseMetadata::from_config(&self.version, &config.release);

        if let Some(date) = self.date {
            metadata = metadata.with_date(date, &config.release.date_format);
        }
        if let Some(chart) = &self.helm_chart_version {
            metadata = metadata.with_helm_chart_version(chart);
        }
        if !self.platforms.is_empty() {
            metadata = metadata.with_platforms(&self.platforms);
        }

        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::config::ReleaseConfig;

    fn command(version: &str) -> GenerateCommand {
        GenerateCommand {
            version: version.to_string(),
            input: None,
            output: None,
            tag: None,
            date: None,
            helm_chart_version: None,
            platforms: Vec::new(),
        }
    }

    #[test]
    fn test_tag_derived_from_config() {
        let config = Config::default();
        assert_eq!(command("1.4.0").tag_for(&config), "v1.4.0");
        assert_eq!(command("v1.4.0").tag_for(&config), "v1.4.0");

        let mut cmd = command("1.4.0");
        cmd.tag = Some("release-1.4.0".to_string());
        assert_eq!(cmd.tag_for(&config), "release-1.4.0");
    }

    #[test]
    fn test_metadata_overrides() {
        let config = Config {
            release: ReleaseConfig {
                helm_chart_version: Some("0.1.0".to_string()),
                supported_platforms: vec!["1.28".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let mut cmd = command("1.4.0");
        cmd.date = NaiveDate::from_ymd_opt(2024, 5, 1);
        cmd.helm_chart_version = Some("0.7.0".to_string());
        cmd.platforms = vec!["1.29".to_string(), "1.30".to_string()];

        let metadata = cmd.metadata(&config);
        assert_eq!(metadata.date, "2024-05-01");
        assert_eq!(metadata.helm_chart_version.as_deref(), Some("0.7.0"));
        assert_eq!(metadata.supported_platforms.as_deref(), Some("1.29, 1.30"));
    }

    #[test]
    fn test_metadata_defaults_from_config() {
        let config = Config {
            release: ReleaseConfig {
                helm_chart_version: Some("0.1.0".to_string()),
                supported_platforms: vec!["1.28".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        let metadata = command("1.4.0").metadata(&config);
        assert_eq!(metadata.helm_chart_version.as_deref(), Some("0.1.0"));
        assert_eq!(metadata.supported_platforms.as_deref(), Some("1.28"));
    }

    #[test]
    fn test_fetch_body_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("body.md");
        std::fs::write(&path, "### Features\n").unwrap();

        let mut cmd = command("1.4.0");
        cmd.input = Some(path);
        let body = cmd.fetch_body(&Config::default(), "v1.4.0").unwrap();

        assert_eq!(body, "### Features\n");
    }

    #[test]
    fn test_fetch_body_missing_file_maps_to_not_found() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut cmd = command("1.4.0");
        cmd.input = Some(temp.path().join("missing.md"));

        let err = cmd.fetch_body(&Config::default(), "v1.4.0").unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::RELEASE_NOT_FOUND);
    }

    #[test]
    fn test_github_source_requires_repository() {
        let err = command("1.4.0")
            .fetch_body(&Config::default(), "v1.4.0")
            .unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::CONFIG_ERROR);
    }
}
