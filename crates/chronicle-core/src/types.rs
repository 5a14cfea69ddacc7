//! Core types for Chronicle

use std::fmt::Write;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ReleaseConfig;

/// Scalar metadata rendered alongside the categorized notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    /// Version string as given by the caller
    pub version: String,
    /// Release date, already formatted
    pub date: String,
    /// Helm chart version, if one is published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_chart_version: Option<String>,
    /// Supported platform versions joined for display (e.g. "1.28, 1.29")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_platforms: Option<String>,
}

impl ReleaseMetadata {
    /// Create metadata dated today (UTC)
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            helm_chart_version: None,
            supported_platforms: None,
        }
    }

    /// Build metadata from release configuration
    pub fn from_config(version: impl Into<String>, config: &ReleaseConfig) -> Self {
        let mut metadata = Self::new(version)
            .with_date(Utc::now().date_naive(), &config.date_format)
            .with_platforms(&config.supported_platforms);
        metadata.helm_chart_version = config.helm_chart_version.clone();
        metadata
    }

    /// Set the release date using a strftime format.
    ///
    /// Falls back to ISO 8601 when the format string is invalid.
    pub fn with_date(mut self, date: NaiveDate, format: &str) -> Self {
        let mut formatted = String::new();
        if write!(formatted, "{}", date.format(format)).is_err() {
            formatted = date.format("%Y-%m-%d").to_string();
        }
        self.date = formatted;
        self
    }

    /// Set the helm chart version
    pub fn with_helm_chart_version(mut self, version: impl Into<String>) -> Self {
        self.helm_chart_version = Some(version.into());
        self
    }

    /// Set the supported platform versions
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = platforms
            .into_iter()
            .filter_map(|p| {
                let p = p.as_ref().trim();
                (!p.is_empty()).then(|| p.to_string())
            })
            .collect::<Vec<_>>()
            .join(", ");
        self.supported_platforms = if joined.is_empty() {
            None
        } else {
            Some(joined)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let metadata = ReleaseMetadata::new("1.2.0").with_date(date, "%B %-d, %Y");
        assert_eq!(metadata.date, "March 7, 2024");
    }

    #[test]
    fn test_with_invalid_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let metadata = ReleaseMetadata::new("1.2.0").with_date(date, "%Q");
        assert_eq!(metadata.date, "2024-03-07");
    }

    #[test]
    fn test_with_platforms() {
        let metadata = ReleaseMetadata::new("1.2.0").with_platforms(["1.28", " 1.29 ", ""]);
        assert_eq!(metadata.supported_platforms.as_deref(), Some("1.28, 1.29"));

        let metadata = ReleaseMetadata::new("1.2.0").with_platforms(Vec::<String>::new());
        assert!(metadata.supported_platforms.is_none());
    }

    #[test]
    fn test_from_config() {
        let config = ReleaseConfig {
            helm_chart_version: Some("0.9.1".to_string()),
            supported_platforms: vec!["1.29".to_string(), "1.30".to_string()],
            ..Default::default()
        };
        let metadata = ReleaseMetadata::from_config("2.0.0", &config);

        assert_eq!(metadata.version, "2.0.0");
        assert_eq!(metadata.helm_chart_version.as_deref(), Some("0.9.1"));
        assert_eq!(metadata.supported_platforms.as_deref(), Some("1.29, 1.30"));
        assert_eq!(metadata.date.len(), "2024-01-01".len());
    }
}
