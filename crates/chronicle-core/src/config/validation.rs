//! Configuration validation

use std::collections::HashSet;

use chrono::format::{Item, StrftimeItems};
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_release(config)?;
    validate_github(config)?;
    validate_notes(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

fn validate_release(config: &Config) -> Result<()> {
    if !config.release.tag_format.contains("{version}") {
        return Err(invalid("release.tag_format", "must contain {version} placeholder").into());
    }

    let date_format = &config.release.date_format;
    if date_format.trim().is_empty() {
        return Err(invalid("release.date_format", "date format cannot be empty").into());
    }
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid("release.date_format", "not a valid strftime format").into());
    }

    Ok(())
}

fn validate_github(config: &Config) -> Result<()> {
    let api_url = &config.github.api_url;
    if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
        return Err(invalid("github.api_url", "must be an http(s) URL").into());
    }

    if config.github.repository.is_some() && config.github.owner_and_repo().is_none() {
        return Err(invalid("github.repository", "must be in owner/repo form").into());
    }

    if config.github.token_env.trim().is_empty() {
        return Err(invalid("github.token_env", "token variable name cannot be empty").into());
    }

    if config.github.timeout_secs == 0 {
        return Err(invalid("github.timeout_secs", "timeout must be positive").into());
    }

    Ok(())
}

fn validate_notes(config: &Config) -> Result<()> {
    let notes = &config.notes;

    if let Some(i) = notes.exclude_sections.iter().position(|m| m.is_empty()) {
        // an empty marker would match every section
        return Err(invalid(
            format!("notes.exclude_sections[{}]", i),
            "exclusion marker cannot be empty",
        )
        .into());
    }

    if notes.first_contribution_marker.is_empty() {
        return Err(invalid(
            "notes.first_contribution_marker",
            "marker cannot be empty",
        )
        .into());
    }

    if notes.dependencies_marker.is_empty() {
        return Err(invalid("notes.dependencies_marker", "marker cannot be empty").into());
    }

    if !notes.dependency_groups.is_empty() {
        debug!(count = notes.dependency_groups.len(), "validating dependency groups");
    }
    let mut names = HashSet::new();
    for (i, group) in notes.dependency_groups.iter().enumerate() {
        if group.name.is_empty() {
            return Err(invalid(
                format!("notes.dependency_groups[{}].name", i),
                "group name cannot be empty",
            )
            .into());
        }

        if !names.insert(group.name.as_str()) {
            return Err(invalid(
                format!("notes.dependency_groups[{}].name", i),
                format!("duplicate group name '{}'", group.name),
            )
            .into());
        }

        if group.markers.is_empty() || group.markers.iter().any(|m| m.is_empty()) {
            return Err(invalid(
                format!("notes.dependency_groups[{}].markers", i),
                "at least one non-empty marker is required",
            )
            .into());
        }
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    let valid_formats = ["markdown", "md", "json"];
    if !valid_formats.contains(&config.output.format.as_str()) {
        return Err(invalid(
            "output.format",
            format!("must be one of: {}", valid_formats.join(", ")),
        )
        .into());
    }

    Ok(())
}
