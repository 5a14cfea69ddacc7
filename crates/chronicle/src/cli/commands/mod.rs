//! CLI commands

mod generate;
mod init;
mod parse;
mod validate;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;
pub use validate::ValidateCommand;

use std::io::Read;
use std::path::{Path, PathBuf};

use chronicle_core::config::{
    apply_env_overrides, load_config, load_config_or_default, validate_config, Config,
};
use tracing::debug;

use crate::cli::Cli;

/// Load configuration from `--config` or by searching upward, then apply
/// environment overrides
pub(crate) fn load_cli_config(cli: &Cli) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let (mut config, path) = match &cli.config {
        Some(path) => (load_config(path)?, Some(path.clone())),
        None => load_config_or_default(&std::env::current_dir()?)?,
    };

    apply_env_overrides(&mut config);
    validate_config(&config)?;
    debug!(path = ?path, "configuration ready");
    Ok((config, path))
}

/// Read text from a file, or from stdin when the path is `-`
pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
