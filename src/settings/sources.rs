use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use config::{Config, ConfigError, File};
use qseek::app_dirs;

use crate::cli::CliArgs;

/// Layer the configuration sources, lowest precedence first: the default
/// file locations (unless `--no-config`), any explicit `--config` files, and
/// `QSEEK_`-prefixed environment variables on top.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("qseek")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Default config files: `config.toml` in the qseek config directory, then
/// `.qseek.toml` and `qseek.toml` in the current directory. All optional.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".qseek.toml"));
        files.push(current_dir.join("qseek.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with(".qseek.toml")));
        assert!(files.iter().any(|path| path.ends_with("qseek.toml")));
    }
}
