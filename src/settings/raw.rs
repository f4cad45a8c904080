use std::time::Duration;

use anyhow::{bail, ensure, Result};
use serde::Deserialize;

use qseek::api::DEFAULT_BASE_URL;
use qseek::theme;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_INPUT_TITLE: &str = "Search";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

/// Backend connection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.api_url.clone() {
            self.api.base_url = Some(url);
        }
        if let Some(timeout) = cli.timeout {
            self.api.timeout_secs = Some(timeout);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(query) = cli.query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let base_url = self
            .api
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        ensure!(!base_url.trim().is_empty(), "api.base_url must not be empty");

        let timeout_secs = self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        ensure!(timeout_secs > 0, "api.timeout_secs must be greater than zero");

        if let Some(name) = self.ui.theme.as_deref()
            && theme::resolve(name).is_none()
        {
            bail!(
                "unknown theme '{name}' (available: {})",
                theme::names().join(", ")
            );
        }

        Ok(ResolvedConfig {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            input_title: self
                .ui
                .title
                .unwrap_or_else(|| DEFAULT_INPUT_TITLE.to_string()),
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme: self.ui.theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = CliArgs::parse_from([
            "qseek",
            "--api-url",
            "http://example.test/api",
            "--timeout",
            "5",
            "--title",
            "Ask",
            "--query",
            "borrow checker",
            "--theme",
            "light",
        ]);

        let mut config = RawConfig::default();
        config.api.base_url = Some("http://from-file/api".into());
        config.ui.theme = Some("slate".into());
        config.apply_cli_overrides(&cli);

        assert_eq!(config.api.base_url.as_deref(), Some("http://example.test/api"));
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.ui.title.as_deref(), Some("Ask"));
        assert_eq!(config.ui.initial_query.as_deref(), Some("borrow checker"));
        assert_eq!(config.ui.theme.as_deref(), Some("light"));
    }

    #[test]
    fn resolve_fills_defaults() {
        let resolved = RawConfig::default().resolve().expect("resolves");
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.input_title, DEFAULT_INPUT_TITLE);
        assert!(resolved.initial_query.is_empty());
        assert!(resolved.theme.is_none());
    }

    #[test]
    fn resolve_rejects_zero_timeout() {
        let mut config = RawConfig::default();
        config.api.timeout_secs = Some(0);
        assert!(config.resolve().is_err());
    }

    #[test]
    fn resolve_rejects_unknown_themes() {
        let mut config = RawConfig::default();
        config.ui.theme = Some("neon".into());
        assert!(config.resolve().is_err());
    }
}
