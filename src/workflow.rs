use anyhow::{Context, Result};
use qseek::{ApiClient, App, SessionOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive session.
pub(crate) struct SearchWorkflow {
    app: App<'static>,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            base_url,
            timeout,
            input_title,
            initial_query,
            theme,
        } = config;

        let client = ApiClient::new(&base_url, timeout)
            .with_context(|| format!("failed to create API client for {base_url}"))?;

        // Unknown names were rejected during settings resolution.
        let theme = theme
            .as_deref()
            .and_then(qseek::theme::resolve)
            .unwrap_or_default();

        let app = App::new(client, &initial_query, input_title, theme);
        Ok(Self { app })
    }

    pub(crate) fn run(mut self) -> Result<SessionOutcome> {
        self.app.run()
    }
}
