use std::time::Duration;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub input_title: String,
    pub initial_query: String,
    pub theme: Option<String>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  API base URL: {}", self.base_url);
        println!("  Request timeout: {}s", self.timeout.as_secs());
        println!("  Prompt title: {}", self.input_title);
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        println!(
            "  UI theme: {}",
            self.theme.as_deref().unwrap_or("(default)")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            base_url: "http://localhost:4000/api".into(),
            timeout: Duration::from_secs(30),
            input_title: "Search".into(),
            initial_query: "foo".into(),
            theme: Some("slate".into()),
        };

        config.print_summary();
    }
}
