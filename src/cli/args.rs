use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    builder::{
        styling::{AnsiColor, Effects},
        Styles,
    },
    ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
};
use qseek::app_dirs;

use super::annotations::dim_cli_annotations;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("qseek {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = tinted_cli_command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

/// Apply styling customisation to the generated clap command.
fn tinted_cli_command() -> Command {
    CliArgs::command().mut_args(dim_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
    name = "qseek",
    version,
    long_version = long_version(),
    about = "Interactive Stack Overflow search with AI reranking",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `qseek` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "QSEEK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'u',
        long = "api-url",
        value_name = "URL",
        env = "QSEEK_API_URL",
        help = "Base URL of the search backend"
    )]
    pub(crate) api_url: Option<String>,
    #[arg(
        long,
        value_name = "SECONDS",
        help = "Request timeout for backend calls"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query"
    )]
    pub(crate) query: Option<String>,
    #[arg(long, value_name = "THEME", help = "Select a theme by name")]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit"
    )]
    pub(crate) list_themes: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_supports_custom_styles() {
        let command = tinted_cli_command();
        assert!(command.get_about().is_some());
    }

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let command = CliArgs::command();
        let mut matches = command.get_matches_from(vec!["qseek"]);
        let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert!(parsed.api_url.is_none());
    }

    #[test]
    fn parse_cli_accepts_overrides() {
        let command = CliArgs::command();
        let mut matches = command.get_matches_from(vec![
            "qseek",
            "--api-url",
            "http://example.test/api",
            "--timeout",
            "5",
            "--query",
            "borrow checker",
            "--output",
            "json",
        ]);
        let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
        assert_eq!(parsed.api_url.as_deref(), Some("http://example.test/api"));
        assert_eq!(parsed.timeout, Some(5));
        assert_eq!(parsed.query.as_deref(), Some("borrow checker"));
        assert_eq!(parsed.output, OutputFormat::Json);
    }
}
