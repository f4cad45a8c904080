mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{parse_cli, print_json, print_plain, OutputFormat};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in qseek::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Err(err) = qseek::logging::initialize() {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_session(cli.output, resolved)
}

/// Execute the interactive session and print output in the chosen format.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let workflow = SearchWorkflow::from_config(settings)?;
    let outcome = workflow.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
