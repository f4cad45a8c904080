mod annotations;
mod args;
mod output;

pub(crate) use args::{parse_cli, CliArgs, OutputFormat};
pub(crate) use output::{print_json, print_plain};
