use clap::builder::{
    styling::{AnsiColor, Color, Style},
    StyledStr,
};
use clap::Arg;

/// Apply dimmed styling to relevant clap annotations for improved readability.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
    let help_text = arg
        .get_help()
        .cloned()
        .map(|help| help.to_string())
        .unwrap_or_default();
    let mut styled_help = StyledStr::new();
    styled_help.push_str(&help_text);
    let mut has_help = !help_text.is_empty();

    if let Some(annotation) = render_possible_values_annotation(&arg) {
        arg = arg.hide_possible_values(true);
        if has_help {
            styled_help.push_str(" ");
        }
        append_muted_annotation(&mut styled_help, &annotation);
        has_help = true;
    }

    if let Some(annotation) = render_default_value_annotation(&arg) {
        arg = arg.hide_default_value(true);
        if has_help {
            styled_help.push_str(" ");
        }
        append_muted_annotation(&mut styled_help, &annotation);
        has_help = true;
    }

    if let Some(annotation) = render_env_annotation(&arg) {
        arg = arg.hide_env(true);
        if has_help {
            styled_help.push_str(" ");
        }
        append_muted_annotation(&mut styled_help, &annotation);
        has_help = true;
    }

    if has_help {
        arg = arg.help(styled_help);
    }

    arg
}

/// Return the muted style used to annotate clap help metadata.
fn muted_style() -> Style {
    Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
        .dimmed()
}

/// Append an annotation using the muted help style.
fn append_muted_annotation(target: &mut StyledStr, annotation: &str) {
    let style = muted_style();
    let _ = std::fmt::write(target, format_args!("{style}{annotation}{style:#}"));
}

/// Render clap possible value annotations for display.
fn render_possible_values_annotation(arg: &Arg) -> Option<String> {
    if !arg.get_action().takes_values() {
        return None;
    }

    let values = arg.get_possible_values();
    if values.is_empty() {
        return None;
    }

    let visible: Vec<String> = values
        .iter()
        .filter(|value| !value.is_hide_set())
        .map(|value| value.get_name().to_string())
        .collect();
    if visible.is_empty() {
        return None;
    }

    Some(format!("[possible values: {}]", visible.join(", ")))
}

/// Render clap default value annotations with optional quoting.
fn render_default_value_annotation(arg: &Arg) -> Option<String> {
    let defaults = arg.get_default_values();
    if defaults.is_empty() {
        return None;
    }

    let rendered: Vec<String> = defaults
        .iter()
        .map(|value| value.to_string_lossy().to_string())
        .filter(|text| !text.trim().is_empty())
        .collect();
    if rendered.is_empty() {
        return None;
    }

    Some(format!("(default: {})", rendered.join(", ")))
}

/// Render environment variable annotations for clap arguments.
fn render_env_annotation(arg: &Arg) -> Option<String> {
    let env = arg.get_env()?;
    let name = env.to_string_lossy();
    if name.trim().is_empty() {
        return None;
    }

    Some(format!("[env: {name}=]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn possible_values_skip_hidden_entries() {
        let arg = Arg::new("output")
            .value_parser(["plain", "json"])
            .hide_possible_values(false);

        let annotation = render_possible_values_annotation(&arg).expect("annotation");
        assert_eq!(annotation, "[possible values: plain, json]");
    }

    #[test]
    fn default_values_ignore_blank_entries() {
        let arg = Arg::new("timeout").default_values(["30", " "]);

        let annotation = render_default_value_annotation(&arg).expect("annotation");
        assert_eq!(annotation, "(default: 30)");
    }

    #[test]
    fn env_annotations_render_names() {
        let arg = Arg::new("api-url").env("QSEEK_API_URL");
        let annotation = render_env_annotation(&arg).expect("annotation");
        assert_eq!(annotation, "[env: QSEEK_API_URL=]");
    }
}
