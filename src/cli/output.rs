use anyhow::Result;
use qseek::SessionOutcome;
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
    if !outcome.accepted {
        println!("Search cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(question) => {
            println!("{}", question.title);
            if !question.link.is_empty() {
                println!("{}", question.link);
            }
        }
        None => println!("No selection"),
    }
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
    let selection = match &outcome.selection {
        Some(question) => json!({
            "id": question.id,
            "title": question.title,
            "link": question.link,
        }),
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use qseek::types::QuestionRef;
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_format_includes_the_selected_question() {
        let outcome = SessionOutcome {
            accepted: true,
            query: "reverse a string".into(),
            selection: Some(QuestionRef {
                id: 42,
                title: "How to reverse a string".into(),
                link: "https://stackoverflow.com/q/42".into(),
            }),
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], true);
        assert_eq!(value["selection"]["id"], 42);
        assert_eq!(value["selection"]["title"], "How to reverse a string");
    }

    #[test]
    fn json_format_uses_null_for_no_selection() {
        let outcome = SessionOutcome {
            accepted: false,
            query: "".into(),
            selection: None,
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert!(value["selection"].is_null());
    }
}
