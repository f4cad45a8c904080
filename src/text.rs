//! Plain-text presentation helpers: HTML stripping, excerpting, and the
//! compact number/age formats the tables use.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Fallback age string when a timestamp is missing or unparseable.
pub const RECENTLY: &str = "recently";

/// Drops HTML tags and decodes the handful of entities the backend emits.
///
/// Block-closing tags and `<br>` become newlines so paragraph structure
/// survives. An unterminated `<` is kept literally rather than eating the
/// rest of the string.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.char_indices().peekable();
    while let Some((index, ch)) = chars.next() {
        if ch != '<' {
            out.push(ch);
            continue;
        }
        let rest = &html[index + 1..];
        let Some(end) = rest.find('>') else {
            out.push('<');
            continue;
        };
        let tag = rest[..end].trim().to_ascii_lowercase();
        if matches!(tag.as_str(), "br" | "br/" | "br /" | "/p" | "/pre") {
            out.push('\n');
        }
        while let Some(&(next_index, _)) = chars.peek() {
            if next_index > index + 1 + end {
                break;
            }
            chars.next();
        }
    }
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last so already-decoded ampersands are not re-expanded.
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Strips `html` and truncates to at most `max_chars` characters, with an
/// ellipsis when anything was cut.
#[must_use]
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_html(html);
    let mut count = 0;
    for (index, _) in text.char_indices() {
        if count == max_chars {
            let mut truncated = text[..index].to_string();
            truncated.push_str("...");
            return truncated;
        }
        count += 1;
    }
    text
}

/// `1536` -> `1.5k`, `1_200_000` -> `1.2M`, small numbers unchanged.
#[must_use]
pub fn format_reputation(reputation: u64) -> String {
    if reputation >= 1_000_000 {
        format!("{:.1}M", reputation as f64 / 1_000_000.0)
    } else if reputation >= 1_000 {
        format!("{:.1}k", reputation as f64 / 1_000.0)
    } else {
        reputation.to_string()
    }
}

/// Humanized age of an epoch-seconds timestamp.
#[must_use]
pub fn age_from_epoch(epoch_secs: i64, now: OffsetDateTime) -> String {
    match OffsetDateTime::from_unix_timestamp(epoch_secs) {
        Ok(then) => humanize_since(then, now),
        Err(_) => RECENTLY.to_string(),
    }
}

/// Humanized age of an RFC 3339 timestamp string.
#[must_use]
pub fn age_from_rfc3339(timestamp: &str, now: OffsetDateTime) -> String {
    match OffsetDateTime::parse(timestamp, &Rfc3339) {
        Ok(then) => humanize_since(then, now),
        Err(_) => RECENTLY.to_string(),
    }
}

fn humanize_since(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let seconds = (now - then).whole_seconds();
    if seconds < 0 {
        return RECENTLY.to_string();
    }
    if seconds < 60 {
        return "just now".to_string();
    }
    let (amount, unit) = if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else if seconds < 2_592_000 {
        (seconds / 86_400, "day")
    } else if seconds < 31_536_000 {
        (seconds / 2_592_000, "month")
    } else {
        (seconds / 31_536_000, "year")
    };
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}
