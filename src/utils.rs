//! Utility functions and helpers for pintop

use chrono::{NaiveDate, NaiveTime};

/// Last path component of a vault path
pub fn file_name_of_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Name of the folder a vault path points into
///
/// A trailing component containing a dot is treated as a file name and
/// skipped; an empty result means the vault root.
pub fn folder_name_of_path(path: &str) -> &str {
    let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    match parts.as_slice() {
        [] => "",
        [.., parent, last] if last.contains('.') => parent,
        [last] if last.contains('.') => "",
        [.., last] => last,
    }
}

/// Characters the host rejects in note file names
pub fn has_invalid_file_name_characters(name: &str) -> bool {
    name.chars()
        .any(|c| matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
}

/// Moment-style format tokens and their chrono equivalents, longest first so
/// the scan below never splits a token.
const FORMAT_TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("dddd", "%A"),
    ("MMMM", "%B"),
    ("ddd", "%a"),
    ("MMM", "%b"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("H", "%-H"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Translate a moment-style date format (the notation the settings record
/// carries, e.g. `YYYY-MM-DD`) into a chrono format string.
pub fn moment_format_to_chrono(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;
    'outer: while !rest.is_empty() {
        for (token, chrono_token) in FORMAT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(chrono_token);
                rest = tail;
                continue 'outer;
            }
        }
        let ch = rest.chars().next().unwrap_or_default();
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Format a date with a moment-style format string.
pub fn format_date(format: &str, date: NaiveDate) -> String {
    // Formatting against midnight keeps stray time tokens from panicking.
    date.and_time(NaiveTime::MIN)
        .format(&moment_format_to_chrono(format))
        .to_string()
}

/// Resolve a filename rule by substituting the `{{date}}` placeholder.
pub fn resolve_file_name_rule(rule: &str, date_format: &str, date: NaiveDate) -> String {
    let formatted = format_date(date_format, date);
    rule.replace("{{Date}}", &formatted)
        .replace("{{date}}", &formatted)
}

/// Deep-link URI for a custom command, shown by the settings surface.
pub fn custom_command_uri(vault_name: &str, command_id: &str) -> String {
    format!(
        "pintop://custom-popout?vault={}&id={}",
        percent_encode(vault_name),
        command_id
    )
}

/// Minimal percent-encoding for URI query components.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn file_name_of_path_basic() {
        assert_eq!(file_name_of_path("notes/daily/todo.md"), "todo.md");
        assert_eq!(file_name_of_path("todo.md"), "todo.md");
        assert_eq!(file_name_of_path(""), "");
    }

    #[test]
    fn folder_name_of_path_variants() {
        assert_eq!(folder_name_of_path("notes/daily"), "daily");
        assert_eq!(folder_name_of_path("notes/daily/todo.md"), "daily");
        assert_eq!(folder_name_of_path("todo.md"), "");
        assert_eq!(folder_name_of_path(""), "");
        assert_eq!(folder_name_of_path("/notes/"), "notes");
    }

    #[test]
    fn invalid_file_name_characters() {
        assert!(has_invalid_file_name_characters("a:b"));
        assert!(has_invalid_file_name_characters("a/b"));
        assert!(has_invalid_file_name_characters("a?b"));
        assert!(!has_invalid_file_name_characters("Log {{date}}"));
    }

    #[test]
    fn moment_translation() {
        assert_eq!(moment_format_to_chrono("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_format_to_chrono("DD.MM.YY"), "%d.%m.%y");
        assert_eq!(moment_format_to_chrono("MMM D, YYYY"), "%b %-d, %Y");
        // Literal percent signs survive escaping.
        assert_eq!(moment_format_to_chrono("100%"), "100%%");
    }

    #[test]
    fn format_date_is_deterministic() {
        assert_eq!(format_date("YYYY-MM-DD", date(2024, 1, 15)), "2024-01-15");
        assert_eq!(format_date("D MMM YYYY", date(2024, 3, 7)), "7 Mar 2024");
    }

    #[test]
    fn resolve_rule_substitutes_both_spellings() {
        let d = date(2024, 1, 15);
        assert_eq!(
            resolve_file_name_rule("Log {{date}}", "YYYY-MM-DD", d),
            "Log 2024-01-15"
        );
        assert_eq!(
            resolve_file_name_rule("{{Date}} journal", "YYYY-MM-DD", d),
            "2024-01-15 journal"
        );
        assert_eq!(resolve_file_name_rule("plain", "YYYY-MM-DD", d), "plain");
    }

    #[test]
    fn custom_command_uri_encodes_vault() {
        assert_eq!(
            custom_command_uri("my vault", "custom-popout-1"),
            "pintop://custom-popout?vault=my%20vault&id=custom-popout-1"
        );
    }
}
