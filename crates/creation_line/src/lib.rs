use once_cell::sync::Lazy;
use regex::Regex;

static CREATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<creator>(.*)</creator>").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<date>(.*)</date>").unwrap());

/// Formats the fixed creation line shared by project and version
/// descriptions: `Created by <creator>NAME</creator> on <date>DATE</date>`.
pub fn creation_line(creator: &str, date: &str) -> String {
    format!(
        "Created by <creator>{}</creator> on <date>{}</date>",
        creator, date
    )
}

/// Extracts the creator name from a line containing a `<creator>` tag pair.
pub fn extract_creator(line: &str) -> Option<String> {
    CREATOR_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts the date from a line containing a `<date>` tag pair.
pub fn extract_date(line: &str) -> Option<String> {
    DATE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
