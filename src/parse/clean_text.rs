use std::sync::OnceLock;

use regex::Regex;

/// Trims the text and collapses every run of whitespace inside it into one space.
pub fn clean_text(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s.trim(), " ").into_owned()
}
