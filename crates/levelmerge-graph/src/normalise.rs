//! Gene name normalisation for graph-description tokens.
//!
//! Node labels in the graph files are quoted (`"KRAS"`), optionally followed by
//! attribute lists or a statement terminator. The canonical identifier is the
//! text between the first pair of double quotes.

use regex::Regex;

/// Extract the canonical gene identifier from a raw token.
/// Returns `None` when the token carries no quoted label.
pub fn gene_label(token: &str) -> Option<&str> {
    lazy_label_regex()
        .captures(token)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

fn lazy_label_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)""#).expect("label pattern is valid"))
}
