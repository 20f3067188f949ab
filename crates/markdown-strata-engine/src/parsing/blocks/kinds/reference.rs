use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::ReferenceDefinition;

/// Single-line link reference definitions: `[label]: destination "title"`.
pub struct Reference;

impl Reference {
    /// Labels longer than this are not definitions.
    pub const MAX_LABEL_LEN: usize = 999;

    fn regex() -> &'static Regex {
        static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();
        REFERENCE_REGEX.get_or_init(|| {
            Regex::new(
                r#"^\[((?:[^\[\]\\]|\\.)+)\]:[ \t]*(<[^<>\n]*>|\S+)(?:[ \t]+("[^"]*"|'[^']*'|\([^()]*\)))?[ \t]*$"#,
            )
            .expect("Invalid reference definition regex")
        })
    }

    /// Parses `s` (indentation already removed) as a reference definition.
    ///
    /// Returns the normalized label and the definition.
    pub fn parse(s: &str) -> Option<(String, ReferenceDefinition)> {
        let caps = Self::regex().captures(s)?;
        let raw_label = caps.get(1)?.as_str();
        if raw_label.len() > Self::MAX_LABEL_LEN {
            return None;
        }
        let label = Self::normalize_label(raw_label);
        if label.is_empty() {
            return None;
        }

        let destination = caps.get(2)?.as_str();
        let destination = destination
            .strip_prefix('<')
            .and_then(|d| d.strip_suffix('>'))
            .unwrap_or(destination)
            .to_string();
        let title = caps.get(3).map(|t| {
            let t = t.as_str();
            t[1..t.len() - 1].to_string()
        });

        Some((label, ReferenceDefinition { destination, title }))
    }

    /// Case-folds the label and collapses inner whitespace runs to one space.
    pub fn normalize_label(label: &str) -> String {
        label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
