//! Placeholder scanning.
//!
//! A placeholder is a substring of the form `${name}` where `name` is one or
//! more ASCII word characters (letters, digits, underscore). Anything else,
//! including `${}`, `${na me}`, and unclosed `${name`, is not a placeholder
//! and passes through as literal text.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes only; Unicode word characters do not form placeholder names.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([0-9A-Za-z_]+)\}").expect("placeholder pattern is valid"));

/// A single placeholder occurrence within a template text.
///
/// Identity for uniqueness purposes is the full [`literal`](Self::literal)
/// form (`${name}`), not the bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    literal: &'a str,
    name: &'a str,
}

impl<'a> Placeholder<'a> {
    /// The full matched text, including the `${` and `}` markers.
    pub fn literal(&self) -> &'a str {
        self.literal
    }

    /// The name between the markers.
    pub fn name(&self) -> &'a str {
        self.name
    }
}

/// Scans `text` for all placeholder occurrences, left to right.
///
/// Matches are non-overlapping and case-sensitive. This never fails; text
/// without placeholders yields an empty vector.
pub fn placeholders(text: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("capture 0 is the whole match");
            let name = caps.get(1).expect("pattern has a name group");
            Placeholder {
                literal: whole.as_str(),
                name: name.as_str(),
            }
        })
        .collect()
}

/// Returns true if `value` contains no character outside the word-character
/// class.
///
/// The empty string is valid: the check rejects values that contain a
/// non-word character, and an empty value contains none.
pub fn is_word_value(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_left_to_right() {
        let found = placeholders("My name is ${firstName} ${lastName}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].literal(), "${firstName}");
        assert_eq!(found[0].name(), "firstName");
        assert_eq!(found[1].literal(), "${lastName}");
        assert_eq!(found[1].name(), "lastName");
    }

    #[test]
    fn text_without_placeholders_yields_empty() {
        assert!(placeholders("My name is Jan Kowalski").is_empty());
        assert!(placeholders("").is_empty());
    }

    #[test]
    fn adjacent_placeholders_do_not_overlap() {
        let found = placeholders("${a}${b}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name(), "a");
        assert_eq!(found[1].name(), "b");
    }

    #[test]
    fn names_allow_digits_and_underscore() {
        let found = placeholders("${snake_case_42}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "snake_case_42");
    }

    #[test]
    fn malformed_sequences_are_not_placeholders() {
        assert!(placeholders("${}").is_empty());
        assert!(placeholders("${na me}").is_empty());
        assert!(placeholders("$ {x}").is_empty());
        assert!(placeholders("${x").is_empty());
        assert!(placeholders("{x}").is_empty());
    }

    #[test]
    fn unicode_names_are_not_placeholders() {
        assert!(placeholders("${héllo}").is_empty());
        assert!(placeholders("${imię}").is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let found = placeholders("${Name} ${name}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].literal(), "${Name}");
        assert_eq!(found[1].literal(), "${name}");
    }

    #[test]
    fn word_values_accepted() {
        assert!(is_word_value("Jan"));
        assert!(is_word_value("snake_case_42"));
        assert!(is_word_value(""));
    }

    #[test]
    fn non_word_values_rejected() {
        assert!(!is_word_value("@@"));
        assert!(!is_word_value("Jan Kowalski"));
        assert!(!is_word_value("dash-ed"));
        assert!(!is_word_value("Żółć"));
    }
}
