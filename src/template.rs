//! The [`Template`] value object: compile once, evaluate many times.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TemplateError};
use crate::scan::{self, Placeholder};

/// An immutable compiled text with validated, pairwise-distinct placeholders.
///
/// A `Template` is constructed once through the fallible [`Template::new`]
/// and then reused across any number of [`evaluate`](Template::evaluate)
/// calls with different parameter sets. Construction fails if the same
/// placeholder literal occurs more than once in the text; a constructed
/// value is guaranteed duplicate-free for its entire lifetime.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use textfill::Template;
///
/// let template = Template::new("My name is ${firstName} ${lastName}")?;
///
/// let mut parameters = HashMap::new();
/// parameters.insert("firstName".to_string(), "Jan".to_string());
/// parameters.insert("lastName".to_string(), "Kowalski".to_string());
///
/// assert_eq!(template.evaluate(&parameters)?, "My name is Jan Kowalski");
/// # Ok::<(), textfill::TemplateError>(())
/// ```
///
/// # Thread safety
///
/// A `Template` owns only its text and is never mutated after construction,
/// so it is `Send + Sync` and `evaluate` may be called concurrently without
/// synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Compiles `text` into a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MalformedTemplate`] if the same placeholder
    /// literal appears more than once, e.g. `"${x} and ${x}"`. A text with
    /// zero placeholders always compiles.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if let Some(duplicate) = first_duplicate(&scan::placeholders(&text)) {
            return Err(TemplateError::MalformedTemplate(duplicate.to_string()));
        }
        Ok(Self { text })
    }

    /// The raw template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The number of placeholder occurrences in the text.
    pub fn placeholder_count(&self) -> usize {
        scan::placeholders(&self.text).len()
    }

    /// Placeholder names in scan order, left to right.
    pub fn placeholder_names(&self) -> Vec<&str> {
        scan::placeholders(&self.text)
            .iter()
            .map(|p| p.name())
            .collect()
    }

    /// Substitutes `parameters` into the template and returns the result.
    ///
    /// The mapping must supply exactly as many entries as there are
    /// placeholders, and every value must consist of word characters only.
    /// Keys are not validated: an entry whose key matches no placeholder is
    /// silently ignored and the unmatched placeholder is left in the output
    /// (see the crate docs on this looseness).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::IncompleteParameters`] on a count mismatch,
    /// checked before [`TemplateError::InvalidParameterValue`] for any value
    /// containing a non-word character.
    pub fn evaluate(&self, parameters: &HashMap<String, String>) -> Result<String> {
        self.validate(parameters)?;
        Ok(self.substitute(parameters))
    }

    fn validate(&self, parameters: &HashMap<String, String>) -> Result<()> {
        let expected = self.placeholder_count();
        if parameters.len() != expected {
            return Err(TemplateError::IncompleteParameters {
                expected,
                supplied: parameters.len(),
            });
        }
        if let Some(value) = parameters.values().find(|v| !scan::is_word_value(v)) {
            return Err(TemplateError::InvalidParameterValue(value.clone()));
        }
        Ok(())
    }

    fn substitute(&self, parameters: &HashMap<String, String>) -> String {
        let mut result = self.text.clone();
        for (name, value) in parameters {
            // Word-character values can never form `${...}` syntax, so the
            // entry order cannot affect the result.
            result = result.replace(&format!("${{{name}}}"), value);
        }
        result
    }
}

/// Returns the first placeholder literal that occurs more than once.
fn first_duplicate<'a>(occurrences: &[Placeholder<'a>]) -> Option<&'a str> {
    let mut seen = HashSet::new();
    occurrences
        .iter()
        .map(|p| p.literal())
        .find(|literal| !seen.insert(*literal))
}
