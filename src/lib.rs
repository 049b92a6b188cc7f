//! Textfill - minimal `${name}` placeholder templating.
//!
//! A [`Template`] is compiled once from a text containing `${name}`
//! placeholders, validated at construction, and then evaluated any number of
//! times against a parameter mapping. There is no control flow, no filters,
//! no escaping syntax, and no I/O: the whole engine is a pure computation
//! over in-memory strings.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use textfill::Template;
//!
//! let template = Template::new("My name is ${firstName} ${lastName}")?;
//!
//! let mut parameters = HashMap::new();
//! parameters.insert("firstName".to_string(), "Jan".to_string());
//! parameters.insert("lastName".to_string(), "Kowalski".to_string());
//!
//! assert_eq!(template.evaluate(&parameters)?, "My name is Jan Kowalski");
//! # Ok::<(), textfill::TemplateError>(())
//! ```
//!
//! # Placeholder Syntax
//!
//! A placeholder is `${` + one or more ASCII word characters (letters,
//! digits, underscore) + `}`. Matching is case-sensitive and left-to-right.
//! Sequences that do not match, such as `${}`, `${na me}`, or an unclosed
//! `${name`, are not placeholders and pass through as literal text.
//!
//! # Validation Rules
//!
//! - **At construction**: the same placeholder literal may not occur twice
//!   in one text; `"${x} and ${x}"` fails with
//!   [`TemplateError::MalformedTemplate`].
//! - **At evaluation**, in order: the parameter count must equal the
//!   placeholder count ([`TemplateError::IncompleteParameters`]), then every
//!   value must consist of word characters only
//!   ([`TemplateError::InvalidParameterValue`]). The empty value is valid.
//!
//! # Known Looseness
//!
//! Completeness compares entry *counts*, and substitution silently ignores a
//! key that matches no placeholder. A parameter set with the right
//! cardinality but a wrong key therefore passes validation and leaves the
//! unmatched placeholder in the output. This mirrors the behavior of the
//! system this crate is compatible with; callers who need strict key
//! checking can compare their keys against
//! [`placeholder_names`](Template::placeholder_names) before evaluating.

mod error;
mod scan;
mod template;

pub use error::{Result, TemplateError};
pub use template::Template;
