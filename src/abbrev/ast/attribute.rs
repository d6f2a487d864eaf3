//! Attribute element
//!
//! An attribute is a name with an ordered list of raw values. Values may contain
//! a placeholder: a run of `$` characters that is replaced at render time with the
//! owning node's multiplication index, zero-padded to the length of the run.
//!
//! Merge rules:
//!     - `class` accumulates: every added value is appended in insertion order.
//!     - any other name replaces: the newest values win.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$+").expect("valid placeholder regex"));

/// Name of the attribute whose values accumulate instead of being replaced
pub const CLASS: &str = "class";
pub const ID: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    /// Create an attribute with a single value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    /// Create an attribute without values.
    ///
    /// Rendered as an empty value in silent mode and as a tab stop in counting mode.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another attribute of the same name into this one
    pub fn merge(&mut self, other: Attribute) {
        debug_assert_eq!(self.name, other.name);
        if self.name == CLASS {
            self.values.extend(other.values);
        } else {
            self.values = other.values;
        }
    }

    /// Values with their first placeholder run substituted by `index`
    pub fn rendered_values(&self, index: usize) -> Vec<Cow<'_, str>> {
        self.values
            .iter()
            .map(|value| substitute_placeholder(value, index))
            .collect()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.values.join(" "))
    }
}

/// Replace the first maximal run of `$` in `value` with `index`, zero-padded to the
/// run length. Later runs are left untouched.
pub fn substitute_placeholder(value: &str, index: usize) -> Cow<'_, str> {
    match PLACEHOLDER.find(value) {
        Some(run) => {
            let width = run.len();
            let mut result = String::with_capacity(value.len() + 4);
            result.push_str(&value[..run.start()]);
            result.push_str(&format!("{index:0width$}"));
            result.push_str(&value[run.end()..]);
            Cow::Owned(result)
        }
        None => Cow::Borrowed(value),
    }
}
