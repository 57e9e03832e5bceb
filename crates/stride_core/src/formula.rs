//! Plain-data storage for user-entered formulas.
//!
//! The stepper never reads this; the surrounding application collects
//! formula/text pairs here and is responsible for turning the `func`
//! strings into derivatives before integrating.

use serde::{Deserialize, Serialize};

/// A user-entered equation paired with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaEntry {
    pub func: String,
    pub text: String,
}

/// An ordered collection of formula entries. Index `i` corresponds to the
/// `i`-th component of the system the application builds from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaSet {
    entries: Vec<FormulaEntry>,
}

impl FormulaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, func: impl Into<String>, text: impl Into<String>) {
        self.entries.push(FormulaEntry {
            func: func.into(),
            text: text.into(),
        });
    }

    pub fn remove(&mut self, index: usize) -> Option<FormulaEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&FormulaEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FormulaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
