//! Per-run failure accumulator.

use std::collections::HashSet;

use crate::foundation::FailureData;

/// Collects the failures of one `validate()` run.
///
/// A fresh context is created for every run. Besides the ordered failure
/// list it remembers which property paths have already failed, which is what
/// lets the command skip later rules for the same path.
#[derive(Debug, Default)]
pub struct ValidationContext {
    errors: Vec<FailureData>,
    seen: HashSet<String>,
}

impl ValidationContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a failure has already been recorded for `property_name`.
    pub fn contains(&self, property_name: &str) -> bool {
        self.seen.contains(property_name)
    }

    /// Records a failure for a property path and marks the path as failed.
    pub fn add_for(&mut self, property_name: impl Into<String>, failure: FailureData) {
        self.errors.push(failure);
        self.seen.insert(property_name.into());
    }

    /// Records a failure that is not tied to a single property.
    ///
    /// Does not affect deduplication.
    pub fn add(&mut self, failure: FailureData) {
        self.errors.push(failure);
    }

    /// Failures recorded so far, in evaluation order.
    pub fn errors(&self) -> &[FailureData] {
        &self.errors
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing has failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the context and returns its failures.
    pub fn into_errors(self) -> Vec<FailureData> {
        self.errors
    }
}
