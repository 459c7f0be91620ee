//! Error types.
//!
//! A failing rule is *not* an error here: it produces a
//! [`FailureData`](crate::FailureData). The types in this module cover the
//! cases where a rule body itself breaks, or where configuration cannot be
//! loaded.

use std::borrow::Cow;

use thiserror::Error;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A fault raised by a rule body while it was being evaluated.
///
/// Returned from fallible custom rules (`try_add`, `add_async`,
/// `fail_if_async`). The engine does not retry or suppress it.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule gave up with a message.
    #[error("{0}")]
    Fault(Cow<'static, str>),

    /// The rule failed because something it depends on failed.
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl RuleError {
    /// Creates a fault from a message.
    pub fn fault(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Fault(message.into())
    }

    /// Wraps an underlying error.
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(error))
    }
}

// ============================================================================
// VALIDATE ERROR
// ============================================================================

/// Why a `validate()` run was aborted.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A rule body faulted. No partial failure list is returned.
    #[error("validation rule #{index} faulted: {source}")]
    RuleFault {
        /// Zero-based registration index of the rule.
        index: usize,
        /// Property path the rule was registered for, if any.
        property: Option<String>,
        /// The fault raised by the rule.
        #[source]
        source: RuleError,
    },
}

impl ValidateError {
    /// Property path of the faulting rule, if it was tied to one.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::RuleFault { property, .. } => property.as_deref(),
        }
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Failure to load message configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The message catalog was not valid JSON of the expected shape.
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
