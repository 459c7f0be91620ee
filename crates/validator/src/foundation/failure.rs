//! The failure record produced by a rule that did not hold.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// FAILURE DATA
// ============================================================================

/// One validation failure.
///
/// A `FailureData` is the normal output of a failing rule, not an error: the
/// engine collects them into an ordered list and hands that list back from
/// `validate()`. Instances are immutable once built; the `with_*` methods
/// consume the value and return a new one.
///
/// # Examples
///
/// ```rust,ignore
/// use objval::FailureData;
///
/// let failure = FailureData::new("'Subject' should not be empty.")
///     .with_property_name("Subject")
///     .with_error_code("NotEmptyValidator");
///
/// assert_eq!(failure.property_name(), Some("Subject"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureData {
    error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    property_localized_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
}

impl FailureData {
    /// Creates a failure that carries only a message.
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            property_name: None,
            property_localized_name: None,
            error_code: None,
        }
    }

    /// Sets the absolute property path, e.g. `Attachments[1].FileName`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property_name(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = Some(property_name.into());
        self
    }

    /// Sets the display name that was substituted into the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_localized_name(mut self, localized_name: impl Into<String>) -> Self {
        self.property_localized_name = Some(localized_name.into());
        self
    }

    /// Sets the rule identifier used for programmatic dispatch and i18n keys.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    /// The rendered, human-readable message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// The absolute property path, if the failure is tied to one property.
    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    /// The display name used inside the message.
    pub fn property_localized_name(&self) -> Option<&str> {
        self.property_localized_name.as_deref()
    }

    /// The rule identifier, e.g. `NotEmptyValidator`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }
}

impl fmt::Display for FailureData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(property) = &self.property_name {
            write!(f, "[{property}] ")?;
        }
        if let Some(code) = &self.error_code {
            write!(f, "{code}: ")?;
        }
        f.write_str(&self.error_message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
