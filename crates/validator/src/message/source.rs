//! Where message templates come from.
//!
//! Built-in rules do not hard-code their text: they ask the command's
//! [`MessageSource`] for the template registered under their error code.
//! [`DefaultMessages`] supplies English text; [`MessageCatalog`] overrides
//! selected codes and can be loaded from JSON.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Error codes of the built-in rules.
pub mod codes {
    /// `not_empty`
    pub const NOT_EMPTY: &str = "NotEmptyValidator";
    /// `not_null`
    pub const NOT_NULL: &str = "NotNullValidator";
    /// `not_equal`
    pub const NOT_EQUAL: &str = "NotEqualValidator";
    /// `length`
    pub const LENGTH: &str = "LengthValidator";
    /// `inclusive_between`
    pub const INCLUSIVE_BETWEEN: &str = "InclusiveBetweenValidator";
    /// `exclusive_between`
    pub const EXCLUSIVE_BETWEEN: &str = "ExclusiveBetweenValidator";
    /// `email_address`
    pub const EMAIL: &str = "EmailValidator";
}

/// Template used when a source has nothing for a code.
pub const FALLBACK_TEMPLATE: &str = "'{PropertyName}' is not valid.";

// ============================================================================
// MESSAGE SOURCE
// ============================================================================

/// Resolves an error code to a message template.
///
/// Any `Fn(&str) -> Option<String>` is a message source, which is the
/// simplest way to plug in an existing resource lookup.
///
/// # Examples
///
/// ```rust,ignore
/// use objval::message::MessageSource;
///
/// let source = |code: &str| (code == "NotEmptyValidator").then(|| "'{PropertyName}' fehlt.".to_owned());
/// assert!(source.template("NotEmptyValidator").is_some());
/// ```
pub trait MessageSource: Send + Sync {
    /// Returns the template for `code`, or `None` if the source has none.
    fn template(&self, code: &str) -> Option<Cow<'_, str>>;

    /// Returns the template for `code`, falling back to [`FALLBACK_TEMPLATE`].
    fn template_or_fallback(&self, code: &str) -> Cow<'_, str> {
        self.template(code)
            .unwrap_or(Cow::Borrowed(FALLBACK_TEMPLATE))
    }
}

impl<F> MessageSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn template(&self, code: &str) -> Option<Cow<'_, str>> {
        self(code).map(Cow::Owned)
    }
}

// ============================================================================
// DEFAULT MESSAGES
// ============================================================================

/// English templates for every built-in rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMessages;

impl DefaultMessages {
    /// The English template for a built-in code.
    pub fn get(code: &str) -> Option<&'static str> {
        let template = match code {
            codes::NOT_EMPTY => "'{PropertyName}' should not be empty.",
            codes::NOT_NULL => "'{PropertyName}' must not be empty.",
            codes::NOT_EQUAL => "'{PropertyName}' should not be equal to '{ComparisonValue}'.",
            codes::LENGTH => {
                "'{PropertyName}' must be between {MinLength} and {MaxLength} characters. \
                 You entered {TotalLength} characters."
            }
            codes::INCLUSIVE_BETWEEN => {
                "'{PropertyName}' must be between {From} and {To}. You entered {Value}."
            }
            codes::EXCLUSIVE_BETWEEN => {
                "'{PropertyName}' must be between {From} and {To} (exclusive). You entered {Value}."
            }
            codes::EMAIL => "'{PropertyName}' is not a valid email address.",
            _ => return None,
        };
        Some(template)
    }
}

impl MessageSource for DefaultMessages {
    fn template(&self, code: &str) -> Option<Cow<'_, str>> {
        Self::get(code).map(Cow::Borrowed)
    }
}

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// Template overrides keyed by error code, with English defaults behind them.
///
/// Serializes as a flat JSON object:
///
/// ```json
/// { "NotEmptyValidator": "'{PropertyName}' darf nicht leer sein." }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Creates an empty catalog (every lookup falls through to the defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog from a JSON object of `code -> template`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is not an object of strings.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds or replaces a template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    /// Adds or replaces a template in place.
    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(code.into(), template.into());
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog overrides nothing.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MessageSource for MessageCatalog {
    fn template(&self, code: &str) -> Option<Cow<'_, str>> {
        self.templates
            .get(code)
            .map(|t| Cow::Borrowed(t.as_str()))
            .or_else(|| DefaultMessages::get(code).map(Cow::Borrowed))
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
