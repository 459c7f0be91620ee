//! Placeholder substitution for message templates.
//!
//! Templates use `{Name}` tokens. Substitution is a single left-to-right
//! pass: every token whose key was supplied is replaced with the value's
//! `Display` form, unknown tokens and stray braces are copied verbatim, and
//! substituted text is never scanned again.

use std::borrow::Cow;
use std::fmt::Display;

use smallvec::SmallVec;

/// Placeholder filled with the property's display name by every built-in rule.
pub const PROPERTY_NAME: &str = "PropertyName";

// ============================================================================
// PLACEHOLDERS
// ============================================================================

/// Ordered `(key, value)` pairs substituted into a template.
///
/// Values are rendered with `Display` when they are added.
///
/// # Examples
///
/// ```rust,ignore
/// use objval::message::Placeholders;
///
/// let text = Placeholders::new()
///     .with("From", 1)
///     .with("To", 200)
///     .apply("must be between {From} and {To}");
/// assert_eq!(text, "must be between 1 and 200");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    pairs: SmallVec<[(Cow<'static, str>, String); 4]>,
}

impl Placeholders {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds positional placeholders `{0}`, `{1}`, ... from `args`.
    pub fn positional<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut placeholders = Self::new();
        for (index, arg) in args.into_iter().enumerate() {
            placeholders.insert(index.to_string(), arg);
        }
        placeholders
    }

    /// Adds a placeholder, replacing an earlier value for the same key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a placeholder in place, replacing an earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Looks up the rendered value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of placeholders.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no placeholders.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Substitutes these placeholders into `template`.
    pub fn apply(&self, template: &str) -> String {
        substitute(template, |key| self.get(key))
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Substitutes named values into `template`.
///
/// ```rust,ignore
/// let text = format_message("'{PropertyName}' is required", &[("PropertyName", &"Subject")]);
/// ```
pub fn format_message(template: &str, values: &[(&str, &dyn Display)]) -> String {
    let rendered: SmallVec<[(&str, String); 4]> = values
        .iter()
        .map(|(key, value)| (*key, value.to_string()))
        .collect();
    substitute(template, |key| {
        rendered
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    })
}

/// Substitutes positional values into `{0}`, `{1}`, ... tokens.
pub fn format_positional<D: Display>(template: &str, args: &[D]) -> String {
    Placeholders::positional(args).apply(template)
}

fn substitute<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        // A token ends at the next `}`; another `{` first means this one is literal.
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let key = &after[..close];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
