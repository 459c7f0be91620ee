//! Rule messages
//!
//! - [`Message`] — what a rule says when it fails: an optional error code plus
//!   a template, resolved lazily at evaluation time
//! - [`Placeholders`] and the `format_*` functions — single-pass `{Key}`
//!   substitution
//! - [`MessageSource`], [`DefaultMessages`], [`MessageCatalog`] — pluggable
//!   template lookup by error code

pub mod format;
pub mod source;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub use format::{PROPERTY_NAME, Placeholders, format_message, format_positional};
pub use source::{DefaultMessages, FALLBACK_TEMPLATE, MessageCatalog, MessageSource, codes};

type Supplier = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
enum Template {
    Text(Cow<'static, str>),
    Supplier(Supplier),
    Source(Arc<dyn MessageSource>),
    /// Looked up in the message source of the command the rule runs on.
    Command,
}

// ============================================================================
// MESSAGE
// ============================================================================

/// A rule message: an error code and a way to obtain its template.
///
/// The template is not read until the rule actually fails, so suppliers and
/// sources are free to consult the current locale at that time.
///
/// # Examples
///
/// ```rust,ignore
/// use objval::Message;
///
/// // Inline template
/// let m = Message::new("TestMessage2", "Test message.");
///
/// // Lazily supplied template, e.g. from a resource bundle
/// let m = Message::lazy("TestMessage1", || resources::test_message_1());
///
/// // Template registered under the code in the validator's message source
/// let m = Message::from_code("SubjectTaken");
/// ```
#[derive(Clone)]
pub struct Message {
    code: Option<Cow<'static, str>>,
    template: Template,
}

impl Message {
    /// A message with a code and a fixed template.
    pub fn new(code: impl Into<Cow<'static, str>>, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Some(code.into()),
            template: Template::Text(template.into()),
        }
    }

    /// A fixed template without an error code.
    pub fn text(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: None,
            template: Template::Text(template.into()),
        }
    }

    /// A message whose template is produced by `supplier` when the rule fails.
    pub fn lazy<F>(code: impl Into<Cow<'static, str>>, supplier: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            code: Some(code.into()),
            template: Template::Supplier(Arc::new(supplier)),
        }
    }

    /// A message looked up by `code` in an explicit source.
    pub fn from_source(source: Arc<dyn MessageSource>, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Some(code.into()),
            template: Template::Source(source),
        }
    }

    /// A message looked up by `code` in the validator's own message source.
    pub fn from_code(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Some(code.into()),
            template: Template::Command,
        }
    }

    /// The error code recorded on failures, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Produces the template.
    ///
    /// `messages` is consulted for messages created with [`from_code`](Self::from_code).
    pub fn template<'a>(&'a self, messages: &'a dyn MessageSource) -> Cow<'a, str> {
        match &self.template {
            Template::Text(text) => Cow::Borrowed(text.as_ref()),
            Template::Supplier(supplier) => Cow::Owned(supplier()),
            Template::Source(source) => self.lookup(source.as_ref()),
            Template::Command => self.lookup(messages),
        }
    }

    fn lookup<'a>(&self, source: &'a dyn MessageSource) -> Cow<'a, str> {
        match self.code.as_deref() {
            Some(code) => source.template_or_fallback(code),
            None => Cow::Borrowed(FALLBACK_TEMPLATE),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = match &self.template {
            Template::Text(text) => text.as_ref(),
            Template::Supplier(_) => "<supplier>",
            Template::Source(_) => "<source>",
            Template::Command => "<command>",
        };
        f.debug_struct("Message")
            .field("code", &self.code)
            .field("template", &template)
            .finish()
    }
}
