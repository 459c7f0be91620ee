//! Property binding: accessor, name, display name and absolute path.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::binding::Validator;
use crate::foundation::{FailureData, RuleError, RuleOutcome, ValidationCommand};
use crate::message::{Message, PROPERTY_NAME, Placeholders};

type Accessor<T, P> = Arc<dyn Fn(&T) -> P + Send + Sync>;

// ============================================================================
// PROPERTY VALIDATOR
// ============================================================================

/// A property of a validator's subject, ready to receive rules.
///
/// Rule methods (`not_empty`, `length`, `fail_if`, `add`, ...) register a
/// closure on the shared command keyed by [`property_name`](Self::property_name)
/// and return the same binding, so rules chain:
///
/// ```rust,ignore
/// validator
///     .property("Subject", |m: &Message| m.subject.clone())
///     .with_display_name("Message subject")
///     .not_empty()
///     .length(3, 120);
/// ```
///
/// The display name is captured when a rule is registered; set it before
/// adding rules.
pub struct PropertyValidator<T, P> {
    parent: Validator<T>,
    accessor: Accessor<T, P>,
    short_name: String,
    display_name: Option<String>,
}

impl<T, P> PropertyValidator<T, P> {
    pub(crate) fn new(parent: Validator<T>, accessor: Accessor<T, P>, short_name: String) -> Self {
        Self {
            parent,
            accessor,
            short_name,
            display_name: None,
        }
    }

    /// Overrides the name substituted into messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The property's current value.
    pub fn value(&self) -> P {
        (self.accessor)(&self.parent.value())
    }

    /// The subject that owns the property.
    pub fn object(&self) -> Arc<T> {
        self.parent.value()
    }

    /// The validator this property was bound on.
    pub fn parent(&self) -> &Validator<T> {
        &self.parent
    }

    /// The shared rule list.
    pub fn command(&self) -> &ValidationCommand {
        self.parent.command()
    }

    /// The property's own name, without the parent prefix.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Absolute path: parent prefix and short name joined by `.`, empty
    /// segments dropped.
    pub fn property_name(&self) -> String {
        match (self.parent.property_prefix(), self.short_name.as_str()) {
            (prefix, "") => prefix.to_owned(),
            ("", name) => name.to_owned(),
            (prefix, name) => format!("{prefix}.{name}"),
        }
    }

    /// Name used in messages: the override, else the short name, else (for a
    /// binding of the subject itself) the full path.
    pub fn display_name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None if self.short_name.is_empty() => self.property_name(),
            None => self.short_name.clone(),
        }
    }

    /// Builds a failure for this property.
    ///
    /// `{PropertyName}` is filled with the display name unless `placeholders`
    /// already has it. The failure carries the absolute path, the display
    /// name and the message's code.
    pub fn failure(&self, message: &Message, mut placeholders: Placeholders) -> FailureData {
        let display_name = self.display_name();
        if !placeholders.contains(PROPERTY_NAME) {
            placeholders.insert(PROPERTY_NAME, &display_name);
        }
        let template = message.template(self.command().messages());
        let mut failure = FailureData::new(placeholders.apply(&template))
            .with_property_name(self.property_name())
            .with_localized_name(display_name);
        if let Some(code) = message.code() {
            failure = failure.with_error_code(code);
        }
        failure
    }
}

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// A validator over this property's value, for binding nested properties.
    ///
    /// It shares the command and uses this property's path as its prefix.
    /// The nested subject is recomputed from the parent on every read.
    ///
    /// Consumes the binding; clone it first to keep adding rules to it.
    pub fn validator(self) -> Validator<P> {
        let prefix = self.property_name();
        let command = self.command().clone();
        let Self {
            parent, accessor, ..
        } = self;
        Validator::from_parts(
            Arc::new(move || Arc::new(accessor(&parent.value()))),
            command,
            prefix,
        )
    }

    /// Shorthand for `self.clone().validator().property(name, accessor)`.
    pub fn property<Q, F>(&self, name: impl Into<String>, accessor: F) -> PropertyValidator<P, Q>
    where
        F: Fn(&P) -> Q + Send + Sync + 'static,
    {
        self.clone().validator().property(name, accessor)
    }

    /// Registers a synchronous rule keyed by this property's path.
    pub(crate) fn register<F>(self, check: F) -> Self
    where
        F: Fn(&Self) -> RuleOutcome + Send + Sync + 'static,
    {
        let this = self.clone();
        self.command()
            .add_sync_for(self.property_name(), move || check(&this));
        self
    }

    /// Registers an asynchronous rule keyed by this property's path.
    pub(crate) fn register_async<F, Fut>(self, check: F) -> Self
    where
        F: Fn(Self) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleOutcome> + Send + 'static,
    {
        let this = self.clone();
        self.command()
            .add_for(self.property_name(), move || check(this.clone()));
        self
    }

    /// Registers a rule that fails with `message` whenever `check` returns
    /// placeholders.
    pub(crate) fn rule<F>(self, message: Message, check: F) -> Self
    where
        F: Fn(&Self) -> Option<Placeholders> + Send + Sync + 'static,
    {
        self.register(move |this| Ok(check(this).map(|p| this.failure(&message, p))))
    }

    /// Registers an asynchronous predicate; the rule fails with `message`
    /// when the predicate resolves to `true`.
    pub(crate) fn rule_async<F, Fut>(self, message: Message, predicate: F) -> Self
    where
        F: Fn(Self) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, RuleError>> + Send + 'static,
    {
        self.register_async(move |this| {
            let pending = predicate(this.clone());
            let message = message.clone();
            async move {
                let failed = pending.await?;
                Ok(failed.then(|| this.failure(&message, Placeholders::new())))
            }
        })
    }
}

impl<T, P> Clone for PropertyValidator<T, P> {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.clone(),
            accessor: Arc::clone(&self.accessor),
            short_name: self.short_name.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

impl<T, P> fmt::Debug for PropertyValidator<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyValidator")
            .field("property_name", &self.property_name())
            .field("display_name", &self.display_name)
            .field("accessor", &"<function>")
            .finish()
    }
}
