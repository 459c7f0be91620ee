//! The subject-side handle of a validator tree.

use std::fmt;
use std::sync::Arc;

use crate::binding::PropertyValidator;
use crate::foundation::{FailureData, ValidateError, ValidationCommand};
use crate::message::MessageSource;

pub(crate) type Getter<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Binds a subject, a shared [`ValidationCommand`] and a property-path prefix.
///
/// The root validator has an empty prefix. Validators derived through
/// [`PropertyValidator::validator`] or [`PropertyValidator::validators`]
/// carry the path of the property they were derived from and register
/// their rules on the same command, so [`validate`](Self::validate) on the
/// root returns every failure in the tree.
///
/// # Examples
///
/// ```rust,ignore
/// use objval::prelude::*;
///
/// let validator = message.validator();
/// validator.property("Subject", |m: &Message| m.subject.clone()).not_empty();
///
/// let failures = validator.validate().await?;
/// ```
pub struct Validator<T> {
    subject: Getter<T>,
    command: ValidationCommand,
    prefix: String,
}

impl<T> Validator<T> {
    pub(crate) fn from_parts(subject: Getter<T>, command: ValidationCommand, prefix: String) -> Self {
        Self {
            subject,
            command,
            prefix,
        }
    }

    /// The subject, as it is right now.
    pub fn value(&self) -> Arc<T> {
        (self.subject)()
    }

    /// The shared rule list.
    pub fn command(&self) -> &ValidationCommand {
        &self.command
    }

    /// Path of this validator's subject within the root; `""` at the root.
    pub fn property_prefix(&self) -> &str {
        &self.prefix
    }

    /// Runs every rule registered anywhere in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError`] if a rule body faults.
    pub async fn validate(&self) -> Result<Vec<FailureData>, ValidateError> {
        self.command.validate().await
    }

    /// Blocking form of [`validate`](Self::validate).
    pub fn validate_blocking(&self) -> Result<Vec<FailureData>, ValidateError> {
        self.command.validate_blocking()
    }
}

impl<T> Validator<T>
where
    T: Send + Sync + 'static,
{
    /// Wraps `subject` with a fresh command and an empty prefix.
    pub fn new(subject: T) -> Self {
        Self::with_command(subject, ValidationCommand::new())
    }

    /// Like [`new`](Self::new), rendering built-in messages from `messages`.
    pub fn with_messages(subject: T, messages: impl MessageSource + 'static) -> Self {
        Self::with_command(subject, ValidationCommand::with_messages(messages))
    }

    /// Wraps `subject` at the root of an existing command.
    pub fn with_command(subject: T, command: ValidationCommand) -> Self {
        let subject = Arc::new(subject);
        Self::from_parts(Arc::new(move || Arc::clone(&subject)), command, String::new())
    }

    /// A root validator whose subject is produced by `getter` on every read.
    ///
    /// Rules see the state returned at evaluation time, so changes made
    /// between registration and `validate()` are observed.
    pub fn from_fn<F>(getter: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::from_parts(
            Arc::new(move || Arc::new(getter())),
            ValidationCommand::new(),
            String::new(),
        )
    }

    /// Binds a property by name and accessor.
    ///
    /// The accessor is not called here; it runs each time a rule reads the
    /// property's value.
    pub fn property<P, F>(&self, name: impl Into<String>, accessor: F) -> PropertyValidator<T, P>
    where
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        PropertyValidator::new(self.clone(), Arc::new(accessor), name.into())
    }

    /// Binds a property whose name comes from `name`.
    ///
    /// The supplier is called once, before this method returns.
    pub fn property_with<P, N, F>(&self, name: N, accessor: F) -> PropertyValidator<T, P>
    where
        N: FnOnce() -> String,
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        self.property(name(), accessor)
    }

    /// Binds the subject itself.
    ///
    /// The property path is this validator's prefix. Typically used on a
    /// collection item together with
    /// [`with_display_name`](PropertyValidator::with_display_name).
    /// Without one, messages name the property by its full path, e.g.
    /// `'List2[1]' should not be empty.`
    pub fn itself(&self) -> PropertyValidator<T, T>
    where
        T: Clone,
    {
        self.property(String::new(), T::clone)
    }

    /// Registers an object-level rule that is not tied to one property.
    ///
    /// Its failure is recorded as-is and does not take part in per-property
    /// deduplication.
    pub fn add<F>(&self, check: F) -> &Self
    where
        F: Fn(&T) -> Option<FailureData> + Send + Sync + 'static,
    {
        let subject = Arc::clone(&self.subject);
        self.command.add_sync(move || Ok(check(&subject())));
        self
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            subject: Arc::clone(&self.subject),
            command: self.command.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("prefix", &self.prefix)
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// EXTENSION
// ============================================================================

/// Adds `.validator()` to every value.
pub trait ValidatorExt: Sized + Send + Sync + 'static {
    /// Wraps `self` in a root [`Validator`] with a fresh command.
    fn validator(self) -> Validator<Self> {
        Validator::new(self)
    }
}

impl<T: Send + Sync + 'static> ValidatorExt for T {}
