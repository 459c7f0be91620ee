//! The shared, ordered container of deferred rules.
//!
//! Building a validator graph only appends closures here. Nothing runs until
//! [`ValidationCommand::validate`] is awaited, at which point every rule is
//! evaluated once, sequentially, in registration order.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::foundation::{FailureData, RuleError, ValidateError, ValidationContext};
use crate::message::{DefaultMessages, MessageSource};

/// What a rule evaluates to: a failure, nothing, or a fault.
pub type RuleOutcome = Result<Option<FailureData>, RuleError>;

/// A boxed, `Send` future produced by a rule closure.
pub type RuleFuture = BoxFuture<'static, RuleOutcome>;

type RuleFn = dyn Fn() -> RuleFuture + Send + Sync;

#[derive(Clone)]
struct Rule {
    property: Option<String>,
    check: Arc<RuleFn>,
}

struct Shared {
    rules: Mutex<Vec<Rule>>,
    messages: Arc<dyn MessageSource>,
}

// ============================================================================
// VALIDATION COMMAND
// ============================================================================

/// An append-only list of deferred rules shared by a whole validator tree.
///
/// Cloning a command clones the *handle*: every clone appends to and runs
/// the same rule list. This is how rules registered on nested and
/// collection-item validators end up in one flat result.
///
/// The command also carries the [`MessageSource`] used to resolve the
/// templates of built-in rules.
///
/// Registering rules while a `validate()` call is in flight is not
/// supported: the running call works on a snapshot taken when it started.
///
/// # Examples
///
/// ```rust,ignore
/// use objval::{FailureData, ValidationCommand};
///
/// let command = ValidationCommand::new();
/// command.add_sync_for("Subject", || {
///     Ok(Some(FailureData::new("'Subject' should not be empty.").with_property_name("Subject")))
/// });
///
/// let failures = command.validate().await?;
/// assert_eq!(failures.len(), 1);
/// ```
#[derive(Clone)]
pub struct ValidationCommand {
    shared: Arc<Shared>,
}

impl ValidationCommand {
    /// Creates an empty command that renders built-in messages in English.
    #[must_use]
    pub fn new() -> Self {
        Self::with_messages(DefaultMessages)
    }

    /// Creates an empty command that resolves built-in templates from `messages`.
    pub fn with_messages(messages: impl MessageSource + 'static) -> Self {
        Self::with_shared_messages(Arc::new(messages))
    }

    /// Like [`with_messages`](Self::with_messages) for an already shared source.
    pub fn with_shared_messages(messages: Arc<dyn MessageSource>) -> Self {
        Self {
            shared: Arc::new(Shared {
                rules: Mutex::new(Vec::new()),
                messages,
            }),
        }
    }

    /// The message source used for built-in rule templates.
    pub fn messages(&self) -> &dyn MessageSource {
        self.shared.messages.as_ref()
    }

    /// Appends a rule that is always evaluated.
    ///
    /// Its failure, if any, is recorded without marking a property as failed.
    pub fn add<F, Fut>(&self, check: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleOutcome> + Send + 'static,
    {
        self.push(None, Arc::new(move || check().boxed()));
    }

    /// Appends a rule keyed by a property path.
    ///
    /// At evaluation time the rule is skipped, without being called, if an
    /// earlier rule already recorded a failure for the same path.
    pub fn add_for<F, Fut>(&self, property_name: impl Into<String>, check: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleOutcome> + Send + 'static,
    {
        self.push(
            Some(property_name.into()),
            Arc::new(move || check().boxed()),
        );
    }

    /// Synchronous form of [`add`](Self::add).
    pub fn add_sync<F>(&self, check: F)
    where
        F: Fn() -> RuleOutcome + Send + Sync + 'static,
    {
        self.push(None, Arc::new(move || future::ready(check()).boxed()));
    }

    /// Synchronous form of [`add_for`](Self::add_for).
    pub fn add_sync_for<F>(&self, property_name: impl Into<String>, check: F)
    where
        F: Fn() -> RuleOutcome + Send + Sync + 'static,
    {
        self.push(
            Some(property_name.into()),
            Arc::new(move || future::ready(check()).boxed()),
        );
    }

    /// Appends a precomputed failure that is recorded on every run.
    pub fn add_failure(&self, failure: FailureData) {
        self.add_sync(move || Ok(Some(failure.clone())));
    }

    fn push(&self, property: Option<String>, check: Arc<RuleFn>) {
        self.shared.rules.lock().push(Rule { property, check });
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.shared.rules.lock().len()
    }

    /// Returns true if no rule has been registered.
    pub fn is_empty(&self) -> bool {
        self.shared.rules.lock().is_empty()
    }

    /// Runs every registered rule and returns the collected failures.
    ///
    /// Rules run one after another in registration order; a rule's result is
    /// committed to the context before the next rule starts, so a rule keyed
    /// by a path that already failed is skipped. Each call starts from a
    /// fresh [`ValidationContext`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::RuleFault`] as soon as a rule body returns an
    /// error. Failures collected up to that point are discarded.
    pub async fn validate(&self) -> Result<Vec<FailureData>, ValidateError> {
        let rules = self.shared.rules.lock().clone();
        debug!(rules = rules.len(), "running validation command");

        let mut context = ValidationContext::new();
        for (index, rule) in rules.into_iter().enumerate() {
            if let Some(property) = rule.property.as_deref()
                && context.contains(property)
            {
                trace!(index, property, "skipping rule, property already failed");
                continue;
            }

            let outcome = match (rule.check)().await {
                Ok(outcome) => outcome,
                Err(source) => {
                    warn!(
                        index,
                        property = rule.property.as_deref(),
                        error = %source,
                        "validation rule faulted"
                    );
                    return Err(ValidateError::RuleFault {
                        index,
                        property: rule.property,
                        source,
                    });
                }
            };

            if let Some(failure) = outcome {
                match rule.property {
                    Some(property) => context.add_for(property, failure),
                    None => context.add(failure),
                }
            }
        }

        debug!(failures = context.len(), "validation command finished");
        Ok(context.into_errors())
    }

    /// Runs [`validate`](Self::validate) to completion on the current thread.
    ///
    /// Intended for synchronous callers. Rules that depend on a specific
    /// async runtime (for example tokio timers) must be driven by that
    /// runtime instead.
    pub fn validate_blocking(&self) -> Result<Vec<FailureData>, ValidateError> {
        futures::executor::block_on(self.validate())
    }
}

impl Default for ValidationCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationCommand")
            .field("rules", &self.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
