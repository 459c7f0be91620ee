//! Caller-defined rules.
//!
//! The closure decides both the condition and the failure. Use
//! [`PropertyValidator::failure`] to build a failure that carries the
//! property path, display name and code the same way built-in rules do.

use std::future::Future;

use crate::binding::PropertyValidator;
use crate::foundation::{FailureData, RuleOutcome};

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// Registers `check`; a returned failure is recorded for this property.
    ///
    /// ```rust,ignore
    /// subject.add(|v| {
    ///     (v.value().as_deref() == Some("Subject1")).then(|| {
    ///         v.failure(
    ///             &Message::new("TestMessage3", "Test message '{Subject}', '{Body}'."),
    ///             Placeholders::new()
    ///                 .with("Subject", v.value().unwrap_or_default())
    ///                 .with("Body", v.object().body.clone().unwrap_or_default()),
    ///         )
    ///     })
    /// });
    /// ```
    pub fn add<F>(self, check: F) -> Self
    where
        F: Fn(&Self) -> Option<FailureData> + Send + Sync + 'static,
    {
        self.register(move |this| Ok(check(this)))
    }

    /// Like [`add`](Self::add) for checks that can fault.
    ///
    /// An `Err` aborts the whole run.
    pub fn try_add<F>(self, check: F) -> Self
    where
        F: Fn(&Self) -> RuleOutcome + Send + Sync + 'static,
    {
        self.register(check)
    }

    /// Registers an asynchronous check.
    ///
    /// The closure receives a clone of this binding.
    pub fn add_async<F, Fut>(self, check: F) -> Self
    where
        F: Fn(Self) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RuleOutcome> + Send + 'static,
    {
        self.register_async(check)
    }
}
