//! Predicate rules: fail with a caller-supplied message when a condition holds.

use std::fmt::Display;
use std::future::Future;
use std::iter;

use crate::binding::PropertyValidator;
use crate::foundation::RuleError;
use crate::message::{Message, Placeholders};

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// Fails with `message` when `predicate` returns true.
    ///
    /// The failure's error code is the message's code.
    ///
    /// ```rust,ignore
    /// validator
    ///     .property("Subject", |m: &Message| m.subject.clone())
    ///     .fail_if(
    ///         |v| v.value().as_deref() == Some("Subject1"),
    ///         Message::lazy("TestMessage2", resources::test_message_2),
    ///     );
    /// ```
    pub fn fail_if<F>(self, predicate: F, message: Message) -> Self
    where
        F: Fn(&Self) -> bool + Send + Sync + 'static,
    {
        self.rule(message, move |this| predicate(this).then(Placeholders::new))
    }

    /// Like [`fail_if`](Self::fail_if) with positional arguments.
    ///
    /// `{0}` is the display name; `{1}`, `{2}`, ... are the items returned
    /// by `args`, read only when the predicate holds.
    ///
    /// ```rust,ignore
    /// // "Test message '{0}', '{1}', '{2}'." -> "Test message 'Subject', 'Subject1', 'Body1'."
    /// subject.fail_if_with(
    ///     |v| v.value().as_deref() == Some("Subject1"),
    ///     Message::lazy("TestMessage1", resources::test_message_1),
    ///     |v| [v.value().unwrap_or_default(), v.object().body.clone()],
    /// );
    /// ```
    pub fn fail_if_with<F, A, I>(self, predicate: F, message: Message, args: A) -> Self
    where
        F: Fn(&Self) -> bool + Send + Sync + 'static,
        A: Fn(&Self) -> I + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Display,
    {
        self.rule(message, move |this| {
            predicate(this).then(|| {
                let rest = args(this).into_iter().map(|arg| arg.to_string());
                Placeholders::positional(iter::once(this.display_name()).chain(rest))
            })
        })
    }

    /// Fails with `message` when the asynchronous `predicate` resolves to
    /// true.
    ///
    /// The predicate receives a clone of this binding and may read the
    /// value at any point. An `Err` aborts the whole run as a rule fault.
    pub fn fail_if_async<F, Fut>(self, predicate: F, message: Message) -> Self
    where
        F: Fn(Self) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<bool, RuleError>> + Send + 'static,
    {
        self.rule_async(message, predicate)
    }
}
