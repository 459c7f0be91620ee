//! Range rules: `inclusive_between` and `exclusive_between`.
//!
//! Bounds are not checked against each other; with `from > to` every value
//! fails. Values that are unordered relative to a bound (NaN) pass.

use std::fmt::Display;

use crate::binding::PropertyValidator;
use crate::message::{Message, Placeholders, codes};

fn range_placeholders<P: Display>(from: &P, to: &P, value: &P) -> Placeholders {
    Placeholders::new()
        .with("From", from)
        .with("To", to)
        .with("Value", value)
}

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: PartialOrd + Display + Send + Sync + 'static,
{
    /// Fails when the value is below `from` or above `to`.
    ///
    /// Message: `'{PropertyName}' must be between {From} and {To}. You entered {Value}.`
    pub fn inclusive_between(self, from: P, to: P) -> Self {
        self.rule(Message::from_code(codes::INCLUSIVE_BETWEEN), move |this| {
            let value = this.value();
            (value < from || value > to).then(|| range_placeholders(&from, &to, &value))
        })
    }

    /// Fails unless `from < value < to`.
    ///
    /// Message: `'{PropertyName}' must be between {From} and {To} (exclusive).
    /// You entered {Value}.`
    pub fn exclusive_between(self, from: P, to: P) -> Self {
        self.rule(Message::from_code(codes::EXCLUSIVE_BETWEEN), move |this| {
            let value = this.value();
            (value <= from || value >= to).then(|| range_placeholders(&from, &to, &value))
        })
    }
}
