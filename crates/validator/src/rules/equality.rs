//! `not_equal`: the value must differ from a fixed comparison value.

use std::fmt::Display;

use crate::binding::PropertyValidator;
use crate::message::{Message, Placeholders, codes};

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    /// Fails when the value equals `other`.
    ///
    /// Message: `'{PropertyName}' should not be equal to '{ComparisonValue}'.`
    pub fn not_equal<V>(self, other: V) -> Self
    where
        P: PartialEq<V>,
        V: Display + Send + Sync + 'static,
    {
        self.rule(Message::from_code(codes::NOT_EQUAL), move |this| {
            (this.value() == other)
                .then(|| Placeholders::new().with("ComparisonValue", &other))
        })
    }
}
