//! `not_null`: an optional property must be `Some`.

use crate::binding::PropertyValidator;
use crate::message::{Message, Placeholders, codes};

impl<T, V> PropertyValidator<T, Option<V>>
where
    T: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Fails when the value is `None`.
    ///
    /// Unlike [`not_empty`](Self::not_empty), `Some("")` passes.
    ///
    /// Message: `'{PropertyName}' must not be empty.`
    pub fn not_null(self) -> Self {
        self.rule(Message::from_code(codes::NOT_NULL), |this| {
            this.value().is_none().then(Placeholders::new)
        })
    }
}
