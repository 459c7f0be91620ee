//! Text content rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::binding::PropertyValidator;
use crate::message::{Message, Placeholders, codes};
use crate::rules::AsText;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Returns true if `text` looks like an email address.
pub fn is_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: AsText + Send + Sync + 'static,
{
    /// Fails when a non-empty value is not an email address.
    ///
    /// Absent and empty values pass; combine with
    /// [`not_empty`](Self::not_empty) to require one.
    ///
    /// Message: `'{PropertyName}' is not a valid email address.`
    pub fn email_address(self) -> Self {
        self.rule(Message::from_code(codes::EMAIL), |this| {
            let value = this.value();
            let text = value.as_text().unwrap_or_default();
            (!text.is_empty() && !is_email(text)).then(Placeholders::new)
        })
    }
}
