//! `length`: character count within bounds.
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::binding::PropertyValidator;
use crate::message::{Message, Placeholders, codes};

// ============================================================================
// AS TEXT
// ============================================================================

/// Read access to a text-valued property.
///
/// `None` means the value is absent; [`char_count`](Self::char_count) treats
/// that as length 0.
pub trait AsText {
    /// The text, or `None` if absent.
    fn as_text(&self) -> Option<&str>;

    /// Number of chars, 0 when absent.
    fn char_count(&self) -> usize {
        self.as_text().map_or(0, |text| text.chars().count())
    }
}

impl AsText for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsText for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: AsText + ?Sized> AsText for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: AsText + ?Sized> AsText for Box<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: AsText + ?Sized> AsText for Arc<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: AsText + ?Sized> AsText for Rc<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: AsText> AsText for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(AsText::as_text)
    }
}

// ============================================================================
// RULE
// ============================================================================

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: AsText + Send + Sync + 'static,
{
    /// Fails when the char count is below `min` or above `max`.
    ///
    /// An absent value counts as 0 chars, so it fails whenever `min > 0`.
    ///
    /// Message: `'{PropertyName}' must be between {MinLength} and {MaxLength}
    /// characters. You entered {TotalLength} characters.`
    pub fn length(self, min: usize, max: usize) -> Self {
        self.rule(Message::from_code(codes::LENGTH), move |this| {
            let total = this.value().char_count();
            (total < min || total > max).then(|| {
                Placeholders::new()
                    .with("MinLength", min)
                    .with("MaxLength", max)
                    .with("TotalLength", total)
            })
        })
    }
}
