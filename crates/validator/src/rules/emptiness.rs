//! `not_empty`: the value is present and not blank.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::binding::PropertyValidator;
use crate::message::{Message, Placeholders, codes};

// ============================================================================
// IS EMPTY
// ============================================================================

/// What "empty" means for a property type.
///
/// - strings: no characters after trimming whitespace
/// - collections and maps: no elements
/// - `Option`: `None`, or `Some` of a blank string or empty collection
/// - numbers, `bool`, `char`: the type's default value
///
/// An `Option`'s default is `None`, so `Some(0)` is not empty.
pub trait IsEmpty {
    /// Returns true if the value counts as empty.
    fn is_empty_value(&self) -> bool;

    /// Returns true if the value counts as empty when wrapped in `Some`.
    ///
    /// Scalars override this to `false`.
    fn is_empty_when_present(&self) -> bool {
        self.is_empty_value()
    }
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_present(&self) -> bool {
        (**self).is_empty_when_present()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for Box<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_present(&self) -> bool {
        (**self).is_empty_when_present()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for Arc<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_present(&self) -> bool {
        (**self).is_empty_when_present()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for Rc<T> {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_present(&self) -> bool {
        (**self).is_empty_when_present()
    }
}

impl<B> IsEmpty for Cow<'_, B>
where
    B: IsEmpty + ToOwned + ?Sized,
{
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn is_empty_when_present(&self) -> bool {
        (**self).is_empty_when_present()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(IsEmpty::is_empty_when_present)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

macro_rules! impl_is_empty_by_len {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> IsEmpty for $ty<$($param),+> {
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_is_empty_by_len!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>);

impl<K, S> IsEmpty for HashSet<K, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_is_empty_by_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsEmpty for $ty {
                fn is_empty_value(&self) -> bool {
                    *self == <$ty>::default()
                }

                fn is_empty_when_present(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_is_empty_by_default!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

// ============================================================================
// RULE
// ============================================================================

impl<T, P> PropertyValidator<T, P>
where
    T: Send + Sync + 'static,
    P: IsEmpty + Send + Sync + 'static,
{
    /// Fails when the value [is empty](IsEmpty).
    ///
    /// Message: `'{PropertyName}' should not be empty.`
    pub fn not_empty(self) -> Self {
        self.rule(Message::from_code(codes::NOT_EMPTY), |this| {
            this.value().is_empty_value().then(Placeholders::new)
        })
    }
}
