//! Built-in rules
//!
//! Every rule is a method on [`PropertyValidator`](crate::PropertyValidator)
//! that registers one deferred closure keyed by the property path and returns
//! the binding for chaining. Which rules are available depends on the
//! property type:
//!
//! - [`IsEmpty`] types: `not_empty`
//! - `Option<_>`: `not_null`
//! - `PartialEq<V>`: `not_equal`
//! - [`AsText`] types: `length`, `email_address` (feature `email`)
//! - `PartialOrd + Display`: `inclusive_between`, `exclusive_between`
//! - any type: `fail_if`, `fail_if_with`, `fail_if_async`, `add`, `try_add`,
//!   `add_async`
//!
//! Built-in rules take their templates from the command's
//! [`MessageSource`](crate::message::MessageSource), keyed by the codes in
//! [`codes`](crate::message::codes).

mod conditional;
#[cfg(feature = "email")]
mod content;
mod custom;
mod emptiness;
mod equality;
mod length;
mod nullable;
mod range;

#[cfg(feature = "email")]
pub use content::is_email;
pub use emptiness::IsEmpty;
pub use length::AsText;
