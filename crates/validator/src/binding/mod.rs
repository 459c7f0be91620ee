//! Binding rules to a subject graph
//!
//! - [`Validator`] wraps a subject and a property-path prefix
//! - [`PropertyValidator`] wraps one property of that subject; rule methods
//!   live on it
//! - [`Collection`] lets collection-valued properties fan out into
//!   per-item validators
//!
//! ```text
//! Validator<Message>            prefix ""
//!   └─ property("Person")       path   "Person"
//!        └─ .validator()        prefix "Person"
//!             └─ property("FirstName")   path "Person.FirstName"
//!   └─ property("Attachments")  path   "Attachments"
//!        └─ .validators()       prefix "Attachments[0]", "Attachments[1]", ...
//! ```

mod collection;
mod property;
mod validator;

pub use collection::Collection;
pub use property::PropertyValidator;
pub use validator::{Validator, ValidatorExt};
