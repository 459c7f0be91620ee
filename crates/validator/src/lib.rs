//! # objval
//!
//! Deferred, rule-based validation of object graphs.
//!
//! Rules are declared against properties of a subject and registered on a
//! shared [`ValidationCommand`]. Nothing is evaluated until
//! [`Validator::validate`] runs; it then executes every rule once, in
//! registration order, and returns the collected [`FailureData`], keeping at
//! most one failure per property path.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use objval::prelude::*;
//!
//! let validator = message.validator();
//! validator
//!     .property("Subject", |m: &Message| m.subject.clone())
//!     .not_empty()
//!     .length(3, 120);
//!
//! for attachment in validator
//!     .property("Attachments", |m: &Message| m.attachments.clone())
//!     .validators()
//! {
//!     attachment
//!         .property("FileName", |a: &Attachment| a.file_name.clone())
//!         .not_empty();
//! }
//!
//! let failures = validator.validate().await?;
//! // [Attachments[1].FileName] NotEmptyValidator: 'FileName' should not be empty.
//! ```
//!
//! ## Modules
//!
//! - [`foundation`]: command, context, failure record, errors
//! - [`binding`]: subject and property bindings, property paths
//! - [`rules`]: built-in rules and the traits that select them
//! - [`message`]: message templates, placeholder substitution, message sources
//!
//! ## Features
//!
//! - `email` (default): the regex-backed `email_address` rule

pub mod binding;
pub mod foundation;
mod macros;
pub mod message;
pub mod prelude;
pub mod rules;

pub use binding::{Collection, PropertyValidator, Validator, ValidatorExt};
pub use foundation::{
    ConfigError, FailureData, RuleError, RuleFuture, RuleOutcome, ValidateError,
    ValidationCommand, ValidationContext,
};
pub use message::{Message, MessageCatalog, MessageSource, Placeholders};
