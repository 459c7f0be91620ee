//! Prelude module for convenient imports.
//!
//! Provides a single `use objval::prelude::*;` import that brings in the
//! entry points, the rule-selecting traits and the `property!` macro.
//!
//! # Examples
//!
//! ```rust,ignore
//! use objval::prelude::*;
//!
//! let validator = message.validator();
//! property!(validator, subject).not_empty().length(3, 120);
//! let failures = validator.validate().await?;
//! ```

// ============================================================================
// FOUNDATION: command, failures, errors
// ============================================================================

pub use crate::foundation::{
    FailureData, RuleError, RuleOutcome, ValidateError, ValidationCommand, ValidationContext,
};

// ============================================================================
// BINDING: subjects and properties
// ============================================================================

pub use crate::binding::{Collection, PropertyValidator, Validator, ValidatorExt};

// ============================================================================
// RULES AND MESSAGES
// ============================================================================

pub use crate::message::{Message, MessageCatalog, MessageSource, Placeholders};
pub use crate::rules::{AsText, IsEmpty};

pub use crate::property;
