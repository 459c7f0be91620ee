//! Engine building blocks
//!
//! - [`FailureData`] — one failure, the output of a failing rule
//! - [`ValidationContext`] — per-run accumulator with first-failure-per-property dedup
//! - [`ValidationCommand`] — the shared, ordered list of deferred rules
//! - [`RuleError`], [`ValidateError`], [`ConfigError`] — things that are errors
//!   rather than validation failures
//!
//! # Execution model
//!
//! ```text
//!   build phase                         evaluate phase
//!   ───────────                         ──────────────
//!   validator.property(..).not_empty()  command.validate().await
//!        │                                   │
//!        └── command.add_for(path, rule) ──► for rule in rules (in order):
//!                                               skip if path already failed
//!                                               run rule, commit its failure
//! ```

pub mod command;
pub mod context;
pub mod error;
pub mod failure;

pub use command::{RuleFuture, RuleOutcome, ValidationCommand};
pub use context::ValidationContext;
pub use error::{ConfigError, RuleError, ValidateError};
pub use failure::FailureData;
