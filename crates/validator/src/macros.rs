//! Macros for binding properties without repeating their names.
//!
//! # Available Macros
//!
//! - [`property!`] — bind a struct field, naming it after the field

// ============================================================================
// PROPERTY MACRO
// ============================================================================

/// Binds a struct field, using the field's identifier as the property name.
///
/// The field is cloned on every read. An optional display name follows `as`.
///
/// ```rust,ignore
/// use objval::prelude::*;
///
/// let validator = message.validator();
/// property!(validator, subject).not_empty();              // path "subject"
/// property!(validator, body as "Message body").not_empty(); // display "Message body"
/// ```
///
/// Works on anything with a `property(name, accessor)` method, so nested
/// bindings compose:
///
/// ```rust,ignore
/// let person = property!(validator, person).validator();
/// property!(person, first_name).not_empty(); // path "person.first_name"
/// ```
#[macro_export]
macro_rules! property {
    ($validator:expr, $field:ident) => {
        $validator.property(::core::stringify!($field), |it| {
            ::core::clone::Clone::clone(&it.$field)
        })
    };
    ($validator:expr, $field:ident as $display:expr) => {
        $crate::property!($validator, $field).with_display_name($display)
    };
}
