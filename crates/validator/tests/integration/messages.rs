//! Message templates, sources and placeholder substitution.

use std::sync::Arc;

use objval::message::codes;
use objval::prelude::*;
use pretty_assertions::assert_eq;

use crate::fixtures::Letter;

mod resources {
    pub fn test_message_1() -> String {
        "Test message '{0}', '{1}', '{2}'.".to_owned()
    }

    pub fn test_message_2() -> String {
        "Test message.".to_owned()
    }

    pub fn test_message_3() -> String {
        "Test message '{Subject}', '{Body}'.".to_owned()
    }
}

fn letter() -> Letter {
    Letter {
        subject: Some("Subject1".to_owned()),
        body: Some("Body1".to_owned()),
        ..Letter::default()
    }
}

#[test]
fn test_fail_if_with_supplied_message() {
    let validator = letter().validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .fail_if(
            |v| v.value().as_deref() == Some("Subject1"),
            Message::lazy("TestMessage2", resources::test_message_2),
        );

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].property_name(), Some("Subject"));
    assert_eq!(failures[0].property_localized_name(), Some("Subject"));
    assert_eq!(failures[0].error_code(), Some("TestMessage2"));
    assert_eq!(failures[0].error_message(), "Test message.");
}

#[test]
fn test_fail_if_with_args() {
    let validator = letter().validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .fail_if_with(
            |v| v.value().as_deref() == Some("Subject1"),
            Message::lazy("TestMessage1", resources::test_message_1),
            |v| {
                [
                    v.value().unwrap_or_default(),
                    v.object().body.clone().unwrap_or_default(),
                ]
            },
        );

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_code(), Some("TestMessage1"));
    assert_eq!(
        failures[0].error_message(),
        "Test message 'Subject', 'Subject1', 'Body1'."
    );
}

#[test]
fn test_add_with_named_placeholders() {
    let validator = letter().validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .add(|v| {
            (v.value().as_deref() == Some("Subject1")).then(|| {
                v.failure(
                    &Message::lazy("TestMessage3", resources::test_message_3),
                    Placeholders::new()
                        .with("Subject", v.value().unwrap_or_default())
                        .with("Body", v.object().body.clone().unwrap_or_default()),
                )
            })
        });

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].property_localized_name(), Some("Subject"));
    assert_eq!(failures[0].error_code(), Some("TestMessage3"));
    assert_eq!(failures[0].error_message(), "Test message 'Subject1', 'Body1'.");
}

#[test]
fn test_catalog_overrides_builtin_template() {
    let catalog = MessageCatalog::new().with(codes::NOT_EMPTY, "'{PropertyName}' darf nicht leer sein.");
    let validator = Validator::with_messages(Letter::default(), catalog);
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .with_display_name("Betreff")
        .not_empty();
    validator.property("Body", |l: &Letter| l.body.clone()).not_null();

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_message(), "'Betreff' darf nicht leer sein.");
    assert_eq!(failures[0].error_code(), Some("NotEmptyValidator"));
    assert_eq!(failures[1].error_message(), "'Body' must not be empty.");
}

#[test]
fn test_catalog_from_json() {
    let catalog = MessageCatalog::from_json(
        r#"{ "LengthValidator": "{PropertyName}: {TotalLength} of {MinLength}..{MaxLength}" }"#,
    )
    .unwrap();
    let validator = Validator::with_messages(Letter::with_subject("Subject1"), catalog);
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .length(3, 5);

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_message(), "Subject: 8 of 3..5");
}

#[test]
fn test_closure_message_source() {
    let source = |code: &str| (code == codes::NOT_NULL).then(|| "{PropertyName} fehlt".to_owned());
    let validator = Validator::with_messages(Letter::default(), source);
    validator.property("Body", |l: &Letter| l.body.clone()).not_null();
    validator.property("Subject", |l: &Letter| l.subject.clone()).not_empty();

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_message(), "Body fehlt");
    // No template for the code: the generic fallback is used.
    assert_eq!(failures[1].error_message(), "'Subject' is not valid.");
}

#[test]
fn test_message_from_command_source() {
    let catalog = MessageCatalog::new().with("SubjectTaken", "'{PropertyName}' is already used.");
    let validator = Validator::with_messages(letter(), catalog);
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .fail_if(|_| true, Message::from_code("SubjectTaken"));

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_code(), Some("SubjectTaken"));
    assert_eq!(failures[0].error_message(), "'Subject' is already used.");
}

#[test]
fn test_message_from_explicit_source() {
    let shared: Arc<dyn MessageSource> =
        Arc::new(MessageCatalog::new().with("Rejected", "{PropertyName} rejected"));
    let validator = letter().validator();
    validator
        .property("Body", |l: &Letter| l.body.clone())
        .fail_if(|_| true, Message::from_source(shared, "Rejected"));

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_message(), "Body rejected");
}

#[test]
fn test_supplier_is_read_at_evaluation_time() {
    use std::sync::atomic::{AtomicBool, Ordering};

    let german = Arc::new(AtomicBool::new(false));
    let locale = Arc::clone(&german);
    let validator = letter().validator();
    validator.property("Body", |l: &Letter| l.body.clone()).fail_if(
        |_| true,
        Message::lazy("Locale", move || {
            if locale.load(Ordering::SeqCst) {
                "Ungültig".to_owned()
            } else {
                "Invalid".to_owned()
            }
        }),
    );

    german.store(true, Ordering::SeqCst);
    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_message(), "Ungültig");
}
