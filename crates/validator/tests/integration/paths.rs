//! Property paths and display names across nested and collection bindings.

use objval::prelude::*;
use pretty_assertions::assert_eq;

use crate::fixtures::{Attachment, Entity, Letter, Person};

#[test]
fn test_nested_object_path() {
    let letter = Letter {
        person: Some(Person::default()),
        ..Letter::default()
    };
    let validator = letter.validator();
    validator
        .property("Person", |l: &Letter| l.person.clone())
        .property("FirstName", |p: &Option<Person>| {
            p.as_ref().and_then(|p| p.first_name.clone())
        })
        .not_empty();

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].property_name(), Some("Person.FirstName"));
    assert_eq!(failures[0].error_message(), "'FirstName' should not be empty.");
}

#[test]
fn test_nested_collection_paths() {
    let letter = Letter {
        attachments: Some(vec![Attachment::default(), Attachment::default()]),
        ..Letter::default()
    };
    let validator = letter.validator();
    for attachment in validator
        .property("Attachments", |l: &Letter| l.attachments.clone())
        .validators()
    {
        attachment
            .property("FileName", |a: &Attachment| a.file_name.clone())
            .not_empty();
    }

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].property_name(), Some("Attachments[0].FileName"));
    assert_eq!(failures[0].error_message(), "'FileName' should not be empty.");
    assert_eq!(failures[1].property_name(), Some("Attachments[1].FileName"));
    assert_eq!(failures[1].error_message(), "'FileName' should not be empty.");
}

#[test]
fn test_absent_collection_has_no_item_validators() {
    let validator = Letter::default().validator();
    let count = validator
        .property("Attachments", |l: &Letter| l.attachments.clone())
        .validators()
        .count();
    assert_eq!(count, 0);
}

#[test]
fn test_for_each_with_identity_binding() {
    let entity = Entity {
        list2: Some(vec![0]),
        ..Entity::default()
    };
    let validator = entity.validator();
    validator
        .property("List2", |e: &Entity| e.list2.clone())
        .not_empty()
        .for_each(|item| {
            item.itself().with_display_name("Name1").not_empty();
        });

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].property_name(), Some("List2[0]"));
    assert_eq!(failures[0].error_message(), "'Name1' should not be empty.");
}

#[test]
fn test_identity_binding_without_display_name_uses_path() {
    let entity = Entity {
        list2: Some(vec![5, 0]),
        ..Entity::default()
    };
    let validator = entity.validator();
    validator
        .property("List2", |e: &Entity| e.list2.clone())
        .for_each(|item| {
            item.itself().not_empty();
        });

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].error_message(), "'List2[1]' should not be empty.");
}

#[test]
fn test_display_name_override() {
    let validator = Letter::default().validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .with_display_name("Message subject")
        .not_empty();

    let failures = validator.validate_blocking().unwrap();
    let failure = &failures[0];
    assert_eq!(failure.property_name(), Some("Subject"));
    assert_eq!(failure.property_localized_name(), Some("Message subject"));
    assert_eq!(failure.error_code(), Some("NotEmptyValidator"));
    assert_eq!(failure.error_message(), "'Message subject' should not be empty.");
}

#[test]
fn test_name_supplier_is_called_once_at_bind_time() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = AtomicUsize::new(0);
    let validator = Letter::default().validator();
    validator
        .property_with(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                "Subject".to_owned()
            },
            |l: &Letter| l.subject.clone(),
        )
        .not_empty()
        .not_null();

    validator.validate_blocking().unwrap();
    validator.validate_blocking().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_property_macro() {
    let validator = Letter::default().validator();
    property!(validator, subject as "Message subject").not_empty();

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].property_name(), Some("subject"));
    assert_eq!(failures[0].error_message(), "'Message subject' should not be empty.");
}
