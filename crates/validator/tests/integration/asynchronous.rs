//! Async rules and late-bound subjects.

use std::sync::Arc;
use std::time::Duration;

use objval::prelude::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use crate::fixtures::Letter;

#[tokio::test]
async fn test_fail_if_async_after_await_point() {
    let validator = Letter::with_subject("taken").validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .not_empty()
        .fail_if_async(
            |v| async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                Ok(v.value().as_deref() == Some("taken"))
            },
            Message::new("SubjectTaken", "'{PropertyName}' is already used."),
        );

    let failures = validator.validate().await.unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].error_code(), Some("SubjectTaken"));
    assert_eq!(failures[0].error_message(), "'Subject' is already used.");
}

#[tokio::test]
async fn test_async_rule_skipped_after_sync_failure() {
    let validator = Letter::default().validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .not_empty()
        .fail_if_async(
            |_| async { Err(RuleError::fault("must not run")) },
            Message::text("unreachable"),
        );

    let failures = validator.validate().await.unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].error_code(), Some("NotEmptyValidator"));
}

#[tokio::test]
async fn test_async_fault_propagates() {
    let validator = Letter::with_subject("x").validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .add_async(|_| async {
            let io = std::io::Error::other("lookup timed out");
            Err(RuleError::from_error(io))
        });

    let err = validator.validate().await.unwrap_err();
    assert_eq!(err.property(), Some("Subject"));
    assert_eq!(err.to_string(), "validation rule #0 faulted: lookup timed out");
}

#[tokio::test]
async fn test_validate_future_is_send() {
    let validator = Letter::default().validator();
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .not_empty();

    let failures = tokio::spawn(async move { validator.validate().await })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(failures.len(), 1);
}

#[tokio::test]
async fn test_mutation_between_registration_and_validate_is_observed() {
    let state = Arc::new(Mutex::new(Letter::default()));
    let source = Arc::clone(&state);
    let validator = Validator::from_fn(move || source.lock().clone());
    validator
        .property("Subject", |l: &Letter| l.subject.clone())
        .not_empty();

    assert_eq!(validator.validate().await.unwrap().len(), 1);

    state.lock().subject = Some("filled in".to_owned());
    assert!(validator.validate().await.unwrap().is_empty());
}

#[test]
fn test_blocking_runs_async_rules() {
    let validator = Letter::default().validator();
    validator
        .property("Body", |l: &Letter| l.body.clone())
        .fail_if_async(
            |v| async move { Ok(v.value().is_none()) },
            Message::new("NoBody", "'{PropertyName}' is missing."),
        );

    let failures = validator.validate_blocking().unwrap();
    assert_eq!(failures[0].error_message(), "'Body' is missing.");
}

#[test]
fn test_tracing_subscriber_sees_run() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let validator = Letter::default().validator();
        validator
            .property("Subject", |l: &Letter| l.subject.clone())
            .not_empty()
            .not_null();
        assert_eq!(validator.validate_blocking().unwrap().len(), 1);
    });
}
