//! Tests for db::repository::error module.

use subway_rust::db::repository::{ErrorContext, RepositoryError, RepositoryResult};

#[test]
fn test_error_context_new() {
    let ctx = ErrorContext::new("get_line");
    assert_eq!(ctx.operation, Some("get_line".to_string()));
    assert!(ctx.entity.is_none());
    assert!(ctx.entity_id.is_none());
    assert!(ctx.details.is_none());
    assert!(!ctx.retryable);
}

#[test]
fn test_error_context_chaining() {
    let ctx = ErrorContext::new("save_line")
        .with_entity("line")
        .with_entity_id(42)
        .with_details("stored version 3, expected 2")
        .retryable();

    assert_eq!(ctx.operation, Some("save_line".to_string()));
    assert_eq!(ctx.entity, Some("line".to_string()));
    assert_eq!(ctx.entity_id, Some("42".to_string()));
    assert_eq!(ctx.details, Some("stored version 3, expected 2".to_string()));
    assert!(ctx.retryable);
}

#[test]
fn test_error_context_display() {
    let ctx = ErrorContext::new("get_station")
        .with_entity("station")
        .with_entity_id("7")
        .with_details("unknown id")
        .retryable();

    let display = ctx.to_string();
    assert!(display.contains("operation=get_station"));
    assert!(display.contains("entity=station"));
    assert!(display.contains("id=7"));
    assert!(display.contains("details=unknown id"));
    assert!(display.contains("retryable=true"));
}

#[test]
fn test_error_context_default_is_empty() {
    let ctx = ErrorContext::default();
    assert_eq!(ctx.to_string(), "[]");
}

#[test]
fn test_connection_error_is_retryable() {
    let err = RepositoryError::connection("store unavailable");
    assert!(err.to_string().contains("Connection error"));
    assert!(err.to_string().contains("store unavailable"));
    assert!(err.is_retryable());
    assert!(!err.is_not_found());
}

#[test]
fn test_not_found_with_context() {
    let err = RepositoryError::not_found_with_context(
        "Line 9 not found",
        ErrorContext::new("get_line").with_entity("line").with_entity_id(9),
    );
    assert!(err.is_not_found());
    assert!(!err.is_retryable());
    let msg = err.to_string();
    assert!(msg.contains("Not found"));
    assert!(msg.contains("entity=line"));
    assert!(msg.contains("id=9"));
}

#[test]
fn test_validation_error() {
    let err = RepositoryError::validation("station 1 is still used");
    assert!(err.to_string().contains("validation error"));
    assert!(!err.is_retryable());
}

#[test]
fn test_configuration_and_internal_errors() {
    let err = RepositoryError::configuration("unknown repository type");
    assert!(err.to_string().contains("Configuration error"));

    let err = RepositoryError::internal("lock poisoned");
    assert!(err.to_string().contains("Internal error"));
    assert!(format!("{:?}", err).contains("InternalError"));
}

#[test]
fn test_conflict_retryability_follows_context() {
    let plain = RepositoryError::conflict_with_context("stale", ErrorContext::new("save_line"));
    assert!(!plain.is_retryable());

    let retryable = RepositoryError::conflict_with_context(
        "stale",
        ErrorContext::new("save_line").retryable(),
    );
    assert!(retryable.is_retryable());
    assert!(retryable.to_string().contains("Transaction error"));
}

#[test]
fn test_with_operation_overrides_context() {
    let err = RepositoryError::not_found("Station 3 not found").with_operation("resolve_section");
    assert_eq!(
        err.context().operation.as_deref(),
        Some("resolve_section")
    );
    assert!(err.to_string().contains("operation=resolve_section"));
}

#[test]
fn test_repository_result_alias() {
    let ok: RepositoryResult<i32> = Ok(42);
    assert_eq!(ok.ok(), Some(42));

    let err: RepositoryResult<i32> = Err(RepositoryError::not_found("missing"));
    assert!(err.unwrap_err().is_not_found());
}
