//! Tests for the resend workflow error taxonomy

use std::error::Error as _;

use vc_shared::errors::{IntoErrorResponse, StatusClass};

use crate::errors::{DomainError, ResendError, WorkflowStage};

#[test]
fn test_codes_and_status_classes() {
    let cases = vec![
        (ResendError::InvalidInput { message: "user_id".into() }, "INVALID_INPUT", StatusClass::BadRequest),
        (ResendError::UserNotFound, "USER_NOT_FOUND", StatusClass::NotFound),
        (ResendError::AccountInactive, "ACCOUNT_INACTIVE", StatusClass::Forbidden),
        (
            ResendError::InternalFault {
                stage: WorkflowStage::Persist,
                source: DomainError::Cache("connection refused".into()),
            },
            "INTERNAL_ERROR",
            StatusClass::Internal,
        ),
        (
            ResendError::DeliveryFailed { source: DomainError::Notification("smtp down".into()) },
            "EMAIL_SEND_FAILED",
            StatusClass::BadGateway,
        ),
        (ResendError::Cancelled { stage: WorkflowStage::Dispatch }, "REQUEST_CANCELLED", StatusClass::RequestTimeout),
    ];

    for (error, code, status) in cases {
        assert_eq!(error.code(), code);
        assert_eq!(error.status_class(), status);
    }
}

#[test]
fn test_internal_fault_keeps_cause_for_diagnostics() {
    let error = ResendError::InternalFault {
        stage: WorkflowStage::Generate,
        source: DomainError::Internal { message: "entropy source unavailable".into() },
    };

    let source = error.source().expect("cause attached");
    assert!(source.to_string().contains("entropy source unavailable"));
    assert_eq!(error.to_string(), "Internal fault during code generation");
}

#[test]
fn test_error_response_never_exposes_cause() {
    let error = ResendError::InternalFault {
        stage: WorkflowStage::Persist,
        source: DomainError::Cache("redis://secret-host:6379 refused".into()),
    };

    let response = error.to_error_response();
    assert_eq!(response.error, "INTERNAL_ERROR");
    assert_eq!(response.message, "Internal server error");
    assert!(!response.message.contains("secret-host"));
    assert!(!response.retryable);
}

#[test]
fn test_delivery_failure_is_retryable() {
    let error = ResendError::DeliveryFailed { source: DomainError::Notification("timeout".into()) };
    let response = error.to_error_response();

    assert!(error.is_retryable());
    assert!(response.retryable);
    assert_eq!(response.status.http_status(), 502);
    assert!(!response.message.contains("timeout"));
}

#[test]
fn test_client_errors_are_not_retryable() {
    assert!(!ResendError::UserNotFound.is_retryable());
    assert!(!ResendError::AccountInactive.is_retryable());
}
