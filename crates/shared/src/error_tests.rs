use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::NotFound(String::new()), 404, "NOT_FOUND")]
#[case(AppError::Validation(String::new()), 400, "VALIDATION_ERROR")]
#[case(AppError::BusinessRule(String::new()), 422, "BUSINESS_RULE_VIOLATION")]
#[case(AppError::Conflict(String::new()), 409, "CONFLICT")]
#[case(AppError::StorageUnavailable(String::new()), 503, "STORAGE_UNAVAILABLE")]
#[case(AppError::Database(String::new()), 500, "DATABASE_ERROR")]
#[case(AppError::Internal(String::new()), 500, "INTERNAL_ERROR")]
fn test_status_and_error_codes(
    #[case] error: AppError,
    #[case] status: u16,
    #[case] code: &str,
) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_error_display() {
    assert_eq!(
        AppError::Validation("msg".into()).to_string(),
        "Validation error: msg"
    );
    assert_eq!(
        AppError::BusinessRule("msg".into()).to_string(),
        "Business rule violation: msg"
    );
    assert_eq!(
        AppError::StorageUnavailable("msg".into()).to_string(),
        "Storage unavailable: msg"
    );
}

#[test]
fn test_user_errors() {
    assert!(AppError::Validation("x".into()).is_user_error());
    assert!(AppError::Conflict("x".into()).is_user_error());
    assert!(!AppError::Database("x".into()).is_user_error());
    assert!(!AppError::StorageUnavailable("x".into()).is_user_error());
}
