//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_configuration_display() {
    let err = Error::InvalidConfiguration("aspect_ratio must be > 0 (got -1)".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid configuration"));
    assert!(display.contains("aspect_ratio must be > 0"));
}

#[test]
fn test_degenerate_basis_display() {
    let err = Error::DegenerateBasis("look direction parallel to up".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Degenerate basis: look direction parallel to up");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::DegenerateBasis("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::InvalidConfiguration("cfg".to_string()));
    assert!(debug1.contains("InvalidConfiguration"));

    let debug2 = format!("{:?}", Error::DegenerateBasis("basis".to_string()));
    assert!(debug2.contains("DegenerateBasis"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidConfiguration("image_width must be > 0".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::DegenerateBasis("image_width must be > 0".to_string()));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::DegenerateBasis("zero cross product".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    match outer() {
        Err(Error::DegenerateBasis(msg)) => assert_eq!(msg, "zero cross product"),
        other => panic!("unexpected result: {:?}", other),
    }
}
