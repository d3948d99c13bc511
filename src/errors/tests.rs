//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedCharacter { character: '@' }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnterminatedFloat {
            literal: "42.".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unterminated_float_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedFloat {
            literal: "-7.".to_string(),
        },
        Position(3),
    );

    assert_eq!(error.get_error_name(), "UnterminatedFloat");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            literal: "-".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '$' }, Position(2));
    assert_eq!(error.to_string(), "unexpected character: '$' at position 2");

    let error = Error::new(
        ErrorImpl::UnterminatedFloat {
            literal: "3.".to_string(),
        },
        Position(2),
    );
    assert_eq!(error.to_string(), "unterminated float: \"3.\" at position 2");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '#' }, Position(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`#`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_escapes_control_characters() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\t' }, Position(0));

    assert!(error.get_tip().to_string().contains("`\\t`"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_errors_compare_by_kind_and_position() {
    let a = Error::new(ErrorImpl::UnexpectedCharacter { character: '.' }, Position(0));
    let b = Error::new(ErrorImpl::UnexpectedCharacter { character: '.' }, Position(0));
    let c = Error::new(ErrorImpl::UnexpectedCharacter { character: '.' }, Position(1));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_input_too_long_error() {
    let error = Error::new(ErrorImpl::InputTooLong { length: 123 }, Position(0));

    assert_eq!(error.get_error_name(), "InputTooLong");
    assert_eq!(
        error.to_string(),
        "input too long: 123 characters at position 0"
    );
    assert!(error.get_tip().to_string().contains("123"));
}
