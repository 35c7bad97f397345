//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic names, messages and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_expected_token_message() {
    let error = Error::new(ErrorImpl::ExpectedToken {
        expected: TokenKind::Assign,
        got: TokenKind::Integer,
    });

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn {
        kind: TokenKind::CloseParen,
        literal: ")".to_string(),
    });

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for ) found");
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(ErrorImpl::IntegerParseError {
        literal: "99999999999999999999".to_string(),
    });

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::ExpectedToken {
        expected: TokenKind::CloseParen,
        got: TokenKind::Semicolon,
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_illegal_character() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn {
        kind: TokenKind::Illegal,
        literal: "@".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unrecognised character `@`"),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_from_impl() {
    let error: Error = ErrorImpl::IntegerParseError {
        literal: "1".to_string(),
    }
    .into();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::IntegerParseError { .. }
    ));
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 });

    assert_eq!(
        error.to_string(),
        "expressions and blocks nested deeper than 256 levels"
    );
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
