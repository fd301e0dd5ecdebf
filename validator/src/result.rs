use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Category of a failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    EmptyInput,
    InvalidHeader,
    InvalidFooter,
    InvalidBody,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EMPTY_INPUT",
            ErrorKind::InvalidHeader => "INVALID_HEADER",
            ErrorKind::InvalidFooter => "INVALID_FOOTER",
            ErrorKind::InvalidBody => "INVALID_BODY",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based location in the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorPosition {
    pub line: usize,
    pub character: usize,
}

impl ErrorPosition {
    pub fn new(line: usize, character: usize) -> Self {
        ErrorPosition { line, character }
    }
}

/// Verdict of a single validation.
///
/// A valid result never carries an error kind or position. An invalid one
/// always carries a kind; the position is best effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_position: Option<ErrorPosition>,
}

impl ValidationResult {
    pub(crate) fn valid(message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: true,
            message: message.into(),
            error_kind: None,
            error_position: None,
        }
    }

    pub(crate) fn invalid(
        kind: ErrorKind,
        message: impl Into<String>,
        position: Option<ErrorPosition>,
    ) -> Self {
        ValidationResult {
            is_valid: false,
            message: message.into(),
            error_kind: Some(kind),
            error_position: position,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    pub fn error_position(&self) -> Option<ErrorPosition> {
        self.error_position
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.error_kind, self.error_position) {
            (None, _) => write!(f, "{}", self.message),
            (Some(kind), None) => write!(f, "{}: {}", kind, self.message),
            (Some(kind), Some(pos)) => write!(
                f,
                "{}: {} (line {}, character {})",
                kind, self.message, pos.line, pos.character
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ValidationResult::valid("Valid private key."), json!({
        "isValid": true,
        "message": "Valid private key.",
    }))]
    #[case(ValidationResult::invalid(ErrorKind::EmptyInput, "Private key cannot be empty.", None), json!({
        "isValid": false,
        "message": "Private key cannot be empty.",
        "errorKind": "EMPTY_INPUT",
    }))]
    #[case(
        ValidationResult::invalid(
            ErrorKind::InvalidFooter,
            "Invalid private key footer.",
            Some(ErrorPosition::new(27, 1))
        ),
        json!({
            "isValid": false,
            "message": "Invalid private key footer.",
            "errorKind": "INVALID_FOOTER",
            "errorPosition": { "line": 27, "character": 1 },
        })
    )]
    fn test_serialize(#[case] result: ValidationResult, #[case] expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(&result).unwrap(), expected);
    }

    #[rstest]
    #[case(ErrorKind::EmptyInput)]
    #[case(ErrorKind::InvalidHeader)]
    #[case(ErrorKind::InvalidFooter)]
    #[case(ErrorKind::InvalidBody)]
    fn test_error_kind_display_matches_serde(#[case] kind: ErrorKind) {
        let serialized = serde_json::to_value(kind).unwrap();
        assert_eq!(serialized, serde_json::Value::String(kind.to_string()));
    }

    #[rstest]
    #[case(ValidationResult::valid("Valid private key."), "Valid private key.")]
    #[case(
        ValidationResult::invalid(ErrorKind::InvalidBody, "Encrypted private keys are not supported.", None),
        "INVALID_BODY: Encrypted private keys are not supported."
    )]
    #[case(
        ValidationResult::invalid(
            ErrorKind::InvalidHeader,
            "Invalid private key header.",
            Some(ErrorPosition::new(1, 1))
        ),
        "INVALID_HEADER: Invalid private key header. (line 1, character 1)"
    )]
    fn test_display(#[case] result: ValidationResult, #[case] expected: &str) {
        assert_eq!(result.to_string(), expected);
    }
}
