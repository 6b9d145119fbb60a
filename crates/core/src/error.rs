//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of user input and lookups.
/// Storage and device concerns carry their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more field rules failed. The messages are ordered the way the
    /// rules ran and are surfaced to the user verbatim.
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// A raw numeric field did not parse. Reported before any rule checks
    /// run, so bad input never reaches the business validation as a NaN.
    #[error("{field} is not a number: {value:?}")]
    Parse { field: String, value: String },

    /// A malformed item identifier.
    #[error("invalid item id: {0}")]
    InvalidId(String),

    /// The operation target does not exist. Under normal flow the UI only
    /// offers actions on rows it just rendered, so this indicates a desync.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self::Validation(messages.into_iter().map(Into::into).collect())
    }

    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// The violation list, when this is a validation failure.
    pub fn messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_keeps_message_order() {
        let err = DomainError::validation(["first rule", "second rule"]);
        assert_eq!(
            err.messages().unwrap(),
            &["first rule".to_string(), "second rule".to_string()]
        );
    }

    #[test]
    fn parse_error_names_the_field() {
        let err = DomainError::parse("Unit Price", "abc");
        assert_eq!(err.to_string(), "Unit Price is not a number: \"abc\"");
    }

    #[test]
    fn non_validation_errors_carry_no_messages() {
        assert!(DomainError::not_found().messages().is_none());
    }
}
