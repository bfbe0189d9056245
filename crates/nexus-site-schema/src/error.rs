//! Validation error taxonomy.

use crate::path::FieldPath;

/// Errors that can occur when validating a site configuration.
///
/// Every variant carries the path of the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{path}: malformed section: {reason}")]
    MalformedSection { path: FieldPath, reason: String },

    #[error("{path}: duplicate section id `{id}` (first used by sections[{first}])")]
    DuplicateSectionId {
        path: FieldPath,
        id: String,
        first: usize,
    },

    #[error("{path}: length {len} != columns length {columns}")]
    TableRowArityMismatch {
        path: FieldPath,
        len: usize,
        columns: usize,
    },

    #[error("{path}: required field is empty")]
    EmptyRequiredField { path: FieldPath },

    #[error("{path}: missing required field")]
    MissingField { path: FieldPath },

    #[error("{path}: expected {expected}")]
    WrongType {
        path: FieldPath,
        expected: &'static str,
    },

    #[error("{path}: unknown field")]
    UnknownField { path: FieldPath },

    #[error("{path}: invalid URL `{value}`: {reason}")]
    InvalidUrl {
        path: FieldPath,
        value: String,
        reason: String,
    },

    #[error("{path}: unsupported markup `{fragment}`, only inline links are allowed")]
    UnsafeMarkup { path: FieldPath, fragment: String },

    #[error("{path}: {message}")]
    Decode { path: FieldPath, message: String },
}

impl ValidationError {
    /// Path of the field that failed validation.
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::MalformedSection { path, .. }
            | Self::DuplicateSectionId { path, .. }
            | Self::TableRowArityMismatch { path, .. }
            | Self::EmptyRequiredField { path }
            | Self::MissingField { path }
            | Self::WrongType { path, .. }
            | Self::UnknownField { path }
            | Self::InvalidUrl { path, .. }
            | Self::UnsafeMarkup { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }

    pub(crate) fn malformed(path: FieldPath, reason: impl Into<String>) -> Self {
        Self::MalformedSection {
            path,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_names_row() {
        let err = ValidationError::TableRowArityMismatch {
            path: FieldPath::from("sections[2].rows[1]"),
            len: 2,
            columns: 3,
        };

        assert_eq!(
            err.to_string(),
            "sections[2].rows[1]: length 2 != columns length 3"
        );
        assert_eq!(err.path().as_str(), "sections[2].rows[1]");
    }

    #[test]
    fn duplicate_message_points_at_first_use() {
        let err = ValidationError::DuplicateSectionId {
            path: FieldPath::from("sections[3].id"),
            id: "features".to_string(),
            first: 0,
        };

        assert!(err.to_string().contains("first used by sections[0]"));
    }
}
