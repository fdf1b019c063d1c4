use thiserror::Error;

/// Construction-time validation failure.
///
/// All validation happens eagerly in constructors; serialization is total
/// over successfully constructed values and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required constructor argument was absent or empty.
    ///
    /// The field name is the wire key (e.g. `packageId`, `altText`).
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field value failed a range or format check.
    #[error("invalid value for field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl BuildError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks that a required string argument is non-empty.
pub(crate) fn require(field: &'static str, value: impl Into<String>) -> Result<String, BuildError> {
    let value = value.into();
    if value.is_empty() {
        Err(BuildError::MissingField(field))
    } else {
        Ok(value)
    }
}
