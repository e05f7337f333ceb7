use super::Error;

/// Error when an update, upsert or delete is committed without any
/// `match_target_on` column.
#[derive(Debug)]
pub(super) struct MissingMatchTarget {
    operation: &'static str,
}

impl std::error::Error for MissingMatchTarget {}

impl core::fmt::Display for MissingMatchTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing match target: {} requires at least one match_target_on column",
            self.operation
        )
    }
}

impl Error {
    /// Creates a missing match target error for the named operation.
    pub fn missing_match_target(operation: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingMatchTarget(MissingMatchTarget {
            operation,
        }))
    }

    /// Returns `true` if this error is a missing match target error.
    pub fn is_missing_match_target(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingMatchTarget(_))
    }
}
