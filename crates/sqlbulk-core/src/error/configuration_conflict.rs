use super::Error;

/// Error when a builder setting is configured more than once in a way that
/// cannot be reconciled.
///
/// This occurs when:
/// - `with_schema` is called after a schema was already supplied, either through
///   a qualified `with_table("schema.table")` or an earlier `with_schema`
/// - an identity column is set twice on the same operation
#[derive(Debug)]
pub(super) struct ConfigurationConflict {
    message: Box<str>,
}

impl std::error::Error for ConfigurationConflict {}

impl core::fmt::Display for ConfigurationConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration conflict: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration conflict error.
    pub fn configuration_conflict(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConfigurationConflict(
            ConfigurationConflict {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a configuration conflict error.
    pub fn is_configuration_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConfigurationConflict(_))
    }
}
