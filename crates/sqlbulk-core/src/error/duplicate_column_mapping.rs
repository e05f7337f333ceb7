use super::Error;

/// Error when a custom column mapping is registered twice for the same property.
#[derive(Debug)]
pub(super) struct DuplicateColumnMapping {
    property: Box<str>,
}

impl std::error::Error for DuplicateColumnMapping {}

impl core::fmt::Display for DuplicateColumnMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column mapping: property `{}` is already mapped",
            self.property
        )
    }
}

impl Error {
    /// Creates a duplicate column mapping error.
    pub fn duplicate_column_mapping(property: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumnMapping(
            DuplicateColumnMapping {
                property: property.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a duplicate column mapping error.
    pub fn is_duplicate_column_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumnMapping(_))
    }
}
