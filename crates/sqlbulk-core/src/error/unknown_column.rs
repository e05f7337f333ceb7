use super::Error;

/// Error when a column name does not match any field of the model.
///
/// String based column selection is only checked against the model when the
/// operation is lowered for the executor.
#[derive(Debug)]
pub(super) struct UnknownColumn {
    model: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnknownColumn {}

impl core::fmt::Display for UnknownColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown column: `{}` has no field `{}`",
            self.model, self.column
        )
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(model: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumn {
            model: model.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumn(_))
    }
}
