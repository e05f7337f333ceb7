use super::Error;

/// Error when an operation refers to a column that is not part of the column set.
///
/// This occurs when:
/// - `remove_column` names a column that was never selected
/// - a match target or identity column is not selected
/// - a custom mapping refers to a property that was removed from the column set
#[derive(Debug)]
pub(super) struct ColumnNotSelected {
    column: Box<str>,
    usage: &'static str,
}

impl std::error::Error for ColumnNotSelected {}

impl core::fmt::Display for ColumnNotSelected {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column not selected: `{}` is used as {} but is not in the column set",
            self.column, self.usage
        )
    }
}

impl Error {
    /// Creates a column not selected error. `usage` describes what the column
    /// was needed for, e.g. "a match target".
    pub fn column_not_selected(column: impl Into<String>, usage: &'static str) -> Error {
        Error::from(super::ErrorKind::ColumnNotSelected(ColumnNotSelected {
            column: column.into().into(),
            usage,
        }))
    }

    /// Returns `true` if this error is a column not selected error.
    pub fn is_column_not_selected(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnNotSelected(_))
    }
}
