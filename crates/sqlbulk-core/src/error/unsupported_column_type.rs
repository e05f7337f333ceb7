use super::Error;

/// Error when a selected field cannot be copied because its type is not a
/// scalar, string, character array or byte array.
#[derive(Debug)]
pub(super) struct UnsupportedColumnType {
    column: Box<str>,
    rust_ty: Box<str>,
}

impl std::error::Error for UnsupportedColumnType {}

impl core::fmt::Display for UnsupportedColumnType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported column type: field `{}` has type `{}`",
            self.column, self.rust_ty
        )
    }
}

impl Error {
    /// Creates an unsupported column type error.
    pub fn unsupported_column_type(column: impl Into<String>, rust_ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedColumnType(
            UnsupportedColumnType {
                column: column.into().into(),
                rust_ty: rust_ty.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported column type error.
    pub fn is_unsupported_column_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedColumnType(_))
    }
}
