use super::Error;

/// Error when a column accessor does not resolve to a direct field of the model.
#[derive(Debug)]
pub(super) struct InvalidColumnExpression {
    message: Box<str>,
}

impl std::error::Error for InvalidColumnExpression {}

impl core::fmt::Display for InvalidColumnExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid column expression: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid column expression error.
    pub fn invalid_column_expression(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidColumnExpression(
            InvalidColumnExpression {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid column expression error.
    pub fn is_invalid_column_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidColumnExpression(_))
    }
}
