use super::Error;

/// Error when an argument passed to a builder method is unusable.
///
/// Raised before the builder state is touched, e.g. for an empty destination
/// column name or an empty table name.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    argument: &'static str,
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument `{}`: {}", self.argument, self.message)
    }
}

impl Error {
    /// Creates an invalid argument error for the named argument.
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            argument,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidArgument(_))
    }
}
