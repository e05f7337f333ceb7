use super::Error;

/// Error raised by an [`Executor`](crate::Executor) while performing the bulk transfer.
#[derive(Debug)]
pub(super) struct ExecutorError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecutorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "executor failed: {}", self.inner)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failure inside an executor.
    ///
    /// Executors wrap database client errors with this so callers can tell a
    /// failed transfer apart from a configuration mistake.
    pub fn executor(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Executor(ExecutorError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error came from an executor.
    pub fn is_executor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Executor(_))
    }
}
