pub mod operation;
pub use operation::{Column, Operation, OperationKind};

mod response;
pub use response::Response;

use crate::async_trait;

use std::fmt::Debug;

/// Performs the actual bulk transfer.
///
/// The builder chain only accumulates configuration. Once an operation is
/// committed it is lowered into an [`Operation`] and handed to an executor,
/// which owns batching, timeouts, retries and the database connection.
#[async_trait]
pub trait Executor: Debug + Send + Sync + 'static {
    /// Execute a bulk operation
    async fn exec(&self, operation: Operation) -> crate::Result<Response>;
}
