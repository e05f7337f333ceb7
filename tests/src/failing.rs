use async_trait::async_trait;
use sqlbulk_core::{
    driver::{Operation, Response},
    Error, Executor, Result,
};
use std::io;

/// Executor whose every transfer fails with a broken connection.
#[derive(Debug, Default)]
pub struct FailingExecutor;

#[async_trait]
impl Executor for FailingExecutor {
    async fn exec(&self, _operation: Operation) -> Result<Response> {
        Err(Error::executor(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        )))
    }
}
