mod add_column;
pub use add_column::BulkAddColumn;

mod add_column_list;
pub use add_column_list::BulkAddColumnList;

mod delete;
pub use delete::BulkDelete;

mod insert;
pub use insert::BulkInsert;

mod lower;

mod setup;
pub use setup::{BulkForCollection, Setup};

mod state;
use state::TableState;

mod table;
pub use table::BulkTable;

mod update;
pub use update::BulkUpdate;

mod upsert;
pub use upsert::BulkInsertOrUpdate;

use crate::{driver::Operation, Executor, Model, Response, Result};

use std::{fmt, marker::PhantomData, sync::Arc};

/// Entry point of the builder chain. Holds the executor committed operations
/// are handed to.
#[derive(Clone)]
pub struct BulkOperations {
    executor: Arc<dyn Executor>,
}

impl BulkOperations {
    pub fn new(executor: impl Executor) -> BulkOperations {
        BulkOperations {
            executor: Arc::new(executor),
        }
    }

    pub fn from_arc(executor: Arc<dyn Executor>) -> BulkOperations {
        BulkOperations { executor }
    }

    /// Starts configuring a bulk operation for model `T`.
    pub fn setup<T: Model>(&self) -> Setup<T> {
        Setup {
            bulk: self.clone(),
            _p: PhantomData,
        }
    }

    pub fn executor(&self) -> &Arc<dyn Executor> {
        &self.executor
    }

    async fn exec(&self, operation: Operation) -> Result<Response> {
        self.executor.exec(operation).await
    }
}

impl fmt::Debug for BulkOperations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkOperations")
            .field("executor", &self.executor)
            .finish()
    }
}
