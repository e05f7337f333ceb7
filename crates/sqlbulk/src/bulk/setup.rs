use super::{BulkOperations, BulkTable};
use crate::{Model, Result};

use std::marker::PhantomData;

/// First stage: the model type is chosen, the source rows are not.
#[derive(Debug)]
pub struct Setup<T> {
    pub(super) bulk: BulkOperations,
    pub(super) _p: PhantomData<fn() -> T>,
}

/// Second stage: the source rows are chosen, the destination table is not.
#[derive(Debug)]
pub struct BulkForCollection<T> {
    bulk: BulkOperations,
    rows: Vec<T>,
}

impl<T: Model> Setup<T> {
    /// Sets the model instances to load.
    pub fn for_collection(self, rows: impl IntoIterator<Item = T>) -> BulkForCollection<T> {
        BulkForCollection {
            bulk: self.bulk,
            rows: rows.into_iter().collect(),
        }
    }
}

impl<T: Model> BulkForCollection<T> {
    /// Sets the destination table.
    ///
    /// Accepts `table`, `schema.table` or `[schema].[table]`. A schema given
    /// here counts as supplied, so a later `with_schema` conflicts with it.
    pub fn with_table(self, table_name: &str) -> Result<BulkTable<T>> {
        BulkTable::new(self.bulk, self.rows, table_name)
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }
}
