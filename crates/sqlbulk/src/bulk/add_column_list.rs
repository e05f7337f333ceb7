use super::{
    state::impl_table_state_accessors, BulkDelete, BulkInsert, BulkInsertOrUpdate, BulkUpdate,
    TableState,
};
use crate::{Model, Path, Result};

/// Column-scoping stage after `add_all_columns`: columns can be removed or
/// mapped, but not added.
#[derive(Debug)]
pub struct BulkAddColumnList<T> {
    state: TableState<T>,
}

impl<T: Model> BulkAddColumnList<T> {
    pub(super) fn new(state: TableState<T>) -> BulkAddColumnList<T> {
        BulkAddColumnList { state }
    }

    /// Drops a column from the selection.
    ///
    /// Fails when the column is not selected, which is the case for fields
    /// that are not copyable.
    pub fn remove_column(mut self, column: Path<T>) -> Result<Self> {
        self.state.remove_path(&column)?;
        Ok(self)
    }

    /// Copies a selected column into a differently named destination column.
    pub fn custom_column_mapping(
        mut self,
        column: Path<T>,
        destination: impl Into<String>,
    ) -> Result<Self> {
        self.state.map_selected(&column, destination.into())?;
        Ok(self)
    }

    pub fn bulk_insert(self) -> BulkInsert<T> {
        BulkInsert::new(self.state)
    }

    pub fn bulk_update(self) -> BulkUpdate<T> {
        BulkUpdate::new(self.state)
    }

    pub fn bulk_insert_or_update(self) -> BulkInsertOrUpdate<T> {
        BulkInsertOrUpdate::new(self.state)
    }

    pub fn bulk_delete(self) -> BulkDelete<T> {
        BulkDelete::new(self.state)
    }
}

impl_table_state_accessors!(BulkAddColumnList);
