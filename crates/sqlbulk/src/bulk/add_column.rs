use super::{
    state::impl_table_state_accessors, BulkDelete, BulkInsert, BulkInsertOrUpdate, BulkUpdate,
    TableState,
};
use crate::{schema::ColumnMapping, Model, Path, Result};

/// Column-scoping stage for manually selected columns.
#[derive(Debug)]
pub struct BulkAddColumn<T> {
    state: TableState<T>,
}

impl<T: Model> BulkAddColumn<T> {
    pub(super) fn new(state: TableState<T>) -> BulkAddColumn<T> {
        BulkAddColumn { state }
    }

    pub fn add_column(mut self, column: Path<T>) -> Result<Self> {
        self.state.add_path(&column)?;
        Ok(self)
    }

    /// Like [`BulkTable::add_column_as`](super::BulkTable::add_column_as). The
    /// stage is consumed when this fails.
    pub fn add_column_as(mut self, column: Path<T>, destination: impl Into<String>) -> Result<Self> {
        self.state.add_path_as(&column, destination.into())?;
        Ok(self)
    }

    pub fn add_columns(mut self, columns: impl IntoIterator<Item = Path<T>>) -> Result<Self> {
        for column in columns {
            self.state.add_path(&column)?;
        }
        Ok(self)
    }

    pub fn add_column_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.state.add_name(name.into());
        }
        self
    }

    pub fn add_column_name_as(
        mut self,
        name: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self> {
        self.state.add_name_as(name.into(), destination.into())?;
        Ok(self)
    }

    pub fn add_column_mappings<I>(mut self, mappings: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<ColumnMapping>,
    {
        self.state.add_mappings(mappings.into_iter().map(Into::into))?;
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

impl_table_state_accessors!(BulkAddColumn);
