use super::{
    state::impl_table_state_accessors, BulkAddColumn, BulkAddColumnList, BulkOperations,
    TableState,
};
use crate::{
    schema::{ColumnMapping, TableName},
    BulkCopySettings, Model, Path, Result,
};

/// Table-scoping stage: destination identity and copy settings.
///
/// Every column selection method moves on to [`BulkAddColumn`], except
/// [`add_all_columns`](Self::add_all_columns) which moves on to
/// [`BulkAddColumnList`].
#[derive(Debug)]
pub struct BulkTable<T> {
    state: TableState<T>,
}

impl<T: Model> BulkTable<T> {
    pub(super) fn new(bulk: BulkOperations, rows: Vec<T>, table_name: &str) -> Result<BulkTable<T>> {
        let table = TableName::parse(table_name)?;

        Ok(BulkTable {
            state: TableState::new(bulk, rows, table),
        })
    }

    /// Explicitly sets the schema. Without it the default schema `dbo` is used.
    ///
    /// Fails with a configuration conflict when a schema was already supplied,
    /// either through `with_table("schema.table")` or an earlier call.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Result<Self> {
        self.state.set_schema(schema.into())?;
        Ok(self)
    }

    /// Replaces the copy settings.
    pub fn with_bulk_copy_settings(mut self, settings: BulkCopySettings) -> Self {
        self.state.settings = settings;
        self
    }

    /// Selects one column. Adding the same column twice has no effect.
    pub fn add_column(mut self, column: Path<T>) -> Result<BulkAddColumn<T>> {
        self.state.add_path(&column)?;
        Ok(BulkAddColumn::new(self.state))
    }

    /// Selects one column and copies it into a differently named destination column.
    ///
    /// Fails when `destination` is empty or blank, or when the property
    /// already has a custom mapping. The stage is consumed either way; on a
    /// duplicate mapping the property had been selected before the error.
    pub fn add_column_as(
        mut self,
        column: Path<T>,
        destination: impl Into<String>,
    ) -> Result<BulkAddColumn<T>> {
        self.state.add_path_as(&column, destination.into())?;
        Ok(BulkAddColumn::new(self.state))
    }

    pub fn add_columns(
        mut self,
        columns: impl IntoIterator<Item = Path<T>>,
    ) -> Result<BulkAddColumn<T>> {
        for column in columns {
            self.state.add_path(&column)?;
        }
        Ok(BulkAddColumn::new(self.state))
    }

    /// Selects columns by field name. Names are checked against the model on commit.
    pub fn add_column_names<I>(mut self, names: I) -> BulkAddColumn<T>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.state.add_name(name.into());
        }
        BulkAddColumn::new(self.state)
    }

    pub fn add_column_name_as(
        mut self,
        name: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<BulkAddColumn<T>> {
        self.state.add_name_as(name.into(), destination.into())?;
        Ok(BulkAddColumn::new(self.state))
    }

    /// Selects every property of each mapping and records its destination column.
    pub fn add_column_mappings<I>(mut self, mappings: I) -> Result<BulkAddColumn<T>>
    where
        I: IntoIterator,
        I::Item: Into<ColumnMapping>,
    {
        self.state.add_mappings(mappings.into_iter().map(Into::into))?;
        Ok(BulkAddColumn::new(self.state))
    }

    /// Selects every field whose type is a scalar, string, character array or
    /// byte array.
    ///
    /// This replaces the column set rather than extending it: anything
    /// selected before is discarded.
    pub fn add_all_columns(mut self) -> BulkAddColumnList<T> {
        self.state.add_all_columns();
        BulkAddColumnList::new(self.state)
    }
}

impl_table_state_accessors!(BulkTable);
