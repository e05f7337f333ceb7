use super::BulkOperations;
use crate::{
    schema::{self, ColumnMapping, TableName},
    BulkCopySettings, Error, Model, Path, Result,
};

use indexmap::{map::Entry, IndexMap, IndexSet};
use std::sync::Arc;

/// Configuration shared by every stage of the builder chain.
///
/// Each stage owns this value and passes it on to the next one, so the whole
/// chain accumulates into a single set of collections.
#[derive(Debug)]
pub(super) struct TableState<T> {
    pub(super) bulk: BulkOperations,

    /// Source instances
    pub(super) rows: Vec<T>,

    pub(super) table: TableName,

    /// Selected model fields
    pub(super) columns: IndexSet<String>,

    /// Property name to destination column name, only where they differ
    pub(super) custom_column_mappings: IndexMap<String, String>,

    pub(super) settings: BulkCopySettings,

    /// Reflected once per chain
    pub(super) model: Arc<schema::Model>,
}

impl<T: Model> TableState<T> {
    pub(super) fn new(bulk: BulkOperations, rows: Vec<T>, table: TableName) -> TableState<T> {
        let model = Arc::new(T::schema());

        tracing::debug!(
            model = %model.name,
            table = %table.qualified(),
            rows = rows.len(),
            "configuring bulk table"
        );

        TableState {
            bulk,
            rows,
            table,
            columns: IndexSet::new(),
            custom_column_mappings: IndexMap::new(),
            settings: BulkCopySettings::default(),
            model,
        }
    }

    pub(super) fn set_schema(&mut self, schema: String) -> Result<()> {
        if let Some(existing) = &self.table.schema {
            return Err(Error::configuration_conflict(format!(
                "schema `{existing}` has already been defined for table `{}`",
                self.table.name
            )));
        }

        if schema.trim().is_empty() {
            return Err(Error::invalid_argument(
                "schema",
                "schema name must not be empty",
            ));
        }

        self.table.schema = Some(schema);
        Ok(())
    }

    pub(super) fn add_path(&mut self, path: &Path<T>) -> Result<()> {
        let name = path.field_name()?;
        self.add_name(name.to_string());
        Ok(())
    }

    pub(super) fn add_name(&mut self, name: String) {
        tracing::trace!(column = %name, "adding column");
        self.columns.insert(name);
    }

    pub(super) fn add_path_as(&mut self, path: &Path<T>, destination: String) -> Result<()> {
        check_destination(&destination)?;
        let name = path.field_name()?;
        self.add_mapping(name.to_string(), destination)
    }

    pub(super) fn add_name_as(&mut self, name: String, destination: String) -> Result<()> {
        check_destination(&destination)?;
        self.add_mapping(name, destination)
    }

    pub(super) fn add_mappings(
        &mut self,
        mappings: impl IntoIterator<Item = ColumnMapping>,
    ) -> Result<()> {
        for mapping in mappings {
            check_destination(&mapping.column_name)?;
            self.add_mapping(mapping.property_name, mapping.column_name)?;
        }

        Ok(())
    }

    /// Mapping for a column that is already selected.
    pub(super) fn map_selected(&mut self, path: &Path<T>, destination: String) -> Result<()> {
        check_destination(&destination)?;
        let name = path.field_name()?;

        if !self.columns.contains(name) {
            return Err(Error::column_not_selected(name, "a custom column mapping"));
        }

        self.insert_mapping(name.to_string(), destination)
    }

    /// Selects the property, then records its destination. The column stays
    /// selected even when the mapping is a duplicate.
    fn add_mapping(&mut self, property: String, destination: String) -> Result<()> {
        self.add_name(property.clone());
        self.insert_mapping(property, destination)
    }

    fn insert_mapping(&mut self, property: String, destination: String) -> Result<()> {
        match self.custom_column_mappings.entry(property) {
            Entry::Occupied(entry) => Err(Error::duplicate_column_mapping(entry.key().as_str())),
            Entry::Vacant(entry) => {
                entry.insert(destination);
                Ok(())
            }
        }
    }

    /// Replaces the column set with every copyable field of the model.
    pub(super) fn add_all_columns(&mut self) {
        if !self.columns.is_empty() {
            tracing::debug!(
                discarded = self.columns.len(),
                "add_all_columns replaces previously selected columns"
            );
        }

        self.columns = self
            .model
            .copyable_fields()
            .map(|field| field.name.clone())
            .collect();
    }

    pub(super) fn remove_path(&mut self, path: &Path<T>) -> Result<()> {
        let name = path.field_name()?;

        if self.columns.shift_remove(name) {
            Ok(())
        } else {
            Err(Error::column_not_selected(name, "a column to remove"))
        }
    }
}

fn check_destination(destination: &str) -> Result<()> {
    if destination.trim().is_empty() {
        Err(Error::invalid_argument(
            "destination",
            "destination column name must not be empty",
        ))
    } else {
        Ok(())
    }
}

/// Read-only views of the accumulated configuration, shared by every stage.
macro_rules! impl_table_state_accessors {
    ( $( $stage:ident ),* ) => {
        $(
            impl<T: $crate::Model> $stage<T> {
                /// The selected model fields.
                pub fn columns(&self) -> &indexmap::IndexSet<String> {
                    &self.state.columns
                }

                /// Property name to destination column name, where they differ.
                pub fn custom_column_mappings(&self) -> &indexmap::IndexMap<String, String> {
                    &self.state.custom_column_mappings
                }

                pub fn table_name(&self) -> &$crate::schema::TableName {
                    &self.state.table
                }

                /// The schema the operation targets; the default schema if none was supplied.
                pub fn schema(&self) -> &str {
                    self.state.table.effective_schema()
                }

                pub fn settings(&self) -> &$crate::BulkCopySettings {
                    &self.state.settings
                }

                /// The reflected field list of `T`, sorted by name.
                pub fn model(&self) -> &std::sync::Arc<$crate::schema::Model> {
                    &self.state.model
                }

                pub fn rows(&self) -> &[T] {
                    &self.state.rows
                }
            }
        )*
    };
}

pub(super) use impl_table_state_accessors;
