use crate::{
    schema::{Model, TableName},
    stmt::{Type, ValueRecord},
    BulkCopySettings,
};

use std::{fmt, sync::Arc};

/// A fully configured bulk operation, read-only from here on.
#[derive(Debug, Clone)]
pub struct Operation {
    pub kind: OperationKind,

    /// Destination table
    pub table: TableName,

    /// Copy settings, as configured
    pub settings: BulkCopySettings,

    /// The reflected field list of the model, sorted by name
    pub model: Arc<Model>,

    /// Participating columns, in reflected order
    pub columns: Vec<Column>,

    /// Indices into `columns` used to match source rows to existing rows
    pub match_on: Vec<usize>,

    /// Index into `columns` of the identity column, if any
    pub identity: Option<usize>,

    /// Remove destination rows with no matching source row (upsert only)
    pub delete_when_not_matched: bool,

    /// One record per source instance; values are in `columns` order
    pub rows: Vec<ValueRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Insert,
    Update,
    InsertOrUpdate,
    Delete,
}

/// A participating column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Model field the value is read from
    pub property: String,

    /// Destination column in the table
    pub name: String,

    pub ty: Type,

    pub nullable: bool,
}

impl Operation {
    /// Finds a participating column by its model field name.
    pub fn column(&self, property: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.property == property)
    }

    /// Participating columns used as match targets.
    pub fn match_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.match_on.iter().map(|&index| &self.columns[index])
    }

    pub fn identity_column(&self) -> Option<&Column> {
        self.identity.map(|index| &self.columns[index])
    }
}

impl OperationKind {
    pub fn requires_match_target(self) -> bool {
        !matches!(self, Self::Insert)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "bulk insert",
            Self::Update => "bulk update",
            Self::InsertOrUpdate => "bulk insert or update",
            Self::Delete => "bulk delete",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
