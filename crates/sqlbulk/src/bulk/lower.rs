use super::TableState;
use crate::{
    driver::{Column, Operation, OperationKind},
    schema::FieldTy,
    stmt::ValueRecord,
    Error, Model, Result,
};

use indexmap::IndexSet;

/// Operation specific settings collected after the column stage.
#[derive(Debug, Default)]
pub(super) struct Target {
    /// Fields used to match source rows against destination rows
    pub(super) match_on: IndexSet<String>,

    pub(super) identity: Option<String>,

    pub(super) delete_when_not_matched: bool,
}

impl<T: Model> TableState<T> {
    /// Validates the configuration against the reflected model and builds the
    /// operation handed to the executor.
    pub(super) fn lower(self, kind: OperationKind, target: Target) -> Result<Operation> {
        if self.columns.is_empty() {
            return Err(Error::invalid_argument(
                "columns",
                format!("{kind} on `{}` has no columns", self.table.qualified()),
            ));
        }

        for name in &self.columns {
            let Some(field) = self.model.field_by_name(name) else {
                return Err(Error::unknown_column(&self.model.name, name));
            };

            if let FieldTy::Object(object) = &field.ty {
                return Err(Error::unsupported_column_type(name, &object.rust_ty));
            }
        }

        for property in self.custom_column_mappings.keys() {
            if !self.columns.contains(property) {
                return Err(Error::column_not_selected(
                    property,
                    "a custom column mapping",
                ));
            }
        }

        // Reflected order, so executors see a stable layout.
        let columns: Vec<Column> = self
            .model
            .fields
            .iter()
            .filter(|field| self.columns.contains(&field.name))
            .filter_map(|field| {
                let ty = field.ty.as_primitive()?;
                let name = self
                    .custom_column_mappings
                    .get(&field.name)
                    .map(String::as_str)
                    .unwrap_or_else(|| field.default_column_name());

                Some(Column {
                    property: field.name.clone(),
                    name: name.to_string(),
                    ty,
                    nullable: field.nullable,
                })
            })
            .collect();

        let position = |property: &str, usage: &'static str| {
            columns
                .iter()
                .position(|column| column.property == property)
                .ok_or_else(|| Error::column_not_selected(property, usage))
        };

        let match_on = target
            .match_on
            .iter()
            .map(|property| position(property, "a match target"))
            .collect::<Result<Vec<_>>>()?;

        if kind.requires_match_target() && match_on.is_empty() {
            return Err(Error::missing_match_target(kind.as_str()));
        }

        let identity = target
            .identity
            .as_deref()
            .map(|property| position(property, "the identity column"))
            .transpose()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        let value = row.field_value(&column.property)?;

                        // A custom `Primitive` must produce values of its declared type
                        if column.ty.accepts(&value) {
                            Ok(value)
                        } else {
                            Err(Error::type_conversion(value, column.ty.as_str()))
                        }
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(ValueRecord::from_vec)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            %kind,
            table = %self.table.qualified(),
            columns = columns.len(),
            rows = rows.len(),
            "handing bulk operation to executor"
        );

        Ok(Operation {
            kind,
            table: self.table,
            settings: self.settings,
            model: self.model,
            columns,
            match_on,
            identity,
            delete_when_not_matched: target.delete_when_not_matched,
            rows,
        })
    }
}
