use super::{lower::Target, state::impl_table_state_accessors, TableState};
use crate::{driver::OperationKind, Error, Model, Path, Response, Result};

/// Inserts every source row.
#[derive(Debug)]
pub struct BulkInsert<T> {
    state: TableState<T>,
    target: Target,
}

impl<T: Model> BulkInsert<T> {
    pub(super) fn new(state: TableState<T>) -> BulkInsert<T> {
        BulkInsert {
            state,
            target: Target::default(),
        }
    }

    /// Marks the column populated by the database. Executors leave it out of
    /// the insert unless `keep_identity` is set.
    pub fn set_identity_column(mut self, column: Path<T>) -> Result<Self> {
        set_identity(&mut self.target, &column)?;
        Ok(self)
    }

    pub async fn commit(self) -> Result<Response> {
        let bulk = self.state.bulk.clone();
        let operation = self.state.lower(OperationKind::Insert, self.target)?;
        bulk.exec(operation).await
    }
}

pub(super) fn set_identity<T: Model>(target: &mut Target, column: &Path<T>) -> Result<()> {
    let name = column.field_name()?;

    if let Some(existing) = &target.identity {
        return Err(Error::configuration_conflict(format!(
            "identity column `{existing}` has already been set"
        )));
    }

    target.identity = Some(name.to_string());
    Ok(())
}

impl_table_state_accessors!(BulkInsert);
