use super::{lower::Target, state::impl_table_state_accessors, TableState};
use crate::{driver::OperationKind, Model, Path, Response, Result};

/// Updates destination rows matching the source rows on the match target columns.
#[derive(Debug)]
pub struct BulkUpdate<T> {
    state: TableState<T>,
    target: Target,
}

impl<T: Model> BulkUpdate<T> {
    pub(super) fn new(state: TableState<T>) -> BulkUpdate<T> {
        BulkUpdate {
            state,
            target: Target::default(),
        }
    }

    /// Adds a column used to match source rows to destination rows. At least
    /// one is required.
    pub fn match_target_on(mut self, column: Path<T>) -> Result<Self> {
        add_match_target(&mut self.target, &column)?;
        Ok(self)
    }

    pub async fn commit(self) -> Result<Response> {
        let bulk = self.state.bulk.clone();
        let operation = self.state.lower(OperationKind::Update, self.target)?;
        bulk.exec(operation).await
    }
}

pub(super) fn add_match_target<T: Model>(target: &mut Target, column: &Path<T>) -> Result<()> {
    let name = column.field_name()?;
    target.match_on.insert(name.to_string());
    Ok(())
}

impl_table_state_accessors!(BulkUpdate);
