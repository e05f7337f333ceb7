use super::{
    lower::Target, state::impl_table_state_accessors, update::add_match_target, TableState,
};
use crate::{driver::OperationKind, Model, Path, Response, Result};

/// Deletes destination rows matching the source rows on the match target columns.
#[derive(Debug)]
pub struct BulkDelete<T> {
    state: TableState<T>,
    target: Target,
}

impl<T: Model> BulkDelete<T> {
    pub(super) fn new(state: TableState<T>) -> BulkDelete<T> {
        BulkDelete {
            state,
            target: Target::default(),
        }
    }

    pub fn match_target_on(mut self, column: Path<T>) -> Result<Self> {
        add_match_target(&mut self.target, &column)?;
        Ok(self)
    }

    pub async fn commit(self) -> Result<Response> {
        let bulk = self.state.bulk.clone();
        let operation = self.state.lower(OperationKind::Delete, self.target)?;
        bulk.exec(operation).await
    }
}

impl_table_state_accessors!(BulkDelete);
