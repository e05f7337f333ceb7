use super::{
    insert::set_identity, lower::Target, state::impl_table_state_accessors,
    update::add_match_target, TableState,
};
use crate::{driver::OperationKind, Model, Path, Response, Result};

/// Updates matching destination rows and inserts the rest.
#[derive(Debug)]
pub struct BulkInsertOrUpdate<T> {
    state: TableState<T>,
    target: Target,
}

impl<T: Model> BulkInsertOrUpdate<T> {
    pub(super) fn new(state: TableState<T>) -> BulkInsertOrUpdate<T> {
        BulkInsertOrUpdate {
            state,
            target: Target::default(),
        }
    }

    pub fn match_target_on(mut self, column: Path<T>) -> Result<Self> {
        add_match_target(&mut self.target, &column)?;
        Ok(self)
    }

    pub fn set_identity_column(mut self, column: Path<T>) -> Result<Self> {
        set_identity(&mut self.target, &column)?;
        Ok(self)
    }

    /// Also deletes destination rows that no source row matches.
    pub fn delete_when_not_matched(mut self, flag: bool) -> Self {
        self.target.delete_when_not_matched = flag;
        self
    }

    pub async fn commit(self) -> Result<Response> {
        let bulk = self.state.bulk.clone();
        let operation = self
            .state
            .lower(OperationKind::InsertOrUpdate, self.target)?;
        bulk.exec(operation).await
    }
}

impl_table_state_accessors!(BulkInsertOrUpdate);
