/// What an executor reports back after a bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Rows inserted, updated or deleted
    pub rows_affected: u64,
}

impl Response {
    pub fn count(rows_affected: u64) -> Response {
        Response { rows_affected }
    }
}
