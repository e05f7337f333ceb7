use crate::{schema, stmt::Value, Result};

/// A type whose instances can be bulk copied into a table.
///
/// Implemented with `#[derive(sqlbulk::Model)]`. The derive also generates an
/// inherent `fields()` function returning typed [`Path`](crate::Path)s for each
/// field, used to select columns.
pub trait Model: Sized {
    /// Name of the model type
    const NAME: &'static str;

    /// The reflected field list of the model, sorted by field name.
    fn schema() -> schema::Model;

    /// Reads the value of a field by name.
    ///
    /// Fails for unknown fields and for fields whose type cannot be copied.
    fn field_value(&self, field: &str) -> Result<Value>;
}
