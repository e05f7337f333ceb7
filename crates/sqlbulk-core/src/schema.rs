mod field;
pub use field::{Field, FieldTy, ObjectTy};

mod mapping;
pub use mapping::ColumnMapping;

mod model;
pub use model::Model;

mod table;
pub use table::{TableName, DEFAULT_SCHEMA};
