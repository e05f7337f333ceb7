mod path;
pub use path::Path;

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

pub use sqlbulk_core::stmt::{Projection, Type, Value, ValueRecord};
