mod path;
pub use path::{Path, Projection};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;
