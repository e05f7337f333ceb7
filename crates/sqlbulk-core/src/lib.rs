pub mod driver;
pub use driver::Executor;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

mod settings;
pub use settings::{BulkCopySettings, CopyOptions};

pub mod stmt;

/// A Result type alias that uses sqlbulk's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
