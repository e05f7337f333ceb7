//! Fluent configuration of bulk insert, update, upsert and delete operations.
//!
//! ```ignore
//! #[derive(Debug, sqlbulk::Model)]
//! struct Book {
//!     id: i32,
//!     title: String,
//!     #[column("isbn_13")]
//!     isbn: String,
//! }
//!
//! let bulk = sqlbulk::BulkOperations::new(executor);
//!
//! bulk.setup::<Book>()
//!     .for_collection(books)
//!     .with_table("library.Books")?
//!     .add_column(Book::fields().id())?
//!     .add_column_as(Book::fields().title(), "book_title")?
//!     .bulk_insert()
//!     .commit()
//!     .await?;
//! ```
extern crate self as sqlbulk;

pub mod bulk;
pub use bulk::{
    BulkAddColumn, BulkAddColumnList, BulkDelete, BulkForCollection, BulkInsert,
    BulkInsertOrUpdate, BulkOperations, BulkTable, BulkUpdate, Setup,
};

mod model;
pub use model::Model;

pub mod stmt;
pub use stmt::{Path, Primitive};

pub use sqlbulk_core::{
    driver::{self, Executor, Response},
    schema::{self, ColumnMapping},
    BulkCopySettings, CopyOptions, Error, Result,
};

pub use sqlbulk_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{Path, Primitive},
        Error, Model, Result,
    };
    pub use sqlbulk_core::{
        schema,
        stmt::{Type, Value},
    };
}
