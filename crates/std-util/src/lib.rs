//! Assertion helpers shared by the sqlbulk test suites.

pub mod result;

pub mod prelude {
    pub use crate::{assert_err, assert_err_kind, assert_ok};
}
