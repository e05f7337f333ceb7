use crate::{Model, Result};
use sqlbulk_core::stmt;

use std::{fmt, marker::PhantomData};

/// A typed reference to a field of model `M`, used to select columns.
///
/// Obtained from the generated accessors, e.g. `User::fields().name()`.
pub struct Path<M> {
    untyped: stmt::Path,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Path<M> {
    /// A path referencing the model itself rather than one of its fields.
    ///
    /// Selecting a column with this path fails: only direct fields are columns.
    pub fn root() -> Self {
        Self::from_untyped(stmt::Path::root(M::NAME))
    }

    #[doc(hidden)]
    pub fn from_field_name(field: &'static str) -> Self {
        Self::from_untyped(stmt::Path::field(M::NAME, field))
    }

    /// Resolves the path to the name of the field it accesses.
    pub fn field_name(&self) -> Result<&'static str> {
        self.untyped.resolve_field_name(M::NAME)
    }
}

impl<M> Path<M> {
    pub const fn from_untyped(untyped: stmt::Path) -> Self {
        Self {
            untyped,
            _p: PhantomData,
        }
    }

    pub fn untyped(&self) -> &stmt::Path {
        &self.untyped
    }

    pub fn into_untyped(self) -> stmt::Path {
        self.untyped
    }
}

impl<M> Clone for Path<M> {
    fn clone(&self) -> Self {
        Self::from_untyped(self.untyped.clone())
    }
}

impl<M> fmt::Debug for Path<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}

impl<M> From<Path<M>> for stmt::Path {
    fn from(value: Path<M>) -> Self {
        value.untyped
    }
}
