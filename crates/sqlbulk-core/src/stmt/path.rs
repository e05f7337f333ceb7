use crate::{Error, Result};

/// An untyped reference to a model field: the model it is rooted at plus the
/// chain of field names stepped through from the root.
///
/// A column accessor is only valid when it is a direct member of the model,
/// i.e. the projection holds exactly one step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Name of the model the path is rooted at
    pub root: &'static str,

    /// Fields stepped through, starting at the root
    pub projection: Projection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Projection {
    steps: Vec<&'static str>,
}

impl Path {
    /// A path referencing the model itself.
    pub fn root(model: &'static str) -> Path {
        Path {
            root: model,
            projection: Projection::identity(),
        }
    }

    /// A path referencing a direct field of `model`.
    pub fn field(model: &'static str, field: &'static str) -> Path {
        Path {
            root: model,
            projection: Projection::single(field),
        }
    }

    /// Extends the path by one field.
    pub fn push(&mut self, field: &'static str) {
        self.projection.steps.push(field);
    }

    /// Resolves the path to the name of the field it accesses.
    ///
    /// Fails when the path does not reference exactly one direct field of
    /// `model`: the identity path, a nested path, or a path rooted at a
    /// different model.
    pub fn resolve_field_name(&self, model: &str) -> Result<&'static str> {
        if self.root != model {
            return Err(Error::invalid_column_expression(format!(
                "path is rooted at `{}`, expected `{}`",
                self.root, model
            )));
        }

        match self.projection.steps[..] {
            [field] => Ok(field),
            [] => Err(Error::invalid_column_expression(format!(
                "path references the `{model}` model itself, not one of its fields"
            ))),
            _ => Err(Error::invalid_column_expression(format!(
                "`{}` is not a direct field of `{}`",
                self.projection.steps.join("."),
                model
            ))),
        }
    }
}

impl Projection {
    pub const fn identity() -> Projection {
        Projection { steps: Vec::new() }
    }

    pub fn single(field: &'static str) -> Projection {
        Projection { steps: vec![field] }
    }
}
