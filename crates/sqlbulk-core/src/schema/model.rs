use super::Field;

/// The reflected field list of a model type, sorted by field name.
///
/// Captured once when a bulk table is configured and handed, read-only, to
/// the executor along with the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the model type
    pub name: String,

    /// Fields, sorted by name
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, mut fields: Vec<Field>) -> Model {
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        Model {
            name: name.into(),
            fields,
        }
    }

    /// Find a field by name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields whose type is a scalar, string, character array or byte array.
    pub fn copyable_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_copyable())
    }
}
