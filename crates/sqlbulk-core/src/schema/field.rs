use crate::stmt;

/// A reflected field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name as written on the Rust struct
    pub name: String,

    /// Destination column name declared with `#[column("...")]`, if any
    pub column_name: Option<String>,

    /// Copyable primitive or opaque object
    pub ty: FieldTy,

    /// True if the field can be null (`Option` in Rust).
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    /// Scalar, string, character array or byte array
    Primitive(stmt::Type),

    /// Any other type: nested structs, collections, trait objects, ...
    Object(ObjectTy),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTy {
    /// The Rust type as written on the field
    pub rust_ty: String,
}

impl Field {
    pub fn primitive(name: impl Into<String>, ty: stmt::Type, nullable: bool) -> Field {
        Field {
            name: name.into(),
            column_name: None,
            ty: FieldTy::Primitive(ty),
            nullable,
        }
    }

    pub fn object(name: impl Into<String>, rust_ty: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            column_name: None,
            ty: FieldTy::Object(ObjectTy {
                rust_ty: rust_ty.into(),
            }),
            nullable: false,
        }
    }

    pub fn with_column_name(mut self, column_name: impl Into<String>) -> Field {
        self.column_name = Some(column_name.into());
        self
    }

    /// True if "add all columns" selects this field.
    pub fn is_copyable(&self) -> bool {
        self.ty.is_primitive()
    }

    /// The destination column used when no custom mapping overrides it.
    pub fn default_column_name(&self) -> &str {
        self.column_name.as_deref().unwrap_or(&self.name)
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<stmt::Type> {
        match self {
            Self::Primitive(ty) => Some(*ty),
            Self::Object(_) => None,
        }
    }
}
