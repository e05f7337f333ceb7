use super::{ty, Column, ErrorSet};

use quote::ToTokens;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier, as written
    pub(crate) ident: syn::Ident,

    /// Field name with any `r#` prefix removed
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Destination column from `#[column("...")]`
    pub(crate) column: Option<Column>,

    /// `#[bulk(primitive)]`
    pub(crate) primitive: Option<syn::Path>,

    /// `#[bulk(object)]`
    pub(crate) object: Option<syn::Path>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Copyable; the type implements `sqlbulk::Primitive`
    Primitive(syn::Type),

    /// Reflected but never copied
    Object(syn::Type),
}

impl FieldTy {
    /// The written type with token spacing removed, for diagnostics.
    pub(crate) fn rust_ty_name(&self) -> String {
        let (Self::Primitive(ty) | Self::Object(ty)) = self;
        ty.to_token_stream().to_string().replace(' ', "")
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("bulk") {
                let res = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("primitive") {
                        if attrs.primitive.replace(meta.path.clone()).is_some() {
                            return Err(meta.error("duplicate `primitive` option"));
                        }
                    } else if meta.path.is_ident("object") {
                        if attrs.object.replace(meta.path.clone()).is_some() {
                            return Err(meta.error("duplicate `object` option"));
                        }
                    } else {
                        return Err(meta.error("expected `primitive` or `object`"));
                    }
                    Ok(())
                });

                if let Err(err) = res {
                    errs.push(err);
                }
            }
        }

        if let (Some(_), Some(object)) = (&attrs.primitive, &attrs.object) {
            errs.push(syn::Error::new_spanned(
                object,
                "a field cannot be both `primitive` and `object`",
            ));
        }

        if let (Some(column), Some(_)) = (&attrs.column, &attrs.object) {
            errs.push(syn::Error::new_spanned(
                &column.name,
                "#[column] cannot be used on `object` fields",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let ty = if attrs.object.is_some() {
            FieldTy::Object(field.ty.clone())
        } else if attrs.primitive.is_some() || ty::is_primitive(&field.ty) {
            FieldTy::Primitive(field.ty.clone())
        } else {
            FieldTy::Object(field.ty.clone())
        };

        if attrs.column.is_some() && matches!(ty, FieldTy::Object(_)) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[column] requires a copyable field type; add #[bulk(primitive)] for custom types",
            ));
        }

        Ok(Self {
            attrs,
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty,
        })
    }
}
