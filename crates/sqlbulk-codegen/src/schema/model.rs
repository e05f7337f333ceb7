use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Model name
    pub(crate) name: String,

    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// The field accessor struct identifier
    pub(crate) field_struct_ident: syn::Ident,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            name: ast.ident.to_string(),
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            field_struct_ident: syn::Ident::new(
                &format!("{}Fields", ast.ident),
                ast.ident.span(),
            ),
        })
    }
}
