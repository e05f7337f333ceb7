use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `User::fields().name()` style accessors returning `Path<User>`.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let field_struct_ident = &self.model.field_struct_ident;

        let methods = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let name = &field.name;

            quote! {
                #vis fn #ident(&self) -> #sqlbulk::Path<#model_ident> {
                    #sqlbulk::Path::from_field_name(#name)
                }
            }
        });

        quote! {
            #[derive(Debug, Clone, Copy)]
            #vis struct #field_struct_ident;

            impl #field_struct_ident {
                #( #methods )*
            }

            impl #model_ident {
                #vis fn fields() -> #field_struct_ident {
                    #field_struct_ident
                }
            }
        }
    }
}
