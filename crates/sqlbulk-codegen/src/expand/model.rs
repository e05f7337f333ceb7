use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;
        let model_ident = &self.model.ident;
        let model_name = &self.model.name;
        let schema_fields = self.expand_schema_fields();
        let value_arms = self.expand_field_value_arms();

        quote! {
            impl #sqlbulk::Model for #model_ident {
                const NAME: &'static str = #model_name;

                fn schema() -> #sqlbulk::schema::Model {
                    #sqlbulk::schema::Model::new(Self::NAME, vec![ #( #schema_fields ),* ])
                }

                fn field_value(&self, field: &str) -> #sqlbulk::Result<#sqlbulk::Value> {
                    match field {
                        #( #value_arms )*
                        _ => Err(#sqlbulk::Error::unknown_column(Self::NAME, field)),
                    }
                }
            }
        }
    }

    fn expand_schema_fields(&self) -> Vec<TokenStream> {
        let sqlbulk = &self.sqlbulk;

        self.model
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;

                match &field.ty {
                    FieldTy::Primitive(ty) => {
                        let column_name = field.attrs.column.as_ref().map(|column| {
                            let lit = &column.name;
                            quote!(.with_column_name(#lit))
                        });

                        quote! {
                            #sqlbulk::schema::Field::primitive(
                                #name,
                                <#ty as #sqlbulk::Primitive>::TYPE,
                                <#ty as #sqlbulk::Primitive>::NULLABLE,
                            ) #column_name
                        }
                    }
                    FieldTy::Object(_) => {
                        let rust_ty = field.ty.rust_ty_name();
                        quote!(#sqlbulk::schema::Field::object(#name, #rust_ty))
                    }
                }
            })
            .collect()
    }

    fn expand_field_value_arms(&self) -> Vec<TokenStream> {
        let sqlbulk = &self.sqlbulk;

        self.model
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;
                let ident = &field.ident;

                match &field.ty {
                    FieldTy::Primitive(ty) => quote! {
                        #name => Ok(<#ty as #sqlbulk::Primitive>::to_value(&self.#ident)),
                    },
                    FieldTy::Object(_) => {
                        let rust_ty = field.ty.rust_ty_name();
                        quote! {
                            #name => Err(#sqlbulk::Error::unsupported_column_type(#name, #rust_ty)),
                        }
                    }
                }
            })
            .collect()
    }
}
