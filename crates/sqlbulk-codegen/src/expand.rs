mod fields;
mod model;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for sqlbulk types
    sqlbulk: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #model_impls
            #field_struct
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        sqlbulk: quote!(_sqlbulk::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlbulk as _sqlbulk;
            #code
        };
    }
}
