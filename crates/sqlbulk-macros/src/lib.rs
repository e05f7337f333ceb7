extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `sqlbulk::Model` and the `fields()` column accessors.
///
/// Field attributes:
/// - `#[column("name")]`: default destination column name
/// - `#[bulk(primitive)]`: copy a custom type implementing `sqlbulk::Primitive`
/// - `#[bulk(object)]`: never copy this field
#[proc_macro_derive(Model, attributes(bulk, column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match sqlbulk_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
