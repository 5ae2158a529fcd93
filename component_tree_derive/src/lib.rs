mod tagged;

use proc_macro::TokenStream;

#[proc_macro_derive(Tagged)]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let ast = syn::parse(input).unwrap();
    tagged::impl_tagged(&ast)
}
