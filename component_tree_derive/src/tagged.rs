use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_tagged(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    // A lazily assigned static can't depend on type parameters.
    if !ast.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &ast.generics,
            "#[derive(Tagged)] does not support generic payload types",
        )
        .to_compile_error()
        .into();
    }

    let name_str = name.to_string().to_uppercase();
    let tag_name = format_ident!("__TYPE_TAG_OF_{}", name_str);

    let gen = quote! {
        component_tree::lazy_static! {
            static ref #tag_name: component_tree::components::TypeTag =
                component_tree::components::type_tag::next_tag();
        }

        impl component_tree::components::Tagged for #name {
            #[inline(always)]
            fn type_tag() -> component_tree::components::TypeTag {
                *#tag_name
            }

            #[inline(always)]
            fn kind_name() -> &'static str {
                stringify!(#name)
            }
        }
    };
    gen.into()
}
