mod description;

use description::FilterableDescription;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

pub fn derive_filterable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let desc = match FilterableDescription::parse(&input) {
        Ok(desc) => desc,
        Err(e) => return e.to_compile_error().into(),
    };

    let name = desc.name();
    let vis = desc.vis();
    let collection_str = desc.collection_str();
    let accessors_name = desc.accessors_name();

    let field_idents = desc.fields().iter().map(|f| &f.ident).collect::<Vec<_>>();
    let field_vis = desc.fields().iter().map(|f| &f.vis).collect::<Vec<_>>();
    let field_types = desc.fields().iter().map(|f| &f.ty).collect::<Vec<_>>();
    let field_names = desc.fields().iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    let accessors_doc = format!("Typed field accessors for [`{}`], generated by `#[derive(Filterable)]`.", name);

    let expanded: proc_macro2::TokenStream = quote! {
        #[doc = #accessors_doc]
        #vis struct #accessors_name;

        #[automatically_derived]
        #[allow(non_snake_case)]
        impl #accessors_name {
            #(
                #field_vis fn #field_idents(item: &#name) -> ::dynfilter::core::ValueRef<'_> {
                    ::dynfilter::core::FieldValue::value_ref(&item.#field_idents)
                }
            )*
        }

        #[automatically_derived]
        impl ::dynfilter::core::Filterable for #name {
            fn collection() -> &'static str { #collection_str }

            fn fields() -> &'static [::dynfilter::core::Field<Self>] {
                const FIELDS: &[::dynfilter::core::Field<#name>] = &[
                    #(
                        ::dynfilter::core::Field::new(
                            #field_names,
                            <#field_types as ::dynfilter::core::FieldValue>::VALUE_TYPE,
                            #accessors_name::#field_idents,
                        ),
                    )*
                ];
                FIELDS
            }
        }
    };

    expanded.into()
}
