mod filterable;

use proc_macro::TokenStream;

/// Register a struct's named fields for filtering.
///
/// Generates `impl dynfilter::Filterable` plus a companion `{Name}Fields` struct holding one getter
/// per field, usable as a typed accessor with `Filter::add_typed`.
///
/// Field attributes:
/// - `#[filterable(rename = "Name")]` registers the field under another name
/// - `#[filterable(skip)]` leaves the field out
#[proc_macro_derive(Filterable, attributes(filterable))]
pub fn derive_filterable(input: TokenStream) -> TokenStream { filterable::derive_filterable_impl(input) }
