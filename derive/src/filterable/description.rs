use quote::format_ident;
use syn::{ext::IdentExt, Data, DeriveInput, Fields, Ident, LitStr, Type, Visibility};

/// Everything the derive needs to know about one registered field
pub struct FieldDescription {
    pub ident: Ident,
    pub vis: Visibility,
    pub ty: Type,
    /// Name conditions refer to the field by
    pub name: String,
}

/// Parsed form of a `#[derive(Filterable)]` input
pub struct FilterableDescription {
    name: Ident,
    vis: Visibility,
    fields: Vec<FieldDescription>,
}

impl FilterableDescription {
    pub fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let name = input.ident.clone();

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(&input.generics, "Filterable cannot be derived for generic types"));
        }

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                fields => return Err(syn::Error::new_spanned(fields, "Only named fields are supported")),
            },
            _ => return Err(syn::Error::new_spanned(&name, "Only structs are supported")),
        };

        let mut fields = Vec::new();
        for field in named {
            let Some(ident) = field.ident.clone() else { continue };
            let attrs = FieldAttrs::parse(&field.attrs)?;
            if attrs.skip {
                continue;
            }
            let name = attrs.rename.unwrap_or_else(|| ident.unraw().to_string());
            if let Some(existing) = fields.iter().find(|f: &&FieldDescription| f.name == name) {
                return Err(syn::Error::new_spanned(
                    &ident,
                    format!("field name \"{}\" is already registered by `{}`", name, existing.ident),
                ));
            }
            fields.push(FieldDescription { ident, vis: field.vis.clone(), ty: field.ty.clone(), name });
        }

        Ok(Self { name, vis: input.vis.clone(), fields })
    }

    pub fn name(&self) -> &Ident { &self.name }
    pub fn collection_str(&self) -> String { self.name.to_string() }
    pub fn vis(&self) -> &Visibility { &self.vis }
    pub fn accessors_name(&self) -> Ident { format_ident!("{}Fields", self.name) }
    pub fn fields(&self) -> &[FieldDescription] { &self.fields }
}

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut parsed = FieldAttrs::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("filterable")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    parsed.rename = Some(name.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }
        Ok(parsed)
    }
}
