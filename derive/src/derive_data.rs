use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Visibility};

use crate::PSON_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Modifier

/// A parsed field modifier, emitted as a `pson::info::FieldModifier` path.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Modifier {
    Public,
    Protected,
    Private,
    Static,
}

impl Modifier {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            "static" => Ok(Self::Static),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unknown modifier `{other}`; expected `public`, `protected`, `private` or `static`"
                ),
            )),
        }
    }

    fn from_visibility(vis: &Visibility) -> Self {
        match vis {
            Visibility::Public(_) | Visibility::Restricted(_) => Self::Public,
            Visibility::Inherited => Self::Private,
        }
    }
}

impl ToTokens for Modifier {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Public => quote!(pson::info::FieldModifier::Public),
            Self::Protected => quote!(pson::info::FieldModifier::Protected),
            Self::Private => quote!(pson::info::FieldModifier::Private),
            Self::Static => quote!(pson::info::FieldModifier::Static),
        });
    }
}

// -----------------------------------------------------------------------------
// MappedFieldData

/// Everything the codegen needs to know about one named field.
pub(crate) struct MappedFieldData {
    pub ident: Ident,
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub exposed: bool,
    pub class_hint: Option<String>,
}

impl MappedFieldData {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let ident = field.ident.clone().expect("named field");
        let name = ident.to_string().trim_start_matches("r#").to_owned();

        let mut declared = Vec::new();
        let mut exposed = false;
        let mut class_hint = None;

        for attr in &field.attrs {
            if !attr.path().is_ident(PSON_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("expose") {
                    exposed = true;
                    Ok(())
                } else if meta.path.is_ident("class") {
                    let lit: LitStr = meta.value()?.parse()?;
                    class_hint = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("modifier") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let modifier = Modifier::parse(&lit)?;
                    if !declared.contains(&modifier) {
                        declared.push(modifier);
                    }
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown pson field attribute; expected `expose`, `class` or `modifier`",
                    ))
                }
            })?;
        }

        // Declared modifiers replace the visibility-derived one.
        let modifiers = if declared.is_empty() {
            vec![Modifier::from_visibility(&field.vis)]
        } else {
            declared
        };

        Ok(Self {
            ident,
            name,
            modifiers,
            exposed,
            class_hint,
        })
    }
}

// -----------------------------------------------------------------------------
// MappedStructData

/// The parsed derive input: a non-generic struct with named fields.
pub(crate) struct MappedStructData {
    pub ident: Ident,
    pub type_name: String,
    pub fields: Vec<MappedFieldData>,
}

impl MappedStructData {
    pub(crate) fn parse(input: &DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`#[derive(Mapped)]` does not support generic types (the registry is name-keyed)",
            ));
        }

        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`#[derive(Mapped)]` only supports structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`#[derive(Mapped)]` only supports structs with named fields",
            ));
        };

        let mut type_name = input.ident.to_string();
        for attr in &input.attrs {
            if !attr.path().is_ident(PSON_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    type_name = lit.value();
                    Ok(())
                } else {
                    Err(meta.error("unknown pson type attribute; expected `name`"))
                }
            })?;
        }

        let fields = named
            .named
            .iter()
            .map(MappedFieldData::parse)
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: input.ident.clone(),
            type_name,
            fields,
        })
    }
}
