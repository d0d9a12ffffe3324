use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MappedStructData;

/// Generates the `Mapped` / `MappedStruct` / `Typed` implementations, the
/// static descriptor table, and the registry submission.
pub(crate) fn impl_mapped(data: &MappedStructData) -> TokenStream {
    let ident = &data.ident;
    let type_name = &data.type_name;
    let field_len = data.fields.len();

    let field_infos = data.fields.iter().map(|field| {
        let name = &field.name;
        let modifiers = &field.modifiers;
        let mut tokens = quote! {
            pson::info::FieldInfo::new(#name, &[ #( #modifiers ),* ])
        };
        if field.exposed {
            tokens = quote! { #tokens.with_expose() };
        }
        if let Some(class) = &field.class_hint {
            tokens = quote! { #tokens.with_class(#class) };
        }
        tokens
    });

    let field_names = data.fields.iter().map(|field| &field.name);
    let field_names_mut = field_names.clone();
    let field_idents = data.fields.iter().map(|field| &field.ident);
    let field_idents_mut = field_idents.clone();
    let blank_idents = field_idents.clone();

    quote! {
        const _: () = {
            static FIELDS: [pson::info::FieldInfo; #field_len] = [ #( #field_infos ),* ];
            static INFO: pson::info::StructInfo = pson::info::StructInfo::new(#type_name, &FIELDS);

            impl pson::Mapped for #ident {
                #[inline]
                fn type_name(&self) -> &'static str {
                    #type_name
                }

                #[inline]
                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                #[inline]
                fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                    self
                }

                #[inline]
                fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::core::any::Any> {
                    self
                }

                #[inline]
                fn mapped_ref(&self) -> pson::MappedRef<'_> {
                    pson::MappedRef::Struct(self)
                }

                #[inline]
                fn mapped_mut(&mut self) -> pson::MappedMut<'_> {
                    pson::MappedMut::Struct(self)
                }

                fn assign_boxed(
                    &mut self,
                    value: ::std::boxed::Box<dyn ::core::any::Any>,
                ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::core::any::Any>> {
                    *self = *value.downcast::<Self>()?;
                    ::core::result::Result::Ok(())
                }
            }

            impl pson::MappedStruct for #ident {
                #[inline]
                fn mapped_info(&self) -> &'static pson::info::StructInfo {
                    &INFO
                }

                fn field(&self, name: &str) -> ::core::option::Option<&dyn pson::Mapped> {
                    match name {
                        #( #field_names => ::core::option::Option::Some(&self.#field_idents), )*
                        _ => ::core::option::Option::None,
                    }
                }

                fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn pson::Mapped> {
                    match name {
                        #( #field_names_mut => ::core::option::Option::Some(&mut self.#field_idents_mut), )*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl pson::Typed for #ident {
                #[inline]
                fn struct_info() -> &'static pson::info::StructInfo {
                    &INFO
                }

                fn blank() -> Self {
                    Self {
                        #( #blank_idents: ::core::default::Default::default(), )*
                    }
                }
            }

            pson::__macro_exports::inventory::submit! {
                pson::registry::RegistryEntry::new(pson::registry::TypeMeta::of::<#ident>)
            }
        };
    }
}
