//! Derive macro for `entity_collection::Entity`

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Member, Meta, NestedMeta, Path,
};

/// Implement `Entity` for a struct.
///
/// Exactly one field should be decorated with `#[entity(id)]`. Its value is cloned and converted into an `EntityId`.
/// The field must have a `From` conversion: `i8` to `i64`, `u8` to `u32`, `String`, `&str` or `EntityId` itself.
/// Wider integers such as `u64` and `usize` only have `TryFrom`, so store those as an `EntityId` field.
/// The struct can be decorated with `#[entity(entity_type = "SOME_STATIC")]` to use a static `EntityType`,
/// most likely declared with `entity_type!`. Otherwise, a type with no parents named after the struct is used.
///
/// Example:
/// ```ignore
/// entity_type! {
///     static VEHICLE = "Vehicle";
///     static CAR = "Car": [VEHICLE];
/// }
///
/// #[derive(Entity)]
/// #[entity(entity_type = "CAR")]
/// struct Car {
///     #[entity(id)]
///     plate: String,
///     seats: u8,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let struct_data = parse_macro_input!(input as DeriveInput);

    expand(&struct_data)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(struct_data: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_ident = &struct_data.ident;
    let (impl_generics, ty_generics, where_clause) = struct_data.generics.split_for_impl();

    let id_member = get_id_member(struct_data)?;
    let type_body = match get_entity_type(&struct_data.attrs)? {
        Some(path) => quote!(&#path),
        None => gen_default_type(&struct_ident.to_string()),
    };

    Ok(quote! {
        impl #impl_generics ::entity_collection::Entity for #struct_ident #ty_generics #where_clause {
            fn id(&self) -> ::entity_collection::EntityId {
                ::entity_collection::EntityId::from(::std::clone::Clone::clone(&self.#id_member))
            }

            fn entity_type(&self) -> &'static ::entity_collection::EntityType {
                #type_body
            }
        }
    })
}

/// Generates a parentless static type named after the struct.
///
/// Example output:
/// ```ignore
/// {
///     static ENTITY_TYPE: ::entity_collection::EntityType =
///         ::entity_collection::EntityType::new("Car", &[]);
///     &ENTITY_TYPE
/// }
/// ```
fn gen_default_type(name: &str) -> TokenStream2 {
    quote! {
        {
            static ENTITY_TYPE: ::entity_collection::EntityType =
                ::entity_collection::EntityType::new(#name, &[]);
            &ENTITY_TYPE
        }
    }
}

/// Gets everything inside `#[entity(...)]` attributes.
fn entity_metas(attrs: &[Attribute]) -> syn::Result<Vec<NestedMeta>> {
    let mut metas = vec![];
    for attr in attrs.iter().filter(|a| a.path.is_ident("entity")) {
        match attr.parse_meta()? {
            Meta::List(list) => metas.extend(list.nested),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected #[entity(...)]",
                ))
            }
        }
    }

    Ok(metas)
}

/// Finds the path given by `#[entity(entity_type = "...")]` on the struct, if there is one.
fn get_entity_type(attrs: &[Attribute]) -> syn::Result<Option<Path>> {
    let mut found = None;
    for meta in entity_metas(attrs)? {
        match meta {
            NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("entity_type") => {
                let path = match &nv.lit {
                    Lit::Str(s) => s.parse::<Path>()?,
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "entity_type should be a string containing a path",
                        ))
                    }
                };
                if found.replace(path).is_some() {
                    return Err(syn::Error::new_spanned(nv, "duplicate entity_type"));
                }
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "unknown entity attribute, expected entity_type = \"...\"",
                ))
            }
        }
    }

    Ok(found)
}

/// Gets the field decorated with `#[entity(id)]`
fn get_id_member(struct_data: &DeriveInput) -> syn::Result<Member> {
    let fields = match &struct_data.data {
        Data::Struct(s) => &s.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_data.ident,
                "Entity can only be derived for structs",
            ))
        }
    };

    let mut id_member = None;
    for (index, field) in fields.iter().enumerate() {
        let mut is_id = false;
        for meta in entity_metas(&field.attrs)? {
            match meta {
                NestedMeta::Meta(Meta::Path(p)) if p.is_ident("id") => is_id = true,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown entity attribute, expected id",
                    ))
                }
            }
        }

        if !is_id {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };
        if id_member.replace(member).is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "only one field can be marked #[entity(id)]",
            ));
        }
    }

    id_member.ok_or_else(|| match fields {
        Fields::Unit => syn::Error::new_spanned(
            &struct_data.ident,
            "Entity can't be derived for unit structs",
        ),
        _ => syn::Error::new_spanned(
            &struct_data.ident,
            "one field must be marked #[entity(id)]",
        ),
    })
}
