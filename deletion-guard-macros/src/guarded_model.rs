use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::ext::IdentExt as _;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned as _;
use syn::{DeriveInput, Ident, LitStr, Type};

use crate::utils;

/// Where a list of relation names or the deletion message comes from.
enum Source<T> {
    /// Given in the struct attribute.
    Static(T),
    /// Read from a field of the model.
    Field(Ident),
    /// Read from a `DeletionPolicy` field of the model.
    Policy(Ident),
}

/// Options collected from the `#[guarded(...)]` attributes.
#[derive(Default)]
struct ModelOptions {
    error: Option<Type>,
    relations: Vec<Ident>,
    excluded: Option<Source<Vec<String>>>,
    included: Option<Source<Vec<String>>>,
    message: Option<Source<LitStr>>,
    conditions: bool,
}

/// Generate implementation of `GuardedModel` trait.
pub fn guarded_model(
    DeriveInput {
        ident,
        data,
        generics,
        attrs,
        ..
    }: DeriveInput,
) -> syn::Result<TokenStream2> {
    let syn::Data::Struct(struct_data) = data else {
        return Err(syn::Error::new(
            ident.span(),
            format!("Cannot derive GuardedModel for {ident}; it can only be derived for structs"),
        ));
    };

    let mut options = ModelOptions::default();
    for attr in attrs.iter().filter(|attr| utils::is_guarded(attr)) {
        attr.parse_nested_meta(|meta| parse_struct_option(&mut options, meta))?;
    }
    for field in struct_data.fields.iter() {
        for attr in field.attrs.iter().filter(|attr| utils::is_guarded(attr)) {
            let Some(field_ident) = field.ident.clone() else {
                return Err(syn::Error::new(
                    field.span(),
                    "guarded fields must be named fields",
                ));
            };
            attr.parse_nested_meta(|meta| parse_field_option(&mut options, &field_ident, meta))?;
        }
    }

    let error = impl_error_type(options.error.as_ref());
    let relations = impl_relations(&options.relations);
    let conditions = impl_specific_conditions(options.conditions);
    let excluded = impl_relation_names("excluded_relations", options.excluded.as_ref());
    let included = impl_relation_names("included_relations", options.included.as_ref());
    let message = impl_deletion_message(options.message.as_ref());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics ::deletion_guard::prelude::GuardedModel for #ident #ty_generics #where_clause {
            #error

            #relations

            #conditions

            #excluded

            #included

            #message
        }
    })
}

/// Parse an option of the struct attribute.
fn parse_struct_option(options: &mut ModelOptions, meta: ParseNestedMeta) -> syn::Result<()> {
    let span = meta.path.span();
    if meta.path.is_ident("error") {
        let ty: Type = meta.value()?.parse()?;
        utils::set_once(&mut options.error, ty, span, "error")
    } else if meta.path.is_ident("relations") {
        meta.parse_nested_meta(|relation| {
            let ident = relation
                .path
                .get_ident()
                .cloned()
                .ok_or_else(|| relation.error("expected the name of a relation method"))?;
            if options.relations.iter().any(|declared| *declared == ident) {
                return Err(relation.error(format!("relation `{ident}` is declared twice")));
            }
            options.relations.push(ident);
            Ok(())
        })
    } else if meta.path.is_ident("excluded") {
        let names = parse_names(&meta)?;
        utils::set_once(
            &mut options.excluded,
            Source::Static(names),
            span,
            "excluded relations",
        )
    } else if meta.path.is_ident("included") {
        let names = parse_names(&meta)?;
        utils::set_once(
            &mut options.included,
            Source::Static(names),
            span,
            "included relations",
        )
    } else if meta.path.is_ident("message") {
        let message: LitStr = meta.value()?.parse()?;
        utils::set_once(
            &mut options.message,
            Source::Static(message),
            span,
            "deletion message",
        )
    } else if meta.path.is_ident("conditions") {
        options.conditions = true;
        Ok(())
    } else {
        Err(meta.error("unsupported guarded option"))
    }
}

/// Parse an option of a field attribute.
fn parse_field_option(
    options: &mut ModelOptions,
    field: &Ident,
    meta: ParseNestedMeta,
) -> syn::Result<()> {
    let span = meta.path.span();
    if meta.path.is_ident("deletion_message") {
        utils::set_once(
            &mut options.message,
            Source::Field(field.clone()),
            span,
            "deletion message",
        )
    } else if meta.path.is_ident("excluded_relations") {
        utils::set_once(
            &mut options.excluded,
            Source::Field(field.clone()),
            span,
            "excluded relations",
        )
    } else if meta.path.is_ident("included_relations") {
        utils::set_once(
            &mut options.included,
            Source::Field(field.clone()),
            span,
            "included relations",
        )
    } else if meta.path.is_ident("policy") {
        utils::set_once(
            &mut options.excluded,
            Source::Policy(field.clone()),
            span,
            "excluded relations",
        )?;
        utils::set_once(
            &mut options.included,
            Source::Policy(field.clone()),
            span,
            "included relations",
        )?;
        utils::set_once(
            &mut options.message,
            Source::Policy(field.clone()),
            span,
            "deletion message",
        )
    } else {
        Err(meta.error("unsupported guarded field option"))
    }
}

/// Parse a list of relation names, e.g. `excluded(posts, comments)`.
fn parse_names(meta: &ParseNestedMeta) -> syn::Result<Vec<String>> {
    let mut names = Vec::new();
    meta.parse_nested_meta(|name| {
        let ident = name
            .path
            .get_ident()
            .ok_or_else(|| name.error("expected the name of a relation"))?;
        names.push(ident.unraw().to_string());
        Ok(())
    })?;
    Ok(names)
}

/// Generate the `Error` associated type.
fn impl_error_type(error: Option<&Type>) -> TokenStream2 {
    match error {
        Some(ty) => quote::quote! { type Error = #ty; },
        None => quote::quote! { type Error = ::deletion_guard::prelude::DeletionGuardError; },
    }
}

/// Generate implementation of `relations` method.
fn impl_relations(relations: &[Ident]) -> TokenStream2 {
    let defs = relations.iter().map(|accessor| {
        let name = LitStr::new(&accessor.unraw().to_string(), accessor.span());
        quote::quote! {
            ::deletion_guard::prelude::RelationDef {
                name: #name,
                accessor: Self::#accessor,
            }
        }
    });

    quote::quote! {
        fn relations() -> &'static [::deletion_guard::prelude::RelationDef<Self>] {
            &[#(#defs),*]
        }
    }
}

/// Generate implementation of `conditions` method.
fn impl_specific_conditions(conditions: bool) -> TokenStream2 {
    if !conditions {
        return TokenStream2::new();
    }

    quote::quote! {
        fn conditions(
            &self,
        ) -> Option<&dyn ::deletion_guard::prelude::SpecificConditions<Error = Self::Error>> {
            Some(self)
        }
    }
}

/// Generate implementation of `excluded_relations` or `included_relations` method.
fn impl_relation_names(method: &str, source: Option<&Source<Vec<String>>>) -> TokenStream2 {
    let Some(source) = source else {
        return TokenStream2::new();
    };
    let method = Ident::new(method, Span::call_site());

    let body = match source {
        Source::Static(names) => quote::quote! {
            Some(::deletion_guard::prelude::RelationNames::Static(&[#(#names),*]))
        },
        Source::Field(field) => quote::quote! {
            ::deletion_guard::prelude::AsRelationNames::as_relation_names(&self.#field)
        },
        Source::Policy(field) => quote::quote! {
            self.#field.#method()
        },
    };

    quote::quote! {
        fn #method(&self) -> Option<::deletion_guard::prelude::RelationNames<'_>> {
            #body
        }
    }
}

/// Generate implementation of `deletion_message` method.
fn impl_deletion_message(source: Option<&Source<LitStr>>) -> TokenStream2 {
    let Some(source) = source else {
        return TokenStream2::new();
    };

    let body = match source {
        Source::Static(message) => quote::quote! { Some(#message) },
        Source::Field(field) => quote::quote! { self.#field.as_deref() },
        Source::Policy(field) => quote::quote! { self.#field.deletion_message() },
    };

    quote::quote! {
        fn deletion_message(&self) -> Option<&str> {
            #body
        }
    }
}
