use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, Attribute, Data, DataEnum, DataStruct, DeriveInput, Field,
    Fields, Generics, Ident, Index,
};

/// Implements `memsize::Introspect` for a struct or enum as a record.
///
/// Every field is a child of the record. Fields marked `#[introspect(skip)]`
/// are left out; their static size is still part of the record's.
#[proc_macro_derive(Introspect, attributes(introspect))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);

    let expanded = match derive_input.data {
        Data::Struct(ref struct_data) => derive_introspect_for_struct(
            &derive_input.ident,
            struct_data,
            &derive_input.generics,
        ),

        Data::Enum(ref enum_data) => {
            derive_introspect_for_enum(&derive_input.ident, enum_data, &derive_input.generics)
        }

        // We have no way of knowing which union member is active.
        Data::Union(ref union_data) => Err(syn::Error::new(
            union_data.union_token.span(),
            "`Introspect` cannot be derived for unions",
        )),
    };

    expanded
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skipped = false;

    for attr in attrs.iter().filter(|attr| attr.path.is_ident("introspect")) {
        let option: Ident = attr.parse_args()?;
        if option == "skip" {
            skipped = true;
        } else {
            return Err(syn::Error::new(
                option.span(),
                format!("unknown `introspect` option `{}`", option),
            ));
        }
    }

    Ok(skipped)
}

fn field_label(field: &Field, position: usize) -> TokenStream2 {
    match field.ident {
        Some(ref ident) => {
            let name = ident.unraw().to_string();
            quote! { ::memsize::Label::Field(#name) }
        }
        None => quote! { ::memsize::Label::Position(#position) },
    }
}

// `children` is `None` when the type never has anything to visit.
fn impl_introspect(
    name: &Ident,
    generics: &Generics,
    children: Option<TokenStream2>,
) -> TokenStream2 {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.colon_token.get_or_insert_with(Default::default);
        param.bounds.push(parse_quote!(::memsize::Introspect));
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let visit_children = children.map(|children| {
        quote! {
            fn visit_children(&self, visitor: &mut dyn ::memsize::ChildVisitor) {
                #children
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics ::memsize::Introspect for #name #type_generics #where_clause {
            fn shape(&self) -> ::memsize::Shape {
                ::memsize::Shape::Record {
                    static_size: ::std::mem::size_of::<Self>(),
                }
            }

            #visit_children
        }
    }
}

fn derive_introspect_for_struct(
    struct_name: &Ident,
    data: &DataStruct,
    generics: &Generics,
) -> syn::Result<TokenStream2> {
    let mut visits = Vec::new();

    for (position, field) in data.fields.iter().enumerate() {
        if is_skipped(&field.attrs)? {
            continue;
        }

        let label = field_label(field, position);
        let member = match field.ident {
            Some(ref ident) => quote! { #ident },
            None => {
                let index = Index::from(position);
                quote! { #index }
            }
        };
        let span = field.span();

        visits.push(quote_spanned! {
            span => visitor.visit(#label, &self.#member);
        });
    }

    let children = if visits.is_empty() {
        None
    } else {
        Some(quote! { #( #visits )* })
    };

    Ok(impl_introspect(struct_name, generics, children))
}

fn derive_introspect_for_enum(
    enum_name: &Ident,
    data: &DataEnum,
    generics: &Generics,
) -> syn::Result<TokenStream2> {
    let mut match_arms = Vec::new();
    let mut has_children = false;

    for variant in &data.variants {
        let ident = &variant.ident;
        let span = ident.span();

        let mut bindings = Vec::new();
        let mut visits = Vec::new();

        for (position, field) in variant.fields.iter().enumerate() {
            let skipped = is_skipped(&field.attrs)?;
            let binding = match field.ident {
                Some(ref ident) => ident.clone(),
                None => format_ident!("value{}", position),
            };

            if skipped {
                bindings.push(match field.ident {
                    Some(ref ident) => quote! { #ident: _ },
                    None => quote! { _ },
                });
                continue;
            }

            let label = field_label(field, position);
            bindings.push(quote! { #binding });
            visits.push(quote! { visitor.visit(#label, #binding); });
        }

        has_children |= !visits.is_empty();

        let pattern = match variant.fields {
            Fields::Named(_) => quote! { { #( #bindings ),* } },
            Fields::Unnamed(_) => quote! { ( #( #bindings ),* ) },
            Fields::Unit => quote! {},
        };

        match_arms.push(quote_spanned! {
            span => Self::#ident #pattern => { #( #visits )* }
        });
    }

    let children = if has_children {
        Some(quote! {
            match self {
                #( #match_arms )*
            }
        })
    } else {
        None
    };

    Ok(impl_introspect(enum_name, generics, children))
}
