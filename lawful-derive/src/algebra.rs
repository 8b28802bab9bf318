//! Field-wise expansion shared by the three algebra derives.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, Type};

/// Which algebra is being derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algebra {
    Semigroup,
    Monoid,
    Group,
}

impl Algebra {
    const fn name(self) -> &'static str {
        match self {
            Self::Semigroup => "Semigroup",
            Self::Monoid => "Monoid",
            Self::Group => "Group",
        }
    }

    fn trait_path(self) -> TokenStream2 {
        match self {
            Self::Semigroup => quote!(::lawful::typeclass::Semigroup),
            Self::Monoid => quote!(::lawful::typeclass::Monoid),
            Self::Group => quote!(::lawful::typeclass::Group),
        }
    }
}

/// Expands a derive of `algebra` for `input`, or a compile error.
pub fn expand(input: &DeriveInput, algebra: Algebra) -> TokenStream2 {
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                format!("{} can only be derived for structs, not enums.", algebra.name()),
            )
            .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                format!("{} cannot be derived for unions.", algebra.name()),
            )
            .to_compile_error();
        }
    };

    let trait_path = algebra.trait_path();
    let members = members(fields);
    let body = match algebra {
        Algebra::Semigroup => {
            let combined = members
                .iter()
                .map(|member| quote!(#trait_path::combine(self.#member, other.#member)));
            let value = construct(fields, &members, combined);
            quote! {
                #[inline]
                #[allow(unused_variables)]
                fn combine(self, other: Self) -> Self {
                    #value
                }
            }
        }
        Algebra::Monoid => {
            let empties = members.iter().map(|_| quote!(#trait_path::empty()));
            let value = construct(fields, &members, empties);
            quote! {
                #[inline]
                fn empty() -> Self {
                    #value
                }
            }
        }
        Algebra::Group => {
            let inverses = members
                .iter()
                .map(|member| quote!(#trait_path::inverse(self.#member)));
            let value = construct(fields, &members, inverses);
            quote! {
                #[inline]
                #[allow(unused_variables)]
                fn inverse(self) -> Self {
                    #value
                }
            }
        }
    };

    let mut generics = input.generics.clone();
    let where_clause = generics.make_where_clause();
    for field_type in fields.iter().map(|field| &field.ty) {
        where_clause.predicates.push(bound(field_type, &trait_path));
    }

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #trait_path for #name #type_generics #where_clause {
            #body
        }
    }
}

fn bound(field_type: &Type, trait_path: &TokenStream2) -> syn::WherePredicate {
    syn::parse_quote!(#field_type: #trait_path)
}

/// The access path of every field, in declaration order.
fn members(fields: &Fields) -> Vec<Member> {
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| {
            field
                .ident
                .clone()
                .map_or_else(|| Member::Unnamed(Index::from(position)), Member::Named)
        })
        .collect()
}

/// Builds `Self` with one expression per field.
fn construct(
    fields: &Fields,
    members: &[Member],
    values: impl Iterator<Item = TokenStream2>,
) -> TokenStream2 {
    match fields {
        Fields::Named(_) => {
            let assignments = members
                .iter()
                .zip(values)
                .map(|(member, value)| quote!(#member: #value));
            quote!(Self { #(#assignments),* })
        }
        Fields::Unnamed(_) => quote!(Self(#(#values),*)),
        Fields::Unit => quote!(Self),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn expanded(input: &DeriveInput, algebra: Algebra) -> String {
        expand(input, algebra).to_string()
    }

    #[rstest]
    fn named_fields_combine_pairwise() {
        let input: DeriveInput = parse_quote! {
            struct Stats { count: Sum<u32>, peak: Max<i64> }
        };
        let output = expanded(&input, Algebra::Semigroup);
        assert!(output.contains("count : :: lawful :: typeclass :: Semigroup :: combine (self . count , other . count)"));
        assert!(output.contains("Sum < u32 > : :: lawful :: typeclass :: Semigroup"));
        assert!(output.contains("Max < i64 > : :: lawful :: typeclass :: Semigroup"));
    }

    #[rstest]
    fn tuple_fields_use_positions() {
        let input: DeriveInput = parse_quote! {
            struct Offset(Sum<i32>, Sum<i64>);
        };
        let output = expanded(&input, Algebra::Group);
        assert!(output.contains(":: lawful :: typeclass :: Group :: inverse (self . 0)"));
        assert!(output.contains(":: lawful :: typeclass :: Group :: inverse (self . 1)"));
    }

    #[rstest]
    fn unit_struct_empty_is_self() {
        let input: DeriveInput = parse_quote! {
            struct Nothing;
        };
        let output = expanded(&input, Algebra::Monoid);
        assert!(output.contains("fn empty () -> Self { Self }"));
    }

    #[rstest]
    fn generic_parameters_are_kept() {
        let input: DeriveInput = parse_quote! {
            struct Tagged<T: Clone> where T: Default { value: T }
        };
        let output = expanded(&input, Algebra::Monoid);
        assert!(output.contains("impl < T : Clone > :: lawful :: typeclass :: Monoid for Tagged < T >"));
        assert!(output.contains("T : Default , T : :: lawful :: typeclass :: Monoid"));
    }

    #[rstest]
    #[case(Algebra::Semigroup, "Semigroup can only be derived for structs, not enums.")]
    #[case(Algebra::Group, "Group can only be derived for structs, not enums.")]
    fn enums_are_rejected(#[case] algebra: Algebra, #[case] message: &str) {
        let input: DeriveInput = parse_quote! {
            enum Choice { First, Second }
        };
        let output = expanded(&input, algebra);
        assert!(output.contains("compile_error"));
        assert!(output.contains(message));
    }

    #[rstest]
    fn unions_are_rejected() {
        let input: DeriveInput = parse_quote! {
            union Bits { small: u8, large: u64 }
        };
        assert!(expanded(&input, Algebra::Monoid).contains("Monoid cannot be derived for unions."));
    }
}
