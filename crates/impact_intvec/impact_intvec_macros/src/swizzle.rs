//! Generation of swizzle getters and setters.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Error, Result, Token, bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Field names of the vectors returned from swizzles, in index order.
const TARGET_COMPONENTS: [&str; 4] = ["x", "y", "z", "w"];

pub(crate) struct SwizzlesInput {
    vector: Ident,
    components: Vec<Ident>,
    targets: Vec<Ident>,
}

impl Parse for SwizzlesInput {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let vector: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let components = parse_ident_list(input)?;
        input.parse::<Token![,]>()?;
        let targets = parse_ident_list(input)?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        if !(2..=TARGET_COMPONENTS.len()).contains(&components.len()) {
            return Err(Error::new(
                vector.span(),
                "swizzled vectors must have 2, 3 or 4 components",
            ));
        }
        if targets.len() != 3 {
            return Err(Error::new(
                vector.span(),
                "expected one target vector type for each of the swizzle lengths 2, 3 and 4",
            ));
        }

        Ok(Self {
            vector,
            components,
            targets,
        })
    }
}

fn parse_ident_list(input: ParseStream<'_>) -> Result<Vec<Ident>> {
    let content;
    bracketed!(content in input);
    let idents = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
    Ok(idents.into_iter().collect())
}

pub(crate) fn swizzles(input: SwizzlesInput) -> TokenStream {
    let SwizzlesInput {
        vector,
        components,
        targets,
    } = input;

    let mut accessors = Vec::new();

    for (length, target) in (2..=TARGET_COMPONENTS.len()).zip(&targets) {
        for selection in selections(components.len(), length) {
            accessors.push(getter(&components, &selection, target));
            if is_permutation(&selection) {
                accessors.push(setter(&components, &selection, target));
            }
        }
    }

    quote! {
        impl #vector {
            #(#accessors)*
        }
    }
}

/// Every ordered selection of `length` indices below `n_components`, with
/// repetition, in lexicographic order.
fn selections(n_components: usize, length: usize) -> Vec<Vec<usize>> {
    let mut selections = vec![Vec::with_capacity(length)];
    for _ in 0..length {
        selections = selections
            .into_iter()
            .flat_map(|prefix| {
                (0..n_components).map(move |idx| {
                    let mut selection = prefix.clone();
                    selection.push(idx);
                    selection
                })
            })
            .collect();
    }
    selections
}

fn is_permutation(selection: &[usize]) -> bool {
    selection
        .iter()
        .enumerate()
        .all(|(position, idx)| !selection[..position].contains(idx))
}

fn getter(components: &[Ident], selection: &[usize], target: &Ident) -> TokenStream {
    let name = Ident::new(&swizzle_name(components, selection), Span::call_site());
    let fields = selection.iter().map(|&idx| &components[idx]);
    let doc = format!(
        "Creates a [`{target}`] from the {}component of this vector.",
        component_list(components, selection)
    );
    quote! {
        #[doc = #doc]
        #[inline]
        pub const fn #name(&self) -> #target {
            #target::new(#(self.#fields),*)
        }
    }
}

fn setter(components: &[Ident], selection: &[usize], target: &Ident) -> TokenStream {
    let name = format_ident!("set_{}", swizzle_name(components, selection));
    let assignments = selection
        .iter()
        .zip(TARGET_COMPONENTS)
        .map(|(&idx, source)| {
            let field = &components[idx];
            let source = Ident::new(source, Span::call_site());
            quote! { self.#field = value.#source; }
        });
    let doc = format!(
        "Assigns the components of the given [`{target}`] to the {}component of \
         this vector, in that order.",
        component_list(components, selection)
    );
    quote! {
        #[doc = #doc]
        #[inline]
        pub const fn #name(&mut self, value: #target) {
            #(#assignments)*
        }
    }
}

fn swizzle_name(components: &[Ident], selection: &[usize]) -> String {
    selection
        .iter()
        .map(|&idx| components[idx].to_string())
        .collect()
}

/// Formats the selected components as, for example, "z-, y- and x-".
fn component_list(components: &[Ident], selection: &[usize]) -> String {
    let names: Vec<_> = selection
        .iter()
        .map(|&idx| format!("{}-", components[idx]))
        .collect();
    match names.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_of_three_components_cover_all_combinations() {
        assert_eq!(selections(3, 2).len(), 9);
        assert_eq!(selections(3, 3).len(), 27);
        assert_eq!(selections(3, 4).len(), 81);
        assert_eq!(selections(2, 2), vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn only_selections_without_repeats_are_permutations() {
        assert!(is_permutation(&[2, 1, 0]));
        assert!(is_permutation(&[0, 3]));
        assert!(!is_permutation(&[0, 0]));
        assert!(!is_permutation(&[1, 2, 1]));
    }

    #[test]
    fn permutation_count_matches_partial_permutations() {
        let count = |n, length| {
            selections(n, length)
                .iter()
                .filter(|selection| is_permutation(selection))
                .count()
        };
        assert_eq!(count(3, 2), 6);
        assert_eq!(count(3, 3), 6);
        assert_eq!(count(3, 4), 0);
        assert_eq!(count(4, 4), 24);
    }

    #[test]
    fn component_list_is_formatted_as_prose() {
        let components: Vec<_> = ["x", "y", "z"]
            .into_iter()
            .map(|name| Ident::new(name, Span::call_site()))
            .collect();
        assert_eq!(component_list(&components, &[2, 1, 0]), "z-, y- and x-");
        assert_eq!(component_list(&components, &[0, 1]), "x- and y-");
    }

    #[test]
    fn parsing_input_with_wrong_target_count_fails() {
        let result = syn::parse_str::<SwizzlesInput>("Byte2, [x, y], [Byte2, Byte3]");
        assert!(result.is_err());
    }

    #[test]
    fn generated_accessors_include_setters_for_permutations_only() {
        let input = syn::parse_str::<SwizzlesInput>("Byte2, [x, y], [Byte2, Byte3, Byte4]")
            .unwrap();
        let generated = swizzles(input).to_string();
        assert!(generated.contains("fn yx"));
        assert!(generated.contains("fn set_yx"));
        assert!(generated.contains("fn yyxx"));
        assert!(!generated.contains("fn set_xx"));
    }
}
