//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solution modules with the plugin system
///
/// Submits a `SolverPlugin` for the type through `inventory`, so that
/// `RegistryBuilder::register_all_plugins` picks it up in any binary that
/// links the crate.
///
/// # Attributes
///
/// - `day`: Required. The day number, matching the digits of the solution
///   directory name (`day7` -> `day = 7`)
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If it does not, the error
/// points at the struct:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver::AutoRegisterSolver;
///
/// #[derive(AutoRegisterSolver)]
/// #[solution(day = 1)]
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(solution))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("solution"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver derive macro requires #[solution(day = N)] attribute",
            )
        })?;

    let mut day: Option<u32> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit_int) => day = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "day must be an integer")),
            }
            Ok(())
        } else {
            Err(meta.error("unknown key, expected `day`"))
        }
    })?;

    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "Missing required 'day' key"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                day: #day,
                solver: &#name,
            }
        }
    })
}
