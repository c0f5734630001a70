//! Derive macros for the todo-tabs reducer architecture
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (commands/events)
//!
//! # Example
//!
//! ```ignore
//! use todo_tabs_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum CategoryAction {
//!     #[command]
//!     CommitCategory,
//!
//!     #[event]
//!     CategoryAdded { name: String },
//! }
//!
//! // Generated methods:
//! assert!(CategoryAction::CommitCategory.is_command());
//! assert!(CategoryAction::CategoryAdded { name: "Work".into() }.is_event());
//! assert_eq!(CategoryAction::CommitCategory.name(), "CommitCategory");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Variant};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command
/// - `is_event()` - Returns true if this variant is an event
/// - `name()` - Returns the variant name, for logging
///
/// # Attributes
///
/// Every variant must carry exactly one of:
/// - `#[command]` - A request to change state, which may be ignored
/// - `#[event]` - A fact that is applied to state as-is
///
/// # Errors
///
/// Produces a compile error if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]` attributes
/// - A variant has neither attribute
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut is_command_arms = Vec::new();
    let mut is_event_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        match (is_command, is_event) {
            (true, true) => {
                return syn::Error::new_spanned(
                    variant,
                    "Variant cannot be both #[command] and #[event]",
                )
                .to_compile_error()
                .into();
            },
            (false, false) => {
                return syn::Error::new_spanned(
                    variant,
                    "Variant must be marked #[command] or #[event]",
                )
                .to_compile_error()
                .into();
            },
            _ => {},
        }

        let pattern = variant_pattern(variant);
        let variant_name = variant.ident.to_string();

        is_command_arms.push(quote! { #pattern => #is_command, });
        is_event_arms.push(quote! { #pattern => #is_event, });
        name_arms.push(quote! { #pattern => #variant_name, });
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a command
            #[must_use]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#is_command_arms)*
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#is_event_arms)*
                }
            }

            /// Returns the variant name of this action
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Match pattern ignoring the fields of a variant
fn variant_pattern(variant: &Variant) -> TokenStream2 {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
