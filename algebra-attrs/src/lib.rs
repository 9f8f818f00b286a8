mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct with named fields, or unit structs.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use algebra_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to each span of the error.                 |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` and `help` accept an expression that can be converted to a [`String`]. `labels`
/// accepts an expression that can be iterated over, yielding one label per span. For structs with
/// named fields, the expressions are evaluated with the members of the struct in scope, so they
/// can be used in the expression (tuple structs are not supported).
///
/// [`ErrorKind`]: https://docs.rs/algebra-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    let name_str = name.to_string();
    quote! {
        impl algebra_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn name(&self) -> &'static str {
                #name_str
            }

            #target
        }
    }.into()
}
