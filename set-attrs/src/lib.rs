mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for structs with named fields and for unit structs.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use set_attrs::ErrorKind;
/// use set_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "this set is empty", labels = ["this set"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                   |
/// | ----------- | ----------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.           |
/// | `labels`    | An array of label texts, one per span of the error. Empty strings are unlabeled. |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it.  |
/// | `note`      | Optional note, displayed below the help text.                                 |
///
/// Each tag accepts an expression. `message`, `help` and `note` should evaluate to something that
/// implements [`ToString`]; `labels` should evaluate to something iterable over such values. The
/// expressions are evaluated with the fields of the struct in scope, so they can be used in the
/// expression (tuple structs are not supported).
///
/// If `labels` is omitted, every span of the error is highlighted without a label.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
