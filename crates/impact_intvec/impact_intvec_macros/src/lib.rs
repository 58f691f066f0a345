//! Procedural macros for the `impact_intvec` crate.

mod swizzle;

use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Generates swizzle accessors for a vector type.
///
/// The input is the vector type, its component fields in index order and the
/// vector types to return for swizzles of length 2, 3 and 4:
///
/// ```ignore
/// swizzles!(Short3, [x, y, z], [Short2, Short3, Short4]);
/// ```
///
/// Every ordered selection of two, three or four components (with
/// repetition) gets a getter named after the selected components, such as
/// `zyx` or `xxyy`. Selections without repeated components additionally get
/// a setter, such as `set_zyx`, that writes the components of the given
/// vector back into the selected fields.
#[proc_macro]
pub fn swizzles(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as swizzle::SwizzlesInput);
    swizzle::swizzles(input).into()
}
