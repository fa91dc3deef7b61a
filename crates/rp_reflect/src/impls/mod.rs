//! Implementations of the reflection traits, and helpers for writing more.
//!
//! - [`impl_class!`](crate::impl_class): implements `TypePath`, `Typed` and
//!   `Reflect` for a user type with fields, methods and a superclass.
//! - [`concat`]: string concatenation for generic type paths.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`] and
//!   [`GenericTypePathCell`]: static storage for manual implementations.
//!
//! ## Implemented types
//!
//! - `()`, `bool`, `char`
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `String`
//! - `Vec<T>`: the array type, its info is an [`ArrayInfo`](crate::info::ArrayInfo).

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod class;
mod native;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};

/// Re-exports used by [`impl_class!`](crate::impl_class) expansions.
#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::boxed::Box;
    pub use alloc::vec::Vec;
}

/// Concatenates string slices with a single allocation.
///
/// Used to build the names of generic types.
///
/// ```
/// use rp_reflect::impls;
///
/// let s = impls::concat(&["Vec", "<", "u8", ">"]);
/// assert_eq!(s, "Vec<u8>");
/// assert_eq!(s.capacity(), 7);
/// ```
#[inline(never)]
pub fn concat(parts: &[&str]) -> alloc::string::String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = alloc::string::String::with_capacity(len);
    parts.iter().for_each(|part| out.push_str(part));
    out
}
