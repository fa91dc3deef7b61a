//! Static storage for type information.
//!
//! Used to implement [`Typed`] and [`TypePath`].
//!
//! - [`NonGenericTypeInfoCell`]: a [`TypeInfo`] in a [`OnceLock`], for
//!   non-generic types. Non-generic type paths are string literals, so there
//!   is no path cell for them.
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: for generic types.
//!   A `static` inside a generic function is shared by every instantiation,
//!   so these cells map each concrete [`TypeId`] to its own leaked value.
//!
//! [`Typed`]: crate::info::Typed
//! [`TypePath`]: crate::info::TypePath

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use rp_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Static storage of non-generic type information.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Static storage of the [`TypeInfo`] of a non-generic type.
///
/// ```
/// use rp_reflect::impls::NonGenericTypeInfoCell;
/// use rp_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "auth::Token" }
///     fn type_name() -> &'static str { "Token" }
///     fn type_ident() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Token::type_info(), Token::type_info()));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, creating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Static storage of type information for generic types.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Static storage of the [`TypeInfo`] of a generic type.
///
/// ```
/// use rp_reflect::impls::GenericTypeInfoCell;
/// use rp_reflect::info::{ArrayInfo, TypeInfo, TypePath, Typed};
///
/// struct Bag<T>(Vec<T>);
///
/// impl<T: TypePath> TypePath for Bag<T> {
///     fn type_path() -> &'static str { "inv::Bag" }
///     fn type_name() -> &'static str { "Bag" }
///     fn type_ident() -> &'static str { "Bag" }
/// }
///
/// impl<T: Typed> Typed for Bag<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>()))
///     }
/// }
///
/// let bytes = Bag::<u8>::type_info().as_array().unwrap();
/// let words = Bag::<u16>::type_info().as_array().unwrap();
/// assert!(bytes.element_is::<u8>());
/// assert!(words.element_is::<u16>());
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Static storage of a type path string of a generic type.
///
/// See [`TypePath`](crate::info::TypePath) for an example.
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, creating it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(value) => value,
            // `f` may read other instantiations of the same cell, so it runs
            // before the write lock is taken.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::info::{TypePath, Typed};

    #[test]
    fn nested_generic_types_share_a_cell() {
        assert_eq!(<Vec<Vec<Vec<u16>>>>::type_name(), "Vec<Vec<Vec<u16>>>");
        assert_eq!(
            <Vec<Vec<u16>>>::type_path(),
            "alloc::vec::Vec<alloc::vec::Vec<u16>>",
        );

        let outer = <Vec<Vec<u16>>>::type_info().as_array().unwrap();
        assert!(outer.element_is::<Vec<u16>>());
        assert!(core::ptr::eq(outer.element_info(), <Vec<u16>>::type_info()));
    }
}
