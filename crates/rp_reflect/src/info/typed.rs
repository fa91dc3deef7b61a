use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`TypeInfo`] of a type.
///
/// Implemented by [`impl_class!`](crate::impl_class) for classes and by this
/// crate for primitives, `String` and `Vec<T>`. Manual implementations store
/// the info in a [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`].
///
/// ```
/// use rp_reflect::info::{TypeInfo, Typed};
///
/// assert!(matches!(<u32 as Typed>::type_info(), TypeInfo::Opaque(_)));
/// assert!(matches!(<Vec<u32> as Typed>::type_info(), TypeInfo::Array(_)));
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time info of the type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `Typed` type.
///
/// This is how a path learns the concrete runtime type of its target.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
