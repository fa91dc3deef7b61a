use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Information of an array type, i.e. `Vec<T>`.
///
/// Type-based path segments written as `[T[]]` match a member only if its
/// declared type is an array whose element type is named `T`.
///
/// ```
/// use rp_reflect::info::Typed;
///
/// let info = <Vec<String> as Typed>::type_info().as_array().unwrap();
/// assert_eq!(info.element().ident(), "String");
/// assert!(info.element_is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    element: Type,
    // `TypeInfo` is created on first access; the function pointer delays it.
    element_info: fn() -> &'static TypeInfo,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Creates the info of the array type `TArray` holding `TElement`.
    #[inline]
    pub const fn new<TArray: TypePath + ?Sized, TElement: Typed>() -> Self {
        Self {
            ty: Type::of::<TArray>(),
            element: Type::of::<TElement>(),
            element_info: TElement::type_info,
        }
    }

    /// Returns the element [`Type`].
    #[inline]
    pub const fn element(&self) -> &Type {
        &self.element
    }

    /// Returns the element [`TypeId`].
    #[inline]
    pub const fn element_id(&self) -> TypeId {
        self.element.id()
    }

    /// Returns `true` if the element type is `T`.
    #[inline]
    pub fn element_is<T: Any>(&self) -> bool {
        self.element.is::<T>()
    }

    /// Returns the [`TypeInfo`] of the element type.
    #[inline]
    pub fn element_info(&self) -> &'static TypeInfo {
        (self.element_info)()
    }
}
