use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped};
use crate::reflection::ReflectCloneError;

// -----------------------------------------------------------------------------
// Reflect

/// The dynamic object trait of the reflection model.
///
/// Every value a path can reach implements `Reflect`: the root target, each
/// intermediate field value and each method result. Through it the engine
/// learns the concrete runtime type of a value ([`ty_id`] and
/// [`reflect_type_info`]) and casts the final value back to a static type.
///
/// # Implementation
///
/// Use [`impl_class!`] for types with fields or methods. Primitives, `String`,
/// `()` and `Vec<T>` are implemented by this crate.
///
/// A manual implementation only has to provide [`reflect_clone`]; it is used
/// when a field is read out of a value that a method returned by value.
///
/// ```
/// use rp_reflect::{Reflect, ReflectCloneError};
/// use rp_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
/// use rp_reflect::impls::NonGenericTypeInfoCell;
///
/// struct Handle(u64);
///
/// impl TypePath for Handle {
///     fn type_path() -> &'static str { "io::Handle" }
///     fn type_name() -> &'static str { "Handle" }
///     fn type_ident() -> &'static str { "Handle" }
///     fn module_path() -> Option<&'static str> { Some("io") }
/// }
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// impl Reflect for Handle {
///     fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
///         Err(ReflectCloneError::NotCloneable { type_path: Self::type_path() })
///     }
/// }
///
/// let handle: &dyn Reflect = &Handle(7);
/// assert!(handle.is::<Handle>());
/// assert_eq!(handle.downcast_ref::<Handle>().unwrap().0, 7);
/// ```
///
/// [`ty_id`]: Reflect::ty_id
/// [`reflect_type_info`]: DynamicTyped::reflect_type_info
/// [`reflect_clone`]: Reflect::reflect_clone
/// [`impl_class!`]: crate::impl_class
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the concrete type.
    ///
    /// Unlike [`Any::type_id`] on a `Box<dyn Reflect>`, this always reports the
    /// underlying value, never the container.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Clones the value into a new box.
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Debug formatter used by `impl Debug for dyn Reflect`.
    ///
    /// The default prints the type path only.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rp_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the boxed value to type `T`.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rp_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("id").into_boxed_reflect();
    ///
    /// let x = x.downcast::<u8>().unwrap_err();
    /// let x: Box<String> = x.downcast::<String>().unwrap();
    /// assert_eq!(*x, "id");
    /// ```
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Downcasts the boxed value to type `T` and unboxes it.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
