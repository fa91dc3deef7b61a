use crate::info::{Type, TypePath, impl_type_fn};

/// Information of a type without reflected members.
///
/// Primitives, `String` and `()` are opaque. A path can end at an opaque
/// value but cannot step through it.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates the info of `T`.
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
