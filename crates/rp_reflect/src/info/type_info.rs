use crate::info::{ArrayInfo, ClassInfo, FieldInfo, MethodInfo, OpaqueInfo, Superclass, Type};

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information of a reflected type.
///
/// Obtained through [`Typed::type_info`] or, for the concrete type behind a
/// `&dyn Reflect`, [`DynamicTyped::reflect_type_info`].
///
/// Only classes declare members; the member accessors return empty slices for
/// the other kinds.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Class(ClassInfo),
    Array(ArrayInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the inner [`", stringify!($info), "`] if this is a `", stringify!($kind), "`.")]
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_class: Class => ClassInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Class(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns `true` for `Vec<T>`.
    #[inline]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Fields declared directly on this type, in declaration order.
    pub fn declared_fields(&self) -> &[FieldInfo] {
        match self {
            Self::Class(info) => info.fields(),
            _ => &[],
        }
    }

    /// Methods declared directly on this type, in declaration order.
    pub fn declared_methods(&self) -> &[MethodInfo] {
        match self {
            Self::Class(info) => info.methods(),
            _ => &[],
        }
    }

    /// The link to the direct superclass, if any.
    pub fn superclass(&self) -> Option<&Superclass> {
        match self {
            Self::Class(info) => info.superclass(),
            _ => None,
        }
    }

    /// Returns `true` if `name` is one of the names of this type, with
    /// array-ness taken into account.
    ///
    /// For an array, `name` is compared against the element type when
    /// `is_array` is set; otherwise an array never matches and a non-array
    /// never matches an array request. No subtype relation is considered.
    ///
    /// ```
    /// use rp_reflect::info::Typed;
    ///
    /// let list = <Vec<String> as Typed>::type_info();
    /// assert!(list.matches("String", true));
    /// assert!(!list.matches("String", false));
    ///
    /// let text = <String as Typed>::type_info();
    /// assert!(text.matches("String", false));
    /// assert!(!text.matches("String", true));
    /// ```
    pub fn matches(&self, name: &str, is_array: bool) -> bool {
        match self {
            Self::Array(info) => is_array && info.element().is_named(name),
            _ => !is_array && self.ty().is_named(name),
        }
    }
}
