use core::fmt;

use crate::Reflect;
use crate::info::{ClassInfo, Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Reads a field from an instance of its declaring class.
///
/// Returns `None` if the field holds no value.
pub type FieldGetter = for<'a> fn(&'a dyn Reflect) -> Option<&'a dyn Reflect>;

// -----------------------------------------------------------------------------
// FieldInfo

/// A field declared by a class.
///
/// The declared type of an `Option<T>` field is `T`; the field is then marked
/// [`optional`](FieldInfo::is_optional) and reads as `None` while empty.
///
/// ```
/// use rp_reflect::impl_class;
/// use rp_reflect::info::Typed;
///
/// #[derive(Clone)]
/// struct Account { id: u64, nick: Option<String> }
///
/// impl_class!(Account in "auth" {
///     fields { id: u64 }
///     optional { nick: String }
/// });
///
/// let info = Account::type_info().as_class().unwrap();
/// let nick = info.field("nick").unwrap();
/// assert!(nick.is_optional());
/// assert_eq!(nick.type_ident(), "String");
///
/// let account = Account { id: 3, nick: None };
/// assert!(nick.read(&account).is_none());
/// assert!(info.field("id").unwrap().read(&account).is_some());
/// ```
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    // `TypeInfo` is created on first access; the function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    declaring: Type,
    getter: FieldGetter,
    optional: bool,
}

impl FieldInfo {
    impl_type_fn!(ty);

    /// Creates a field of type `T` declared by `TOwner`.
    ///
    /// `getter` receives an instance of `TOwner`.
    #[inline]
    pub const fn new<TOwner: TypePath, T: Typed>(name: &'static str, getter: FieldGetter) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            declaring: Type::of::<TOwner>(),
            getter,
            optional: false,
        }
    }

    /// Marks the field as possibly empty.
    #[inline]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field may hold no value.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns the [`TypeInfo`] of the declared type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the class that declares this field.
    #[inline]
    pub const fn declaring_type(&self) -> &Type {
        &self.declaring
    }

    /// Reads the field from `instance`.
    ///
    /// `instance` may be the declaring class or any subclass of it; it is
    /// upcast first. Returns `None` if `instance` is unrelated to the
    /// declaring class or the field holds no value.
    pub fn read<'a>(&self, instance: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        let owner = ClassInfo::upcast(instance, self.declaring.id())?;
        (self.getter)(owner)
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("declaring", &self.declaring)
            .field("optional", &self.optional)
            .finish()
    }
}
