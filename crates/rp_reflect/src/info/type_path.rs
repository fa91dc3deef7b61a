use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Static access to the three names of a type.
///
/// Type-based path segments such as `[String]` are compared against all three,
/// so each must be stable across compiler versions. Unlike
/// [`core::any::type_name`], the values are chosen by the implementor.
///
/// - [`type_path`]: the fully qualified name, unique per type.
/// - [`type_name`]: the canonical source-level name, with generics.
/// - [`type_ident`]: the short name, without module path and generics.
/// - [`module_path`]: the optional module path.
///
/// None of these names start with `::`.
///
/// # Examples
///
/// Non-generic types return string literals:
///
/// ```
/// use rp_reflect::info::TypePath;
///
/// struct Session;
///
/// impl TypePath for Session {
///     fn type_path() -> &'static str { "server::net::Session" }
///     fn type_name() -> &'static str { "Session" }
///     fn type_ident() -> &'static str { "Session" }
///     fn module_path() -> Option<&'static str> { Some("server::net") }
/// }
/// ```
///
/// Generic types build their names once with [`GenericTypePathCell`]:
///
/// ```
/// use rp_reflect::info::TypePath;
/// use rp_reflect::impls::{concat, GenericTypePathCell};
///
/// struct Slot<T>(T);
///
/// impl<T: TypePath> TypePath for Slot<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["inv::Slot<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Slot<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Slot" }
///     fn module_path() -> Option<&'static str> { Some("inv") }
/// }
///
/// assert_eq!(Slot::<u8>::type_name(), "Slot<u8>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
/// [`GenericTypePathCell`]: crate::impls::GenericTypePathCell
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics.
    ///
    /// For `Vec<String>`, this is `"alloc::vec::Vec<alloc::string::String>"`.
    fn type_path() -> &'static str;

    /// Returns the canonical name, with generics but without module path.
    ///
    /// For `Vec<String>`, this is `"Vec<String>"`.
    fn type_name() -> &'static str;

    /// Returns the short name, without generics.
    ///
    /// For `Vec<String>`, this is `"Vec"`.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`], implemented for every `TypePath` type.
///
/// ```
/// use rp_reflect::{info::DynamicTypePath, Reflect};
///
/// let value: &dyn Reflect = &String::new();
/// assert_eq!(value.reflect_type_path(), "alloc::string::String");
/// assert_eq!(value.reflect_type_ident(), "String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Function pointers to a type's [`TypePath`] implementation.
///
/// ```
/// use rp_reflect::info::TypePathTable;
///
/// let table = TypePathTable::of::<Vec<String>>();
/// assert_eq!(table.path(), "alloc::vec::Vec<alloc::string::String>");
/// assert_eq!(table.name(), "Vec<String>");
/// assert_eq!(table.ident(), "Vec");
/// assert_eq!(table.module_path(), Some("alloc::vec"));
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates the table of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// See [`TypePath::type_path`].
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`].
    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`].
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the type's [`TypePathTable`].
///
/// Equality and hashing only look at the `TypeId`.
///
/// ```
/// use rp_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert!(ty.is_named("String"));
/// assert!(ty.is_named("alloc::string::String"));
/// assert!(!ty.is_named("string"));
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// Returns the [`TypePathTable`].
    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }

    /// Returns `true` if `name` equals the short, fully qualified or
    /// canonical name of this type.
    ///
    /// The comparison is exact and case-sensitive.
    pub fn is_named(&self, name: &str) -> bool {
        self.ident() == name || self.path() == name || self.name() == name
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Forwards the `Type` accessors of an info type.
///
/// The one-argument form also generates `ty()` from the named field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if this is the type `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        /// Returns the fully qualified type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the canonical type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Returns the short type name.
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }

        /// Returns the module path.
        #[inline]
        pub fn module_path(&self) -> Option<&'static str> {
            self.ty().module_path()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};

    struct Marker;

    impl TypePath for Marker {
        fn type_path() -> &'static str {
            "tests::Marker"
        }
        fn type_name() -> &'static str {
            "Marker"
        }
        fn type_ident() -> &'static str {
            "Marker"
        }
    }

    #[test]
    fn names_are_matched_exactly() {
        let ty = Type::of::<Marker>();
        assert!(ty.is_named("Marker"));
        assert!(ty.is_named("tests::Marker"));
        assert!(!ty.is_named("marker"));
        assert!(!ty.is_named("Marker "));
        assert_eq!(ty.module_path(), None);
    }

    #[test]
    fn generic_names_differ() {
        let ty = Type::of::<alloc::vec::Vec<u8>>();
        assert!(ty.is_named("Vec"));
        assert!(ty.is_named("Vec<u8>"));
        assert!(ty.is_named("alloc::vec::Vec<u8>"));
        assert!(!ty.is_named("u8"));
    }
}
