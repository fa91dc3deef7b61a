//! Runtime type information: the introspection model paths are resolved against.
//!
//! ## Menu
//!
//! - [`TypePath`]: the names of a type, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): fully qualified name, unique.
//!     - [`type_name`](TypePath::type_name): canonical name with generics.
//!     - [`type_ident`](TypePath::type_ident): short name without generics.
//!     - [`module_path`](TypePath::module_path): optional module path.
//! - [`DynamicTypePath`]: dynamic dispatch for `TypePath`.
//! - [`TypePathTable`]: function pointers to one type's `TypePath` impl.
//! - [`Type`]: a `TypeId` and a `TypePathTable`.
//!
//! - [`TypeInfo`]: the compile-time information of a type, one of:
//!     - [`ClassInfo`]: declared fields, declared methods and an optional
//!       [`Superclass`].
//!     - [`ArrayInfo`]: the element type of `Vec<T>`.
//!     - [`OpaqueInfo`]: leaf types without members, e.g. `u32`, `String`.
//!
//! - Members:
//!     - [`FieldInfo`]: name, declared type, declaring class and getter.
//!     - [`MethodInfo`]: name, parameter types, return type, declaring class
//!       and invoker. Arguments are passed as [`Args`], failures are
//!       [`InvokeError`].
//!
//! - [`Typed`]: static access to `TypeInfo`.
//! - [`DynamicTyped`]: dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod class_info;
mod field_info;
mod method_info;
mod opaque_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use class_info::{ClassInfo, Superclass, Upcast};
pub use field_info::{FieldGetter, FieldInfo};
pub use method_info::{Args, InvokeError, MethodInfo, MethodInvoker};
pub use opaque_info::OpaqueInfo;
pub use type_info::TypeInfo;
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
