//! Resolution of path expressions against reflected targets.
//!
//! A [`ReflectionPath`] is built once from an expression and applied to any
//! number of targets. Two notations exist:
//!
//! - Name-based, `"connection.kind"`: each segment names a field or, if no
//!   field has that name, a method. Methods are found by name only.
//! - Type-based, `"[Connection].[ConnectionType]"`: each segment names the
//!   declared type of a field or the return type of a zero-parameter method.
//!   `[String[]]` requests a `Vec<String>`. Names are compared against the
//!   short, fully qualified and canonical type names, never subtypes.
//!
//! When a type-based segment matches several members, the
//! [`ResolutionStrategy`] decides. Members are searched in the target's
//! concrete class first, then along its superclasses.
//!
//! The resolved form of a path, a [`ResolvedPath`], is cached per concrete
//! target type, so later calls on the same type skip the hierarchy walk.
//!
//! # Examples
//!
//! ```
//! use rp_reflect::impl_class;
//! use rp_reflect::access::{PathError, ReflectionPath, ResolutionStrategy};
//!
//! #[derive(Clone)]
//! struct Profile { first: String, last: String, logins: Vec<String> }
//!
//! impl_class!(Profile in "accounts" {
//!     fields { first: String, last: String, logins: Vec<String> }
//! });
//!
//! let profile = Profile {
//!     first: "Ada".into(),
//!     last: "Lovelace".into(),
//!     logins: vec!["mon".into()],
//! };
//!
//! let last = ReflectionPath::with_strategy("[String]", ResolutionStrategy::LastMatch).unwrap();
//! assert_eq!(*last.get_as::<String>(&profile).unwrap(), "Lovelace");
//!
//! let logins = ReflectionPath::new("[String[]]").unwrap();
//! assert_eq!(logins.get_as::<Vec<String>>(&profile).unwrap().len(), 1);
//!
//! let exact = ReflectionPath::with_strategy("[String]", ResolutionStrategy::ExactMatch).unwrap();
//! assert!(matches!(exact.get(&profile), Err(PathError::AmbiguousType { candidates: 2, .. })));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod lookup;
mod path;
mod path_access;
mod strategy;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::ResolvedPath;
pub use error::PathError;
pub use path::{ParseError, PathKind, TypeComponent};
pub use path_access::{PathOptions, ReflectionPath};
pub use strategy::ResolutionStrategy;
pub use value::Value;
