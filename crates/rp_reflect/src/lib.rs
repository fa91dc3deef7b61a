//! Runtime type information and path resolution for reflected object graphs.
//!
//! ## Layout
//!
//! - [`info`]: the type model used as the introspection facility. Each
//!   reflected type exposes a `&'static` [`TypeInfo`](info::TypeInfo) with its
//!   declared fields, declared methods and superclass.
//! - [`Reflect`]: the dynamic object trait, with downcasting helpers on
//!   `dyn Reflect`.
//! - [`impls`]: implementations for primitives, `String`, `Vec<T>` and the
//!   [`impl_class!`] macro for user types.
//! - [`access`]: the [`ReflectionPath`](access::ReflectionPath) engine that
//!   resolves `"a.b.c"` or `"[TypeA].[TypeB]"` expressions against a target.
//!
//! ## Example
//!
//! ```
//! use rp_reflect::{access::ReflectionPath, impl_class};
//!
//! #[derive(Clone)]
//! struct Connection { latency: u32 }
//!
//! #[derive(Clone)]
//! struct Player { name: String, connection: Connection }
//!
//! impl Player {
//!     fn shout(&self) -> String { self.name.to_uppercase() }
//! }
//!
//! impl_class!(Connection in "game::net" {
//!     fields { latency: u32 }
//! });
//!
//! impl_class!(Player in "game" {
//!     fields { name: String, connection: Connection }
//!     methods { fn shout(&self) -> String; }
//! });
//!
//! let player = Player { name: "alex".into(), connection: Connection { latency: 20 } };
//!
//! let latency = ReflectionPath::new("connection.latency").unwrap();
//! assert_eq!(*latency.get_as::<u32>(&player).unwrap(), 20);
//!
//! let by_type = ReflectionPath::new("[Connection].[u32]").unwrap();
//! assert_eq!(*by_type.get_as::<u32>(&player).unwrap(), 20);
//!
//! let shout = ReflectionPath::new("shout").unwrap();
//! assert_eq!(*shout.get_as::<String>(&player).unwrap(), "ALEX");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// `impl_class!` expands to `$crate` paths; doc tests and downstream crates see
// this crate as `rp_reflect`.
extern crate self as rp_reflect;

// -----------------------------------------------------------------------------
// Std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::{Reflect, ReflectCloneError};
