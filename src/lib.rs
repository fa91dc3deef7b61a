//! Runtime path resolution over reflected object graphs.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`reflect`]: the runtime type model and the [`ReflectionPath`] engine.
//! - [`utils`]: hash containers and [`TypeIdMap`](utils::TypeIdMap).
//!
//! ```
//! use rp_core::{ReflectionPath, reflect::impl_class};
//!
//! #[derive(Clone)]
//! struct Player { name: String }
//!
//! impl_class!(Player in "game" {
//!     fields { name: String }
//! });
//!
//! let path = ReflectionPath::new("name").unwrap();
//! let player = Player { name: "Steve".into() };
//! assert_eq!(*path.get_as::<String>(&player).unwrap(), "Steve");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use rp_reflect as reflect;
pub use rp_utils as utils;

pub use rp_reflect::access::{PathError, ReflectionPath, ResolutionStrategy};
