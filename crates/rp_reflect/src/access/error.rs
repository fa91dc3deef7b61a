use alloc::boxed::Box;

use thiserror::Error;

use crate::ReflectCloneError;
use crate::info::InvokeError;

/// Failure to resolve, read or invoke a path.
///
/// Failed resolutions are never cached; the next call walks the hierarchy
/// again.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PathError {
    /// A name-based segment matched neither a field nor a method.
    #[error("no field or method found for `{segment}` in {class}")]
    MissingMember { segment: Box<str>, class: &'static str },
    /// A type-based segment matched no member.
    #[error("no member found of type `{type_name}` in {class}")]
    NoTypeMatch { type_name: Box<str>, class: &'static str },
    /// A type-based segment matched several members under `ExactMatch`.
    #[error("{candidates} members of type `{type_name}` found in {class}, expected exactly one")]
    AmbiguousType {
        type_name: Box<str>,
        class: &'static str,
        candidates: usize,
    },
    /// The expression has no segment to resolve.
    #[error("failed to resolve path: {path}")]
    Unresolved { path: Box<str> },
    /// A member on the path holds no value.
    #[error("`{member}` holds no value")]
    NullValue { member: &'static str },
    /// The path ends at a field, which cannot be invoked.
    #[error("cannot invoke field `{field}` as a method")]
    NotInvocable { field: &'static str },
    /// The value has a different type than requested.
    #[error("cannot cast `{actual}` to `{expected}`")]
    InvalidCast {
        expected: &'static str,
        actual: &'static str,
    },
    /// A method on the path failed.
    #[error("failed to invoke `{method}`")]
    Invoke {
        method: &'static str,
        #[source]
        source: InvokeError,
    },
    /// A field of a method result could not be copied out of it.
    #[error("cannot detach `{member}` from a method result")]
    Detach {
        member: &'static str,
        #[source]
        source: ReflectCloneError,
    },
}
