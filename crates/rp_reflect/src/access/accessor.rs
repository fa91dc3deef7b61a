//! The resolved form of a path.

use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::access::lookup::Member;
use crate::access::{PathError, Value};
use crate::info::{FieldInfo, MethodInfo, TypeInfo};

// -----------------------------------------------------------------------------
// ResolvedPath

/// A path resolved against one concrete target type.
///
/// Each node holds one member; chained nodes own their parent and apply
/// their member to the value the parent produces from the same root.
///
/// Obtained from [`ReflectionPath::resolve`](crate::access::ReflectionPath::resolve).
#[derive(Clone)]
pub enum ResolvedPath {
    /// A field of the root.
    Field(&'static FieldInfo),
    /// A method of the root.
    Method(&'static MethodInfo),
    /// A field of the parent's value.
    ChainedField(Box<ResolvedPath>, &'static FieldInfo),
    /// A method of the parent's value.
    ChainedMethod(Box<ResolvedPath>, &'static MethodInfo),
}

impl ResolvedPath {
    /// Appends `member` to `parent`, or starts a path with it.
    pub(crate) fn push(parent: Option<Self>, member: Member) -> Self {
        match (parent, member) {
            (None, Member::Field(field)) => Self::Field(field),
            (None, Member::Method(method)) => Self::Method(method),
            (Some(parent), Member::Field(field)) => Self::ChainedField(Box::new(parent), field),
            (Some(parent), Member::Method(method)) => Self::ChainedMethod(Box::new(parent), method),
        }
    }

    /// The parent node, if chained.
    pub fn parent(&self) -> Option<&ResolvedPath> {
        match self {
            Self::Field(_) | Self::Method(_) => None,
            Self::ChainedField(parent, _) | Self::ChainedMethod(parent, _) => Some(parent),
        }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        1 + self.parent().map_or(0, ResolvedPath::len)
    }

    /// Name of the last member.
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::Field(field) | Self::ChainedField(_, field) => field.name(),
            Self::Method(method) | Self::ChainedMethod(_, method) => method.name(),
        }
    }

    /// Returns `true` if the last member is a method.
    pub fn is_method(&self) -> bool {
        matches!(self, Self::Method(_) | Self::ChainedMethod(..))
    }

    /// The declared type of the value this path produces.
    pub fn value_info(&self) -> &'static TypeInfo {
        match self {
            Self::Field(field) | Self::ChainedField(_, field) => field.type_info(),
            Self::Method(method) | Self::ChainedMethod(_, method) => method.return_info(),
        }
    }

    /// Reads the value at the end of the path.
    ///
    /// Methods are invoked without arguments.
    pub fn read<'a>(&self, root: &'a dyn Reflect) -> Result<Value<'a>, PathError> {
        match self {
            Self::Field(field) => read_field(field, root).map(Value::Borrowed),
            Self::Method(method) => invoke(method, root, &[]).map(Value::Owned),
            Self::ChainedField(parent, field) => match parent.read(root)? {
                Value::Borrowed(value) => read_field(field, value).map(Value::Borrowed),
                Value::Owned(value) => read_field(field, &*value)?
                    .reflect_clone()
                    .map(Value::Owned)
                    .map_err(|source| PathError::Detach {
                        member: field.name(),
                        source,
                    }),
            },
            Self::ChainedMethod(parent, method) => {
                let value = parent.read(root)?;
                invoke(method, &*value, &[]).map(Value::Owned)
            }
        }
    }

    /// Invokes the method at the end of the path with `args`.
    pub fn call(
        &self,
        root: &dyn Reflect,
        args: &[&dyn Reflect],
    ) -> Result<Box<dyn Reflect>, PathError> {
        match self {
            Self::Field(field) | Self::ChainedField(_, field) => Err(PathError::NotInvocable {
                field: field.name(),
            }),
            Self::Method(method) => invoke(method, root, args),
            Self::ChainedMethod(parent, method) => {
                let value = parent.read(root)?;
                invoke(method, &*value, args)
            }
        }
    }
}

fn read_field<'a>(field: &FieldInfo, value: &'a dyn Reflect) -> Result<&'a dyn Reflect, PathError> {
    field
        .read(value)
        .ok_or(PathError::NullValue { member: field.name() })
}

fn invoke(
    method: &MethodInfo,
    value: &dyn Reflect,
    args: &[&dyn Reflect],
) -> Result<Box<dyn Reflect>, PathError> {
    method
        .invoke(value, args)
        .map_err(|source| PathError::Invoke {
            method: method.name(),
            source,
        })
}

impl fmt::Debug for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent() {
            fmt::Debug::fmt(parent, f)?;
            f.write_str(" -> ")?;
        }
        match self {
            Self::Field(field) | Self::ChainedField(_, field) => {
                write!(f, "{}::{}", field.declaring_type().ident(), field.name())
            }
            Self::Method(method) | Self::ChainedMethod(_, method) => {
                write!(f, "{}::{}()", method.declaring_type().ident(), method.name())
            }
        }
    }
}
