//! Member lookup across a class hierarchy.

use alloc::vec::Vec;
use core::iter;

use crate::access::TypeComponent;
use crate::info::{FieldInfo, MethodInfo, Superclass, TypeInfo};

/// Name of the method excluded from type-based lookup by default.
pub(crate) const TO_STRING: &str = "to_string";

// -----------------------------------------------------------------------------
// Member

/// A field or a method found by lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Member {
    Field(&'static FieldInfo),
    Method(&'static MethodInfo),
}

impl Member {
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Field(field) => field.name(),
            Self::Method(method) => method.name(),
        }
    }

    /// The declared type the next segment is resolved against.
    pub(crate) fn target(&self) -> &'static TypeInfo {
        match self {
            Self::Field(field) => field.type_info(),
            Self::Method(method) => method.return_info(),
        }
    }
}

// -----------------------------------------------------------------------------
// Lookup

/// `info` followed by its superclasses, most derived first.
fn hierarchy(info: &'static TypeInfo) -> impl Iterator<Item = &'static TypeInfo> {
    iter::successors(Some(info), |info| info.superclass().map(Superclass::type_info))
}

/// Finds the member named `name`.
///
/// Fields win over methods. The first class in the chain that declares a
/// field of that name wins; only if none does, the first method of that
/// name is taken, whatever its parameters.
pub(crate) fn find_by_name(info: &'static TypeInfo, name: &str) -> Option<Member> {
    let field = hierarchy(info).find_map(|class| class.as_class()?.field(name));
    if let Some(field) = field {
        return Some(Member::Field(field));
    }
    hierarchy(info)
        .find_map(|class| class.as_class()?.method(name))
        .map(Member::Method)
}

/// Collects every member whose declared type matches `component`.
///
/// All matching fields of the chain come first, then all matching
/// zero-parameter methods. `to_string` is skipped if `ignore_to_string`.
pub(crate) fn find_by_type(
    info: &'static TypeInfo,
    component: &TypeComponent,
    ignore_to_string: bool,
) -> Vec<Member> {
    let name = component.type_name();
    let is_array = component.is_array();

    let fields = hierarchy(info)
        .flat_map(TypeInfo::declared_fields)
        .filter(|field| field.type_info().matches(name, is_array))
        .map(Member::Field);

    let methods = hierarchy(info)
        .flat_map(TypeInfo::declared_methods)
        .filter(|method| method.param_count() == 0)
        .filter(|method| !(ignore_to_string && method.name() == TO_STRING))
        .filter(|method| method.return_info().matches(name, is_array))
        .map(Member::Method);

    fields.chain(methods).collect()
}
