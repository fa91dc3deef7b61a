use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use rp_utils::hash::HashMap;

use crate::Reflect;
use crate::info::{DynamicTyped, FieldInfo, MethodInfo, Type, TypeInfo, TypePath, Typed};
use crate::info::impl_type_fn;

/// Converts an instance of a class into its embedded superclass instance.
pub type Upcast = for<'a> fn(&'a dyn Reflect) -> Option<&'a dyn Reflect>;

// -----------------------------------------------------------------------------
// Superclass

/// The link from a class to its direct superclass.
///
/// A class "extends" another by embedding it as a member; `upcast` returns
/// that member.
#[derive(Clone)]
pub struct Superclass {
    ty: Type,
    // `TypeInfo` is created on first access; the function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    upcast: Upcast,
}

impl Superclass {
    impl_type_fn!(ty);

    /// Creates a link to the superclass `T`.
    #[inline]
    pub const fn new<T: Typed>(upcast: Upcast) -> Self {
        Self {
            ty: Type::of::<T>(),
            type_info: T::type_info,
            upcast,
        }
    }

    /// Returns the [`TypeInfo`] of the superclass.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the superclass part of `instance`.
    #[inline]
    pub fn upcast<'a>(&self, instance: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.upcast)(instance)
    }
}

impl fmt::Debug for Superclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Superclass").field(&self.ty).finish()
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// Information of a class: a type with declared fields and methods.
///
/// Members are kept in declaration order, which is the order every lookup
/// observes. Members inherited from the superclass are not repeated here;
/// walk [`superclass`](ClassInfo::superclass) to reach them.
///
/// Usually built by [`impl_class!`](crate::impl_class).
#[derive(Clone)]
pub struct ClassInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
    field_index: HashMap<&'static str, usize>,
    methods: Box<[MethodInfo]>,
    superclass: Option<Superclass>,
}

impl ClassInfo {
    impl_type_fn!(ty);

    /// Creates the info of `T` with the given members.
    pub fn new<T: TypePath>(fields: Vec<FieldInfo>, methods: Vec<MethodInfo>) -> Self {
        let field_index = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into_boxed_slice(),
            field_index,
            methods: methods.into_boxed_slice(),
            superclass: None,
        }
    }

    /// Sets the direct superclass.
    #[inline]
    pub fn with_superclass(mut self, superclass: Superclass) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Declared fields, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// The declared field named `name`.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.field_index.get(name).map(|&index| &self.fields[index])
    }

    /// Declared methods, in declaration order.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// The first declared method named `name`.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|method| method.name() == name)
    }

    /// The direct superclass, if any.
    #[inline]
    pub fn superclass(&self) -> Option<&Superclass> {
        self.superclass.as_ref()
    }

    /// Walks the superclass links of `instance` until a value of type
    /// `target` is reached.
    ///
    /// Returns `instance` itself if it already is a `target`, and `None` if
    /// `target` is not in its hierarchy.
    ///
    /// ```
    /// use core::any::TypeId;
    /// use rp_reflect::impl_class;
    /// use rp_reflect::info::ClassInfo;
    ///
    /// #[derive(Clone)]
    /// struct Entity { id: u32 }
    ///
    /// #[derive(Clone)]
    /// struct Mob { entity: Entity, hp: u16 }
    ///
    /// impl_class!(Entity in "world" { fields { id: u32 } });
    /// impl_class!(Mob in "world" {
    ///     extends Entity => entity;
    ///     fields { hp: u16 }
    /// });
    ///
    /// let mob = Mob { entity: Entity { id: 9 }, hp: 20 };
    /// let base = ClassInfo::upcast(&mob, TypeId::of::<Entity>()).unwrap();
    /// assert_eq!(base.downcast_ref::<Entity>().unwrap().id, 9);
    /// assert!(ClassInfo::upcast(&mob, TypeId::of::<u32>()).is_none());
    /// ```
    pub fn upcast(instance: &dyn Reflect, target: TypeId) -> Option<&dyn Reflect> {
        let mut current = instance;
        loop {
            if current.ty_id() == target {
                return Some(current);
            }
            let superclass = current.reflect_type_info().superclass()?;
            current = superclass.upcast(current)?;
        }
    }
}

impl fmt::Debug for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassInfo")
            .field("ty", &self.ty)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .field("superclass", &self.superclass)
            .finish()
    }
}
