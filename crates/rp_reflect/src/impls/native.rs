use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::{Reflect, ReflectCloneError};

macro_rules! impl_opaque {
    ($ty:ty, path: $path:expr, name: $name:expr, module: $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<$ty>()))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                Ok(Box::new(Clone::clone(self)))
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

macro_rules! impl_primitive {
    ($($ty:ident),* $(,)?) => {
        $(impl_opaque!($ty, path: stringify!($ty), name: stringify!($ty), module: None);)*
    };
}

impl_primitive!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl_opaque!((), path: "()", name: "()", module: None);
impl_opaque!(String, path: "alloc::string::String", name: "String", module: Some("alloc::string"));

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{DynamicTypePath, DynamicTyped, TypeInfo};

    #[test]
    fn primitives_are_opaque() {
        let value: &dyn Reflect = &5_u16;
        assert_eq!(value.reflect_type_path(), "u16");
        assert!(matches!(value.reflect_type_info(), TypeInfo::Opaque(_)));
        assert!(value.reflect_type_info().declared_fields().is_empty());
    }

    #[test]
    fn clone_keeps_value() {
        let text = String::from("abc");
        let copy = text.reflect_clone().unwrap();
        assert_eq!(copy.take::<String>().unwrap(), "abc");
    }
}
