use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
use crate::{Reflect, ReflectCloneError};

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect> Reflect for Vec<T> {
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut out: Vec<T> = Vec::with_capacity(self.len());
        for item in self {
            let Ok(item) = item.reflect_clone()?.take::<T>() else {
                return Err(ReflectCloneError::NotCloneable {
                    type_path: Self::type_path(),
                });
            };
            out.push(item);
        }
        Ok(Box::new(out))
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn names_follow_element() {
        assert_eq!(<Vec<String>>::type_path(), "alloc::vec::Vec<alloc::string::String>");
        assert_eq!(<Vec<String>>::type_name(), "Vec<String>");
        assert_eq!(<Vec<Vec<u8>>>::type_name(), "Vec<Vec<u8>>");
        assert!(<Vec<u8>>::type_info().is_array());
    }

    #[test]
    fn clone_and_debug() {
        let list = vec![String::from("a"), String::from("b")];
        let copy = list.reflect_clone().unwrap();
        assert_eq!(format!("{copy:?}"), r#"["a", "b"]"#);
        assert_eq!(copy.take::<Vec<String>>().unwrap(), list);
    }
}
