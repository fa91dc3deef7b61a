use alloc::boxed::Box;
use core::fmt;
use core::ops::Deref;

use crate::Reflect;

/// The value at the end of a path.
///
/// Values reached through fields only are borrowed from the target. A method
/// result is owned, and so is anything read out of one.
///
/// ```
/// use rp_reflect::{Reflect, access::Value};
///
/// let number = 7_u8;
/// let value: Value<'_> = Value::Borrowed(&number);
/// assert!(value.is_borrowed());
///
/// let number = value.downcast::<u8>().ok().unwrap();
/// assert_eq!(*number, 7);
/// ```
pub enum Value<'a, T: ?Sized + 'static = dyn Reflect> {
    /// A field of the target, read in place.
    Borrowed(&'a T),
    /// A method result, or a value reached through one.
    Owned(Box<T>),
}

impl<T: ?Sized + 'static> Value<'_, T> {
    /// Returns `true` if the value is borrowed from the target.
    #[inline]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }
}

impl<'a> Value<'a> {
    /// Casts the value to `T`, returning it unchanged on mismatch.
    pub fn downcast<T: Reflect>(self) -> Result<Value<'a, T>, Self> {
        match self {
            Self::Borrowed(value) => match value.downcast_ref::<T>() {
                Some(value) => Ok(Value::Borrowed(value)),
                None => Err(Self::Borrowed(value)),
            },
            Self::Owned(value) => value.downcast::<T>().map(Value::Owned).map_err(Self::Owned),
        }
    }
}

impl<T: Reflect> Value<'_, T> {
    /// Returns an owned value, cloning it if borrowed.
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Self::Borrowed(value) => value.clone(),
            Self::Owned(value) => *value,
        }
    }
}

impl<T: ?Sized + 'static> Deref for Value<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self {
            Self::Borrowed(value) => value,
            Self::Owned(value) => value,
        }
    }
}

impl<T: ?Sized + fmt::Debug + 'static> fmt::Debug for Value<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::Value;
    use crate::Reflect;

    #[test]
    fn owned_downcast_keeps_value_on_mismatch() {
        let value: Value<'_> = Value::Owned(Box::new(String::from("x")));
        let value = value.downcast::<u32>().unwrap_err();
        assert!(!value.is_borrowed());
        let text = value.downcast::<String>().ok().unwrap();
        assert_eq!(text.into_owned(), "x");
    }

    #[test]
    fn borrowed_derefs_to_target() {
        let number = 3_i64;
        let value: Value<'_> = Value::Borrowed(number.as_reflect());
        assert!(value.is::<i64>());
    }
}
