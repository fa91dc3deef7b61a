use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::Reflect;
use crate::info::{ClassInfo, DynamicTypePath, Type, TypeInfo, TypePath, Typed};

/// Runs a method on an instance of its declaring class.
pub type MethodInvoker = fn(&dyn Reflect, Args<'_>) -> Result<Box<dyn Reflect>, InvokeError>;

// -----------------------------------------------------------------------------
// InvokeError

/// Failure of [`MethodInfo::invoke`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvokeError {
    /// The number of arguments differs from the number of parameters.
    #[error("expected {expected} argument(s), received {received}")]
    ArgCount { expected: usize, received: usize },
    /// An argument has the wrong type.
    #[error("argument {index} expected `{expected}`, received `{received}`")]
    ArgType {
        index: usize,
        expected: &'static str,
        received: &'static str,
    },
    /// The receiver is not an instance of the declaring class.
    #[error("receiver of type `{received}` is not a `{expected}`")]
    Receiver {
        expected: &'static str,
        received: &'static str,
    },
    /// The method itself failed.
    #[error("method raised an error")]
    Raised(#[source] Box<dyn core::error::Error + Send + Sync>),
}

// -----------------------------------------------------------------------------
// Args

/// Cursor over the arguments of a method call.
///
/// ```
/// use rp_reflect::{Reflect, info::Args};
///
/// let text = String::from("hi");
/// let list: [&dyn Reflect; 2] = [&3_u8, &text];
/// let mut args = Args::new(&list);
///
/// assert_eq!(*args.next::<u8>().unwrap(), 3);
/// assert!(args.next::<u8>().is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Args<'a> {
    args: &'a [&'a dyn Reflect],
    index: usize,
}

impl<'a> Args<'a> {
    /// Creates a cursor at the first argument.
    #[inline]
    pub const fn new(args: &'a [&'a dyn Reflect]) -> Self {
        Self { args, index: 0 }
    }

    /// Total number of arguments.
    #[inline]
    pub const fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` if there are no arguments at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Takes the next argument as a `T`.
    ///
    /// The cursor only advances on success.
    pub fn next<T: Reflect + TypePath>(&mut self) -> Result<&'a T, InvokeError> {
        let index = self.index;
        let Some(&arg) = self.args.get(index) else {
            return Err(InvokeError::ArgCount {
                expected: index + 1,
                received: self.args.len(),
            });
        };
        match arg.downcast_ref::<T>() {
            Some(value) => {
                self.index += 1;
                Ok(value)
            }
            None => Err(InvokeError::ArgType {
                index,
                expected: T::type_path(),
                received: arg.reflect_type_path(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A method declared by a class.
///
/// Methods are found by name regardless of their parameters, and by return
/// type only when they take no parameters.
///
/// ```
/// use rp_reflect::{Reflect, impl_class};
/// use rp_reflect::info::{InvokeError, Typed};
///
/// #[derive(Clone)]
/// struct Counter { step: u32 }
///
/// impl Counter {
///     fn advance(&self, from: u32) -> u32 { from + self.step }
/// }
///
/// impl_class!(Counter in "calc" {
///     methods { fn advance(&self, from: u32) -> u32; }
/// });
///
/// let info = Counter::type_info().as_class().unwrap();
/// let advance = info.method("advance").unwrap();
/// assert_eq!(advance.param_count(), 1);
/// assert_eq!(advance.return_type().ident(), "u32");
///
/// let counter = Counter { step: 2 };
/// let out = advance.invoke(&counter, &[&40_u32]).unwrap();
/// assert_eq!(out.take::<u32>().unwrap(), 42);
///
/// let err = advance.invoke(&counter, &[]).unwrap_err();
/// assert!(matches!(err, InvokeError::ArgCount { expected: 1, received: 0 }));
/// ```
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    params: Box<[Type]>,
    ret: Type,
    // `TypeInfo` is created on first access; the function pointer delays it.
    ret_info: fn() -> &'static TypeInfo,
    declaring: Type,
    invoker: MethodInvoker,
}

impl MethodInfo {
    /// Creates a method of `TOwner` returning `TReturn`.
    ///
    /// `invoker` receives an instance of `TOwner` and exactly
    /// `params.len()` arguments.
    pub fn new<TOwner: TypePath, TReturn: Typed>(
        name: &'static str,
        params: Vec<Type>,
        invoker: MethodInvoker,
    ) -> Self {
        Self {
            name,
            params: params.into_boxed_slice(),
            ret: Type::of::<TReturn>(),
            ret_info: TReturn::type_info,
            declaring: Type::of::<TOwner>(),
            invoker,
        }
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parameter types, receiver excluded.
    #[inline]
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    /// Returns the number of parameters, receiver excluded.
    #[inline]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Returns the declared return [`Type`].
    #[inline]
    pub const fn return_type(&self) -> &Type {
        &self.ret
    }

    /// Returns the [`TypeInfo`] of the return type.
    #[inline]
    pub fn return_info(&self) -> &'static TypeInfo {
        (self.ret_info)()
    }

    /// Returns the class that declares this method.
    #[inline]
    pub const fn declaring_type(&self) -> &Type {
        &self.declaring
    }

    /// Invokes the method on `instance`.
    ///
    /// `instance` may be the declaring class or any subclass of it.
    pub fn invoke(
        &self,
        instance: &dyn Reflect,
        args: &[&dyn Reflect],
    ) -> Result<Box<dyn Reflect>, InvokeError> {
        if args.len() != self.params.len() {
            return Err(InvokeError::ArgCount {
                expected: self.params.len(),
                received: args.len(),
            });
        }
        let Some(owner) = ClassInfo::upcast(instance, self.declaring.id()) else {
            return Err(InvokeError::Receiver {
                expected: self.declaring.path(),
                received: instance.reflect_type_path(),
            });
        };
        (self.invoker)(owner, Args::new(args))
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("ret", &self.ret)
            .field("declaring", &self.declaring)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
