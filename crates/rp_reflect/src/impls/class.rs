/// Implements [`TypePath`], [`Typed`] and [`Reflect`] for a class.
///
/// ```text
/// impl_class!(Name in "module::path" {
///     extends Base => base_field;             // optional superclass
///     fields { a: A, b: B }                   // plain fields
///     optional { c: C }                       // `Option<C>` fields
///     methods { fn m(&self, x: X) -> R; }     // infallible methods
///     fallible { fn n(&self) -> R; }          // methods returning `Result<R, E>`
/// });
/// ```
///
/// Every block is optional, but they must appear in this order. Only the
/// members listed are visible to reflection; Rust visibility does not matter
/// because the accessors are generated next to the type.
///
/// - The type path is `"module::path::Name"`; the type name and the short
///   name are both `"Name"`.
/// - The type must be `Clone + Send + Sync + 'static`. `reflect_clone` uses
///   `Clone`.
/// - Method arguments are cloned out of the argument list, so parameter
///   types must be `Clone`. A missing return type means `()`.
/// - A fallible method is declared with its success type; its error type
///   must implement `core::error::Error + Send + Sync + 'static` and is
///   reported as [`InvokeError::Raised`].
/// - `extends Base => base_field` declares `Base` as the superclass. Fields
///   and methods of `Base` are then reachable through `Name`.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use rp_reflect::{Reflect, impl_class};
/// use rp_reflect::info::{InvokeError, Typed};
///
/// #[derive(Debug)]
/// struct Offline;
///
/// impl fmt::Display for Offline {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("offline")
///     }
/// }
///
/// impl core::error::Error for Offline {}
///
/// #[derive(Clone)]
/// struct Peer { online: bool }
///
/// impl Peer {
///     fn ping(&self) -> Result<u32, Offline> {
///         if self.online { Ok(12) } else { Err(Offline) }
///     }
/// }
///
/// impl_class!(Peer in "net" {
///     fields { online: bool }
///     fallible { fn ping(&self) -> u32; }
/// });
///
/// let ping = Peer::type_info().as_class().unwrap().method("ping").unwrap();
/// assert_eq!(ping.return_type().ident(), "u32");
///
/// let out = ping.invoke(&Peer { online: true }, &[]).unwrap();
/// assert_eq!(out.take::<u32>().unwrap(), 12);
///
/// let err = ping.invoke(&Peer { online: false }, &[]).unwrap_err();
/// assert!(matches!(err, InvokeError::Raised(_)));
/// ```
///
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`InvokeError::Raised`]: crate::info::InvokeError::Raised
#[macro_export]
macro_rules! impl_class {
    (
        $ty:ident in $module:literal {
            $(extends $base:ty => $base_field:ident;)?
            $(fields { $($field:ident : $field_ty:ty),* $(,)? })?
            $(optional { $($opt:ident : $opt_ty:ty),* $(,)? })?
            $(methods { $(fn $method:ident(&self $(, $arg:ident : $arg_ty:ty)*) $(-> $ret:ty)?;)* })?
            $(fallible { $(fn $fmethod:ident(&self $(, $farg:ident : $farg_ty:ty)*) -> $fret:ty;)* })?
        }
    ) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!($module, "::", ::core::stringify!($ty))
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some($module)
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();

                CELL.get_or_init(|| {
                    let fields = $crate::impls::__macro_exports::Vec::from([
                        $($(
                            $crate::info::FieldInfo::new::<$ty, $field_ty>(::core::stringify!($field), {
                                fn get(this: &dyn $crate::Reflect) -> ::core::option::Option<&dyn $crate::Reflect> {
                                    let this = this.downcast_ref::<$ty>()?;
                                    ::core::option::Option::Some($crate::Reflect::as_reflect(&this.$field))
                                }
                                get
                            }),
                        )*)?
                        $($(
                            $crate::info::FieldInfo::new::<$ty, $opt_ty>(::core::stringify!($opt), {
                                fn get(this: &dyn $crate::Reflect) -> ::core::option::Option<&dyn $crate::Reflect> {
                                    let this = this.downcast_ref::<$ty>()?;
                                    this.$opt.as_ref().map($crate::Reflect::as_reflect)
                                }
                                get
                            })
                            .with_optional(true),
                        )*)?
                    ]);

                    let methods = $crate::impls::__macro_exports::Vec::from([
                        $($(
                            $crate::info::MethodInfo::new::<$ty, $crate::__class_return!($($ret)?)>(
                                ::core::stringify!($method),
                                $crate::impls::__macro_exports::Vec::from([
                                    $($crate::info::Type::of::<$arg_ty>()),*
                                ]),
                                {
                                    #[allow(unused_mut, unused_variables)]
                                    fn invoke(
                                        this: &dyn $crate::Reflect,
                                        mut args: $crate::info::Args<'_>,
                                    ) -> ::core::result::Result<
                                        $crate::impls::__macro_exports::Box<dyn $crate::Reflect>,
                                        $crate::info::InvokeError,
                                    > {
                                        let this = $crate::__class_receiver!(this, $ty);
                                        $(
                                            let $arg: $arg_ty =
                                                ::core::clone::Clone::clone(args.next::<$arg_ty>()?);
                                        )*
                                        let out = <$ty>::$method(this $(, $arg)*);
                                        ::core::result::Result::Ok($crate::impls::__macro_exports::Box::new(out))
                                    }
                                    invoke
                                },
                            ),
                        )*)?
                        $($(
                            $crate::info::MethodInfo::new::<$ty, $fret>(
                                ::core::stringify!($fmethod),
                                $crate::impls::__macro_exports::Vec::from([
                                    $($crate::info::Type::of::<$farg_ty>()),*
                                ]),
                                {
                                    #[allow(unused_mut, unused_variables)]
                                    fn invoke(
                                        this: &dyn $crate::Reflect,
                                        mut args: $crate::info::Args<'_>,
                                    ) -> ::core::result::Result<
                                        $crate::impls::__macro_exports::Box<dyn $crate::Reflect>,
                                        $crate::info::InvokeError,
                                    > {
                                        let this = $crate::__class_receiver!(this, $ty);
                                        $(
                                            let $farg: $farg_ty =
                                                ::core::clone::Clone::clone(args.next::<$farg_ty>()?);
                                        )*
                                        match <$ty>::$fmethod(this $(, $farg)*) {
                                            ::core::result::Result::Ok(out) => ::core::result::Result::Ok(
                                                $crate::impls::__macro_exports::Box::new(out),
                                            ),
                                            ::core::result::Result::Err(err) => ::core::result::Result::Err(
                                                $crate::info::InvokeError::Raised(
                                                    $crate::impls::__macro_exports::Box::new(err),
                                                ),
                                            ),
                                        }
                                    }
                                    invoke
                                },
                            ),
                        )*)?
                    ]);

                    let class = $crate::info::ClassInfo::new::<$ty>(fields, methods);
                    $(
                        let class = class.with_superclass($crate::info::Superclass::new::<$base>({
                            fn upcast(this: &dyn $crate::Reflect) -> ::core::option::Option<&dyn $crate::Reflect> {
                                let this = this.downcast_ref::<$ty>()?;
                                ::core::option::Option::Some($crate::Reflect::as_reflect(&this.$base_field))
                            }
                            upcast
                        }));
                    )?
                    $crate::info::TypeInfo::Class(class)
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_clone(
                &self,
            ) -> ::core::result::Result<
                $crate::impls::__macro_exports::Box<dyn $crate::Reflect>,
                $crate::ReflectCloneError,
            > {
                ::core::result::Result::Ok($crate::impls::__macro_exports::Box::new(
                    ::core::clone::Clone::clone(self),
                ))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __class_return {
    () => { () };
    ($ret:ty) => { $ret };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __class_receiver {
    ($this:ident, $ty:ident) => {
        match $this.downcast_ref::<$ty>() {
            ::core::option::Option::Some(this) => this,
            ::core::option::Option::None => {
                return ::core::result::Result::Err($crate::info::InvokeError::Receiver {
                    expected: <$ty as $crate::info::TypePath>::type_path(),
                    received: $crate::info::DynamicTypePath::reflect_type_path($this),
                });
            }
        }
    };
}
