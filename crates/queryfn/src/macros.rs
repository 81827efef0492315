// native
/// Implement [`Native`](crate::native::Native) for a concrete type and
/// declare which capability sets it answers.
///
/// ```ignore
/// native!(PlainType);
/// native!(EngineValue: value);
/// native!(EngineSession: context);
/// native!(Both: value, context);
/// ```
#[macro_export]
macro_rules! native {
    (@cap value) => {
        fn as_value(&self) -> ::core::option::Option<&dyn $crate::value::Value> {
            ::core::option::Option::Some(self)
        }
    };
    (@cap context) => {
        fn as_context(&self) -> ::core::option::Option<&dyn $crate::context::Context> {
            ::core::option::Option::Some(self)
        }
    };
    ($ty:ty) => {
        impl $crate::native::Native for $ty {}
    };
    ($ty:ty : $($cap:ident),+ $(,)?) => {
        impl $crate::native::Native for $ty {
            $( $crate::native!(@cap $cap); )+
        }
    };
}

// native_all
// capability-free impls for a list of std types
macro_rules! native_all {
    ($($ty:ty),* $(,)?) => {
        $( $crate::native!($ty); )*
    };
}
