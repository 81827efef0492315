use crate::{context::Context, value::Value};
use std::{
    any::{Any, type_name},
    collections::{BTreeMap, HashMap},
};

///
/// Native
///
/// Any type that may cross the plugin boundary in erased form.
///
/// Erased inputs are handed around as `&dyn Native` / `Box<dyn Native>`.
/// The capability queries stand in for a runtime interface assertion: a
/// concrete type answers `Some` only for the capability sets it fully
/// implements. Both default to `None`.
///
/// Hosts normally implement this through the [`native!`](crate::native!)
/// macro rather than by hand.
///

pub trait Native: Any + 'static {
    /// Name of the concrete type, for diagnostics only.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Narrow to the `Value` capability set.
    fn as_value(&self) -> Option<&dyn Value> {
        None
    }

    /// Narrow to the `Context` capability set.
    fn as_context(&self) -> Option<&dyn Context> {
        None
    }
}

impl dyn Native {
    /// Return whether the erased value is exactly `T`.
    #[must_use]
    pub fn is<T: Native>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Borrow the erased value as `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: Native>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Recover the owned `T`, handing the box back untouched on mismatch.
    pub fn downcast<T: Native>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if !self.is::<T>() {
            return Err(self);
        }

        let any: Box<dyn Any> = self;
        Ok(any
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("type checked above")))
    }
}

impl std::fmt::Debug for dyn Native {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Native({})", self.type_name())
    }
}

// std types never answer a capability query
native_all!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    serde_json::Value,
);

impl<T: 'static> Native for Vec<T> {}

impl<T: 'static> Native for Option<T> {}

impl<K: 'static, V: 'static> Native for BTreeMap<K, V> {}

impl<K: 'static, V: 'static, S: 'static> Native for HashMap<K, V, S> {}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_types_report_their_name_and_no_capabilities() {
        let text: Box<dyn Native> = Box::new(String::from("abc"));
        assert_eq!(text.type_name(), "alloc::string::String");
        assert!(text.as_value().is_none());
        assert!(text.as_context().is_none());

        let n: &dyn Native = &7_i64;
        assert_eq!(n.type_name(), "i64");
    }

    #[test]
    fn downcast_ref_matches_exact_type_only() {
        let n: &dyn Native = &7_u32;
        assert!(n.is::<u32>());
        assert_eq!(n.downcast_ref::<u32>(), Some(&7));
        assert!(n.downcast_ref::<u64>().is_none());
    }

    #[test]
    fn downcast_returns_box_on_mismatch() {
        let boxed: Box<dyn Native> = Box::new(vec![1_u8, 2, 3]);
        let boxed = boxed.downcast::<String>().expect_err("not a string");
        assert_eq!(boxed.type_name(), "alloc::vec::Vec<u8>");

        let bytes = boxed.downcast::<Vec<u8>>().expect("vec downcast");
        assert_eq!(*bytes, vec![1, 2, 3]);
    }

    #[test]
    fn debug_shows_type_name() {
        let n: Box<dyn Native> = Box::new(true);
        assert_eq!(format!("{n:?}"), "Native(bool)");
    }
}
