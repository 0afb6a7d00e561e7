//! The "is this payload the default value" predicate behind
//! [`MessageContract::has_result`](crate::MessageContract::has_result).
//!
//! A successful contract whose payload is the type's default value (zero, an
//! empty string, an empty collection, `None`) is not considered to have a
//! result. Types opt in by implementing [`DefaultValue`], either by hand or
//! through [`default_value_by_eq!`](crate::default_value_by_eq) when
//! `Default + PartialEq` already describes them.
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

pub trait DefaultValue {
    fn is_default_value(&self) -> bool;
}

/// Implements [`DefaultValue`] by comparing against `Default::default()`.
///
/// ```ignore
/// #[derive(Default, PartialEq)]
/// struct UserId(u64);
/// service_contracts::default_value_by_eq!(UserId);
/// ```
#[macro_export]
macro_rules! default_value_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::DefaultValue for $ty {
                fn is_default_value(&self) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }
            }
        )*
    };
}

default_value_by_eq!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);

impl DefaultValue for str {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl DefaultValue for String {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> DefaultValue for Option<T> {
    fn is_default_value(&self) -> bool {
        self.is_none()
    }
}

impl<T> DefaultValue for Vec<T> {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> DefaultValue for [T] {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> DefaultValue for VecDeque<T> {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> DefaultValue for BTreeMap<K, V> {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> DefaultValue for BTreeSet<T> {
    fn is_default_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: DefaultValue, const N: usize> DefaultValue for [T; N] {
    fn is_default_value(&self) -> bool {
        self.iter().all(DefaultValue::is_default_value)
    }
}

impl<T: DefaultValue + ?Sized> DefaultValue for &T {
    fn is_default_value(&self) -> bool {
        (**self).is_default_value()
    }
}

impl<T: DefaultValue + ?Sized> DefaultValue for Box<T> {
    fn is_default_value(&self) -> bool {
        (**self).is_default_value()
    }
}

impl<T: DefaultValue + ?Sized> DefaultValue for Rc<T> {
    fn is_default_value(&self) -> bool {
        (**self).is_default_value()
    }
}

impl<T: DefaultValue + ?Sized> DefaultValue for Arc<T> {
    fn is_default_value(&self) -> bool {
        (**self).is_default_value()
    }
}

impl<A: DefaultValue, B: DefaultValue> DefaultValue for (A, B) {
    fn is_default_value(&self) -> bool {
        self.0.is_default_value() && self.1.is_default_value()
    }
}

impl<A: DefaultValue, B: DefaultValue, C: DefaultValue> DefaultValue for (A, B, C) {
    fn is_default_value(&self) -> bool {
        self.0.is_default_value() && self.1.is_default_value() && self.2.is_default_value()
    }
}
