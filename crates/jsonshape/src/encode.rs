//! The [`Encode`] trait, inverse of [`Decode`](crate::Decode).

use alloc::{boxed::Box, collections::BTreeMap, string::String, vec::Vec};

use crate::{Map, Value};

/// A type that can be turned back into a [`Value`].
///
/// For every type implementing both traits, decoding the encoded value yields
/// the original, as long as integers stay within the range an `f64` represents
/// exactly (±2^53).
pub trait Encode {
    /// Builds the value representing `self`.
    fn encode(&self) -> Value;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

impl Encode for Value {
    fn encode(&self) -> Value {
        self.clone()
    }
}

impl Encode for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Encode for str {
    fn encode(&self) -> Value {
        Value::from(self)
    }
}

impl Encode for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! impl_encode_for_number {
    ($($t:ty),+) => {
        $(
            impl Encode for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn encode(&self) -> Value {
                    Value::Number(*self as f64)
                }
            }
        )+
    };
}
impl_encode_for_number!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Value {
        self.as_ref().map_or(Value::Null, Encode::encode)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Value {
        self.as_slice().encode()
    }
}

impl<T: Encode> Encode for BTreeMap<String, T> {
    fn encode(&self) -> Value {
        Value::Object(encode_entries(self))
    }
}

#[cfg(feature = "std")]
impl<T: Encode, S> Encode for std::collections::HashMap<String, T, S> {
    fn encode(&self) -> Value {
        Value::Object(encode_entries(self))
    }
}

fn encode_entries<'a, T: Encode + 'a>(entries: impl IntoIterator<Item = (&'a String, &'a T)>) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.encode()))
        .collect()
}
