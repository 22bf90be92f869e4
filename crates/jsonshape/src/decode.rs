//! The [`Decode`] trait and its implementations for standard types.

use alloc::{boxed::Box, collections::BTreeMap, string::String, vec::Vec};

use crate::{
    DecodeError, Decoder, Kind, Shape, Value,
    value::{integral, integral_unsigned},
};

/// A type that can be decoded from a [`Value`].
///
/// Implementations check the value's kind, recurse into children through the
/// [`Decoder`] so paths and depth are tracked, and never coerce between
/// kinds. Records are usually declared with [`record!`](crate::record) rather
/// than implemented by hand.
///
/// # Examples
///
/// A hand-written implementation for a type the macro does not cover:
///
/// ```
/// use jsonshape::{Decode, DecodeError, Decoder, Kind, Value};
///
/// #[derive(Debug, PartialEq)]
/// enum Size {
///     Small,
///     Large,
/// }
///
/// impl Decode for Size {
///     fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
///         match value.as_str() {
///             Some("small") => Ok(Size::Small),
///             Some("large") => Ok(Size::Large),
///             Some(other) => Err(decoder.custom(format!("unknown size `{other}`"))),
///             None => Err(decoder.mismatch(Kind::String, value)),
///         }
///     }
/// }
///
/// let v = jsonshape::parse(r#"["small", "large"]"#).unwrap();
/// let sizes: Vec<Size> = jsonshape::decode(&v).unwrap();
/// assert_eq!(sizes, [Size::Small, Size::Large]);
/// ```
pub trait Decode: Sized {
    /// Decodes `value`, reporting failures through `decoder`.
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError>;

    /// Value to use when a record field of this type is absent.
    ///
    /// `None` makes the field required.
    #[must_use]
    fn missing() -> Option<Self> {
        None
    }

    /// Describes the structure this type expects.
    #[must_use]
    fn shape() -> Shape {
        Shape::Any
    }
}

impl Decode for Value {
    fn decode(value: &Value, _decoder: &mut Decoder) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl Decode for bool {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| decoder.mismatch(Kind::Bool, value))
    }

    fn shape() -> Shape {
        Shape::Bool
    }
}

impl Decode for String {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(decoder.mismatch(Kind::String, other)),
        }
    }

    fn shape() -> Shape {
        Shape::String
    }
}

impl Decode for f64 {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| decoder.mismatch(Kind::Number, value))
    }

    fn shape() -> Shape {
        Shape::Number
    }
}

/// Rounds to the nearest `f32`. Finite numbers beyond the `f32` range are
/// rejected with a [`Custom`](crate::DecodeErrorKind::Custom) error rather
/// than becoming infinite.
impl Decode for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        let n = f64::decode(value, decoder)?;
        let narrowed = n as f32;
        if narrowed.is_infinite() && n.is_finite() {
            return Err(decoder.custom(alloc::format!("number {n:e} is out of range for f32")));
        }
        Ok(narrowed)
    }

    fn shape() -> Shape {
        Shape::Number
    }
}

// A number decodes into an integer type only when it is integral and fits;
// anything else is reported as a mismatch against `integer`.
macro_rules! impl_decode_for_integer {
    ($integral:ident => $($t:ty),+) => {
        $(
            impl Decode for $t {
                fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
                    value
                        .as_f64()
                        .and_then($integral)
                        .and_then(|n| <$t>::try_from(n).ok())
                        .ok_or_else(|| decoder.mismatch(Kind::Integer, value))
                }

                fn shape() -> Shape {
                    Shape::Integer
                }
            }
        )+
    };
}
impl_decode_for_integer!(integral => i8, i16, i32, i64, i128, isize);
impl_decode_for_integer!(integral_unsigned => u8, u16, u32, u64, u128, usize);

impl<T: Decode> Decode for Option<T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::decode(value, decoder).map(Some)
        }
    }

    fn missing() -> Option<Self> {
        Some(None)
    }

    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        T::decode(value, decoder).map(Box::new)
    }

    fn missing() -> Option<Self> {
        T::missing().map(Box::new)
    }

    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        decoder.decode_elements(value)
    }

    fn shape() -> Shape {
        Shape::Array(Box::new(T::shape()))
    }
}

impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        let Value::Object(map) = value else {
            return Err(decoder.mismatch(Kind::Object, value));
        };
        log::trace!("decoding {} entries at {}", map.len(), decoder.path());
        map.iter()
            .map(|(key, entry)| {
                decoder
                    .decode_key(key, entry)
                    .map(|decoded| (key.clone(), decoded))
            })
            .collect()
    }

    fn shape() -> Shape {
        Shape::Map(Box::new(T::shape()))
    }
}

#[cfg(feature = "std")]
impl<T: Decode, S> Decode for std::collections::HashMap<String, T, S>
where
    S: core::hash::BuildHasher + Default,
{
    fn decode(value: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
        let Value::Object(map) = value else {
            return Err(decoder.mismatch(Kind::Object, value));
        };
        log::trace!("decoding {} entries at {}", map.len(), decoder.path());
        map.iter()
            .map(|(key, entry)| {
                decoder
                    .decode_key(key, entry)
                    .map(|decoded| (key.clone(), decoded))
            })
            .collect()
    }

    fn shape() -> Shape {
        Shape::Map(Box::new(T::shape()))
    }
}
