//! Shape-driven decoding of JSON value trees into typed records.
//!
//! JSON text is [`parse`]d into a [`Value`] tree, which is then decoded into
//! any type implementing [`Decode`]. Failures carry the [`Path`] of the value
//! that did not fit and the reason, so a caller can tell exactly which entry
//! of which array was wrong.
//!
//! ```rust
//! use jsonshape::{DecodeErrorKind, DecodeOptions, OnElementError, record};
//!
//! record! {
//!     #[derive(Debug, PartialEq)]
//!     pub struct Dog {
//!         pub name: String,
//!         pub age: i64,
//!     }
//! }
//!
//! let value = jsonshape::parse(r#"[{ "name": "Tory", "age": 3 }, { "age": 3 }]"#).unwrap();
//!
//! let err = jsonshape::decode::<Vec<Dog>>(&value).unwrap_err();
//! assert_eq!(err.kind(), &DecodeErrorKind::MissingField("name".into()));
//! assert_eq!(err.to_string(), "missing field `name` at $[1]");
//!
//! let options = DecodeOptions { on_element_error: OnElementError::Skip, ..Default::default() };
//! let dogs: Vec<Dog> = jsonshape::decode_with(&value, options).unwrap();
//! assert_eq!(dogs, [Dog { name: "Tory".into(), age: 3 }]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decode;
mod decoder;
mod encode;
mod error;
mod kind;
mod options;
mod path;
mod path_component;
mod record;
mod shape;
mod value;


use alloc::string::{String, ToString};

pub use decode::Decode;
pub use decoder::{Decoder, Fields};
pub use encode::Encode;
pub use error::{DecodeError, DecodeErrorKind, Error, ParseError};
pub use kind::Kind;
pub use options::{DEFAULT_MAX_DEPTH, DecodeOptions, InvalidOnElementError, OnElementError};
pub use path::Path;
pub use path_component::{Index, Key, PathComponent, PathComponentFrom};
pub use shape::{FieldShape, Shape};
pub use value::{Array, Map, Value};

#[doc(hidden)]
pub use alloc::vec;

/// Parses JSON text into a [`Value`].
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not a single well-formed JSON
/// document.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(ParseError::from)
}

/// Decodes `value` into `T` with the default [`DecodeOptions`].
///
/// # Errors
///
/// Returns the first [`DecodeError`] met, located at the failing value's path.
pub fn decode<T: Decode>(value: &Value) -> Result<T, DecodeError> {
    decode_with(value, DecodeOptions::default())
}

/// Decodes `value` into `T` with the given options.
///
/// # Errors
///
/// Returns the first [`DecodeError`] that is not skipped under
/// [`DecodeOptions::on_element_error`].
pub fn decode_with<T: Decode>(value: &Value, options: DecodeOptions) -> Result<T, DecodeError> {
    Decoder::new(options).decode_value(value)
}

/// Parses `text` and decodes it into `T`.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed text and [`Error::Decode`] when the
/// parsed value does not fit `T`.
pub fn from_str<T: Decode>(text: &str) -> Result<T, Error> {
    from_str_with(text, DecodeOptions::default())
}

/// Parses `text` and decodes it into `T` with the given options.
///
/// # Errors
///
/// See [`from_str`].
pub fn from_str_with<T: Decode>(text: &str, options: DecodeOptions) -> Result<T, Error> {
    let value = parse(text)?;
    Ok(decode_with(&value, options)?)
}

/// Encodes `value` into a [`Value`].
pub fn encode<T: Encode + ?Sized>(value: &T) -> Value {
    value.encode()
}

/// Encodes `value` as compact JSON text.
pub fn to_string<T: Encode + ?Sized>(value: &T) -> String {
    value.encode().to_string()
}

/// Macro to build a [`Path`] from a heterogeneous list of keys and indices.
///
/// ```rust
/// # use jsonshape::{path, PathComponent};
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p.as_slice(),
///     [
///         PathComponent::Index(0),
///         PathComponent::Key("foo".into()),
///         PathComponent::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ( $( $elem:expr ),+ $(,)? ) => {{
        use $crate::PathComponentFrom;
        $crate::Path::from($crate::vec![$($crate::PathComponent::from_path_component($elem)),+])
    }};
}
