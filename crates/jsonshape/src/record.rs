/// Declares a record struct along with its [`Decode`](crate::Decode) and
/// [`Encode`](crate::Encode) implementations.
///
/// Each field is read from the object member of the same name, in declaration
/// order; the first failing field ends the decode. `Option<T>` fields may be
/// absent or `null`, every other field is required. Attributes on the struct
/// and its fields are passed through.
///
/// ```rust
/// use jsonshape::{Encode, record};
///
/// record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Dog {
///         pub name: String,
///         pub age: i64,
///     }
/// }
///
/// let dog: Dog = jsonshape::from_str(r#"{ "name": "Tory", "age": 3 }"#).unwrap();
/// assert_eq!(dog, Dog { name: "Tory".into(), age: 3 });
/// assert_eq!(dog.encode().to_string(), r#"{"age":3,"name":"Tory"}"#);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Decode for $name {
            fn decode(
                value: &$crate::Value,
                decoder: &mut $crate::Decoder,
            ) -> ::core::result::Result<Self, $crate::DecodeError> {
                #[allow(unused_mut)]
                let mut fields = decoder.fields(value)?;
                let decoded = Self {
                    $( $field: fields.field::<$ty>(::core::stringify!($field))?, )*
                };
                fields.finish()?;
                ::core::result::Result::Ok(decoded)
            }

            fn shape() -> $crate::Shape {
                $crate::Shape::Record {
                    name: ::core::stringify!($name),
                    fields: || {
                        $crate::vec![$(
                            $crate::FieldShape {
                                name: ::core::stringify!($field),
                                shape: <$ty as $crate::Decode>::shape(),
                                required: <$ty as $crate::Decode>::missing().is_none(),
                            },
                        )*]
                    },
                }
            }
        }

        impl $crate::Encode for $name {
            fn encode(&self) -> $crate::Value {
                #[allow(unused_mut)]
                let mut map = $crate::Map::new();
                $(
                    map.insert(
                        ::core::convert::Into::into(::core::stringify!($field)),
                        $crate::Encode::encode(&self.$field),
                    );
                )*
                $crate::Value::Object(map)
            }
        }
    };
}
