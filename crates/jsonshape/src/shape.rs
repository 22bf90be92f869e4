use alloc::{boxed::Box, vec::Vec};
use core::fmt;

/// Runtime description of what a [`Decode`](crate::Decode) type expects.
///
/// # Examples
///
/// ```
/// use jsonshape::{Decode, record};
///
/// record! {
///     pub struct Dog {
///         pub name: String,
///         pub age: i64,
///         pub nickname: Option<String>,
///     }
/// }
///
/// assert_eq!(
///     Dog::shape().to_string(),
///     "Dog { name: string, age: integer, nickname?: string }"
/// );
/// assert_eq!(<Vec<Dog>>::shape().to_string(), "array<Dog>");
/// ```
#[derive(Clone, Debug)]
pub enum Shape {
    /// Anything is accepted.
    Any,
    /// `true` or `false`.
    Bool,
    /// An integral number.
    Integer,
    /// Any number.
    Number,
    /// A string.
    String,
    /// `null` or the inner shape.
    Optional(Box<Shape>),
    /// An array of uniformly shaped elements.
    Array(Box<Shape>),
    /// An object with arbitrary keys and uniformly shaped values.
    Map(Box<Shape>),
    /// An object with declared fields.
    ///
    /// Fields are produced on demand so that records may contain themselves.
    Record {
        /// Name of the record type.
        name: &'static str,
        /// Produces the fields in declaration order.
        fields: fn() -> Vec<FieldShape>,
    },
}

/// One declared field of a [`Shape::Record`].
#[derive(Clone, Debug)]
pub struct FieldShape {
    /// Member name in the JSON object.
    pub name: &'static str,
    /// Shape of the member's value.
    pub shape: Shape,
    /// Whether decoding fails when the field is absent.
    pub required: bool,
}

impl Shape {
    /// Returns the declared fields if this is a record shape.
    #[must_use]
    pub fn fields(&self) -> Option<Vec<FieldShape>> {
        match self {
            Shape::Record { fields, .. } => Some(fields()),
            _ => None,
        }
    }

    // Nested records are written by name only; see `Display`.
    fn write_ref(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Any => f.write_str("any"),
            Shape::Bool => f.write_str("boolean"),
            Shape::Integer => f.write_str("integer"),
            Shape::Number => f.write_str("number"),
            Shape::String => f.write_str("string"),
            Shape::Optional(inner) => {
                f.write_str("optional<")?;
                inner.write_ref(f)?;
                f.write_str(">")
            }
            Shape::Array(inner) => {
                f.write_str("array<")?;
                inner.write_ref(f)?;
                f.write_str(">")
            }
            Shape::Map(inner) => {
                f.write_str("map<")?;
                inner.write_ref(f)?;
                f.write_str(">")
            }
            Shape::Record { name, .. } => f.write_str(name),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Shape::Record { name, fields } = self else {
            return self.write_ref(f);
        };
        let fields = fields();
        if fields.is_empty() {
            return write!(f, "{name} {{}}");
        }
        write!(f, "{name} {{ ")?;
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match (&field.shape, field.required) {
                (Shape::Optional(inner), false) => {
                    write!(f, "{}?: ", field.name)?;
                    inner.write_ref(f)?;
                }
                (shape, _) => {
                    write!(f, "{}: ", field.name)?;
                    shape.write_ref(f)?;
                }
            }
        }
        f.write_str(" }")
    }
}
