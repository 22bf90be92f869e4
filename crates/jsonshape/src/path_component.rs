use alloc::sync::Arc;

/// An object member name in a [`Path`](crate::Path).
pub type Key = Arc<str>;
/// An array position in a [`Path`](crate::Path).
pub type Index = usize;

/// A component in the path to a JSON value.
///
/// Paths are sequences of keys or indices (for objects and arrays,
/// respectively) used in [`DecodeError`](crate::DecodeError) to indicate where
/// within a document a decode failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    /// A member of an object.
    Key(Key),
    /// An element of an array.
    Index(Index),
}

impl From<usize> for PathComponent {
    fn from(i: usize) -> Self {
        PathComponent::Index(i)
    }
}

impl From<&str> for PathComponent {
    fn from(s: &str) -> Self {
        Self::Key(s.into())
    }
}

/// Conversion used by [`path!`](crate::path) so that any integer literal
/// becomes an index and any string becomes a key.
#[doc(hidden)]
pub trait PathComponentFrom<T> {
    /// Converts `value` into a path component.
    fn from_path_component(value: T) -> PathComponent;
}

// Integer literals in `path![...]` default to `i32`, so every integer type is
// accepted and treated as an index.
macro_rules! impl_integer_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathComponentFrom<$t> for PathComponent {
                fn from_path_component(value: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    PathComponent::Index(value as Index)
                }
            }
        )+
    };
}
impl_integer_as_path_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PathComponentFrom<&str> for PathComponent {
    fn from_path_component(value: &str) -> Self {
        PathComponent::Key(value.into())
    }
}

impl PathComponent {
    #[must_use]
    /// Returns the index if this component is an index, otherwise `None`.
    pub fn as_index(&self) -> Option<Index> {
        if let Self::Index(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the key if this component is a key, otherwise `None`.
    pub fn as_key(&self) -> Option<&str> {
        if let Self::Key(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
