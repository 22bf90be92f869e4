use alloc::vec::Vec;
use core::fmt;

use crate::{Index, Key, PathComponent, value::write_escaped_string};

/// Location of a value inside a value tree.
///
/// Renders as `$` for the root, `.key` for identifier-like keys, `["key"]` for
/// any other key, and `[n]` for array indices:
///
/// ```
/// use jsonshape::path;
///
/// assert_eq!(path![].to_string(), "$");
/// assert_eq!(path!["data", 1, "name"].to_string(), "$.data[1].name");
/// assert_eq!(path!["first name"].to_string(), r#"$["first name"]"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathComponent>);

impl Path {
    /// The root path, `$`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object member.
    pub fn push_key(&mut self, key: impl Into<Key>) {
        self.0.push(PathComponent::Key(key.into()));
    }

    /// Appends an array element.
    pub fn push_index(&mut self, index: Index) {
        self.0.push(PathComponent::Index(index));
    }

    /// Removes and returns the last component.
    pub fn pop(&mut self) -> Option<PathComponent> {
        self.0.pop()
    }

    /// Number of components; zero at the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The innermost component.
    #[must_use]
    pub fn last(&self) -> Option<&PathComponent> {
        self.0.last()
    }

    /// Iterates components from the root outwards.
    pub fn iter(&self) -> impl Iterator<Item = &PathComponent> {
        self.0.iter()
    }

    /// The components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PathComponent] {
        &self.0
    }
}

impl From<Vec<PathComponent>> for Path {
    fn from(components: Vec<PathComponent>) -> Self {
        Self(components)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathComponent;
    type IntoIter = core::slice::Iter<'a, PathComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for component in &self.0 {
            match component {
                PathComponent::Key(key) if is_identifier(key) => write!(f, ".{key}")?,
                PathComponent::Key(key) => {
                    f.write_str("[\"")?;
                    write_escaped_string(key, f)?;
                    f.write_str("\"]")?;
                }
                PathComponent::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
