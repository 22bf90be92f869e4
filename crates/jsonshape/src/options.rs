use core::{fmt, str::FromStr};

/// Default for [`DecodeOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What to do when one element of an array fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnElementError {
    /// Fail the whole decode with the element's error.
    #[default]
    Abort,
    /// Drop the element and keep decoding the rest of the array.
    Skip,
}

impl OnElementError {
    /// The name accepted by [`FromStr`], `"abort"` or `"skip"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OnElementError::Abort => "abort",
            OnElementError::Skip => "skip",
        }
    }
}

impl fmt::Display for OnElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an [`OnElementError`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected \"abort\" or \"skip\"")]
pub struct InvalidOnElementError;

impl FromStr for OnElementError {
    type Err = InvalidOnElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(OnElementError::Abort),
            "skip" => Ok(OnElementError::Skip),
            _ => Err(InvalidOnElementError),
        }
    }
}

/// Per-call configuration for [`decode_with`](crate::decode_with).
///
/// # Examples
///
/// ```rust
/// use jsonshape::{DecodeOptions, OnElementError};
///
/// let options = DecodeOptions {
///     on_element_error: OnElementError::Skip,
///     ..Default::default()
/// };
/// assert_eq!(options.max_depth, jsonshape::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How array elements that fail to decode are handled.
    ///
    /// Applies to every array reached during the call, nested or not. An
    /// element that trips the depth guard always aborts.
    ///
    /// # Default
    ///
    /// [`OnElementError::Abort`]
    pub on_element_error: OnElementError,

    /// Maximum nesting depth of values that may be decoded.
    ///
    /// The root value is at depth 1. Decoding a value any deeper fails with
    /// [`DecodeErrorKind::DepthExceeded`](crate::DecodeErrorKind::DepthExceeded).
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,

    /// Whether records reject object keys they do not declare.
    ///
    /// # Default
    ///
    /// `false`
    pub deny_unknown_fields: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            on_element_error: OnElementError::Abort,
            max_depth: DEFAULT_MAX_DEPTH,
            deny_unknown_fields: false,
        }
    }
}
