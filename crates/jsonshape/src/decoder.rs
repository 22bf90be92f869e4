use alloc::{borrow::ToOwned, string::String, vec::Vec};

use crate::{
    Decode, DecodeError, DecodeErrorKind, DecodeOptions, Index, Kind, Map, OnElementError, Path,
    Value,
};

/// State threaded through one decode call.
///
/// Tracks the path of the value being decoded and the current nesting depth.
/// [`Decode`] implementations recurse through [`Decoder::decode_key`] and
/// [`Decoder::decode_index`] so that errors raised further down carry the full
/// path and the depth guard sees every level.
#[derive(Debug)]
pub struct Decoder {
    options: DecodeOptions,
    path: Path,
    depth: usize,
}

impl Decoder {
    /// Creates a decoder positioned at the root, at depth zero.
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            path: Path::new(),
            depth: 0,
        }
    }

    /// Options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Path of the value currently being decoded.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds an error located at the current path.
    #[must_use]
    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(self.path.clone(), kind)
    }

    /// Builds a [`TypeMismatch`](DecodeErrorKind::TypeMismatch) for `actual`
    /// at the current path.
    #[must_use]
    pub fn mismatch(&self, expected: Kind, actual: &Value) -> DecodeError {
        self.error(DecodeErrorKind::TypeMismatch {
            expected,
            actual: actual.kind(),
        })
    }

    /// Builds a [`Custom`](DecodeErrorKind::Custom) error at the current path.
    #[must_use]
    pub fn custom(&self, msg: impl Into<String>) -> DecodeError {
        self.error(DecodeErrorKind::Custom(msg.into()))
    }

    /// Decodes `value` one level below the current one.
    pub fn decode_value<T: Decode>(&mut self, value: &Value) -> Result<T, DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(DecodeErrorKind::DepthExceeded {
                limit: self.options.max_depth,
            }));
        }
        self.depth += 1;
        let result = T::decode(value, self);
        self.depth -= 1;
        result
    }

    /// Decodes the member `key` of the object being decoded.
    pub fn decode_key<T: Decode>(&mut self, key: &str, value: &Value) -> Result<T, DecodeError> {
        self.path.push_key(key);
        let result = self.decode_value(value);
        self.path.pop();
        result
    }

    /// Decodes the element `index` of the array being decoded.
    pub fn decode_index<T: Decode>(
        &mut self,
        index: Index,
        value: &Value,
    ) -> Result<T, DecodeError> {
        self.path.push_index(index);
        let result = self.decode_value(value);
        self.path.pop();
        result
    }

    /// Decodes every element of `value`, which must be an array.
    ///
    /// Failing elements abort or are dropped according to
    /// [`DecodeOptions::on_element_error`].
    pub fn decode_elements<T: Decode>(&mut self, value: &Value) -> Result<Vec<T>, DecodeError> {
        let Value::Array(elements) = value else {
            return Err(self.mismatch(Kind::Array, value));
        };
        log::trace!("decoding {} elements at {}", elements.len(), self.path);

        let mut out = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            match self.decode_index(index, element) {
                Ok(decoded) => out.push(decoded),
                Err(err)
                    if self.options.on_element_error == OnElementError::Skip
                        && !matches!(err.kind, DecodeErrorKind::DepthExceeded { .. }) =>
                {
                    log::debug!("skipping element: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }

    /// Starts decoding a record from `value`, which must be an object.
    pub fn fields<'d, 'v>(&'d mut self, value: &'v Value) -> Result<Fields<'d, 'v>, DecodeError> {
        match value {
            Value::Object(map) => Ok(Fields {
                decoder: self,
                map,
                seen: Vec::new(),
            }),
            other => Err(self.mismatch(Kind::Object, other)),
        }
    }
}

/// Field-by-field access to the object behind a record.
///
/// Obtained from [`Decoder::fields`]. Call [`Fields::finish`] once every
/// declared field has been read so unknown keys can be rejected when
/// [`DecodeOptions::deny_unknown_fields`] is set.
#[derive(Debug)]
pub struct Fields<'d, 'v> {
    decoder: &'d mut Decoder,
    map: &'v Map,
    seen: Vec<&'v str>,
}

impl Fields<'_, '_> {
    /// Decodes the field `name`.
    ///
    /// A missing field falls back to [`Decode::missing`], which makes
    /// `Option<T>` fields optional and every other field required.
    pub fn field<T: Decode>(&mut self, name: &str) -> Result<T, DecodeError> {
        let map = self.map;
        match map.get_key_value(name) {
            Some((key, value)) => {
                self.seen.push(key);
                self.decoder.decode_key(name, value)
            }
            None => T::missing().ok_or_else(|| {
                self.decoder
                    .error(DecodeErrorKind::MissingField(name.to_owned()))
            }),
        }
    }

    /// Decodes the field `name`, treating absence and `null` as `None`.
    pub fn optional<T: Decode>(&mut self, name: &str) -> Result<Option<T>, DecodeError> {
        self.field(name)
    }

    /// The decoder this record is being read with.
    #[must_use]
    pub fn decoder(&self) -> &Decoder {
        self.decoder
    }

    /// Ends the record, rejecting undeclared keys if configured to.
    pub fn finish(self) -> Result<(), DecodeError> {
        if !self.decoder.options.deny_unknown_fields {
            return Ok(());
        }
        match self.map.keys().find(|key| !self.seen.contains(&key.as_str())) {
            Some(key) => Err(self
                .decoder
                .error(DecodeErrorKind::UnknownField(key.clone()))),
            None => Ok(()),
        }
    }
}
