//! Purpose: Provide version-tailored rendering of declared field state.
//! Exports: `Serializable`, `FieldValue`.
//! Role: Default structural walk over `fields()` plus the per-type override seam.
//! Invariants: Rendering is pure; source values are never mutated.
//! Invariants: Default output carries no absent entries and no leading-underscore keys.
//! Notes: Text encoding is fixed to serde_json; callers wanting another encoder post-process `as_version`.

use crate::core::error::{Error, ErrorKind};
use crate::core::field::Field;
use crate::core::version::Version;
use serde_json::{Map, Value};

/// What one declared field contributes to the structural walk.
pub enum FieldValue<'a> {
    /// Field intentionally holds no value; dropped from output.
    Absent,
    /// Plain JSON data, stored in the output unchanged.
    Data(Value),
    /// Another serializable value, expanded with the same version.
    Nested(&'a dyn Serializable),
}

impl<'a> FieldValue<'a> {
    pub fn data(value: impl Into<Value>) -> FieldValue<'static> {
        FieldValue::Data(value.into())
    }

    pub fn nested(value: &'a dyn Serializable) -> FieldValue<'a> {
        FieldValue::Nested(value)
    }

    pub fn from_field<T>(field: &Field<T>) -> FieldValue<'static>
    where
        T: Clone + Into<Value>,
    {
        match field {
            Field::Absent => FieldValue::Absent,
            Field::Set(value) => FieldValue::Data(value.clone().into()),
        }
    }

    pub fn nested_field<T: Serializable>(field: &'a Field<T>) -> FieldValue<'a> {
        match field {
            Field::Absent => FieldValue::Absent,
            Field::Set(value) => FieldValue::Nested(value),
        }
    }
}

/// Conversion to a versioned JSON representation.
///
/// Types declare their visible state through [`Serializable::fields`]; the
/// provided [`Serializable::as_version`] walks that list. Overriding
/// `as_version` replaces the walk wholesale for the type, and the override's
/// return value is used verbatim wherever the value appears, nested included.
pub trait Serializable {
    /// Ordered (external key, value) pairs making up the visible state.
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)>;

    /// Version-tailored representation; the default is the structural walk.
    fn as_version(&self, version: Version) -> Result<Value, Error> {
        let mut out = Map::new();
        for (key, value) in self.fields() {
            let rendered = match value {
                FieldValue::Absent => continue,
                FieldValue::Data(data) => data,
                FieldValue::Nested(child) => child.as_version(version)?,
            };
            out.insert(external_key(key).to_owned(), rendered);
        }
        Ok(Value::Object(out))
    }

    /// Encode `as_version(version)` as JSON text. The encoder is not
    /// injectable here; post-process `as_version` output instead.
    fn to_json(&self, version: Version) -> Result<String, Error> {
        let rendered = self.as_version(version)?;
        tracing::trace!(version = version.as_str(), "encoding rendered value");
        serde_json::to_string(&rendered).map_err(|source| {
            Error::new(ErrorKind::Encode)
                .with_message("rendered value could not be encoded")
                .with_version(version)
                .with_source(source)
        })
    }
}

// Internal-name convention: one leading underscore marks a stored attribute
// name; the external key drops it.
fn external_key(key: &str) -> &str {
    key.strip_prefix('_').unwrap_or(key)
}
