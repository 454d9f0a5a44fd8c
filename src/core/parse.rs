//! Purpose: Construct serializable values from JSON text.
//! Exports: `FromJson`.
//! Role: Glue between the json parser seam and typed construction via serde.
//! Invariants: Decode failures map to `Malformed`; structural mismatches map to `Shape`.
//! Invariants: The post-parse hook runs exactly once, after construction; its failures propagate.
//! Notes: Unknown-key rejection comes from `#[serde(deny_unknown_fields)]` on the implementing type.

use crate::core::error::{Error, ErrorKind};
use crate::json::parse as json_parse;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Construction from a JSON text document.
///
/// The decoded object's entries become the constructor inputs through the
/// type's `Deserialize` impl. Types wanting the unexpected-field shape error
/// mark themselves `#[serde(deny_unknown_fields)]`. Types needing internal
/// fix-up after construction override [`FromJson::post_parse`]; hook failures
/// should carry [`ErrorKind::Domain`] and are propagated unchanged.
pub trait FromJson: DeserializeOwned {
    /// Post-construction normalization hook; the default is a no-op.
    fn post_parse(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn from_json(text: &str) -> Result<Self, Error> {
        let data: Value = json_parse::from_str(text).map_err(|source| {
            Error::new(ErrorKind::Malformed)
                .with_message("input is not valid JSON")
                .with_hint(json_parse::hint_for_error(&source, "from_json"))
                .with_source(source)
        })?;
        let Some(entries) = data.as_object() else {
            return Err(Error::new(ErrorKind::Shape)
                .with_message("top-level JSON value is not an object"));
        };
        tracing::trace!(keys = entries.len(), "decoded input object");
        let mut value: Self = serde_json::from_value(data).map_err(|source| {
            Error::new(ErrorKind::Shape)
                .with_message("decoded object does not match the target type")
                .with_hint(json_parse::hint_for_error(&source, "from_json"))
                .with_source(source)
        })?;
        value.post_parse()?;
        Ok(value)
    }
}
