//! Purpose: Versioned JSON serialization base shared by domain value types.
//! Exports: `api` (traits, version tags, field sentinel, errors).
//! Role: Library crate consumed by type definitions; no binaries, no I/O.
//! Invariants: Rendering never mutates source values; the only process-wide state is the `LATEST` version constant.
//! Invariants: Internal `core`/`json` modules stay behind the `api` boundary.
pub mod api;
mod core;
mod json;

pub use api::{
    Error, ErrorKind, Field, FieldValue, FromJson, SUPPORTED_VERSION_TAGS, Serializable, Version,
};
