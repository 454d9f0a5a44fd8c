//! Purpose: Define the stable public Rust API boundary for Verso.
//! Exports: Serialization traits, version tags, the field sentinel, and errors.
//! Role: Public, additive-only surface; hides internal core modules.
//! Invariants: This module is the only public path to serialization primitives.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::field::Field;
pub use crate::core::parse::FromJson;
pub use crate::core::render::{FieldValue, Serializable};
pub use crate::core::version::{SUPPORTED_VERSION_TAGS, Version};
