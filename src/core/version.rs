//! Purpose: Centralize serialization format version tags and compatibility policy.
//! Exports: `Version`, `SUPPORTED_VERSION_TAGS`, `unsupported_version_error`.
//! Role: Shared policy for selecting the output shape across render and parse paths.
//! Invariants: Tag list is ordered newest-first; `LATEST` is the head of the list.
//! Invariants: Unknown tags are rejected at the boundary, never defaulted.

use crate::core::error::{Error, ErrorKind};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported serialization format revisions, newest first.
pub const SUPPORTED_VERSION_TAGS: &[&str] = &["1.0.3", "1.0.2", "1.0.1", "1.0.0", "0.95", "0.9"];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Version {
    V1_0_3,
    V1_0_2,
    V1_0_1,
    V1_0_0,
    V0_95,
    V0_9,
}

impl Version {
    /// Default tag used whenever a caller does not pin a revision.
    pub const LATEST: Version = Version::V1_0_3;

    pub fn as_str(self) -> &'static str {
        match self {
            Version::V1_0_3 => "1.0.3",
            Version::V1_0_2 => "1.0.2",
            Version::V1_0_1 => "1.0.1",
            Version::V1_0_0 => "1.0.0",
            Version::V0_95 => "0.95",
            Version::V0_9 => "0.9",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "1.0.3" => Ok(Version::V1_0_3),
            "1.0.2" => Ok(Version::V1_0_2),
            "1.0.1" => Ok(Version::V1_0_1),
            "1.0.0" => Ok(Version::V1_0_0),
            "0.95" => Ok(Version::V0_95),
            "0.9" => Ok(Version::V0_9),
            other => Err(unsupported_version_error(other)),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(|error: Error| D::Error::custom(error))
    }
}

pub fn unsupported_version_error(detected: &str) -> Error {
    let supported = SUPPORTED_VERSION_TAGS.join(", ");
    Error::new(ErrorKind::UnsupportedVersion)
        .with_message(format!(
            "unsupported serialization version tag {detected:?} (supported: {supported})"
        ))
        .with_hint("Pass one of the supported tags, or Version::LATEST.")
}

#[cfg(test)]
mod tests {
    use super::{SUPPORTED_VERSION_TAGS, Version};
    use crate::core::error::ErrorKind;

    #[test]
    fn latest_is_head_of_supported_list() {
        assert_eq!(Version::LATEST.as_str(), SUPPORTED_VERSION_TAGS[0]);
    }

    #[test]
    fn every_supported_tag_round_trips() {
        for tag in SUPPORTED_VERSION_TAGS {
            let version: Version = tag.parse().expect("supported tag parses");
            assert_eq!(version.as_str(), *tag);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let error = "2.0.0".parse::<Version>().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedVersion);
    }

    #[test]
    fn serde_form_is_the_plain_tag() {
        let encoded = serde_json::to_string(&Version::V0_95).expect("encodes");
        assert_eq!(encoded, "\"0.95\"");
        let decoded: Version = serde_json::from_str("\"1.0.1\"").expect("decodes");
        assert_eq!(decoded, Version::V1_0_1);
    }
}
