//! Purpose: Round-trip coverage for hook-free serializable types.
//! Exports: Integration tests only.
//! Role: Verify parse(render(v)) restores every set field and keeps absent fields absent.
//! Invariants: Equality is structural over visible fields; no hooks involved.

use serde::Deserialize;
use serde_json::Value;
use verso::{Field, FieldValue, FromJson, Serializable, Version};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct Sample {
    #[serde(default)]
    label: Field<String>,
    #[serde(default)]
    count: Field<i64>,
    #[serde(default)]
    active: Field<bool>,
    #[serde(default)]
    tags: Field<Vec<String>>,
    #[serde(default)]
    comment: Field<String>,
}

impl Serializable for Sample {
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        vec![
            ("label", FieldValue::from_field(&self.label)),
            ("count", FieldValue::from_field(&self.count)),
            ("active", FieldValue::from_field(&self.active)),
            ("tags", FieldValue::from_field(&self.tags)),
            ("comment", FieldValue::from_field(&self.comment)),
        ]
    }
}

impl FromJson for Sample {}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct Order {
    #[serde(default)]
    id: Field<i64>,
    #[serde(default)]
    buyer: Field<Sample>,
}

impl Serializable for Order {
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        vec![
            ("id", FieldValue::from_field(&self.id)),
            ("buyer", FieldValue::nested_field(&self.buyer)),
        ]
    }
}

impl FromJson for Order {}

fn sample() -> Sample {
    Sample {
        label: Field::Set("widget".to_owned()),
        count: Field::Set(12),
        active: Field::Set(true),
        tags: Field::Set(vec!["a".to_owned(), "b".to_owned()]),
        comment: Field::Absent,
    }
}

#[test]
fn set_fields_round_trip_and_absent_stays_absent() {
    let original = sample();
    let text = original.to_json(Version::LATEST).expect("encodes");
    let restored = Sample::from_json(&text).expect("parses");
    assert_eq!(restored, original);
    assert!(restored.comment.is_absent());
}

#[test]
fn rendered_text_omits_absent_fields_entirely() {
    let text = sample().to_json(Version::LATEST).expect("encodes");
    let rendered: Value = serde_json::from_str(&text).expect("valid JSON");
    let object = rendered.as_object().expect("object output");
    assert!(!object.contains_key("comment"));
}

#[test]
fn nested_values_round_trip() {
    let original = Order {
        id: Field::Set(7),
        buyer: Field::Set(sample()),
    };
    let text = original.to_json(Version::LATEST).expect("encodes");
    let restored = Order::from_json(&text).expect("parses");
    assert_eq!(restored, original);
}

#[test]
fn round_trip_holds_at_every_supported_version() {
    let original = sample();
    for tag in verso::SUPPORTED_VERSION_TAGS {
        let version: Version = tag.parse().expect("supported tag");
        let text = original.to_json(version).expect("encodes");
        let restored = Sample::from_json(&text).expect("parses");
        assert_eq!(restored, original);
    }
}
