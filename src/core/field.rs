//! Purpose: Model the explicit absent-value sentinel for serializable fields.
//! Exports: `Field`.
//! Role: Field-state wrapper distinguishing "never set" from every present value.
//! Invariants: `Absent` is dropped from rendered output; a present null or empty value is not.
//! Invariants: Deserializing a present key always yields `Set`; missing keys need `#[serde(default)]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field<T> {
    Absent,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Field::Set(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Set(value) => Field::Set(value),
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Absent => None,
            Field::Set(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Set(value) => Field::Set(f(value)),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Absent => None,
            Field::Set(value) => Some(value),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Set(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Field::Absent,
            Some(value) => Field::Set(value),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Reached only when a caller skips `skip_serializing_if`; renders as null.
            Field::Absent => serializer.serialize_none(),
            Field::Set(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Field::Set)
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        #[serde(default)]
        note: Field<Value>,
    }

    #[test]
    fn missing_key_is_absent() {
        let record: Record = serde_json::from_str("{}").expect("decodes");
        assert_eq!(record.note, Field::Absent);
    }

    #[test]
    fn present_null_is_set_not_absent() {
        let record: Record = serde_json::from_str(r#"{"note": null}"#).expect("decodes");
        assert_eq!(record.note, Field::Set(Value::Null));
    }

    #[test]
    fn empty_string_stays_distinct_from_absent() {
        let record: Record = serde_json::from_str(r#"{"note": ""}"#).expect("decodes");
        assert_eq!(record.note, Field::Set(Value::String(String::new())));
        assert!(record.note.is_set());
    }

    #[test]
    fn option_conversion_maps_none_to_absent() {
        assert_eq!(Field::<u32>::from(None::<u32>), Field::Absent);
        assert_eq!(Field::<u32>::from(Some(7u32)), Field::Set(7));
    }
}
