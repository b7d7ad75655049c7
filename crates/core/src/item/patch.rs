use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in a partial update.
///
/// Distinguishes a field the caller left out (`Unset`) from one the caller
/// explicitly cleared (`Null`). Pair it with `#[serde(default)]` so a
/// missing field deserializes to `Unset`; a JSON `null` becomes `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    /// Returns true if the field was not part of the payload.
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Applies this patch to an optional field.
    ///
    /// `Unset` leaves the target alone, `Null` clears it, `Value` replaces it.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Unset => {}
            Patch::Null => *target = None,
            Patch::Value(value) => *target = Some(value),
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    /// `Unset` should be skipped with `skip_serializing_if = "Patch::is_unset"`;
    /// if it reaches the serializer anyway it is written as `null`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct TestStruct {
        #[serde(default, skip_serializing_if = "Patch::is_unset")]
        note: Patch<String>,
    }

    #[test]
    fn test_missing_field_is_unset() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.note, Patch::Unset);
    }

    #[test]
    fn test_null_field_is_null() {
        let result: TestStruct = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(result.note, Patch::Null);
    }

    #[test]
    fn test_present_field_is_value() {
        let result: TestStruct = serde_json::from_str(r#"{"note": "hi"}"#).unwrap();
        assert_eq!(result.note, Patch::Value("hi".to_string()));
    }

    #[test]
    fn test_empty_string_is_a_value_not_null() {
        let result: TestStruct = serde_json::from_str(r#"{"note": ""}"#).unwrap();
        assert_eq!(result.note, Patch::Value(String::new()));
    }

    #[test]
    fn test_apply_to() {
        let mut target = Some("old".to_string());

        Patch::Unset.apply_to(&mut target);
        assert_eq!(target.as_deref(), Some("old"));

        Patch::Value("new".to_string()).apply_to(&mut target);
        assert_eq!(target.as_deref(), Some("new"));

        Patch::Null.apply_to(&mut target);
        assert_eq!(target, None);
    }

    #[test]
    fn test_serialize_skips_unset() {
        let unset = TestStruct { note: Patch::Unset };
        assert_eq!(serde_json::to_string(&unset).unwrap(), "{}");

        let null = TestStruct { note: Patch::Null };
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"note":null}"#);
    }
}
