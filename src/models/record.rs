use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A scalar field value. Records are flat, so nested values are rejected on load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`, kept exact instead of widening to `Float`.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Canonical string form used for matching and filtering.
    ///
    /// `Null` has no canonical form and never matches a query.
    #[must_use]
    pub fn canonical(&self) -> Option<String> {
        match self {
            Self::Null => None,
            other => Some(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Unsigned(u) => write!(f, "{u}"),
            // f64 Display already drops a trailing `.0`
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("field '{field}' holds a nested value; records must be flat")]
pub struct NestedValueError {
    pub field: String,
}

impl TryFrom<serde_json::Value> for FieldValue {
    type Error = serde_json::Value;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Unsigned(u))
                } else {
                    n.as_f64().map(Self::Float).ok_or(Value::Number(n))
                }
            }
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(other),
        }
    }
}

/// One searchable row. Field order is preserved as supplied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder-style insert. Replaces the value if the field already exists.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| name == field) {
            slot.1 = value;
        } else {
            self.fields.push((field.to_string(), value));
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Renders a field for display; missing and null fields render empty.
    #[must_use]
    pub fn display_value(&self, field: &str) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    #[must_use]
    pub fn id(&self) -> Option<&FieldValue> {
        self.get("id")
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for Record {
    type Error = NestedValueError;

    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(map.len());
        for (name, value) in map {
            let value =
                FieldValue::try_from(value).map_err(|_| NestedValueError { field: name.clone() })?;
            fields.push((name, value));
        }
        Ok(Self { fields })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
