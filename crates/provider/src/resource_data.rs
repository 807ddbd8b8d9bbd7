//! Host configuration/state tree for one resource instance

use serde_json::{Map, Value};
use site24x7_domain::serde_helpers::value_as_i64;

/// Attribute tree plus the resource id.
///
/// An empty id means the resource does not exist remotely (not created yet,
/// or removed out of band). The tree never holds provider credentials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: String,
    values: Map<String, Value>,
}

impl ResourceData {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { id: String::new(), values }
    }

    /// Build from a JSON object; anything else yields an empty tree.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self::new(values),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Mark the resource as gone.
    pub fn clear_id(&mut self) {
        self.id.clear();
    }

    pub fn is_gone(&self) -> bool {
        self.id.is_empty()
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    /// String attribute, empty when unset
    pub fn string(&self, key: &str) -> String {
        self.opt_string(key).unwrap_or_default()
    }

    /// String attribute, `None` when unset or empty
    pub fn opt_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_string)
    }

    /// Integer attribute, zero when unset
    pub fn int(&self, key: &str) -> i64 {
        self.opt_int(key).unwrap_or_default()
    }

    pub fn opt_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(value_as_i64)
    }

    /// Boolean attribute, false when unset
    pub fn bool(&self, key: &str) -> bool {
        self.opt_bool(key).unwrap_or_default()
    }

    pub fn opt_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn string_list(&self, key: &str) -> Vec<String> {
        string_list(self.get(key))
    }

    /// Nested objects of a list attribute
    pub fn object_list(&self, key: &str) -> Vec<&Map<String, Value>> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_object).collect())
            .unwrap_or_default()
    }

    /// Nested object of a map attribute, `None` when unset or empty
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object).filter(|map| !map.is_empty())
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Set when `Some`, remove when `None`.
    pub fn set_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.values.remove(key);
            }
        }
    }

    /// Set a string, removing the attribute when empty.
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set_opt(key, Some(value).filter(|value| !value.is_empty()));
    }

    /// Set a list, removing the attribute when empty.
    pub fn set_list<V: Into<Value>>(&mut self, key: &str, items: Vec<V>) {
        self.set_opt(key, Some(items).filter(|items| !items.is_empty()));
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }
}

pub fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Field accessors for nested objects, mirroring the top-level ones.
pub trait ObjectExt {
    fn str_field(&self, key: &str) -> String;
    fn int_field(&self, key: &str) -> i64;
    fn opt_int_field(&self, key: &str) -> Option<i64>;
}

impl ObjectExt for Map<String, Value> {
    fn str_field(&self, key: &str) -> String {
        self.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
    }

    fn int_field(&self, key: &str) -> i64 {
        self.opt_int_field(key).unwrap_or_default()
    }

    fn opt_int_field(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(value_as_i64)
    }
}
