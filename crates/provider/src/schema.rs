//! Declarative attribute schemas for resource configuration trees
//!
//! A [`Schema`] checks a host configuration object before any API call:
//! unknown keys, missing required attributes, type mismatches and validator
//! failures are all collected into one list of [`Diagnostic`]s. Validation
//! also normalizes the tree in place: defaults are filled in and integers
//! given as numeric strings become JSON numbers.

use std::fmt;

use serde_json::{Map, Value};
use site24x7_domain::serde_helpers::value_as_i64;

/// Value shape of an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrKind {
    String,
    Int,
    Bool,
    StringList,
    /// List of nested objects sharing one schema
    ObjectList(Schema),
    /// Single nested object; the host's map-of-scalars blocks
    Map(Schema),
}

impl AttrKind {
    fn describe(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Int => "an integer",
            Self::Bool => "a boolean",
            Self::StringList => "a list of strings",
            Self::ObjectList(_) => "a list of objects",
            Self::Map(_) => "an object",
        }
    }
}

/// Integer value constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    IntInSlice(&'static [i64]),
    IntAtMost(i64),
    /// Inclusive range
    IntBetween(i64, i64),
}

impl Validator {
    fn check(self, value: i64) -> Result<(), String> {
        match self {
            Self::IntInSlice(allowed) if !allowed.contains(&value) => {
                Err(format!("expected one of {allowed:?}, got {value}"))
            }
            Self::IntAtMost(max) if value > max => Err(format!("expected at most {max}, got {value}")),
            Self::IntBetween(min, max) if !(min..=max).contains(&value) => {
                Err(format!("expected a value between {min} and {max}, got {value}"))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
    /// Set by the server; ignored when validating
    Computed,
}

/// One named attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: &'static str,
    kind: AttrKind,
    presence: Presence,
    default: Option<Value>,
    validators: Vec<Validator>,
}

impl Attribute {
    fn new(name: &'static str, kind: AttrKind) -> Self {
        Self { name, kind, presence: Presence::Optional, default: None, validators: Vec::new() }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, AttrKind::String)
    }

    pub fn int(name: &'static str) -> Self {
        Self::new(name, AttrKind::Int)
    }

    pub fn bool(name: &'static str) -> Self {
        Self::new(name, AttrKind::Bool)
    }

    pub fn string_list(name: &'static str) -> Self {
        Self::new(name, AttrKind::StringList)
    }

    pub fn object_list(name: &'static str, schema: Schema) -> Self {
        Self::new(name, AttrKind::ObjectList(schema))
    }

    pub fn map(name: &'static str, schema: Schema) -> Self {
        Self::new(name, AttrKind::Map(schema))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    #[must_use]
    pub fn computed(mut self) -> Self {
        self.presence = Presence::Computed;
        self
    }

    /// Value filled in when the attribute is absent. Implies optional.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.presence = Presence::Optional;
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn validate(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &AttrKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    pub fn is_computed(&self) -> bool {
        self.presence == Presence::Computed
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// A validation failure at one attribute path (`a.b`, `list.0.key`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Ordered set of attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Validate `config`, applying defaults and normalizing integers.
    ///
    /// Every problem found is reported; the tree may be partially normalized
    /// when diagnostics are returned.
    pub fn validate(&self, config: &mut Map<String, Value>) -> Result<(), Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        self.validate_object(config, "", &mut diagnostics);
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(diagnostics)
        }
    }

    fn validate_object(&self, object: &mut Map<String, Value>, prefix: &str, out: &mut Vec<Diagnostic>) {
        let path_of = |name: &str| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}.{name}")
            }
        };

        for key in object.keys() {
            if self.attribute(key).is_none() {
                out.push(Diagnostic::new(path_of(key), "unsupported attribute"));
            }
        }

        // Null means unset.
        object.retain(|_, value| !value.is_null());

        for attr in &self.attributes {
            let path = path_of(attr.name);
            if !object.contains_key(attr.name) {
                if let Some(default) = &attr.default {
                    object.insert(attr.name.to_string(), default.clone());
                } else if attr.is_required() {
                    out.push(Diagnostic::new(path, "required attribute is missing"));
                }
                continue;
            }
            // Computed values come from a previous read and are not checked.
            if attr.is_computed() {
                continue;
            }
            if let Some(value) = object.get_mut(attr.name) {
                attr.check_value(value, &path, out);
            }
        }
    }
}

impl Attribute {
    fn check_value(&self, value: &mut Value, path: &str, out: &mut Vec<Diagnostic>) {
        let mismatch = |out: &mut Vec<Diagnostic>| {
            out.push(Diagnostic::new(path, format!("expected {}", self.kind.describe())));
        };

        match &self.kind {
            AttrKind::String => {
                if !value.is_string() {
                    mismatch(out);
                }
            }
            AttrKind::Int => match value_as_i64(value) {
                Some(number) => {
                    *value = Value::from(number);
                    for validator in &self.validators {
                        if let Err(message) = validator.check(number) {
                            out.push(Diagnostic::new(path, message));
                        }
                    }
                }
                None => mismatch(out),
            },
            AttrKind::Bool => match coerce_bool(value) {
                Some(flag) => *value = Value::Bool(flag),
                None => mismatch(out),
            },
            AttrKind::StringList => match value.as_array() {
                Some(items) if items.iter().all(Value::is_string) => {}
                _ => mismatch(out),
            },
            AttrKind::ObjectList(schema) => match value.as_array_mut() {
                Some(items) => {
                    for (index, item) in items.iter_mut().enumerate() {
                        let item_path = format!("{path}.{index}");
                        match item.as_object_mut() {
                            Some(object) => schema.validate_object(object, &item_path, out),
                            None => out.push(Diagnostic::new(item_path, "expected an object")),
                        }
                    }
                }
                None => mismatch(out),
            },
            AttrKind::Map(schema) => match value.as_object_mut() {
                Some(object) => schema.validate_object(object, path, out),
                None => mismatch(out),
            },
        }
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Render diagnostics as `path: message; path: message`.
pub fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
