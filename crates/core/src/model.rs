//! The generic data holder every request, result and embedded structure is
//! an instance of.
//!
//! A [`Model`] is a value: `with` and `with_all` consume the receiver and
//! hand back the updated model, so a chain never aliases a reference the
//! caller still holds. `set` and `append` are the in-place forms for code
//! that owns the model mutably.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::descriptor::{FieldDescriptor, FieldKind, ShapeDescriptor};
use crate::error::ValidationError;
use crate::value::{string_hash, Value};

/// Compiled field patterns, keyed by their source text.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Full-match test against a schema pattern. A pattern that fails to
/// compile matches nothing.
pub(crate) fn pattern_matches(pattern: &'static str, value: &str) -> bool {
    let mut cache = PATTERNS.lock().unwrap_or_else(|e| e.into_inner());
    let compiled = cache
        .entry(pattern)
        .or_insert_with(|| Regex::new(&format!("^(?:{pattern})$")).ok());
    compiled.as_ref().is_some_and(|re| re.is_match(value))
}

/// An instance of a [`ShapeDescriptor`].
///
/// Unset fields are absent, which is distinct from being set to an empty
/// string or an empty list.
#[derive(Clone)]
pub struct Model {
    shape: &'static ShapeDescriptor,
    values: IndexMap<&'static str, Value>,
}

impl Model {
    /// Creates a model with every field absent.
    pub fn new(shape: &'static ShapeDescriptor) -> Self {
        Self {
            shape,
            values: IndexMap::new(),
        }
    }

    pub fn shape(&self) -> &'static ShapeDescriptor {
        self.shape
    }

    /// Current value of `field`, or `None` when absent or not declared.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Follows nested structure fields, e.g. `["Status", "State"]`.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for name in parents {
            current = current.get(name)?.as_model()?;
        }
        current.get(last)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    pub fn get_timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.get(field).and_then(Value::as_timestamp)
    }

    pub fn get_model(&self, field: &str) -> Option<&Model> {
        self.get(field).and_then(Value::as_model)
    }

    pub fn get_list(&self, field: &str) -> Option<&[Value]> {
        self.get(field).and_then(Value::as_list)
    }

    pub fn get_map(&self, field: &str) -> Option<&IndexMap<String, Value>> {
        self.get(field).and_then(Value::as_map)
    }

    /// Parses an enum-valued field into its Rust type.
    pub fn get_enum<E: FromStr>(&self, field: &str) -> Option<E> {
        self.get_str(field).and_then(|s| s.parse().ok())
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Present fields in declared order.
    pub fn present(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Value)> + '_ {
        self.shape
            .fields
            .iter()
            .filter_map(|fd| self.values.get(fd.name).map(|v| (fd, v)))
    }

    /// Validates `value` against the field's descriptor, then assigns it.
    /// On failure the model is left unchanged.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        let fd = self.descriptor(field)?;
        let value = value.into();
        check_field(self.shape, fd, &value, true)?;
        self.values.insert(fd.name, value);
        Ok(())
    }

    /// Returns the field to the absent state.
    pub fn unset(&mut self, field: &str) -> Option<Value> {
        self.values.shift_remove(field)
    }

    /// Consuming form of [`Model::set`] for builder chains.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Result<Self, ValidationError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Appends to a list field, initialising it when absent. Order and
    /// duplicates are kept exactly as given. On failure the model is left
    /// unchanged.
    pub fn append<I, V>(&mut self, field: &str, values: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let fd = self.descriptor(field)?;
        if !matches!(fd.kind, FieldKind::List(_)) {
            return Err(ValidationError::TypeMismatch {
                shape: self.shape.name.to_string(),
                field: fd.name.to_string(),
                expected: fd.kind.to_string(),
                actual: "list".to_string(),
            });
        }

        let incoming = values.into_iter();
        let mut items = match self.values.get(fd.name) {
            Some(Value::List(existing)) => {
                let mut items = Vec::with_capacity(existing.len() + incoming.size_hint().0);
                items.extend(existing.iter().cloned());
                items
            }
            _ => Vec::with_capacity(incoming.size_hint().0),
        };
        items.extend(incoming.map(Into::into));

        let value = Value::List(items);
        check_field(self.shape, fd, &value, true)?;
        self.values.insert(fd.name, value);
        Ok(())
    }

    /// Consuming form of [`Model::append`].
    pub fn with_all<I, V>(mut self, field: &str, values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.append(field, values)?;
        Ok(self)
    }

    /// Checks required fields and constraints, recursing into nested
    /// structures. Reports the first violation in declared field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for fd in self.shape.fields {
            match self.values.get(fd.name) {
                None if fd.required => {
                    return Err(ValidationError::MissingRequired {
                        shape: self.shape.name.to_string(),
                        field: fd.name.to_string(),
                    });
                }
                None => {}
                Some(value) => {
                    check_field(self.shape, fd, value, true)?;
                    validate_nested(value)?;
                }
            }
        }
        Ok(())
    }

    /// Deterministic hash: a per-shape seed folded with every field in
    /// declared order using multiplier 31, absent fields contributing 0.
    pub fn identity_hash(&self) -> i32 {
        self.shape.fields.iter().fold(string_hash(self.shape.name), |h, fd| {
            let field_hash = self.values.get(fd.name).map_or(0, Value::identity_hash);
            h.wrapping_mul(31).wrapping_add(field_hash)
        })
    }

    /// Inserts after a kind check only; inbound documents are not held to
    /// the advisory length and pattern bounds.
    pub(crate) fn insert_decoded(
        &mut self,
        fd: &'static FieldDescriptor,
        value: Value,
    ) -> Result<(), ValidationError> {
        check_field(self.shape, fd, &value, false)?;
        self.values.insert(fd.name, value);
        Ok(())
    }

    fn descriptor(&self, field: &str) -> Result<&'static FieldDescriptor, ValidationError> {
        self.shape
            .field(field)
            .ok_or_else(|| ValidationError::UnknownField {
                shape: self.shape.name.to_string(),
                field: field.to_string(),
            })
    }
}

fn validate_nested(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Structure(m) => m.validate(),
        Value::List(items) => items.iter().try_for_each(validate_nested),
        Value::Map(entries) => entries.values().try_for_each(validate_nested),
        _ => Ok(()),
    }
}

fn check_field(
    shape: &ShapeDescriptor,
    fd: &FieldDescriptor,
    value: &Value,
    enforce_constraints: bool,
) -> Result<(), ValidationError> {
    check_kind(shape, fd, &fd.kind, value)?;
    match (&fd.kind, value) {
        (FieldKind::List(element), Value::List(items)) => {
            let element_kind = element.as_field_kind();
            for item in items {
                check_kind(shape, fd, &element_kind, item)?;
            }
        }
        (FieldKind::Map(element), Value::Map(entries)) => {
            let element_kind = element.as_field_kind();
            for item in entries.values() {
                check_kind(shape, fd, &element_kind, item)?;
            }
        }
        _ => {}
    }
    if enforce_constraints {
        check_constraints(shape, fd, value)?;
    }
    Ok(())
}

fn check_kind(
    shape: &ShapeDescriptor,
    fd: &FieldDescriptor,
    kind: &FieldKind,
    value: &Value,
) -> Result<(), ValidationError> {
    let mismatch = |actual: String| ValidationError::TypeMismatch {
        shape: shape.name.to_string(),
        field: fd.name.to_string(),
        expected: kind.to_string(),
        actual,
    };

    if !value.fits(kind) {
        return Err(mismatch(value.kind_name().to_string()));
    }
    match (kind, value) {
        (FieldKind::Enum(descriptor), Value::String(s)) => {
            descriptor.from_value(Some(s))?;
        }
        (FieldKind::Structure(expected), Value::Structure(m)) if !m.shape.same_as(expected) => {
            return Err(mismatch(format!("structure {}", m.shape.name)));
        }
        _ => {}
    }
    Ok(())
}

fn check_constraints(
    shape: &ShapeDescriptor,
    fd: &FieldDescriptor,
    value: &Value,
) -> Result<(), ValidationError> {
    let c = &fd.constraints;
    if c.is_empty() {
        return Ok(());
    }

    let length = match value {
        Value::String(s) => Some(s.chars().count()),
        Value::List(items) => Some(items.len()),
        Value::Map(entries) => Some(entries.len()),
        _ => None,
    };
    if let Some(actual) = length {
        if let Some(min) = c.min_len.filter(|min| actual < *min) {
            return Err(ValidationError::TooShort {
                shape: shape.name.to_string(),
                field: fd.name.to_string(),
                min,
                actual,
            });
        }
        if let Some(max) = c.max_len.filter(|max| actual > *max) {
            return Err(ValidationError::TooLong {
                shape: shape.name.to_string(),
                field: fd.name.to_string(),
                max,
                actual,
            });
        }
    }

    if let (Some(pattern), Value::String(s)) = (c.pattern, value) {
        if !pattern_matches(pattern, s) {
            return Err(ValidationError::PatternMismatch {
                shape: shape.name.to_string(),
                field: fd.name.to_string(),
                pattern: pattern.to_string(),
            });
        }
    }

    if let Value::Integer(actual) = value {
        let min = c.min_value.unwrap_or(i64::MIN);
        let max = c.max_value.unwrap_or(i64::MAX);
        if *actual < min || *actual > max {
            return Err(ValidationError::OutOfRange {
                shape: shape.name.to_string(),
                field: fd.name.to_string(),
                min,
                max,
                actual: *actual,
            });
        }
    }

    Ok(())
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.shape.same_as(other.shape) && self.values == other.values
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.identity_hash());
    }
}

/// `{Name: value, Other: value}` over present fields in declared order.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (fd, value)) in self.present().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", fd.name, value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("shape", &self.shape.name)
            .field("values", &self.values)
            .finish()
    }
}

/// Present fields only, keyed by wire name, in declared order.
impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (fd, value) in self.present() {
            map.serialize_entry(fd.name, value)?;
        }
        map.end()
    }
}
