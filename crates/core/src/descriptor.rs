//! Static metadata describing model shapes and their fields.
//!
//! Every descriptor is built with `const fn` helpers so a whole API schema
//! can live in `static` items:
//!
//! ```
//! use schemata_core::descriptor::{FieldDescriptor, ShapeDescriptor, ShapeRole};
//!
//! static DATUM: ShapeDescriptor = ShapeDescriptor {
//!     name: "Datum",
//!     role: ShapeRole::Structure,
//!     fields: &[FieldDescriptor::string("VarCharValue")],
//! };
//!
//! assert!(DATUM.field("VarCharValue").is_some());
//! ```

use std::fmt;

use crate::enumeration::EnumDescriptor;

/// Kind of a single list element or map value.
#[derive(Debug, Clone, Copy)]
pub enum ElementKind {
    String,
    Integer,
    Boolean,
    Double,
    Timestamp,
    Enum(&'static EnumDescriptor),
    Structure(&'static ShapeDescriptor),
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    Double,
    Timestamp,
    Enum(&'static EnumDescriptor),
    Structure(&'static ShapeDescriptor),
    /// Ordered sequence; duplicates allowed.
    List(ElementKind),
    /// String-keyed map.
    Map(ElementKind),
}

impl ElementKind {
    /// The equivalent scalar field kind.
    pub const fn as_field_kind(self) -> FieldKind {
        match self {
            ElementKind::String => FieldKind::String,
            ElementKind::Integer => FieldKind::Integer,
            ElementKind::Boolean => FieldKind::Boolean,
            ElementKind::Double => FieldKind::Double,
            ElementKind::Timestamp => FieldKind::Timestamp,
            ElementKind::Enum(e) => FieldKind::Enum(e),
            ElementKind::Structure(s) => FieldKind::Structure(s),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Double => write!(f, "double"),
            FieldKind::Timestamp => write!(f, "timestamp"),
            FieldKind::Enum(e) => write!(f, "enum {}", e.name),
            FieldKind::Structure(s) => write!(f, "structure {}", s.name),
            FieldKind::List(el) => write!(f, "list<{}>", el.as_field_kind()),
            FieldKind::Map(el) => write!(f, "map<string, {}>", el.as_field_kind()),
        }
    }
}

/// Advisory bounds mirroring server-side validation.
///
/// Length bounds count characters for strings and entries for lists/maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constraints {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    /// Regular expression the whole string must match.
    pub pattern: Option<&'static str>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl Constraints {
    pub const NONE: Constraints = Constraints {
        min_len: None,
        max_len: None,
        pattern: None,
        min_value: None,
        max_value: None,
    };

    pub fn is_empty(&self) -> bool {
        self.min_len.is_none()
            && self.max_len.is_none()
            && self.pattern.is_none()
            && self.min_value.is_none()
            && self.max_value.is_none()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        match (self.min_len, self.max_len) {
            (Some(min), Some(max)) => parts.push(format!("len {min}..={max}")),
            (Some(min), None) => parts.push(format!("len >= {min}")),
            (None, Some(max)) => parts.push(format!("len <= {max}")),
            (None, None) => {}
        }
        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => parts.push(format!("value {min}..={max}")),
            (Some(min), None) => parts.push(format!("value >= {min}")),
            (None, Some(max)) => parts.push(format!("value <= {max}")),
            (None, None) => {}
        }
        if let Some(pattern) = self.pattern {
            parts.push(format!("pattern {pattern}"));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// One attribute of a shape. Immutable once defined.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Wire name, used verbatim as the document key.
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Filled with a fresh token by the client when left absent.
    pub idempotency_token: bool,
    pub constraints: Constraints,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            idempotency_token: false,
            constraints: Constraints::NONE,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub const fn double(name: &'static str) -> Self {
        Self::new(name, FieldKind::Double)
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, FieldKind::Timestamp)
    }

    pub const fn enumeration(name: &'static str, descriptor: &'static EnumDescriptor) -> Self {
        Self::new(name, FieldKind::Enum(descriptor))
    }

    pub const fn structure(name: &'static str, shape: &'static ShapeDescriptor) -> Self {
        Self::new(name, FieldKind::Structure(shape))
    }

    pub const fn list(name: &'static str, element: ElementKind) -> Self {
        Self::new(name, FieldKind::List(element))
    }

    pub const fn map(name: &'static str, element: ElementKind) -> Self {
        Self::new(name, FieldKind::Map(element))
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn idempotency_token(mut self) -> Self {
        self.idempotency_token = true;
        self
    }

    /// Inclusive length bounds.
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.constraints.min_len = Some(min);
        self.constraints.max_len = Some(max);
        self
    }

    pub const fn min_len(mut self, min: usize) -> Self {
        self.constraints.min_len = Some(min);
        self
    }

    pub const fn max_len(mut self, max: usize) -> Self {
        self.constraints.max_len = Some(max);
        self
    }

    /// Inclusive integer bounds.
    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.constraints.min_value = Some(min);
        self.constraints.max_value = Some(max);
        self
    }

    pub const fn min_value(mut self, min: i64) -> Self {
        self.constraints.min_value = Some(min);
        self
    }

    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.constraints.pattern = Some(pattern);
        self
    }
}

/// Whether a shape is sent, received, embedded, or describes a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    /// Outbound input of the named operation.
    Request { operation: &'static str },
    /// Inbound output of the named operation.
    Result { operation: &'static str },
    /// Embedded structure.
    Structure,
    /// Body of a service-reported failure.
    Error,
}

impl fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeRole::Request { operation } => write!(f, "request ({operation})"),
            ShapeRole::Result { operation } => write!(f, "result ({operation})"),
            ShapeRole::Structure => write!(f, "structure"),
            ShapeRole::Error => write!(f, "error"),
        }
    }
}

/// A named, ordered set of field descriptors.
pub struct ShapeDescriptor {
    pub name: &'static str,
    pub role: ShapeRole,
    /// Declared order; rendering, hashing and encoding follow it.
    pub fields: &'static [FieldDescriptor],
}

impl ShapeDescriptor {
    /// Looks up a field by its wire name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of the field in declared order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn is_request(&self) -> bool {
        matches!(self.role, ShapeRole::Request { .. })
    }

    /// Shapes are identified by name; the same descriptor may be reached
    /// through different references.
    pub fn same_as(&self, other: &ShapeDescriptor) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

impl fmt::Debug for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("fields", &self.fields.iter().map(|d| d.name).collect::<Vec<_>>())
            .finish()
    }
}

/// An operation pairs a request shape with its result shape.
#[derive(Debug)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub input: &'static ShapeDescriptor,
    pub output: &'static ShapeDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;

    static INNER: ShapeDescriptor = ShapeDescriptor {
        name: "Inner",
        role: ShapeRole::Structure,
        fields: &[FieldDescriptor::string("Value")],
    };

    static OUTER: ShapeDescriptor = ShapeDescriptor {
        name: "OuterRequest",
        role: ShapeRole::Request { operation: "Outer" },
        fields: &[
            FieldDescriptor::string("Name").required().length(1, 128),
            FieldDescriptor::structure("Inner", &INNER),
            FieldDescriptor::list("Items", ElementKind::Structure(&INNER)).length(1, 50),
            FieldDescriptor::string("Token").idempotency_token(),
        ],
    };

    #[test]
    fn field_lookup_and_order() {
        assert_eq!(OUTER.position("Name"), Some(0));
        assert_eq!(OUTER.position("Items"), Some(2));
        assert!(OUTER.field("Missing").is_none());

        let name = OUTER.field("Name").unwrap();
        assert!(name.required);
        assert_eq!(name.constraints.min_len, Some(1));
        assert_eq!(name.constraints.max_len, Some(128));
    }

    #[test]
    fn required_fields_iterates_only_required() {
        let names: Vec<_> = OUTER.required_fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["Name"]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(OUTER.field("Name").unwrap().kind.to_string(), "string");
        assert_eq!(
            OUTER.field("Items").unwrap().kind.to_string(),
            "list<structure Inner>"
        );
    }

    #[test]
    fn constraints_display() {
        let c = OUTER.field("Name").unwrap().constraints;
        assert_eq!(c.to_string(), "len 1..=128");
        assert!(Constraints::NONE.is_empty());
    }

    #[test]
    fn role_helpers() {
        assert!(OUTER.is_request());
        assert!(!INNER.is_request());
        assert!(INNER.same_as(&INNER));
        assert!(!INNER.same_as(&OUTER));
        assert!(OUTER.field("Token").unwrap().idempotency_token);
    }
}
