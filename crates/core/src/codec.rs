//! JSON wire codec for [`Model`]s.
//!
//! Outbound documents are validated first, omit absent fields and use
//! declared field names verbatim as keys. Inbound documents are read
//! leniently: unknown keys are ignored, `null` and missing fields are
//! absent, and missing required fields are tolerated so newer service
//! responses still decode. Enum strings outside the declared set are still
//! rejected.

use chrono::{DateTime, Utc};
use serde_json::Value as Json;

use crate::descriptor::{FieldKind, ShapeDescriptor};
use crate::error::CodecError;
use crate::model::Model;
use crate::value::{epoch_seconds_to_timestamp, non_finite_from_str, to_millis, Value};

/// Validates and encodes a model as a JSON value.
pub fn to_value(model: &Model) -> Result<Json, CodecError> {
    model.validate()?;
    Ok(serde_json::to_value(model)?)
}

/// Validates and encodes a model as JSON bytes, keys in declared order.
pub fn to_vec(model: &Model) -> Result<Vec<u8>, CodecError> {
    model.validate()?;
    Ok(serde_json::to_vec(model)?)
}

/// Validates and encodes a model as a JSON string, keys in declared order.
pub fn to_string(model: &Model) -> Result<String, CodecError> {
    model.validate()?;
    Ok(serde_json::to_string(model)?)
}

/// Decodes a JSON document into a model of `shape`.
pub fn from_value(shape: &'static ShapeDescriptor, doc: &Json) -> Result<Model, CodecError> {
    decode_model(shape, doc, shape.name)
}

pub fn from_slice(shape: &'static ShapeDescriptor, bytes: &[u8]) -> Result<Model, CodecError> {
    let doc: Json = serde_json::from_slice(bytes)?;
    from_value(shape, &doc)
}

pub fn from_str(shape: &'static ShapeDescriptor, text: &str) -> Result<Model, CodecError> {
    let doc: Json = serde_json::from_str(text)?;
    from_value(shape, &doc)
}

fn decode_model(
    shape: &'static ShapeDescriptor,
    doc: &Json,
    path: &str,
) -> Result<Model, CodecError> {
    let object = doc.as_object().ok_or_else(|| decode_error(path, "expected an object"))?;
    let mut model = Model::new(shape);
    for fd in shape.fields {
        let raw = match object.get(fd.name) {
            None | Some(Json::Null) => continue,
            Some(raw) => raw,
        };
        let field_path = format!("{path}.{}", fd.name);
        let value = decode_kind(&fd.kind, raw, &field_path)?;
        model.insert_decoded(fd, value)?;
    }
    Ok(model)
}

fn decode_kind(kind: &FieldKind, raw: &Json, path: &str) -> Result<Value, CodecError> {
    match kind {
        FieldKind::String => raw
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| decode_error(path, "expected a string")),
        FieldKind::Integer => raw
            .as_i64()
            .map(Value::Integer)
            .ok_or_else(|| decode_error(path, "expected an integer")),
        FieldKind::Boolean => raw
            .as_bool()
            .map(Value::Boolean)
            .ok_or_else(|| decode_error(path, "expected a boolean")),
        FieldKind::Double => raw
            .as_f64()
            .or_else(|| raw.as_str().and_then(non_finite_from_str))
            .map(Value::Double)
            .ok_or_else(|| decode_error(path, "expected a number")),
        FieldKind::Timestamp => decode_timestamp(raw, path),
        FieldKind::Enum(descriptor) => {
            let s = raw
                .as_str()
                .ok_or_else(|| decode_error(path, "expected a string"))?;
            let canonical = descriptor.from_value(Some(s))?;
            Ok(Value::String(canonical.to_string()))
        }
        FieldKind::Structure(shape) => decode_model(*shape, raw, path).map(Value::Structure),
        FieldKind::List(element) => {
            let items = raw
                .as_array()
                .ok_or_else(|| decode_error(path, "expected an array"))?;
            let element_kind = element.as_field_kind();
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_path = format!("{path}[{i}]");
                    if item.is_null() {
                        return Err(decode_error(&item_path, "null list element"));
                    }
                    decode_kind(&element_kind, item, &item_path)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List)
        }
        FieldKind::Map(element) => {
            let entries = raw
                .as_object()
                .ok_or_else(|| decode_error(path, "expected an object"))?;
            let element_kind = element.as_field_kind();
            entries
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| {
                    decode_kind(&element_kind, v, &format!("{path}.{k}")).map(|v| (k.clone(), v))
                })
                .collect::<Result<_, _>>()
                .map(Value::Map)
        }
    }
}

/// Epoch seconds (integer or fractional), or an RFC 3339 string.
fn decode_timestamp(raw: &Json, path: &str) -> Result<Value, CodecError> {
    if let Some(secs) = raw.as_f64() {
        return epoch_seconds_to_timestamp(secs)
            .map(Value::Timestamp)
            .ok_or_else(|| decode_error(path, "timestamp out of range"));
    }
    if let Some(text) = raw.as_str() {
        return DateTime::parse_from_rfc3339(text)
            .map(|dt| Value::Timestamp(to_millis(dt.with_timezone(&Utc))))
            .map_err(|e| decode_error(path, &e.to_string()));
    }
    Err(decode_error(path, "expected epoch seconds or an RFC 3339 string"))
}

fn decode_error(path: &str, reason: &str) -> CodecError {
    CodecError::Decode {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
