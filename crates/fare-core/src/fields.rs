//! Tolerant decoding of semi-structured store fields.
//!
//! The store persists mapping-shaped columns (business hours, social links)
//! in whatever representation the editing path produced: a native JSON
//! object, a JSON-encoded string, or null. [`RawField`] names those
//! representations explicitly at the boundary and collapses them to one
//! canonical map so no downstream code re-checks the representation.
//!
//! Decoding is deliberately permissive about entry value types (mirroring
//! the store's behavior) and never fails: anything that cannot be read as a
//! mapping degrades to an empty map, which callers render as "not available".

use serde_json::{Map, Value};

/// Canonical decoded shape of a structured field.
pub type FieldMap = Map<String, Value>;

/// The representations a structured field arrives in.
#[derive(Debug, Clone, PartialEq)]
pub enum RawField<'a> {
    /// Already a JSON object; used directly with no deep validation.
    Native(&'a FieldMap),
    /// A string that should contain JSON; parsed, with failure degrading to
    /// an empty map.
    Encoded(&'a str),
    /// Null, missing, or any non-mapping primitive.
    Absent,
}

impl<'a> RawField<'a> {
    /// Classifies a raw field value into its representation.
    #[must_use]
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Self::Native(map),
            Some(Value::String(s)) => Self::Encoded(s),
            _ => Self::Absent,
        }
    }

    /// Collapses the representation to the canonical map.
    ///
    /// An `Encoded` string that parses to anything other than a JSON object
    /// (including valid JSON like `5` or `[1,2]`) degrades to an empty map:
    /// wrong-shaped values must never escape the decoder.
    #[must_use]
    pub fn decode(self) -> FieldMap {
        match self {
            Self::Native(map) => map.clone(),
            Self::Encoded(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(map)) => map,
                _ => FieldMap::new(),
            },
            Self::Absent => FieldMap::new(),
        }
    }
}

/// Classifies and decodes in one step. Never errors; emptiness is the
/// caller's signal that the field was absent or malformed.
#[must_use]
pub fn decode_structured_field(value: Option<&Value>) -> FieldMap {
    RawField::classify(value).decode()
}
