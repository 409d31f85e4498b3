//! Raw tool arguments and the single parsing step that turns them into
//! validated requests.
//!
//! Tools receive their arguments as an untyped JSON object. Rather than
//! deserializing straight into the documented parameter structs (which would
//! surface serde's own wording on bad input), each tool takes a
//! [`RawArguments`] and converts it with [`FromArguments`], producing either a
//! typed request or a [`ValidationError`] carrying the exact caller-facing
//! message.

use std::borrow::Cow;
use std::marker::PhantomData;

use clickup_client::models::JsonObject;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::validation::ValidationError;

/// Conversion from raw arguments into a validated request.
pub trait FromArguments: Sized {
    fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError>;
}

/// Untyped tool arguments with typed probes.
///
/// A key holding JSON `null` is treated exactly like a missing key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMap(JsonObject);

impl From<JsonObject> for ArgumentMap {
    fn from(map: JsonObject) -> Self {
        Self(map)
    }
}

impl ArgumentMap {
    pub fn new(map: JsonObject) -> Self {
        Self(map)
    }

    pub fn parse<T: FromArguments>(&self) -> Result<T, ValidationError> {
        T::from_arguments(self)
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }

    /// The value under `key`, unless it is missing or null.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// An identifier: a non-blank string, or an integer (ClickUp workspace
    /// ids are numeric). Anything else counts as absent.
    pub fn identifier(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
            _ => None,
        }
    }

    /// A required free-text value: a non-blank string, or absent.
    pub fn non_empty_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn optional_string(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ValidationError::field_type(key, "a string")),
        }
    }

    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, ValidationError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ValidationError::field_type(key, "a boolean")),
        }
    }

    pub fn optional_object(&self, key: &str) -> Result<Option<JsonObject>, ValidationError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map.clone())),
            Some(_) => Err(ValidationError::field_type(key, "an object")),
        }
    }

    pub fn optional_integer(&self, key: &str) -> Result<Option<i64>, ValidationError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_i64()
                .map(Some)
                .ok_or_else(|| ValidationError::field_type(key, "an integer")),
        }
    }

    pub fn optional_integer_list(&self, key: &str) -> Result<Option<Vec<i64>>, ValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .as_array()
            .and_then(|items| items.iter().map(Value::as_i64).collect::<Option<Vec<_>>>())
            .map(Some)
            .ok_or_else(|| ValidationError::field_type(key, "an array of integers"))
    }

    pub fn optional_string_list(
        &self,
        key: &str,
    ) -> Result<Option<Vec<String>>, ValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|v| v.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            })
            .map(Some)
            .ok_or_else(|| ValidationError::field_type(key, "an array of strings"))
    }

    /// Zero-based page number. Integral floats such as `2.0` are accepted;
    /// negatives, fractions and non-numbers are not.
    pub fn page(&self) -> Result<Option<u32>, ValidationError> {
        let Some(value) = self.get("page") else {
            return Ok(None);
        };
        let page = match value {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            }),
            _ => None,
        };
        page.and_then(|p| u32::try_from(p).ok())
            .map(Some)
            .ok_or(ValidationError::InvalidPage)
    }

    /// Entries whose keys are not in `known`, with nulls dropped.
    pub fn remaining(&self, known: &[&str]) -> JsonObject {
        self.0
            .iter()
            .filter(|(k, v)| !v.is_null() && !known.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Tool parameters received as a raw JSON object while advertising the
/// JSON Schema of the documented parameter struct `P`.
#[derive(Debug)]
pub struct RawArguments<P> {
    args: ArgumentMap,
    _params: PhantomData<fn() -> P>,
}

impl<P> RawArguments<P> {
    pub fn new(map: JsonObject) -> Self {
        Self {
            args: ArgumentMap::new(map),
            _params: PhantomData,
        }
    }

    pub fn into_inner(self) -> ArgumentMap {
        self.args
    }
}

impl<'de, P> Deserialize<'de> for RawArguments<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonObject::deserialize(deserializer).map(Self::new)
    }
}

impl<P: JsonSchema> JsonSchema for RawArguments<P> {
    fn inline_schema() -> bool {
        P::inline_schema()
    }

    fn schema_name() -> Cow<'static, str> {
        P::schema_name()
    }

    fn schema_id() -> Cow<'static, str> {
        P::schema_id()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        P::json_schema(generator)
    }
}
