//! Strict request payload parsing.
//!
//! Payloads arrive as untyped JSON and are turned into typed drafts by
//! [`FromPayload`]. Every offending field is collected before failing, so a
//! client sees the whole list in one 400 response instead of fixing fields
//! one round-trip at a time.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid payload ({})", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError::new(field, message)],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|item| item.field == field)
    }
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|item| format!("{}: {}", item.field, item.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Typed parse of a JSON request body.
pub trait FromPayload: Sized {
    fn from_payload(value: &Value) -> Result<Self, ValidationError>;
}

/// Field reader that records problems instead of returning early.
pub struct PayloadFields<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> PayloadFields<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::single("body", "must be a JSON object"))?;
        Ok(Self {
            object,
            errors: Vec::new(),
        })
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn required_str(&mut self, field: &str) -> Option<String> {
        match self.present(field) {
            None => {
                self.reject(field, "field required");
                None
            }
            Some(value) => self.as_string(field, value),
        }
    }

    pub fn optional_str(&mut self, field: &str) -> Option<String> {
        let value = self.present(field)?;
        self.as_string(field, value)
    }

    pub fn required_i32(&mut self, field: &str) -> Option<i32> {
        match self.present(field) {
            None => {
                self.reject(field, "field required");
                None
            }
            Some(value) => self.as_i32(field, value),
        }
    }

    pub fn optional_i32(&mut self, field: &str) -> Option<i32> {
        let value = self.present(field)?;
        self.as_i32(field, value)
    }

    pub fn optional_u32(&mut self, field: &str) -> Option<u32> {
        let value = self.present(field)?;
        let Some(number) = value.as_i64() else {
            self.reject(field, "must be an integer");
            return None;
        };
        match u32::try_from(number) {
            Ok(number) => Some(number),
            Err(_) => {
                self.reject(field, "must be between 0 and 4294967295");
                None
            }
        }
    }

    pub fn required_f64(&mut self, field: &str) -> Option<f64> {
        let Some(value) = self.present(field) else {
            self.reject(field, "field required");
            return None;
        };
        match value.as_f64() {
            Some(number) => Some(number),
            None => {
                self.reject(field, "must be a number");
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.errors,
            })
        }
    }

    // JSON null counts as absent.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn as_string(&mut self, field: &str, value: &Value) -> Option<String> {
        match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                self.reject(field, "must be a string");
                None
            }
        }
    }

    fn as_i32(&mut self, field: &str, value: &Value) -> Option<i32> {
        let Some(number) = value.as_i64() else {
            self.reject(field, "must be an integer");
            return None;
        };
        match i32::try_from(number) {
            Ok(number) => Some(number),
            Err(_) => {
                self.reject(field, "must fit in a 32-bit signed integer");
                None
            }
        }
    }
}
