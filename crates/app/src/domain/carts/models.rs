//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use serde_json::Value;

use crate::domain::carts::errors::CartsServiceError;

/// Whatever a client placed in the cart.
///
/// The cart does not interpret descriptors. It only refuses values that do
/// not name anything: `null`, `false`, `0` and the empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductDescriptor(Value);

impl ProductDescriptor {
    /// Accepts a submitted product value.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::MissingProduct`] when the value is absent or empty.
    pub fn new(value: Option<Value>) -> Result<Self, CartsServiceError> {
        match value {
            Some(value) if is_present(&value) => Ok(Self(value)),
            _ => Err(CartsServiceError::MissingProduct),
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Display for ProductDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.0 {
            Value::String(name) => f.write_str(name),
            other => Display::fmt(other, f),
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
