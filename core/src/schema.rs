//! # Go Type Inference
//!
//! Infers a flat Go struct schema from a decoded JSON object. Every top-level
//! key becomes a [`Field`] whose [`GoType`] is derived from its value:
//!
//! - numbers that survive a round trip through `i32` → `int`
//! - any other number → `float64`
//! - strings → `string`
//! - objects, arrays, booleans and `null` → [`GoType::Any`] (`interface{}`)
//!
//! Nested structures are not descended into.
//!
//! ## Examples
//!
//! ```rust
//! use serde_json::json;
//! use gostruct::schema::Schema;
//!
//! let json = json!({"name": "Alice", "age": 30, "score": 9.5});
//! let schema = Schema::from(json.as_object().cloned().unwrap_or_default());
//! assert_eq!("{name:string,age:int,score:float64}", schema.to_string());
//! ```

use serde_json::{Map, Value};
use std::fmt::Display;

/// Ordered fields of the struct to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub fields: Vec<Field>,
}

/// A top-level JSON key and the type inferred from its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: GoType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoType {
    Int,
    Float64,
    String,
    Any, // object, array, bool and null are not mapped to a concrete type
}

impl GoType {
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) if f == f64::from(f as i32) => GoType::Int,
                _ => GoType::Float64,
            },
            Value::String(_) => GoType::String,
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => GoType::Any,
        }
    }
}

impl From<Map<String, Value>> for Schema {
    fn from(obj: Map<String, Value>) -> Self {
        let fields = obj
            .into_iter()
            .map(|(name, value)| Field {
                ty: GoType::infer(&value),
                name,
            })
            .collect();

        Schema { fields }
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        if let [first, rest @ ..] = self.fields.as_slice() {
            write!(f, "{}", first)?;
            for field in rest {
                write!(f, ",{}", field)?;
            }
        }
        write!(f, "}}")
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

impl Display for GoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoType::Int => write!(f, "int"),
            GoType::Float64 => write!(f, "float64"),
            GoType::String => write!(f, "string"),
            GoType::Any => write!(f, "interface{{}}"),
        }
    }
}
