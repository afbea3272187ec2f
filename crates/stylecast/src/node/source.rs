//! Source adapters: building a `StyleNode` from JSON or YAML text.
//!
//! The originating design system authors style objects as literals; here
//! they arrive as data. Both adapters walk the parsed document by hand so
//! that shape errors carry the offending key, and both rely on
//! order-preserving map types (`serde_json` with `preserve_order`,
//! `serde_yaml::Mapping`) to uphold the emission-order invariant.
//!
//! # Example
//!
//! ```rust
//! use stylecast::StyleNode;
//!
//! let node = StyleNode::from_json_str(
//!     r#"{ "className": "card", "fontSize": "18px" }"#,
//! ).unwrap();
//! assert_eq!(node.class_names(), vec!["card"]);
//! ```

use crate::error::{SourceFormat, StyleError};

use super::value::{render_number, StyleNode, StyleValue};

impl StyleNode {
    /// Parses a JSON object into a `StyleNode`.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::Parse` if the text is not valid JSON,
    /// `StyleError::NotAnObject` if the root is not an object, and
    /// `StyleError::InvalidValue` for values with no `StyleValue`
    /// representation (e.g. arrays of objects).
    pub fn from_json_str(input: &str) -> Result<Self, StyleError> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| StyleError::Parse {
                format: SourceFormat::Json,
                message: e.to_string(),
            })?;
        Self::from_json_value(&value)
    }

    /// Converts an already-parsed JSON value into a `StyleNode`.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::NotAnObject` if the value is not an object,
    /// and `StyleError::InvalidValue` for unrepresentable values.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, StyleError> {
        let map = value.as_object().ok_or_else(|| StyleError::NotAnObject {
            found: json_type_name(value).to_string(),
        })?;

        let mut node = StyleNode::new();
        for (key, value) in map {
            node.insert(key.clone(), json_style_value(key, value)?);
        }
        Ok(node)
    }

    /// Parses a YAML mapping into a `StyleNode`.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::Parse` if the text is not valid YAML,
    /// `StyleError::NotAnObject` if the root is not a mapping, and
    /// `StyleError::InvalidValue` for unrepresentable values or
    /// non-string keys.
    pub fn from_yaml_str(input: &str) -> Result<Self, StyleError> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(input).map_err(|e| StyleError::Parse {
                format: SourceFormat::Yaml,
                message: e.to_string(),
            })?;

        let mapping = value.as_mapping().ok_or_else(|| StyleError::NotAnObject {
            found: yaml_type_name(&value).to_string(),
        })?;

        let mut node = StyleNode::new();
        for (key, value) in mapping {
            let key = key.as_str().ok_or_else(|| StyleError::InvalidValue {
                key: format!("{:?}", key),
                message: "mapping keys must be strings".to_string(),
            })?;
            node.insert(key.to_string(), yaml_style_value(key, value)?);
        }
        Ok(node)
    }
}

fn json_style_value(key: &str, value: &serde_json::Value) -> Result<StyleValue, StyleError> {
    match value {
        serde_json::Value::Null => Ok(StyleValue::Null),
        serde_json::Value::Bool(b) => Ok(StyleValue::Bool(*b)),
        serde_json::Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| StyleError::InvalidValue {
                key: key.to_string(),
                message: format!("number {} has no f64 representation", n),
            })?;
            Ok(StyleValue::Num(n))
        }
        serde_json::Value::String(s) => Ok(StyleValue::Str(s.clone())),
        serde_json::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(s) => list.push(s.clone()),
                    serde_json::Value::Number(n) => match n.as_f64() {
                        Some(n) => list.push(render_number(n)),
                        None => {
                            return Err(StyleError::InvalidValue {
                                key: key.to_string(),
                                message: format!("number {} has no f64 representation", n),
                            })
                        }
                    },
                    _ => {
                        return Err(StyleError::InvalidValue {
                            key: key.to_string(),
                            message: "arrays may contain only strings and numbers".to_string(),
                        })
                    }
                }
            }
            Ok(StyleValue::List(list))
        }
        serde_json::Value::Object(_) => Ok(StyleValue::Block(StyleNode::from_json_value(value)?)),
    }
}

fn yaml_style_value(key: &str, value: &serde_yaml::Value) -> Result<StyleValue, StyleError> {
    match value {
        serde_yaml::Value::Null => Ok(StyleValue::Null),
        serde_yaml::Value::Bool(b) => Ok(StyleValue::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| StyleError::InvalidValue {
                key: key.to_string(),
                message: format!("number {} has no f64 representation", n),
            })?;
            Ok(StyleValue::Num(n))
        }
        serde_yaml::Value::String(s) => Ok(StyleValue::Str(s.clone())),
        serde_yaml::Value::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_yaml::Value::String(s) => list.push(s.clone()),
                    serde_yaml::Value::Number(n) => match n.as_f64() {
                        Some(n) => list.push(render_number(n)),
                        None => {
                            return Err(StyleError::InvalidValue {
                                key: key.to_string(),
                                message: format!("number {} has no f64 representation", n),
                            })
                        }
                    },
                    _ => {
                        return Err(StyleError::InvalidValue {
                            key: key.to_string(),
                            message: "sequences may contain only strings and numbers".to_string(),
                        })
                    }
                }
            }
            Ok(StyleValue::List(list))
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut node = StyleNode::new();
            for (key, value) in mapping {
                let key = key.as_str().ok_or_else(|| StyleError::InvalidValue {
                    key: format!("{:?}", key),
                    message: "mapping keys must be strings".to_string(),
                })?;
                node.insert(key.to_string(), yaml_style_value(key, value)?);
            }
            Ok(StyleValue::Block(node))
        }
        serde_yaml::Value::Tagged(tagged) => Err(StyleError::InvalidValue {
            key: key.to_string(),
            message: format!("tagged value !{} is not supported", tagged.tag),
        }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
