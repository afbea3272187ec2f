//! Error types for style-source parsing.

/// Source text format a [`StyleError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON source (`StyleNode::from_json_str`).
    Json,
    /// YAML source (`StyleNode::from_yaml_str`).
    Yaml,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "JSON"),
            SourceFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Error type for building a `StyleNode` from source text.
///
/// Compilation itself is infallible; these errors only occur at the input
/// boundary when deserializing JSON or YAML into a `StyleNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The source text did not parse.
    Parse {
        /// Format of the source being parsed.
        format: SourceFormat,
        /// Error message from the underlying parser.
        message: String,
    },

    /// The root of the document was not an object/mapping.
    NotAnObject {
        /// Description of what was found instead.
        found: String,
    },

    /// A value has no `StyleValue` representation.
    InvalidValue {
        /// Key the value appeared under.
        key: String,
        /// Description of what was wrong.
        message: String,
    },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::Parse { format, message } => {
                write!(f, "Failed to parse {} style source: {}", format, message)
            }
            StyleError::NotAnObject { found } => {
                write!(f, "Style source root must be an object, got {}", found)
            }
            StyleError::InvalidValue { key, message } => {
                write!(f, "Invalid value for key '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse() {
        let err = StyleError::Parse {
            format: SourceFormat::Json,
            message: "unexpected end of input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse JSON style source: unexpected end of input"
        );
    }

    #[test]
    fn test_display_not_an_object() {
        let err = StyleError::NotAnObject {
            found: "array".to_string(),
        };
        assert_eq!(err.to_string(), "Style source root must be an object, got array");
    }

    #[test]
    fn test_display_invalid_value() {
        let err = StyleError::InvalidValue {
            key: "color".to_string(),
            message: "nested arrays are not supported".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for key 'color': nested arrays are not supported"
        );
    }
}
