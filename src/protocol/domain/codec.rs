//! Declarative payload field codecs.
//!
//! A codec names the JSON shape a declared field accepts and whether the
//! field must be present on the wire. Codecs are serde-tagged so plugin
//! manifests can declare them as plain JSON.

use crate::protocol::error::WireError;
use crate::timestamp::parse_instant;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const fn default_required() -> bool {
    true
}

/// JSON shape of a declared payload field, plus its presence rule.
///
/// The manifest spelling uses a `codec` tag: `{"codec": "timestamp"}`,
/// `{"codec": "list", "item": {"codec": "str"}}`. The `required` flag
/// defaults to `true` when a manifest omits it.
///
/// # Examples
///
/// ```
/// use herald::protocol::domain::FieldCodec;
///
/// let spec: FieldCodec =
///     serde_json::from_value(serde_json::json!({"codec": "int", "required": false}))
///         .expect("valid spec");
/// assert_eq!(spec, FieldCodec::integer().optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "codec", rename_all = "snake_case")]
pub enum FieldCodec {
    /// UTF-8 text.
    Str {
        /// Whether the field must be present on the wire.
        #[serde(default = "default_required")]
        required: bool,
    },
    /// A JSON integer.
    Int {
        /// Whether the field must be present on the wire.
        #[serde(default = "default_required")]
        required: bool,
    },
    /// A JSON boolean.
    Bool {
        /// Whether the field must be present on the wire.
        #[serde(default = "default_required")]
        required: bool,
    },
    /// Text the timestamp codec accepts; see [`parse_instant`].
    Timestamp {
        /// Whether the field must be present on the wire.
        #[serde(default = "default_required")]
        required: bool,
    },
    /// A JSON array whose entries all match `item`.
    List {
        /// Codec every list entry must satisfy. Its own presence flag is
        /// meaningless and ignored; entries are values, not fields.
        item: Box<FieldCodec>,
        /// Whether the field must be present on the wire.
        #[serde(default = "default_required")]
        required: bool,
    },
    /// Any JSON value, unchecked. The escape hatch for nested records.
    Json {
        /// Whether the field must be present on the wire.
        #[serde(default = "default_required")]
        required: bool,
    },
}

impl FieldCodec {
    /// A required text field.
    #[must_use]
    pub const fn text() -> Self {
        Self::Str { required: true }
    }

    /// A required integer field.
    #[must_use]
    pub const fn integer() -> Self {
        Self::Int { required: true }
    }

    /// A required boolean field.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Bool { required: true }
    }

    /// A required timestamp field.
    #[must_use]
    pub const fn timestamp() -> Self {
        Self::Timestamp { required: true }
    }

    /// A required list field whose entries match `item`.
    #[must_use]
    pub fn list_of(item: Self) -> Self {
        Self::List {
            item: Box::new(item),
            required: true,
        }
    }

    /// A required free-form JSON field.
    #[must_use]
    pub const fn json() -> Self {
        Self::Json { required: true }
    }

    /// Marks this codec's field optional on the wire.
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Self::Str { .. } => Self::Str { required: false },
            Self::Int { .. } => Self::Int { required: false },
            Self::Bool { .. } => Self::Bool { required: false },
            Self::Timestamp { .. } => Self::Timestamp { required: false },
            Self::List { item, .. } => Self::List {
                item,
                required: false,
            },
            Self::Json { .. } => Self::Json { required: false },
        }
    }

    /// Returns whether the field must be present on the wire.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        match self {
            Self::Str { required }
            | Self::Int { required }
            | Self::Bool { required }
            | Self::Timestamp { required }
            | Self::List { required, .. }
            | Self::Json { required } => *required,
        }
    }

    /// Describes the shape this codec accepts, for diagnostics.
    #[must_use]
    pub fn expected(&self) -> String {
        match self {
            Self::Str { .. } => "a string".to_owned(),
            Self::Int { .. } => "an integer".to_owned(),
            Self::Bool { .. } => "a boolean".to_owned(),
            Self::Timestamp { .. } => "an ISO-8601 timestamp string".to_owned(),
            Self::List { item, .. } => format!("a list where every entry is {}", item.expected()),
            Self::Json { .. } => "any JSON value".to_owned(),
        }
    }

    /// Checks a candidate value against this codec.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidFieldValue`] when the value's JSON shape
    /// does not match, or [`WireError::InvalidTimestamp`] when a timestamp
    /// field holds unparseable text.
    pub fn check(&self, field: &str, value: &Value) -> Result<(), WireError> {
        let shape_ok = match self {
            Self::Str { .. } => value.is_string(),
            Self::Int { .. } => value.is_i64() || value.is_u64(),
            Self::Bool { .. } => value.is_boolean(),
            Self::Timestamp { .. } => return check_timestamp(field, value),
            Self::List { item, .. } => return check_list(field, item, value),
            Self::Json { .. } => true,
        };
        if shape_ok {
            Ok(())
        } else {
            Err(WireError::invalid_field_value(field, self.expected()))
        }
    }
}

fn check_timestamp(field: &str, value: &Value) -> Result<(), WireError> {
    let text = value
        .as_str()
        .ok_or_else(|| WireError::invalid_field_value(field, "an ISO-8601 timestamp string"))?;
    parse_instant(text).map_err(|source| WireError::InvalidTimestamp {
        field: field.to_owned(),
        source,
    })?;
    Ok(())
}

fn check_list(field: &str, item: &FieldCodec, value: &Value) -> Result<(), WireError> {
    let entries = value.as_array().ok_or_else(|| {
        let expected = format!("a list where every entry is {}", item.expected());
        WireError::invalid_field_value(field, expected)
    })?;
    for entry in entries {
        item.check(field, entry)?;
    }
    Ok(())
}
