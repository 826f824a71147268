//! Tracker field definitions (system and custom fields)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::de::null_as_default;
use crate::domain::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A field as listed by the tracker. Members the crate does not model are
/// kept in `extra` so the field serializes back unchanged. A `null` id, name
/// or custom flag reads as empty or `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    /// Parse the tracker's field list (a JSON array of field objects).
    pub fn parse_list(json: &str) -> DomainResult<Vec<Self>> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidFieldList(e.to_string()))
    }

    /// Schema type, or `-` when the field has none.
    pub fn type_label(&self) -> &str {
        self.schema
            .as_ref()
            .and_then(|s| s.field_type.as_deref())
            .unwrap_or("-")
    }

    pub fn custom_label(&self) -> &'static str {
        if self.custom {
            "Yes"
        } else {
            "No"
        }
    }

    /// Case-insensitive substring match on name or id. `needle` must be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

/// Which fields a listing includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldScope {
    Custom,
    System,
    #[default]
    All,
}

impl FieldScope {
    pub fn includes(self, field: &Field) -> bool {
        match self {
            FieldScope::Custom => field.custom,
            FieldScope::System => !field.custom,
            FieldScope::All => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldScope::Custom => "custom",
            FieldScope::System => "system",
            FieldScope::All => "all",
        }
    }
}

impl FromStr for FieldScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(FieldScope::Custom),
            "system" => Ok(FieldScope::System),
            "all" => Ok(FieldScope::All),
            other => Err(DomainError::InvalidFieldScope(other.to_string())),
        }
    }
}

impl fmt::Display for FieldScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
