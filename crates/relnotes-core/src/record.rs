//! Change records read from the JSON input.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::NotesResult;

/// One entry of the input array.
///
/// Both fields are optional. A value that is present but not a JSON string
/// is treated as absent; any other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChangeRecord {
    /// Classification tag (`feat`, `fix`, ...).
    #[serde(rename = "type", default, deserialize_with = "string_or_none")]
    pub kind: Option<String>,

    /// Human-readable description of the change.
    #[serde(default, deserialize_with = "string_or_none")]
    pub description: Option<String>,
}

impl ChangeRecord {
    /// Creates a record with both fields set.
    #[must_use]
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            description: Some(description.into()),
        }
    }

    /// Returns the trimmed description, or `None` if it is absent or blank.
    #[must_use]
    pub fn trimmed_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Parses the JSON input into change records.
///
/// # Errors
///
/// Returns [`crate::NotesError::Parse`] if the input is not valid JSON or not
/// an array of objects.
pub fn parse_records(json: &str) -> NotesResult<Vec<ChangeRecord>> {
    Ok(serde_json::from_str(json)?)
}
