//! Assignment record and its persisted JSON shape.
//!
//! Records arriving from disk are tolerated in a partially malformed state:
//! an unparseable due date, a non-integer difficulty, or a non-text priority
//! deserialize to `None` instead of failing the whole file. The advisory core
//! then skips such records for whichever aggregate needs the missing field.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Storage format for `due_date`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Older files store due dates without seconds.
pub const DUE_DATE_FORMAT_SHORT: &str = "%Y-%m-%d %H:%M";
/// Storage format for `date_added` (microsecond precision).
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Assignment priority.
///
/// Anything other than the three known levels is kept verbatim as `Other`
/// and ranks below `Low` everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// Ordering weight used for sorting. Never persisted.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Other(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(raw) => raw,
        }
    }

    /// The three levels offered when creating an assignment, with descriptions.
    pub fn levels() -> [(Priority, &'static str); 3] {
        [
            (Priority::High, "Urgent and Important"),
            (Priority::Medium, "Important but not Urgent"),
            (Priority::Low, "Can be done later"),
        ]
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        match value {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::from(value.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        String::deserialize(d).map(Priority::from)
    }
}

/// A homework assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Subject the assignment belongs to.
    #[serde(rename = "class", default)]
    pub class: Option<String>,
    #[serde(default, with = "due_date_serde")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub completed: bool,
    #[serde(default, with = "date_added_serde")]
    pub date_added: Option<NaiveDateTime>,
}

impl Assignment {
    /// Build a well-formed, incomplete assignment.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        class: impl Into<String>,
        due_date: NaiveDateTime,
        priority: Priority,
        difficulty: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            class: Some(class.into()),
            due_date: Some(due_date),
            priority: Some(priority),
            difficulty: Some(difficulty),
            completed: false,
            date_added: None,
        }
    }

    /// Not marked completed.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Rank of the priority, treating a missing priority as `Other`.
    pub fn priority_rank(&self) -> u8 {
        self.priority.as_ref().map_or(0, Priority::rank)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref().filter(|c| !c.is_empty())
    }
}

/// Parse a due date using the storage format, falling back to the
/// minute-precision format.
pub fn parse_due_date(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DUE_DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, DUE_DATE_FORMAT_SHORT))
        .ok()
}

fn parse_date_added(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, DUE_DATE_FORMAT))
        .ok()
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_priority<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Priority>, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(Priority::from(s)),
        _ => None,
    })
}

fn lenient_difficulty<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(d)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

mod due_date_serde {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(DUE_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        Ok(value.as_str().and_then(parse_due_date))
    }
}

mod date_added_serde {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(DATE_ADDED_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        Ok(value.as_str().and_then(parse_date_added))
    }
}
