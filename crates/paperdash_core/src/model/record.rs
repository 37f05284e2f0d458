//! Project, paper and submission records.
//!
//! # Responsibility
//! - Mirror the dashboard data file (`{ "projects": [...] }`).
//! - Resolve malformed optional fields to safe defaults at the boundary so
//!   downstream code never re-checks them.
//!
//! # Invariants
//! - `progress` is always within `0..=100`.
//! - Missing or unknown `priority` is `Priority::Low`.
//! - Blank date strings are stored as `None`.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Stable identifier for a project record.
pub type ProjectId = Uuid;

/// Paper urgency. Serialized capitalized, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Lowercase name, used as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Display label as written in the data file.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Best-effort parse; unknown values fall back to `Low`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "urgent" | "critical" => Self::High,
            "medium" | "med" | "normal" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(raw) => Self::parse_lenient(&raw),
            _ => Self::default(),
        })
    }
}

/// One submission attempt of a paper to a venue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub journal: String,
    /// Raw submission date as entered.
    #[serde(deserialize_with = "lenient_string")]
    pub submitted: String,
    /// Free-form decision, e.g. `Under Review`, `Accepted`.
    #[serde(deserialize_with = "lenient_string")]
    pub decision: String,
}

/// One tracked paper (or other unit of work) inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    pub priority: Priority,
    #[serde(
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<String>,
    #[serde(
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<String>,
    #[serde(
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<String>,
    /// Percent complete, `0..=100`.
    #[serde(deserialize_with = "lenient_progress")]
    pub progress: u8,
    #[serde(deserialize_with = "lenient_list")]
    pub submissions: Vec<SubmissionRecord>,
}

impl PaperRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Whether any submission carries exactly `decision`.
    pub fn has_decision(&self, decision: &str) -> bool {
        self.submissions.iter().any(|s| s.decision == decision)
    }

    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }
}

/// A research project grouping papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Generated when the source file has none or an unparseable one.
    #[serde(default = "Uuid::new_v4", deserialize_with = "lenient_id")]
    pub id: ProjectId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub papers: Vec<PaperRecord>,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Used by import and persistence paths where identity already exists.
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            papers: Vec::new(),
        }
    }
}

/// Top-level shape of the dashboard data file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectRecord>,
}

/// Clamps a raw progress value into `0..=100`.
pub fn clamp_progress(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) => raw,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
        _ => None,
    })
}

fn lenient_progress<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64().map_or(0, clamp_progress),
        Value::String(raw) => raw
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_or(0, clamp_progress),
        _ => 0,
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProjectId, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) => Uuid::parse_str(raw.trim())
            .ok()
            .filter(|id| !id.is_nil())
            .unwrap_or_else(Uuid::new_v4),
        _ => Uuid::new_v4(),
    })
}

/// Accepts an array, dropping elements that are not objects of the expected
/// shape; anything that is not an array becomes empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}
