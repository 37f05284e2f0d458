//! Dashboard JSON data file.

use super::InterchangeError;
use crate::model::record::{Dataset, ProjectRecord};
use log::info;
use serde_json::Value;

/// Parses `{ "projects": [...] }` or a bare array of projects.
pub fn import_json(raw: &str) -> Result<Vec<ProjectRecord>, InterchangeError> {
    let value: Value = serde_json::from_str(raw)?;
    let has_projects = value.get("projects").is_some_and(Value::is_array);
    let dataset: Dataset = match value {
        Value::Object(_) if has_projects => serde_json::from_value(value)?,
        Value::Array(entries) => {
            let mut wrapper = serde_json::Map::new();
            wrapper.insert("projects".to_string(), Value::Array(entries));
            serde_json::from_value(Value::Object(wrapper))?
        }
        _ => {
            return Err(InterchangeError::UnexpectedShape(
                "expected an object with a `projects` array or an array of projects",
            ))
        }
    };

    info!(
        "event=import module=interchange status=ok format=json projects={}",
        dataset.projects.len()
    );
    Ok(dataset.projects)
}

/// Pretty-printed `{ "projects": [...] }`.
pub fn export_json(projects: &[ProjectRecord]) -> Result<String, InterchangeError> {
    let dataset = Dataset {
        projects: projects.to_vec(),
    };
    let mut out = serde_json::to_string_pretty(&dataset)?;
    out.push('\n');
    info!(
        "event=export module=interchange status=ok format=json projects={}",
        projects.len()
    );
    Ok(out)
}
