//! Flat CSV sheet: one row per paper.
//!
//! Submissions have no CSV representation and are dropped on export.

use super::InterchangeError;
use crate::model::record::{clamp_progress, PaperRecord, Priority, ProjectRecord};
use ::csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{info, warn};
use std::collections::HashMap;
use std::io::{Read, Write};

/// Column order written by `export_csv`.
pub const CSV_HEADERS: [&str; 8] = [
    "project", "title", "status", "priority", "start", "end", "deadline", "progress",
];

/// Column lookup by lowercase header name, tolerant of reordering.
struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, InterchangeError> {
        let map = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_ascii_lowercase(), index))
            .collect::<HashMap<_, _>>();
        for required in ["project", "title"] {
            if !map.contains_key(required) {
                return Err(InterchangeError::MissingColumn(required));
            }
        }
        Ok(Self(map))
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.0
            .get(column)
            .and_then(|index| record.get(*index))
            .unwrap_or_default()
    }

    fn date(&self, record: &StringRecord, column: &str) -> Option<String> {
        let value = self.get(record, column);
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Reads the sheet, grouping rows by `project` in first-seen order.
///
/// Rows with a blank project are skipped. A row with a blank title creates
/// (or keeps) its project without adding a paper.
pub fn import_csv(reader: impl Read) -> Result<Vec<ProjectRecord>, InterchangeError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut projects: Vec<ProjectRecord> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        let project_name = columns.get(&record, "project");
        if project_name.is_empty() {
            skipped += 1;
            continue;
        }

        let project_index = *index_by_name
            .entry(project_name.to_lowercase())
            .or_insert_with(|| {
                projects.push(ProjectRecord::new(project_name));
                projects.len() - 1
            });

        let title = columns.get(&record, "title");
        if title.is_empty() {
            continue;
        }
        let progress = columns
            .get(&record, "progress")
            .trim_end_matches('%')
            .parse::<f64>()
            .map_or(0, clamp_progress);
        projects[project_index].papers.push(PaperRecord {
            title: title.to_string(),
            status: columns.get(&record, "status").to_string(),
            priority: Priority::parse_lenient(columns.get(&record, "priority")),
            start: columns.date(&record, "start"),
            end: columns.date(&record, "end"),
            deadline: columns.date(&record, "deadline"),
            progress,
            submissions: Vec::new(),
        });
    }

    if skipped > 0 {
        warn!("event=import module=interchange status=partial format=csv skipped_rows={skipped}");
    }
    info!(
        "event=import module=interchange status=ok format=csv projects={}",
        projects.len()
    );
    Ok(projects)
}

/// Writes the sheet with `CSV_HEADERS`. Projects without papers get one row
/// with empty paper columns so they survive a round trip.
pub fn export_csv(projects: &[ProjectRecord], writer: impl Write) -> Result<(), InterchangeError> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for project in projects {
        if project.papers.is_empty() {
            csv_writer.write_record([project.name.as_str(), "", "", "", "", "", "", ""])?;
            continue;
        }
        for paper in &project.papers {
            let progress = paper.progress.to_string();
            csv_writer.write_record([
                project.name.as_str(),
                paper.title.as_str(),
                paper.status.as_str(),
                paper.priority.label(),
                paper.start.as_deref().unwrap_or_default(),
                paper.end.as_deref().unwrap_or_default(),
                paper.deadline.as_deref().unwrap_or_default(),
                progress.as_str(),
            ])?;
        }
    }
    csv_writer.flush()?;

    info!(
        "event=export module=interchange status=ok format=csv projects={}",
        projects.len()
    );
    Ok(())
}
