//! Project repository contract and SQLite implementation.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::record::{PaperRecord, ProjectId, ProjectRecord};
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection has not been migrated to the expected schema.
    SchemaNotReady { found: u32, expected: u32 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::SchemaNotReady { found, expected } => write!(
                f,
                "project store schema version {found} does not match expected {expected}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted project data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::SchemaNotReady { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-list persistence for admin edits.
pub trait ProjectRepository {
    /// Loads every project in saved order.
    fn load_projects(&self) -> RepoResult<Vec<ProjectRecord>>;
    /// Replaces the saved list with `projects`.
    fn save_projects(&mut self, projects: &[ProjectRecord]) -> RepoResult<()>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// Fails with `SchemaNotReady` for connections that skipped migrations.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        let found = current_version(conn)?;
        let expected = latest_version();
        if found != expected {
            return Err(RepoError::SchemaNotReady { found, expected });
        }
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn load_projects(&self) -> RepoResult<Vec<ProjectRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, name, papers_json
             FROM projects
             ORDER BY position ASC, uuid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        debug!(
            "event=projects_load module=repo status=ok count={}",
            projects.len()
        );
        Ok(projects)
    }

    fn save_projects(&mut self, projects: &[ProjectRecord]) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM projects;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO projects (uuid, name, position, papers_json)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            for (position, project) in projects.iter().enumerate() {
                let papers_json = serde_json::to_string(&project.papers).map_err(|err| {
                    RepoError::InvalidData(format!("cannot encode papers of {}: {err}", project.id))
                })?;
                let position = i64::try_from(position).map_err(|_| {
                    RepoError::InvalidData("project position exceeds i64".to_string())
                })?;
                insert.execute(params![
                    project.id.to_string(),
                    project.name.as_str(),
                    position,
                    papers_json,
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "event=projects_save module=repo status=ok count={}",
            projects.len()
        );
        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<ProjectRecord> {
    let uuid_text: String = row.get("uuid")?;
    let id: ProjectId = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in projects.uuid"))
    })?;

    let papers_json: String = row.get("papers_json")?;
    let papers: Vec<PaperRecord> = serde_json::from_str(&papers_json).map_err(|err| {
        RepoError::InvalidData(format!("invalid papers_json for project {id}: {err}"))
    })?;

    let mut project = ProjectRecord::with_id(id, row.get::<_, String>("name")?);
    project.papers = papers;
    Ok(project)
}
