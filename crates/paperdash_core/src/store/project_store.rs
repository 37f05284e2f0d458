//! Admin project store.
//!
//! # Responsibility
//! - Hold the edited project list and the "currently editing" marker as an
//!   explicit value.
//! - Apply CRUD edits as pure operations that return the next store.
//!
//! # Invariants
//! - Operations never mutate `self`; a failed operation leaves no partial
//!   state anywhere.
//! - Project names are non-blank after trimming and unique ignoring case.
//! - `editing` always refers to an existing project or is `None`.

use crate::model::record::{PaperRecord, ProjectId, ProjectRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    EmptyProjectName,
    DuplicateProjectName(String),
    DuplicateProjectId(ProjectId),
    ProjectNotFound(ProjectId),
    EmptyPaperTitle,
    PaperNotFound { project: ProjectId, index: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName => write!(f, "project name must not be empty"),
            Self::DuplicateProjectName(name) => write!(f, "project name already exists: {name}"),
            Self::DuplicateProjectId(id) => write!(f, "project id appears more than once: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::EmptyPaperTitle => write!(f, "paper title must not be empty"),
            Self::PaperNotFound { project, index } => {
                write!(f, "paper #{index} not found in project {project}")
            }
        }
    }
}

impl Error for StoreError {}

pub type StoreResult<T> = Result<StoreUpdate<T>, StoreError>;

/// Next store state plus the operation's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreUpdate<T> {
    pub store: ProjectStore,
    pub value: T,
}

/// Editable input for create/update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub papers: Vec<PaperRecord>,
}

impl ProjectDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            papers: Vec::new(),
        }
    }
}

/// Project list plus editing marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectStore {
    projects: Vec<ProjectRecord>,
    editing: Option<ProjectId>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from loaded records after validating them.
    pub fn from_projects(projects: Vec<ProjectRecord>) -> Result<Self, StoreError> {
        Ok(Self::new().replace_all(projects)?.store)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn into_projects(self) -> Vec<ProjectRecord> {
        self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get_project(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Case-insensitive lookup by trimmed name.
    pub fn find_by_name(&self, name: &str) -> Option<&ProjectRecord> {
        let wanted = name.trim().to_lowercase();
        self.projects
            .iter()
            .find(|project| project.name.trim().to_lowercase() == wanted)
    }

    pub fn editing(&self) -> Option<ProjectId> {
        self.editing
    }

    pub fn editing_project(&self) -> Option<&ProjectRecord> {
        self.editing.and_then(|id| self.get_project(id))
    }

    /// Appends a new project and returns its generated id.
    pub fn create_project(&self, draft: ProjectDraft) -> StoreResult<ProjectId> {
        let name = validate_name(&draft.name)?;
        self.ensure_name_free(&name, None)?;
        validate_papers(&draft.papers)?;

        let mut project = ProjectRecord::new(name);
        project.papers = draft.papers;
        let id = project.id;

        let mut next = self.clone();
        next.projects.push(project);
        Ok(StoreUpdate {
            store: next,
            value: id,
        })
    }

    /// Replaces name and papers of an existing project, keeping its position.
    pub fn update_project(&self, id: ProjectId, draft: ProjectDraft) -> StoreResult<()> {
        let index = self.index_of(id)?;
        let name = validate_name(&draft.name)?;
        self.ensure_name_free(&name, Some(id))?;
        validate_papers(&draft.papers)?;

        let mut next = self.clone();
        next.projects[index].name = name;
        next.projects[index].papers = draft.papers;
        if next.editing == Some(id) {
            next.editing = None;
        }
        Ok(StoreUpdate {
            store: next,
            value: (),
        })
    }

    /// Renames a project. Its papers are kept as stored and not re-validated.
    pub fn rename_project(&self, id: ProjectId, name: &str) -> StoreResult<()> {
        let index = self.index_of(id)?;
        let name = validate_name(name)?;
        self.ensure_name_free(&name, Some(id))?;

        let mut next = self.clone();
        next.projects[index].name = name;
        if next.editing == Some(id) {
            next.editing = None;
        }
        Ok(StoreUpdate {
            store: next,
            value: (),
        })
    }

    /// Removes a project and returns the removed record.
    pub fn delete_project(&self, id: ProjectId) -> StoreResult<ProjectRecord> {
        let index = self.index_of(id)?;
        let mut next = self.clone();
        let removed = next.projects.remove(index);
        if next.editing == Some(id) {
            next.editing = None;
        }
        Ok(StoreUpdate {
            store: next,
            value: removed,
        })
    }

    /// Appends a paper and returns its index within the project.
    pub fn add_paper(&self, id: ProjectId, paper: PaperRecord) -> StoreResult<usize> {
        let index = self.index_of(id)?;
        validate_papers(std::slice::from_ref(&paper))?;

        let mut next = self.clone();
        let papers = &mut next.projects[index].papers;
        papers.push(paper);
        let paper_index = papers.len() - 1;
        Ok(StoreUpdate {
            store: next,
            value: paper_index,
        })
    }

    /// Removes the paper at `paper_index` and returns it.
    pub fn remove_paper(&self, id: ProjectId, paper_index: usize) -> StoreResult<PaperRecord> {
        let index = self.index_of(id)?;
        if paper_index >= self.projects[index].papers.len() {
            return Err(StoreError::PaperNotFound {
                project: id,
                index: paper_index,
            });
        }

        let mut next = self.clone();
        let removed = next.projects[index].papers.remove(paper_index);
        Ok(StoreUpdate {
            store: next,
            value: removed,
        })
    }

    /// Marks `id` as the project being edited.
    pub fn begin_edit(&self, id: ProjectId) -> StoreResult<()> {
        self.index_of(id)?;
        let mut next = self.clone();
        next.editing = Some(id);
        Ok(StoreUpdate {
            store: next,
            value: (),
        })
    }

    /// Clears the editing marker. Never fails.
    pub fn cancel_edit(&self) -> ProjectStore {
        let mut next = self.clone();
        next.editing = None;
        next
    }

    /// Replaces every project (import path) and returns the new count.
    ///
    /// Names are trimmed; blank or duplicate names and duplicate ids are
    /// rejected. Papers are taken as given, including untitled ones from
    /// lenient imports.
    pub fn replace_all(&self, projects: Vec<ProjectRecord>) -> StoreResult<usize> {
        let mut next = ProjectStore::new();
        for mut project in projects {
            project.name = validate_name(&project.name)?;
            next.ensure_name_free(&project.name, None)?;
            if next.get_project(project.id).is_some() {
                return Err(StoreError::DuplicateProjectId(project.id));
            }
            next.projects.push(project);
        }
        let count = next.projects.len();
        Ok(StoreUpdate {
            store: next,
            value: count,
        })
    }

    fn index_of(&self, id: ProjectId) -> Result<usize, StoreError> {
        self.projects
            .iter()
            .position(|project| project.id == id)
            .ok_or(StoreError::ProjectNotFound(id))
    }

    fn ensure_name_free(&self, name: &str, except: Option<ProjectId>) -> Result<(), StoreError> {
        match self.find_by_name(name) {
            Some(existing) if Some(existing.id) != except => {
                Err(StoreError::DuplicateProjectName(name.to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn validate_name(raw: &str) -> Result<String, StoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyProjectName);
    }
    Ok(name.to_string())
}

fn validate_papers(papers: &[PaperRecord]) -> Result<(), StoreError> {
    if papers.iter().any(|paper| paper.title.trim().is_empty()) {
        return Err(StoreError::EmptyPaperTitle);
    }
    Ok(())
}
