//! Admin use-case service.
//!
//! # Responsibility
//! - Apply a store operation, then persist the resulting state.
//! - Emit one log event per admin action.
//!
//! # Invariants
//! - Nothing is saved when the store operation fails.
//! - The caller's store is never modified; the persisted state is returned
//!   as a new `ProjectStore`.

use crate::model::record::{PaperRecord, ProjectId, ProjectRecord};
use crate::repo::project_repo::{ProjectRepository, RepoError};
use crate::store::project_store::{
    ProjectDraft, ProjectStore, StoreError, StoreResult, StoreUpdate,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for admin use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// The edit was rejected by store rules.
    Store(StoreError),
    /// Persistence failed.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Persisting facade over `ProjectStore` operations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the persisted project list into a fresh store.
    pub fn load_store(&self) -> ServiceResult<ProjectStore> {
        let projects = self.repo.load_projects()?;
        Ok(ProjectStore::from_projects(projects)?)
    }

    pub fn create_project(
        &mut self,
        store: &ProjectStore,
        draft: ProjectDraft,
    ) -> ServiceResult<StoreUpdate<ProjectId>> {
        self.commit("project_create", store.create_project(draft))
    }

    pub fn update_project(
        &mut self,
        store: &ProjectStore,
        id: ProjectId,
        draft: ProjectDraft,
    ) -> ServiceResult<StoreUpdate<()>> {
        self.commit("project_update", store.update_project(id, draft))
    }

    pub fn rename_project(
        &mut self,
        store: &ProjectStore,
        id: ProjectId,
        name: &str,
    ) -> ServiceResult<StoreUpdate<()>> {
        self.commit("project_rename", store.rename_project(id, name))
    }

    pub fn delete_project(
        &mut self,
        store: &ProjectStore,
        id: ProjectId,
    ) -> ServiceResult<StoreUpdate<ProjectRecord>> {
        self.commit("project_delete", store.delete_project(id))
    }

    pub fn add_paper(
        &mut self,
        store: &ProjectStore,
        id: ProjectId,
        paper: PaperRecord,
    ) -> ServiceResult<StoreUpdate<usize>> {
        self.commit("paper_add", store.add_paper(id, paper))
    }

    pub fn remove_paper(
        &mut self,
        store: &ProjectStore,
        id: ProjectId,
        paper_index: usize,
    ) -> ServiceResult<StoreUpdate<PaperRecord>> {
        self.commit("paper_remove", store.remove_paper(id, paper_index))
    }

    /// Replaces the persisted list with imported records.
    pub fn import_projects(
        &mut self,
        store: &ProjectStore,
        projects: Vec<ProjectRecord>,
    ) -> ServiceResult<StoreUpdate<usize>> {
        self.commit("projects_import", store.replace_all(projects))
    }

    fn commit<T>(
        &mut self,
        event: &'static str,
        result: StoreResult<T>,
    ) -> ServiceResult<StoreUpdate<T>> {
        let update = match result {
            Ok(update) => update,
            Err(err) => {
                warn!(
                    "event={event} module=service status=rejected reason={}",
                    store_error_code(&err)
                );
                return Err(err.into());
            }
        };

        if let Err(err) = self.repo.save_projects(update.store.projects()) {
            warn!("event={event} module=service status=error error_code=save_failed");
            return Err(err.into());
        }

        info!(
            "event={event} module=service status=ok projects={}",
            update.store.len()
        );
        Ok(update)
    }
}

/// Stable, content-free code for log lines.
fn store_error_code(err: &StoreError) -> &'static str {
    match err {
        StoreError::EmptyProjectName => "empty_project_name",
        StoreError::DuplicateProjectName(_) => "duplicate_project_name",
        StoreError::DuplicateProjectId(_) => "duplicate_project_id",
        StoreError::ProjectNotFound(_) => "project_not_found",
        StoreError::EmptyPaperTitle => "empty_paper_title",
        StoreError::PaperNotFound { .. } => "paper_not_found",
    }
}
