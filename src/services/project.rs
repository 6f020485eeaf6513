use chrono::Utc;
use tokio::time::sleep;
use ulid::Ulid;

use crate::error::{ServiceError, ServiceResult};
use crate::latency::LatencyProfile;
use crate::store::{EntityStore, InsertAt, Record};
use crate::types::{Project, ProjectStatus};

impl Record for Project {
    const INSERT_AT: InsertAt = InsertAt::Front;

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::ProjectNotFound(id.to_string())
    }
}

/// Fields a caller supplies when creating a project. The service assigns
/// the id and the creation timestamp.
#[derive(Clone, Debug)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub member_ids: Vec<String>,
}

/// Partial update. `Some` fields win, `None` fields keep their stored value.
#[derive(Clone, Debug, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub member_ids: Option<Vec<String>>,
}

impl ProjectPatch {
    fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(member_ids) = self.member_ids {
            project.member_ids = member_ids;
        }
    }
}

/// Sole authority over the project sequence. New projects are prepended so
/// the projects page reads newest-first.
pub struct ProjectService {
    store: EntityStore<Project>,
    latency: LatencyProfile,
}

impl ProjectService {
    pub fn new(seed: Vec<Project>, latency: LatencyProfile) -> Self {
        Self {
            store: EntityStore::new(seed),
            latency,
        }
    }

    pub async fn get_all(&self) -> Vec<Project> {
        sleep(self.latency.get_all).await;
        self.store.all().await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Project> {
        sleep(self.latency.get_by_id).await;
        self.store.find(id).await
    }

    pub async fn create(&self, draft: ProjectDraft) -> Project {
        sleep(self.latency.create).await;
        let project = Project {
            id: Ulid::new().to_string(),
            name: draft.name,
            description: draft.description,
            status: draft.status,
            member_ids: draft.member_ids,
            created_at: Utc::now().to_rfc3339(),
        };
        tracing::debug!(id = %project.id, "created project");
        self.store.insert(project).await
    }

    pub async fn update(&self, id: &str, patch: ProjectPatch) -> ServiceResult<Project> {
        sleep(self.latency.update).await;
        let project = self.store.modify(id, |project| patch.apply(project)).await?;
        tracing::debug!(id = %project.id, "updated project");
        Ok(project)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        sleep(self.latency.delete).await;
        self.store.remove(id).await?;
        tracing::debug!(id, "deleted project");
        Ok(())
    }
}
