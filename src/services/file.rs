use chrono::Utc;
use tokio::time::sleep;
use ulid::Ulid;

use crate::error::{ServiceError, ServiceResult};
use crate::latency::LatencyProfile;
use crate::store::{EntityStore, InsertAt, Record};
use crate::types::ProjectFile;

impl Record for ProjectFile {
    const INSERT_AT: InsertAt = InsertAt::Front;

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::FileNotFound(id.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct FileDraft {
    pub name: String,
    pub size: u64,
    pub url: String,
    pub project_id: String,
    pub uploaded_by: String,
}

#[derive(Clone, Debug, Default)]
pub struct FilePatch {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub url: Option<String>,
    pub project_id: Option<String>,
    pub uploaded_by: Option<String>,
}

impl FilePatch {
    fn apply(self, file: &mut ProjectFile) {
        if let Some(name) = self.name {
            file.name = name;
        }
        if let Some(size) = self.size {
            file.size = size;
        }
        if let Some(url) = self.url {
            file.url = url;
        }
        if let Some(project_id) = self.project_id {
            file.project_id = project_id;
        }
        if let Some(uploaded_by) = self.uploaded_by {
            file.uploaded_by = uploaded_by;
        }
    }
}

/// File listings prepend, so new uploads show first. The upload timestamp
/// is assigned here, not taken from the caller.
pub struct FileService {
    store: EntityStore<ProjectFile>,
    latency: LatencyProfile,
}

impl FileService {
    pub fn new(seed: Vec<ProjectFile>, latency: LatencyProfile) -> Self {
        Self {
            store: EntityStore::new(seed),
            latency,
        }
    }

    pub async fn get_all(&self) -> Vec<ProjectFile> {
        sleep(self.latency.get_all).await;
        self.store.all().await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<ProjectFile> {
        sleep(self.latency.get_by_id).await;
        self.store.find(id).await
    }

    pub async fn create(&self, draft: FileDraft) -> ProjectFile {
        sleep(self.latency.create).await;
        let file = ProjectFile {
            id: Ulid::new().to_string(),
            name: draft.name,
            size: draft.size,
            url: draft.url,
            project_id: draft.project_id,
            uploaded_by: draft.uploaded_by,
            uploaded_at: Utc::now().to_rfc3339(),
        };
        tracing::debug!(id = %file.id, size = file.size, "recorded upload");
        self.store.insert(file).await
    }

    pub async fn update(&self, id: &str, patch: FilePatch) -> ServiceResult<ProjectFile> {
        sleep(self.latency.update).await;
        let file = self.store.modify(id, |file| patch.apply(file)).await?;
        tracing::debug!(id = %file.id, "updated file entry");
        Ok(file)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        sleep(self.latency.delete).await;
        self.store.remove(id).await?;
        tracing::debug!(id, "deleted file entry");
        Ok(())
    }
}
