use chrono::Utc;
use tokio::time::sleep;
use ulid::Ulid;

use crate::error::{ServiceError, ServiceResult};
use crate::latency::LatencyProfile;
use crate::store::{EntityStore, InsertAt, Record};
use crate::types::{Comment, Message};

impl Record for Message {
    const INSERT_AT: InsertAt = InsertAt::Front;

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::MessageNotFound(id.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct MessageDraft {
    pub title: String,
    pub content: String,
    pub project_id: String,
    pub author_id: String,
}

/// Comments are replaced wholesale; appending a reply means patching the
/// full thread back.
#[derive(Clone, Debug, Default)]
pub struct MessagePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub project_id: Option<String>,
    pub author_id: Option<String>,
    pub comments: Option<Vec<Comment>>,
}

impl MessagePatch {
    fn apply(self, message: &mut Message) {
        if let Some(title) = self.title {
            message.title = title;
        }
        if let Some(content) = self.content {
            message.content = content;
        }
        if let Some(project_id) = self.project_id {
            message.project_id = project_id;
        }
        if let Some(author_id) = self.author_id {
            message.author_id = author_id;
        }
        if let Some(comments) = self.comments {
            message.comments = comments;
        }
    }
}

/// Message boards prepend, so threads read newest-first.
pub struct MessageService {
    store: EntityStore<Message>,
    latency: LatencyProfile,
}

impl MessageService {
    pub fn new(seed: Vec<Message>, latency: LatencyProfile) -> Self {
        Self {
            store: EntityStore::new(seed),
            latency,
        }
    }

    pub async fn get_all(&self) -> Vec<Message> {
        sleep(self.latency.get_all).await;
        self.store.all().await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Message> {
        sleep(self.latency.get_by_id).await;
        self.store.find(id).await
    }

    pub async fn create(&self, draft: MessageDraft) -> Message {
        sleep(self.latency.create).await;
        let message = Message {
            id: Ulid::new().to_string(),
            title: draft.title,
            content: draft.content,
            project_id: draft.project_id,
            author_id: draft.author_id,
            created_at: Utc::now().to_rfc3339(),
            comments: Vec::new(),
        };
        tracing::debug!(id = %message.id, "posted message");
        self.store.insert(message).await
    }

    pub async fn update(&self, id: &str, patch: MessagePatch) -> ServiceResult<Message> {
        sleep(self.latency.update).await;
        let message = self.store.modify(id, |message| patch.apply(message)).await?;
        tracing::debug!(id = %message.id, "updated message");
        Ok(message)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        sleep(self.latency.delete).await;
        self.store.remove(id).await?;
        tracing::debug!(id, "deleted message");
        Ok(())
    }
}
