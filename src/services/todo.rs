use tokio::time::sleep;
use ulid::Ulid;

use crate::error::{ServiceError, ServiceResult};
use crate::latency::LatencyProfile;
use crate::store::{EntityStore, InsertAt, Record};
use crate::types::Todo;

impl Record for Todo {
    const INSERT_AT: InsertAt = InsertAt::Back;

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found(id: &str) -> ServiceError {
        ServiceError::TodoNotFound(id.to_string())
    }
}

/// Fields a caller supplies when creating a todo. The service assigns the
/// id, `completed = false` and the creation-order index.
#[derive(Clone, Debug)]
pub struct TodoDraft {
    pub title: String,
    pub project_id: String,
    pub assignee_id: Option<String>,
    pub due_date: Option<String>,
    pub list_id: String,
}

/// Partial update. Nullable fields take a nested `Option`, so
/// `Some(None)` clears the stored value and `None` leaves it alone.
#[derive(Clone, Debug, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub project_id: Option<String>,
    pub assignee_id: Option<Option<String>>,
    pub due_date: Option<Option<String>>,
    pub completed: Option<bool>,
    pub order: Option<usize>,
    pub list_id: Option<String>,
}

impl TodoPatch {
    fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(project_id) = self.project_id {
            todo.project_id = project_id;
        }
        if let Some(assignee_id) = self.assignee_id {
            todo.assignee_id = assignee_id;
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(order) = self.order {
            todo.order = order;
        }
        if let Some(list_id) = self.list_id {
            todo.list_id = list_id;
        }
    }
}

/// Sole authority over the todo sequence. Unlike the feed-style entities,
/// todos append to the back so task lists keep a stable order; `order` is
/// the sequence length at creation time and survives deletes unchanged.
pub struct TodoService {
    store: EntityStore<Todo>,
    latency: LatencyProfile,
}

impl TodoService {
    pub fn new(seed: Vec<Todo>, latency: LatencyProfile) -> Self {
        Self {
            store: EntityStore::new(seed),
            latency,
        }
    }

    pub async fn get_all(&self) -> Vec<Todo> {
        sleep(self.latency.get_all).await;
        self.store.all().await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Todo> {
        sleep(self.latency.get_by_id).await;
        self.store.find(id).await
    }

    pub async fn create(&self, draft: TodoDraft) -> Todo {
        sleep(self.latency.create).await;
        let todo = self
            .store
            .insert_with(|len| Todo {
                id: Ulid::new().to_string(),
                title: draft.title,
                project_id: draft.project_id,
                assignee_id: draft.assignee_id,
                due_date: draft.due_date,
                completed: false,
                order: len,
                list_id: draft.list_id,
            })
            .await;
        tracing::debug!(id = %todo.id, order = todo.order, "created todo");
        todo
    }

    pub async fn update(&self, id: &str, patch: TodoPatch) -> ServiceResult<Todo> {
        sleep(self.latency.update).await;
        let todo = self.store.modify(id, |todo| patch.apply(todo)).await?;
        tracing::debug!(id = %todo.id, "updated todo");
        Ok(todo)
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        sleep(self.latency.delete).await;
        self.store.remove(id).await?;
        tracing::debug!(id, "deleted todo");
        Ok(())
    }
}
