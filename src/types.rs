use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub member_ids: Vec<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub project_id: String,
    pub assignee_id: Option<String>,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub due_date: Option<String>,
    pub completed: bool,
    /// Insertion index at creation time. Never renumbered on delete.
    pub order: usize,
    pub list_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub title: String,
    pub content: String,
    pub project_id: String,
    pub author_id: String,
    pub created_at: String,
    /// Embedded replies. Comments have no identity or service of their own.
    pub comments: Vec<Comment>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author_id: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Synthetic path; nothing is actually uploaded anywhere.
    pub url: String,
    pub project_id: String,
    pub uploaded_by: String,
    pub uploaded_at: String,
}
