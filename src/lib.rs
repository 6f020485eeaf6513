//! In-memory data services for the Campfire Hub collaboration dashboard.
//!
//! Four entity kinds (projects, todos, messages, files), each owned by one
//! service that wraps a seeded in-memory sequence behind simulated network
//! latency. Nothing persists past the process; resetting state means
//! constructing a fresh [`Services`] registry. See `reports` for the
//! read-side projections the dashboard pages compute.

pub mod error;
pub mod fixtures;
pub mod latency;
pub mod logging;
pub mod reports;
pub mod services;
mod store;
pub mod types;

pub use error::{ServiceError, ServiceResult};
pub use latency::LatencyProfile;
pub use services::{
    FileDraft, FilePatch, FileService, MessageDraft, MessagePatch, MessageService, ProjectDraft,
    ProjectPatch, ProjectService, Services, TodoDraft, TodoPatch, TodoService,
};
pub use types::{Comment, Message, Project, ProjectFile, ProjectStatus, Todo};
