//! One service per entity kind, plus the registry that wires them together.
//!
//! Each service owns its sequence for the lifetime of the process; resetting
//! state means constructing a fresh registry. Services never reach into each
//! other, and deleting a record never cascades.

mod file;
mod message;
mod project;
mod todo;

pub use file::{FileDraft, FilePatch, FileService};
pub use message::{MessageDraft, MessagePatch, MessageService};
pub use project::{ProjectDraft, ProjectPatch, ProjectService};
pub use todo::{TodoDraft, TodoPatch, TodoService};

use crate::fixtures;
use crate::latency::LatencyProfile;

/// The full set of entity services an embedding application works with.
/// Built once at startup and handed around by reference.
pub struct Services {
    pub projects: ProjectService,
    pub todos: TodoService,
    pub messages: MessageService,
    pub files: FileService,
}

impl Services {
    /// Bundled demo data behind realistic latency, the configuration the
    /// dashboard boots with.
    pub fn seeded() -> Self {
        Self::seeded_with(LatencyProfile::default())
    }

    pub fn seeded_with(latency: LatencyProfile) -> Self {
        Self {
            projects: ProjectService::new(fixtures::projects(), latency),
            todos: TodoService::new(fixtures::todos(), latency),
            messages: MessageService::new(fixtures::messages(), latency),
            files: FileService::new(fixtures::files(), latency),
        }
    }

    pub fn empty() -> Self {
        Self::empty_with(LatencyProfile::default())
    }

    pub fn empty_with(latency: LatencyProfile) -> Self {
        Self {
            projects: ProjectService::new(Vec::new(), latency),
            todos: TodoService::new(Vec::new(), latency),
            messages: MessageService::new(Vec::new(), latency),
            files: FileService::new(Vec::new(), latency),
        }
    }
}
