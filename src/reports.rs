//! Read-side projections the dashboard pages derive from the services.
//!
//! Nothing here mutates a store. Each entry point mirrors one page's data
//! loading: a concurrent fetch across services followed by plain filtering
//! and grouping over the returned copies.

use chrono::{Days, NaiveDate};

use crate::error::ServiceResult;
use crate::services::Services;
use crate::types::{Message, Project, ProjectFile, ProjectStatus, Todo};

/// Group label used when a todo's project id matches no known project.
/// Dangling references are legal, so the pages need a placeholder.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

const DASHBOARD_PROJECT_LIMIT: usize = 4;
const DASHBOARD_TODO_LIMIT: usize = 5;

/// Data behind the home dashboard: the first few projects and todos, fetched
/// concurrently.
#[derive(Clone, Debug)]
pub struct DashboardSnapshot {
    pub projects: Vec<Project>,
    pub recent_todos: Vec<Todo>,
    /// Total number of projects, before the display cutoff.
    pub project_count: usize,
}

pub async fn dashboard(services: &Services) -> DashboardSnapshot {
    let (projects, todos) = tokio::join!(services.projects.get_all(), services.todos.get_all());
    let project_count = projects.len();
    DashboardSnapshot {
        projects: projects
            .into_iter()
            .take(DASHBOARD_PROJECT_LIMIT)
            .collect(),
        recent_todos: todos.into_iter().take(DASHBOARD_TODO_LIMIT).collect(),
        project_count,
    }
}

/// Everything the project detail page shows for one project, fetched in one
/// round. Fails with NotFound when the project itself is missing; child
/// records are sliced by `project_id` from full listings, the way the page
/// components consume them.
#[derive(Clone, Debug)]
pub struct ProjectBoard {
    pub project: Project,
    pub todos: Vec<Todo>,
    pub messages: Vec<Message>,
    pub files: Vec<ProjectFile>,
}

pub async fn project_board(services: &Services, project_id: &str) -> ServiceResult<ProjectBoard> {
    let (project, todos, messages, files) = tokio::join!(
        services.projects.get_by_id(project_id),
        services.todos.get_all(),
        services.messages.get_all(),
        services.files.get_all(),
    );
    Ok(ProjectBoard {
        project: project?,
        todos: todos
            .into_iter()
            .filter(|todo| todo.project_id == project_id)
            .collect(),
        messages: messages
            .into_iter()
            .filter(|message| message.project_id == project_id)
            .collect(),
        files: files
            .into_iter()
            .filter(|file| file.project_id == project_id)
            .collect(),
    })
}

/// Due-date slice of the assignments page. `All` keeps completed todos;
/// every other filter drops them along with undated ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueFilter {
    All,
    Overdue,
    Today,
    Upcoming,
}

/// One member's todos plus the project context needed to label them.
#[derive(Clone, Debug)]
pub struct AssignmentBoard {
    pub todos: Vec<Todo>,
    projects: Vec<Project>,
}

pub async fn assignments(services: &Services, assignee_id: &str) -> AssignmentBoard {
    let (todos, projects) = tokio::join!(services.todos.get_all(), services.projects.get_all());
    AssignmentBoard {
        todos: todos
            .into_iter()
            .filter(|todo| todo.assignee_id.as_deref() == Some(assignee_id))
            .collect(),
        projects,
    }
}

impl AssignmentBoard {
    /// Applies a due-date filter relative to `today` (the caller's clock).
    pub fn filtered(&self, filter: DueFilter, today: NaiveDate) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| matches_filter(todo, filter, today))
            .cloned()
            .collect()
    }

    /// Groups todos by project name in first-seen order, labelling dangling
    /// project ids [`UNKNOWN_PROJECT`].
    pub fn grouped_by_project(&self, todos: &[Todo]) -> Vec<(String, Vec<Todo>)> {
        let mut groups: Vec<(String, Vec<Todo>)> = Vec::new();
        for todo in todos {
            let name = self.project_name(&todo.project_id);
            match groups.iter_mut().find(|(label, _)| *label == name) {
                Some((_, entries)) => entries.push(todo.clone()),
                None => groups.push((name, vec![todo.clone()])),
            }
        }
        groups
    }

    pub fn project_name(&self, project_id: &str) -> String {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
            .map(|project| project.name.clone())
            .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
    }
}

fn matches_filter(todo: &Todo, filter: DueFilter, today: NaiveDate) -> bool {
    if filter == DueFilter::All {
        return true;
    }
    if todo.completed {
        return false;
    }
    let Some(due) = due_date(todo) else {
        return false;
    };
    match filter {
        DueFilter::All => true,
        DueFilter::Overdue => due < today,
        DueFilter::Today => due == today,
        DueFilter::Upcoming => {
            due > today
                && today
                    .checked_add_days(Days::new(7))
                    .is_some_and(|horizon| due <= horizon)
        }
    }
}

fn due_date(todo: &Todo) -> Option<NaiveDate> {
    // Unparseable dates fall out of every bucket.
    todo.due_date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// How many projects each member appears in, in first-appearance order. The
/// team page derives its roster stats from this.
pub fn membership_counts(projects: &[Project]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for project in projects {
        for member in &project.member_ids {
            match counts.iter_mut().find(|(id, _)| id == member) {
                Some((_, n)) => *n += 1,
                None => counts.push((member.clone(), 1)),
            }
        }
    }
    counts
}

/// Projects still shown on live boards.
pub fn active_projects(projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Active)
        .cloned()
        .collect()
}
