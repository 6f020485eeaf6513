use thiserror::Error;

pub type ServiceResult<T> = core::result::Result<T, ServiceError>;

/// The only failure the data layer produces: a lookup by id that matched
/// nothing. Everything else (dangling references, empty strings) is
/// accepted as-is.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    #[error("Todo not found: {0}")]
    TodoNotFound(String),
    #[error("Message not found: {0}")]
    MessageNotFound(String),
    #[error("File not found: {0}")]
    FileNotFound(String),
}
