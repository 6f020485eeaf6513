//! Bundled seed data. Parsed once per service construction; a parse failure
//! here is a packaging bug, not a runtime condition.

use serde::de::DeserializeOwned;

use crate::types::{Message, Project, ProjectFile, Todo};

pub fn projects() -> Vec<Project> {
    parse(include_str!("../fixtures/projects.json"))
}

pub fn todos() -> Vec<Todo> {
    parse(include_str!("../fixtures/todos.json"))
}

pub fn messages() -> Vec<Message> {
    parse(include_str!("../fixtures/messages.json"))
}

pub fn files() -> Vec<ProjectFile> {
    parse(include_str!("../fixtures/files.json"))
}

fn parse<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).expect("bundled fixture is valid JSON")
}
