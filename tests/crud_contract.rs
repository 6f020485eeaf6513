//! The service-call contract every entity kind honors: create assigns id and
//! defaults, update merges, delete removes exactly once, and missing ids
//! always surface as NotFound.

use campfire_hub::{
    FileDraft, LatencyProfile, MessageDraft, Project, ProjectDraft, ProjectPatch, ProjectService,
    ProjectStatus, ServiceError, Services, TodoDraft, TodoPatch,
};

fn services() -> Services {
    Services::empty_with(LatencyProfile::zero())
}

fn demo_project() -> Project {
    Project {
        id: "p1".to_string(),
        name: "Demo".to_string(),
        description: String::new(),
        status: ProjectStatus::Active,
        member_ids: vec!["user1".to_string()],
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

fn docs_draft() -> ProjectDraft {
    ProjectDraft {
        name: "Docs".to_string(),
        description: String::new(),
        status: ProjectStatus::Active,
        member_ids: vec!["user1".to_string()],
    }
}

#[tokio::test]
async fn missing_ids_surface_as_not_found_per_entity() {
    let services = services();
    assert_eq!(
        services.projects.get_by_id("nope").await.unwrap_err(),
        ServiceError::ProjectNotFound("nope".to_string())
    );
    assert_eq!(
        services.todos.get_by_id("nope").await.unwrap_err(),
        ServiceError::TodoNotFound("nope".to_string())
    );
    assert_eq!(
        services.messages.get_by_id("nope").await.unwrap_err(),
        ServiceError::MessageNotFound("nope".to_string())
    );
    assert_eq!(
        services.files.get_by_id("nope").await.unwrap_err(),
        ServiceError::FileNotFound("nope".to_string())
    );
}

#[tokio::test]
async fn project_create_assigns_fresh_id_and_prepends() {
    let projects = ProjectService::new(vec![demo_project()], LatencyProfile::zero());

    let created = projects.create(docs_draft()).await;
    assert!(!created.id.is_empty());
    assert_ne!(created.id, "p1");
    assert!(!created.created_at.is_empty());

    let all = projects.get_all().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Docs");
    assert_eq!(all[1].id, "p1");

    let round_tripped = projects.get_by_id(&created.id).await.unwrap();
    assert_eq!(round_tripped, created);
}

#[tokio::test]
async fn todo_create_applies_defaults_and_appends() {
    let services = services();

    let first = services
        .todos
        .create(TodoDraft {
            title: "Write spec".to_string(),
            project_id: "proj-1".to_string(),
            assignee_id: Some(String::new()),
            due_date: None,
            list_id: "default".to_string(),
        })
        .await;
    assert!(!first.completed);
    assert_eq!(first.order, 0);

    let second = services
        .todos
        .create(TodoDraft {
            title: "Review spec".to_string(),
            project_id: "proj-1".to_string(),
            assignee_id: None,
            due_date: None,
            list_id: "default".to_string(),
        })
        .await;
    assert_eq!(second.order, 1);

    let all = services.todos.get_all().await;
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[tokio::test]
async fn message_create_prepends_and_starts_without_comments() {
    let services = services();

    let first = services
        .messages
        .create(MessageDraft {
            title: "Kickoff".to_string(),
            content: "Welcome aboard".to_string(),
            project_id: "proj-1".to_string(),
            author_id: "user1".to_string(),
        })
        .await;
    assert!(first.comments.is_empty());
    assert!(!first.created_at.is_empty());

    let second = services
        .messages
        .create(MessageDraft {
            title: "Follow-up".to_string(),
            content: "Read the kickoff notes".to_string(),
            project_id: "proj-1".to_string(),
            author_id: "user1".to_string(),
        })
        .await;

    let all = services.messages.get_all().await;
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

#[tokio::test]
async fn file_create_stamps_upload_time_and_prepends() {
    let services = services();

    let first = services
        .files
        .create(FileDraft {
            name: "notes.md".to_string(),
            size: 2048,
            url: "/files/proj-1/notes.md".to_string(),
            project_id: "proj-1".to_string(),
            uploaded_by: "user1".to_string(),
        })
        .await;
    assert!(!first.uploaded_at.is_empty());

    let second = services
        .files
        .create(FileDraft {
            name: "deck.pdf".to_string(),
            size: 1_048_576,
            url: "/files/proj-1/deck.pdf".to_string(),
            project_id: "proj-1".to_string(),
            uploaded_by: "user2".to_string(),
        })
        .await;

    let all = services.files.get_all().await;
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

#[tokio::test]
async fn update_merges_only_patched_fields() {
    let services = services();
    let created = services
        .todos
        .create(TodoDraft {
            title: "Initial title".to_string(),
            project_id: "proj-1".to_string(),
            assignee_id: Some("user1".to_string()),
            due_date: Some("2024-03-15".to_string()),
            list_id: "default".to_string(),
        })
        .await;

    let updated = services
        .todos
        .update(
            &created.id,
            TodoPatch {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, "Initial title");
    assert_eq!(updated.assignee_id.as_deref(), Some("user1"));
    assert_eq!(updated.due_date.as_deref(), Some("2024-03-15"));

    let stored = services.todos.get_by_id(&created.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn failed_update_leaves_the_store_untouched() {
    let projects = ProjectService::new(vec![demo_project()], LatencyProfile::zero());
    let before = projects.get_all().await;

    let err = projects
        .update(
            "nonexistent-id",
            ProjectPatch {
                status: Some(ProjectStatus::Archived),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::ProjectNotFound("nonexistent-id".to_string())
    );

    let after = projects.get_all().await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let services = services();
    let kept = services.projects.create(docs_draft()).await;
    let removed = services.projects.create(docs_draft()).await;

    services.projects.delete(&removed.id).await.unwrap();

    let all = services.projects.get_all().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kept.id);
    assert_eq!(
        services.projects.get_by_id(&removed.id).await.unwrap_err(),
        ServiceError::ProjectNotFound(removed.id.clone())
    );
}

#[tokio::test]
async fn second_delete_fails_instead_of_silently_succeeding() {
    let services = services();
    let created = services.projects.create(docs_draft()).await;

    services.projects.delete(&created.id).await.unwrap();
    assert_eq!(
        services.projects.delete(&created.id).await.unwrap_err(),
        ServiceError::ProjectNotFound(created.id.clone())
    );
}

#[tokio::test]
async fn dangling_references_are_accepted_uncritically() {
    let services = services();
    let orphan = services
        .todos
        .create(TodoDraft {
            title: "Point at nothing".to_string(),
            project_id: "ghost-project".to_string(),
            assignee_id: None,
            due_date: None,
            list_id: "default".to_string(),
        })
        .await;
    assert_eq!(orphan.project_id, "ghost-project");

    // Deleting a project never cascades; children keep their references.
    let project = services.projects.create(docs_draft()).await;
    let child = services
        .todos
        .create(TodoDraft {
            title: "Child task".to_string(),
            project_id: project.id.clone(),
            assignee_id: None,
            due_date: None,
            list_id: "default".to_string(),
        })
        .await;
    services.projects.delete(&project.id).await.unwrap();
    let survivor = services.todos.get_by_id(&child.id).await.unwrap();
    assert_eq!(survivor.project_id, project.id);
}

#[tokio::test]
async fn order_is_not_renumbered_on_delete() {
    let services = services();
    let draft = |title: &str| TodoDraft {
        title: title.to_string(),
        project_id: "proj-1".to_string(),
        assignee_id: None,
        due_date: None,
        list_id: "default".to_string(),
    };

    let a = services.todos.create(draft("a")).await;
    let b = services.todos.create(draft("b")).await;
    let c = services.todos.create(draft("c")).await;
    assert_eq!((a.order, b.order, c.order), (0, 1, 2));

    services.todos.delete(&a.id).await.unwrap();
    let remaining: Vec<usize> = services
        .todos
        .get_all()
        .await
        .into_iter()
        .map(|t| t.order)
        .collect();
    assert_eq!(remaining, vec![1, 2]);

    // Length shrank, so the next creation reuses an existing index.
    let d = services.todos.create(draft("d")).await;
    assert_eq!(d.order, 2);
}
