//! In-memory integration tests for task command flows.

use std::sync::Arc;

use rstest::rstest;
use taskboard::auth::domain::AuthenticatedUser;
use taskboard::task::adapters::memory::InMemoryTaskStore;
use taskboard::task::domain::{TaskDomainError, TaskFilter, TaskStatus};
use taskboard::task::services::{
    CreateTaskRequest, EditTaskRequest, TaskServiceError, UpdateTaskStatusRequest,
};
use taskboard::task::validation::TaskValidationError;

use super::helpers::{alice, command_service, query_service, store};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_task_can_be_created_and_completed(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let commands = command_service(&store);
    let queries = query_service(&store);

    let created = commands
        .create_task(CreateTaskRequest::new("Test title", "Test desc"), &alice)
        .await
        .expect("creation should succeed");
    assert_eq!(created.status, TaskStatus::Open);

    let completed = commands
        .update_status(UpdateTaskStatusRequest::new(created.id, "DONE"), &alice)
        .await
        .expect("completion should succeed");
    assert_eq!(completed.status, TaskStatus::Done);

    let fetched = queries
        .get_task_by_id(created.id, &alice)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.status, TaskStatus::Done);
    assert_eq!(fetched.title, "Test title");
    assert_eq!(fetched.description, "Test desc");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_completed_task_cannot_be_reopened(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let commands = command_service(&store);

    let created = commands
        .create_task(CreateTaskRequest::new("Test title", "Test desc"), &alice)
        .await
        .expect("creation should succeed");
    commands
        .update_status(UpdateTaskStatusRequest::new(created.id, "DONE"), &alice)
        .await
        .expect("completion should succeed");

    let result = commands
        .update_status(UpdateTaskStatusRequest::new(created.id, "OPEN"), &alice)
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(
            TaskDomainError::InvalidStatusTransition {
                from: TaskStatus::Done,
                to: TaskStatus::Open,
                ..
            }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_failures_leave_the_store_untouched(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let commands = command_service(&store);
    let queries = query_service(&store);

    let result = commands
        .create_task(CreateTaskRequest::new("  ", "Test desc"), &alice)
        .await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskValidationError::EmptyTitle))
    ));

    let tasks = queries
        .get_tasks(&TaskFilter::new(), &alice)
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_and_deletions_flow_through_the_store(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let commands = command_service(&store);
    let queries = query_service(&store);

    let created = commands
        .create_task(CreateTaskRequest::new("Test title", "Test desc"), &alice)
        .await
        .expect("creation should succeed");

    let edited = commands
        .edit_task(
            EditTaskRequest::new(created.id)
                .with_title("Revised title")
                .with_description("Revised desc"),
            &alice,
        )
        .await
        .expect("edit should succeed");
    assert_eq!(edited.title, "Revised title");
    assert_eq!(edited.description, "Revised desc");

    commands
        .delete_task(created.id, &alice)
        .await
        .expect("deletion should succeed");

    let result = queries.get_task_by_id(created.id, &alice).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(id)) if id == created.id));
}
