//! Contract tests for the in-memory task store.
//!
//! These exercise the store port directly, without the services in front,
//! so the owner-scoping and error behaviour of the adapter itself is
//! pinned down.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use taskboard::auth::domain::AuthenticatedUser;
use taskboard::task::adapters::memory::InMemoryTaskStore;
use taskboard::task::domain::{Task, TaskFilter, TaskStatus};
use taskboard::task::ports::{TaskStore, TaskStoreError};

use super::helpers::{alice, bob, seed_task, store};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_the_stored_task(store: Arc<InMemoryTaskStore>, alice: AuthenticatedUser) {
    let task = Task::create("Fix parser", "Tokenizer fails", alice.id, &DefaultClock);

    let stored = store
        .create(task.clone())
        .await
        .expect("creation should succeed");

    assert_eq!(stored, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_identifiers(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let task = Task::create("Fix parser", "Tokenizer fails", alice.id, &DefaultClock);
    store
        .create(task.clone())
        .await
        .expect("first creation should succeed");

    let result = store.create(task.clone()).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::DuplicateTask(id)) if id == task.id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_for_owner_scopes_by_owner(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
    bob: AuthenticatedUser,
) {
    let task = seed_task(&store, alice.id, "Fix parser", "Tokenizer fails").await;

    let for_owner = store
        .find_for_owner(task.id, alice.id)
        .await
        .expect("lookup should succeed");
    let for_other = store
        .find_for_owner(task.id, bob.id)
        .await
        .expect("lookup should succeed");

    assert_eq!(for_owner, Some(task));
    assert_eq!(for_other, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_for_owner_preserves_insertion_order(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let first = seed_task(&store, alice.id, "First", "First description").await;
    let second = seed_task(&store, alice.id, "Second", "Second description").await;
    let third = seed_task(&store, alice.id, "Third", "Third description").await;

    let tasks = store
        .list_for_owner(alice.id, &TaskFilter::new())
        .await
        .expect("listing should succeed");

    assert_eq!(tasks, vec![first, second, third]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_for_owner_applies_the_filter(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let parser_task = seed_task(&store, alice.id, "Fix parser", "Tokenizer fails").await;
    seed_task(&store, alice.id, "Write docs", "Document the port").await;

    let tasks = store
        .list_for_owner(alice.id, &TaskFilter::new().with_search("parser"))
        .await
        .expect("listing should succeed");

    assert_eq!(tasks, vec![parser_task]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_the_stored_record(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let mut task = seed_task(&store, alice.id, "Fix parser", "Tokenizer fails").await;
    task.status = TaskStatus::InProgress;

    let updated = store.update(&task).await.expect("update should succeed");
    let fetched = store
        .find_for_owner(task.id, alice.id)
        .await
        .expect("lookup should succeed");

    assert_eq!(updated, task);
    assert_eq!(fetched, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_task_reports_not_found(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let task = Task::create("Never stored", "No record exists", alice.id, &DefaultClock);

    let result = store.update(&task).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::NotFound(id)) if id == task.id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_for_owner_reports_whether_a_row_was_removed(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
    bob: AuthenticatedUser,
) {
    let task = seed_task(&store, alice.id, "Fix parser", "Tokenizer fails").await;

    let foreign_delete = store
        .delete_for_owner(task.id, bob.id)
        .await
        .expect("deletion should succeed");
    assert!(!foreign_delete);

    let owner_delete = store
        .delete_for_owner(task.id, alice.id)
        .await
        .expect("deletion should succeed");
    assert!(owner_delete);

    let repeat_delete = store
        .delete_for_owner(task.id, alice.id)
        .await
        .expect("deletion should succeed");
    assert!(!repeat_delete);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_keeps_the_owner_index_consistent(
    store: Arc<InMemoryTaskStore>,
    alice: AuthenticatedUser,
) {
    let first = seed_task(&store, alice.id, "First", "First description").await;
    let second = seed_task(&store, alice.id, "Second", "Second description").await;

    store
        .delete_for_owner(first.id, alice.id)
        .await
        .expect("deletion should succeed");

    let tasks = store
        .list_for_owner(alice.id, &TaskFilter::new())
        .await
        .expect("listing should succeed");
    assert_eq!(tasks, vec![second]);
}
