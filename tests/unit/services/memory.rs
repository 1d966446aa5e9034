use super::*;
use crate::models::{EntryKind, EntryPatch, NewEntry, NewProject};

fn new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: None,
    }
}

fn new_file(project_id: i64, path: &str) -> NewEntry {
    NewEntry {
        project_id,
        name: path.rsplit('/').next().unwrap_or("").to_string(),
        path: path.to_string(),
        content: String::new(),
        kind: EntryKind::File,
        language: None,
    }
}

#[tokio::test]
async fn ids_are_monotonic_from_injected_start() {
    let store = MemStore::with_start_ids(10, 100);
    let p1 = store.create_project(new_project("one")).await.unwrap();
    let p2 = store.create_project(new_project("two")).await.unwrap();
    assert_eq!((p1.id, p2.id), (10, 11));

    let f1 = store.create_entry(new_file(p1.id, "/a.js")).await.unwrap();
    let f2 = store.create_entry(new_file(p1.id, "/b.js")).await.unwrap();
    assert_eq!((f1.id, f2.id), (100, 101));
}

#[tokio::test]
async fn isolated_stores_do_not_share_state() {
    let a = MemStore::new();
    let b = MemStore::new();
    a.create_project(new_project("only-in-a")).await.unwrap();
    assert!(b.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_path_within_project_conflicts() {
    let store = MemStore::new();
    let project = store.create_project(new_project("p")).await.unwrap();
    store
        .create_entry(new_file(project.id, "/a.js"))
        .await
        .unwrap();
    let err = store
        .create_entry(new_file(project.id, "/a.js"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    // 不同项目可以有相同 path。
    let other = store.create_project(new_project("q")).await.unwrap();
    assert!(store.create_entry(new_file(other.id, "/a.js")).await.is_ok());
}

#[tokio::test]
async fn entry_for_unknown_project_is_not_found() {
    let store = MemStore::new();
    let err = store.create_entry(new_file(42, "/a.js")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn delete_project_cascades_entries() {
    let store = MemStore::new();
    let project = store.create_project(new_project("p")).await.unwrap();
    let entry = store
        .create_entry(new_file(project.id, "/a.js"))
        .await
        .unwrap();

    store.delete_project(project.id).await.unwrap();
    assert!(matches!(
        store.get_entry(entry.id).await,
        Err(StoreError::NotFound)
    ));
    assert!(store.list_entries(project.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_entry_patches_content_and_bumps_updated_at() {
    let store = MemStore::new();
    let project = store.create_project(new_project("p")).await.unwrap();
    let entry = store
        .create_entry(new_file(project.id, "/a.js"))
        .await
        .unwrap();

    let updated = store
        .update_entry(entry.id, EntryPatch::content("x = 1".to_string()))
        .await
        .unwrap();
    assert_eq!(updated.content(), Some("x = 1"));
    assert!(updated.updated_at >= entry.updated_at);
}

#[tokio::test]
async fn rename_keeps_path_name_invariant() {
    let store = MemStore::new();
    let project = store.create_project(new_project("p")).await.unwrap();
    let entry = store
        .create_entry(new_file(project.id, "/src/a.js"))
        .await
        .unwrap();

    let patch = EntryPatch {
        name: Some("b.js".to_string()),
        ..EntryPatch::default()
    };
    let renamed = store.update_entry(entry.id, patch).await.unwrap();
    assert_eq!(renamed.name, "b.js");
    assert_eq!(renamed.path, "/src/b.js");
}

#[tokio::test]
async fn language_defaults_from_extension() {
    let store = MemStore::new();
    let project = store.create_project(new_project("p")).await.unwrap();
    let entry = store
        .create_entry(new_file(project.id, "/main.rs"))
        .await
        .unwrap();
    assert_eq!(entry.language(), Some("rust"));

    let mut explicit = new_file(project.id, "/style.css");
    explicit.language = Some("scss".to_string());
    let entry = store.create_entry(explicit).await.unwrap();
    assert_eq!(entry.language(), Some("scss"));
}

#[tokio::test]
async fn lookup_by_path_matches_project_scope() {
    let store = MemStore::new();
    let project = store.create_project(new_project("p")).await.unwrap();
    store
        .create_entry(new_file(project.id, "/a.js"))
        .await
        .unwrap();

    assert!(store.get_entry_by_path(project.id, "/a.js").await.is_ok());
    assert!(matches!(
        store.get_entry_by_path(project.id, "/missing.js").await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store.get_entry_by_path(project.id + 1, "/a.js").await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn seed_demo_populates_empty_store_once() {
    let store = MemStore::new();
    let seeded = store.seed_demo().await.unwrap();
    assert!(seeded.is_some());

    let project_id = seeded.unwrap();
    let entries = store.list_entries(project_id).await.unwrap();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|e| e.is_file()));

    // 第二次播种是 no-op。
    assert!(store.seed_demo().await.unwrap().is_none());
    assert_eq!(store.list_projects().await.unwrap().len(), 1);
}
