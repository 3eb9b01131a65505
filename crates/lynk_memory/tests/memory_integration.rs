//! Integration tests for MemoryService over SQLite.
//!
//! Uses tempfile::TempDir for isolated databases.

use lynk_memory::{EntryType, MemoryRepository, MemoryService, SqliteRepository};
use std::sync::Arc;

async fn setup_service(dir: &tempfile::TempDir) -> (Arc<MemoryService>, SqliteRepository) {
    let db_path = dir.path().join("memory.db");
    let repo = SqliteRepository::new(&db_path).await.unwrap();
    let service = Arc::new(MemoryService::new(Arc::new(repo.clone())));
    (service, repo)
}

/// Test 1: Concurrent first sightings of one value create exactly one entry
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creation_yields_single_entry() {
    let dir = tempfile::TempDir::new().unwrap();
    let (service, repo) = setup_service(&dir).await;

    let variants = ["Machine Learning", "machine learning", "MACHINE-LEARNING", "machine_learning"];
    let mut handles = Vec::new();
    for i in 0..16 {
        let service = service.clone();
        let raw = variants[i % variants.len()];
        handles.push(tokio::spawn(async move { service.reuse_or_create(raw).await }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "machine-learning");
    }

    assert_eq!(repo.count_by_type(EntryType::Tag).await.unwrap(), 1);
    let entry = repo
        .find_by_value(EntryType::Tag, "machine-learning")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.usage_count, 16);
    assert_eq!(entry.aliases.len(), variants.len());
}

/// Test 2: Entries survive reopening the database
#[tokio::test]
async fn test_entries_persist_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let (service, _repo) = setup_service(&dir).await;
        service.reuse_or_create("Rust").await.unwrap();
        service.reuse_or_create_category("Development").await.unwrap();
    }

    let (service, repo) = setup_service(&dir).await;
    assert_eq!(service.reuse_or_create("rust").await.unwrap(), "rust");
    assert_eq!(repo.count_by_type(EntryType::Tag).await.unwrap(), 1);
    assert_eq!(repo.count_by_type(EntryType::Category).await.unwrap(), 1);

    let entry = repo.find_by_value(EntryType::Tag, "rust").await.unwrap().unwrap();
    assert_eq!(entry.usage_count, 2);
    assert!(entry.last_used_at >= entry.created_at);
}

/// Test 3: Count grows by one per distinct canonical value
#[tokio::test]
async fn test_count_tracks_distinct_values() {
    let dir = tempfile::TempDir::new().unwrap();
    let (service, _repo) = setup_service(&dir).await;

    let before = service.count(EntryType::Tag).await.unwrap();
    service.reuse_or_create("UI/UX").await.unwrap();
    service.reuse_or_create("ui ux").await.unwrap();
    assert_eq!(service.count(EntryType::Tag).await.unwrap(), before + 1);

    service.reuse_or_create("design").await.unwrap();
    assert_eq!(service.count(EntryType::Tag).await.unwrap(), before + 2);
}

/// Test 4: Two stores sharing one file (as two processes would) count every use
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_file_counts_every_use() {
    let dir = tempfile::TempDir::new().unwrap();
    let (first, repo) = setup_service(&dir).await;
    let (second, _) = setup_service(&dir).await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let service = if i % 2 == 0 { first.clone() } else { second.clone() };
        handles.push(tokio::spawn(async move { service.reuse_or_create("Web Dev").await }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "web-dev");
    }

    assert_eq!(repo.count_by_type(EntryType::Tag).await.unwrap(), 1);
    let entry = repo.find_by_value(EntryType::Tag, "web-dev").await.unwrap().unwrap();
    assert_eq!(entry.usage_count, 10);
}
