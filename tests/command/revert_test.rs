//! Tests single-conversation revert through the manager: restore, delete, artifacts and cleanup gating.

use super::*;

#[tokio::test]
/// Tests a modified file is restored byte for byte and the snapshot is consumed.
async fn test_revert_restores_modified_file() {
    let project = TestProject::new().unwrap();
    project.write("src/lib.rs", b"A").unwrap();
    let snapshot = project.snapshot("conv-1").unwrap();
    snapshot.modified_file("src/lib.rs", b"A").unwrap();
    project.write("src/lib.rs", b"B").unwrap();

    let result = manager(&project).revert_one("conv-1").await.unwrap();

    assert!(result.success, "{:?}", result.errors);
    assert_file(&project, "src/lib.rs", b"A");
    assert!(!dir_exists(snapshot.dir()));
}

#[tokio::test]
/// Tests created files are deleted and an already-missing created file is not an error.
async fn test_revert_deletes_created_files() {
    let project = TestProject::new().unwrap();
    project.write("src/generated.rs", b"fn g() {}").unwrap();
    let snapshot = project.snapshot("conv-1").unwrap();
    snapshot.new_file("src/generated.rs").unwrap();
    snapshot.new_file("src/removed_by_user.rs").unwrap();

    let result = manager(&project).revert_one("conv-1").await.unwrap();

    assert!(result.success);
    assert!(result.errors.is_empty());
    assert_eq!(result.deleted.len(), 1);
    assert!(!project.exists("src/generated.rs"));
}

#[tokio::test]
/// Tests an unwritable target leaves the snapshot on disk for a retry.
async fn test_revert_failure_keeps_snapshot() {
    let project = TestProject::new().unwrap();
    project.write("config", b"plain file, not a directory").unwrap();
    project.write("readme.md", b"edited").unwrap();
    let snapshot = project.snapshot("conv-1").unwrap();
    snapshot.modified_file("config/settings.toml", b"x = 1").unwrap();
    snapshot.modified_file("readme.md", b"original").unwrap();

    let manager = manager(&project);
    let result = manager.revert_one("conv-1").await.unwrap();

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(dir_exists(snapshot.dir()));
    assert_file(&project, "readme.md", b"original");
    // the snapshot is still listed, so the revert can be retried
    assert_eq!(manager.list_snapshots().snapshots.len(), 1);
}

#[tokio::test]
/// Tests an external artifact edit is undone in the content store.
async fn test_revert_restores_external_artifact() {
    let project = TestProject::new().unwrap();
    let store = Arc::new(MemoryContentStore::new());
    store
        .insert("script-1", vec![ArtifactFile::new("X", "server_js", "new")])
        .await;
    let snapshot = project.snapshot("conv-1").unwrap();
    snapshot
        .artifact("X", "script-1", "server_js", false, "old")
        .unwrap();

    let result = manager(&project)
        .with_store(store.clone())
        .revert_one("conv-1")
        .await
        .unwrap();

    assert!(result.success, "{:?}", result.errors);
    assert_eq!(
        store.files("script-1").await,
        vec![ArtifactFile::new("X", "server_js", "old")]
    );
}

#[tokio::test]
/// Tests artifacts revert through the local JSON content store.
async fn test_revert_with_local_content_store() {
    let project = TestProject::new().unwrap();
    let store = LocalContentStore::new(project.root().join(".rewind").join("artifacts"));
    store
        .set_content(
            "script-1",
            vec![
                ArtifactFile::new("Code", "server_js", "edited"),
                ArtifactFile::new("Helper", "server_js", "added by conversation"),
            ],
        )
        .await
        .unwrap();
    let snapshot = project.snapshot("conv-1").unwrap();
    snapshot
        .artifact("Code", "script-1", "server_js", false, "original")
        .unwrap();
    snapshot
        .artifact("Helper", "script-1", "server_js", true, "")
        .unwrap();

    let result = manager(&project)
        .with_store(Arc::new(store.clone()))
        .revert_one("conv-1")
        .await
        .unwrap();

    assert!(result.success, "{:?}", result.errors);
    assert_eq!(
        store.get_content("script-1").await.unwrap(),
        vec![ArtifactFile::new("Code", "server_js", "original")]
    );
}

#[tokio::test]
/// Tests a snapshot found only in the shared root is reverted against the project.
async fn test_revert_from_shared_root() {
    let project = TestProject::new().unwrap();
    project.write("a.txt", b"edited").unwrap();
    let snapshot = SnapshotFixture::create(&project.shared_root(), "conv-1").unwrap();
    snapshot.modified_file("a.txt", b"before").unwrap();

    let manager = BackupManager::new(
        project.root(),
        vec![project.backup_root(), project.shared_root()],
    );
    let result = manager.revert_one("conv-1").await.unwrap();

    assert!(result.success);
    assert_file(&project, "a.txt", b"before");
}
