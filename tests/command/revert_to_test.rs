//! Tests cumulative revert ordering and failure policies on scanned catalogs.

use super::*;

/// Three conversations each editing `f.txt`: s3 (oldest) "orig" -> "A", s2 "A" -> "B", s1 "B" -> "C".
fn three_edits(project: &TestProject) {
    project.write("f.txt", b"orig").unwrap();
    for (id, before, after) in [("s3", "orig", "A"), ("s2", "A", "B"), ("s1", "B", "C")] {
        project
            .snapshot(id)
            .unwrap()
            .modified_file("f.txt", before.as_bytes())
            .unwrap();
        project.write("f.txt", after.as_bytes()).unwrap();
        tick();
    }
}

#[tokio::test]
/// Tests reverting to the oldest conversation recovers the state before it.
async fn test_revert_to_oldest_recovers_original() {
    let project = TestProject::new().unwrap();
    three_edits(&project);
    assert_file(&project, "f.txt", b"C");

    let summary = manager(&project).revert_to("s3").await;

    assert!(summary.success, "{:?}", summary.errors);
    assert_eq!(summary.order, vec!["s1", "s2", "s3"]);
    assert_file(&project, "f.txt", b"orig");
    assert!(manager(&project).list_snapshots().snapshots.is_empty());
}

#[tokio::test]
/// Tests reverting to a middle conversation leaves older snapshots alone.
async fn test_revert_to_middle() {
    let project = TestProject::new().unwrap();
    three_edits(&project);

    let summary = manager(&project).revert_to("s2").await;

    assert!(summary.success);
    assert_eq!(summary.order, vec!["s1", "s2"]);
    assert_file(&project, "f.txt", b"A");
    let remaining: Vec<String> = manager(&project)
        .list_snapshots()
        .snapshots
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(remaining, vec!["s3".to_string()]);
}

#[tokio::test]
/// Tests an unknown target id changes nothing.
async fn test_revert_to_unknown_id() {
    let project = TestProject::new().unwrap();
    three_edits(&project);

    let summary = manager(&project).revert_to("missing").await;

    assert!(!summary.success);
    assert_eq!(summary.errors.len(), 1);
    assert_file(&project, "f.txt", b"C");
    assert_eq!(manager(&project).list_snapshots().snapshots.len(), 3);
}

#[tokio::test]
/// Tests the stop-on-first-failure policy leaves older conversations untouched.
async fn test_revert_to_stop_on_first_failure() {
    let project = TestProject::new().unwrap();
    project.write("blocker", b"file").unwrap();
    project.write("notes.txt", b"orig").unwrap();
    project
        .snapshot("older")
        .unwrap()
        .modified_file("notes.txt", b"orig")
        .unwrap();
    project.write("notes.txt", b"edited").unwrap();
    tick();
    project
        .snapshot("newer")
        .unwrap()
        .modified_file("blocker/inner.txt", b"x")
        .unwrap();
    tick();

    let summary = manager(&project)
        .with_failure_policy(FailurePolicy::StopOnFirstFailure)
        .revert_to("older")
        .await;

    assert!(!summary.success);
    assert_eq!(summary.order, vec!["newer"]);
    assert_eq!(summary.skipped, vec!["older"]);
    assert_file(&project, "notes.txt", b"edited");
    assert_eq!(manager(&project).list_snapshots().snapshots.len(), 2);
}
