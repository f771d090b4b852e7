//! Tests retention pruning and statistics over scanned catalogs.

use super::*;

#[tokio::test]
/// Tests pruning twelve backups down to ten removes the two oldest.
async fn test_prune_keeps_ten_newest() {
    let project = TestProject::new().unwrap();
    let mut fixtures = Vec::new();
    for i in 0..12 {
        let fixture = project.snapshot(&format!("c{i:02}")).unwrap();
        fixture.modified_file("f.txt", b"x").unwrap();
        fixtures.push(fixture);
        tick();
    }

    let outcome = manager(&project).prune(10).await;

    assert_eq!(outcome.pruned, 2);
    assert!(outcome.errors.is_empty());
    // c00 and c01 were created first
    assert!(!dir_exists(fixtures[0].dir()));
    assert!(!dir_exists(fixtures[1].dir()));
    assert!(fixtures[2..].iter().all(|f| dir_exists(f.dir())));
}

#[tokio::test]
/// Tests statistics reflect snapshot count, files and backup bytes.
async fn test_stats() {
    let project = TestProject::new().unwrap();
    let first = project.snapshot("c1").unwrap();
    first.modified_file("a.txt", b"1234").unwrap();
    first.new_file("b.txt").unwrap();
    tick();
    let second = project.snapshot("c2").unwrap();
    second.modified_file("c.txt", b"123456").unwrap();
    second
        .artifact("Code", "script-1", "server_js", false, "ignored for size")
        .unwrap();

    let stats = manager(&project).stats();

    assert_eq!(stats.snapshot_count, 2);
    assert_eq!(stats.total_files, 4);
    assert_eq!(stats.total_bytes, 10);
    assert!(stats.oldest <= stats.newest);
}
