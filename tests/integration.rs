//! Integration tests for unixfiles


use std::fs;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use harness::{TestTree, parse_records, record_files, run_unixfiles};

const KEYS: [&str; 9] = [
    "file", "size", "atime", "ctime", "mtime", "user", "group", "perms", "host",
];

#[test]
fn test_no_paths_prints_empty_array() {
    let tree = TestTree::new();
    let (stdout, stderr, success) = run_unixfiles(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout.trim(), "[]");
    assert!(stderr.is_empty(), "no diagnostics expected: {}", stderr);
}

#[test]
fn test_single_file_scenario() {
    let tree = TestTree::new();
    let file = tree.add_file("answer.bin", &"x".repeat(42));
    let fixed = UNIX_EPOCH + Duration::new(1_600_000_000, 250_000_000);
    fs::File::options()
        .write(true)
        .open(&file)
        .unwrap()
        .set_modified(fixed)
        .unwrap();

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &[&root]);
    assert!(success);

    let records = parse_records(&stdout);
    assert_eq!(records.len(), 1, "{}", stdout);
    let r = &records[0];
    assert_eq!(r["file"], tree.join("answer.bin").as_str());
    assert_eq!(r["size"], 42);
    assert!((r["mtime"].as_f64().unwrap() - 1_600_000_000.25).abs() < 1e-3);
}

#[test]
fn test_record_has_exact_keys_in_order() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &[&root]);
    assert!(success);

    // Key order is checked on the raw text, since maps may reorder
    let mut last = 0;
    for key in KEYS {
        let needle = format!("\"{}\":", key);
        let pos = stdout[last..]
            .find(&needle)
            .unwrap_or_else(|| panic!("missing or out-of-order key {}: {}", key, stdout));
        last += pos + needle.len();
    }

    let record = &parse_records(&stdout)[0];
    assert_eq!(record.len(), KEYS.len());
    assert!(record["size"].is_u64());
    assert!(record["perms"].is_u64());
    assert!(record["atime"].is_f64());
    assert!(record["user"].is_string());
    assert!(record["group"].is_string());
    let host = record["host"].as_str().unwrap();
    assert!(!host.is_empty() && !host.contains('.'));
}

#[test]
fn test_breadth_first_ordering() {
    let tree = TestTree::new();
    tree.add_file("A/B/g", "g");
    tree.add_file("A/f", "f");

    let root = tree.join("A");
    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &[&root]);
    assert!(success);
    assert_eq!(
        record_files(&stdout),
        vec![format!("{}/f", root), format!("{}/B/g", root)]
    );
}

#[test]
fn test_shallow_entries_before_deep_ones() {
    let tree = TestTree::new();
    tree.add_file("a/1/2/deep", "");
    tree.add_file("a/1/mid", "");
    tree.add_file("a/top", "");
    tree.add_file("b/other", "");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &[&root]);
    assert!(success);

    let files = record_files(&stdout);
    let index = |suffix: &str| files.iter().position(|f| f.ends_with(suffix)).unwrap();
    assert!(index("/a/top") < index("/a/1/mid"));
    assert!(index("/b/other") < index("/a/1/mid"));
    assert!(index("/a/1/mid") < index("/a/1/2/deep"));
}

#[test]
fn test_completeness_and_no_directories() {
    let tree = TestTree::new();
    tree.add_file("one", "1");
    tree.add_file("sub/two", "22");
    tree.add_file("sub/deeper/three", "333");
    tree.add_dir("sub/empty");

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &[&root]);
    assert!(success);

    let mut files = record_files(&stdout);
    files.sort();
    let mut expected = vec![
        tree.join("one"),
        tree.join("sub/deeper/three"),
        tree.join("sub/two"),
    ];
    expected.sort();
    assert_eq!(files, expected);
    assert!(!files.iter().any(|f| f.ends_with("/.") || f.ends_with("/..")));
}

#[test]
fn test_separator_counts() {
    for count in [0usize, 1, 7] {
        let tree = TestTree::new();
        for i in 0..count {
            tree.add_file(&format!("f{}", i), "");
        }
        let root = tree.path().to_string_lossy().to_string();
        let (stdout, _stderr, success) = run_unixfiles(tree.path(), &[&root]);
        assert!(success);

        let body = stdout.trim();
        assert!(body.starts_with('[') && body.ends_with(']'));
        assert!(!body.starts_with("[,") && !body.ends_with(",]"));
        assert_eq!(body.matches("},{").count(), count.saturating_sub(1));
        assert_eq!(parse_records(&stdout).len(), count);
    }
}

#[test]
fn test_relative_root_joins_verbatim() {
    let tree = TestTree::new();
    tree.add_file("data/x.txt", "x");

    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &["data"]);
    assert!(success);
    assert_eq!(record_files(&stdout), vec!["data/x.txt".to_string()]);

    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &["data/"]);
    assert!(success);
    assert_eq!(record_files(&stdout), vec!["data//x.txt".to_string()]);
}

#[test]
fn test_multiple_roots_in_order() {
    let tree = TestTree::new();
    tree.add_file("left/l", "");
    tree.add_file("right/r", "");

    let (stdout, _stderr, success) = run_unixfiles(tree.path(), &["right", "left"]);
    assert!(success);
    assert_eq!(
        record_files(&stdout),
        vec!["right/r".to_string(), "left/l".to_string()]
    );
}

#[test]
fn test_idempotent_apart_from_atime() {
    let tree = TestTree::new();
    tree.add_file("a", "alpha");
    tree.add_file("d/b", "beta");
    tree.add_file("d/e/c", "gamma");

    let root = tree.path().to_string_lossy().to_string();
    let (first, _, ok1) = run_unixfiles(tree.path(), &[&root]);
    let (second, _, ok2) = run_unixfiles(tree.path(), &[&root]);
    assert!(ok1 && ok2);

    let strip = |out: &str| {
        let mut records = parse_records(out);
        for r in &mut records {
            r.remove("atime");
        }
        records.sort_by(|a, b| a["file"].as_str().cmp(&b["file"].as_str()));
        records
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn test_modified_time_is_fractional_seconds() {
    let tree = TestTree::new();
    let file = tree.add_file("t", "");
    let now = SystemTime::now();
    fs::File::options()
        .write(true)
        .open(&file)
        .unwrap()
        .set_modified(now)
        .unwrap();

    let root = tree.path().to_string_lossy().to_string();
    let (stdout, _stderr, _) = run_unixfiles(tree.path(), &[&root]);
    let mtime = parse_records(&stdout)[0]["mtime"].as_f64().unwrap();
    let expected = now.duration_since(UNIX_EPOCH).unwrap().as_secs_f64();
    assert!((mtime - expected).abs() < 1e-3, "{} vs {}", mtime, expected);
}

#[test]
fn test_flag_like_arguments_are_paths() {
    let tree = TestTree::new();
    for arg in ["--version", "--help", "--bogus"] {
        let (stdout, stderr, success) = run_unixfiles(tree.path(), &[arg]);
        assert!(success, "{} should be walked as a path", arg);
        assert_eq!(stdout.trim(), "[]");
        assert!(stderr.contains("opendir: "), "{}", stderr);
        assert!(!stderr.contains("argument parsing error"), "{}", stderr);
    }
}

#[test]
fn test_cli_contract_with_assert_cmd() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let tree = TestTree::new();
    tree.add_file("d/only", "1234");

    Command::cargo_bin("unixfiles")
        .unwrap()
        .current_dir(tree.path())
        .env_remove("RUST_LOG")
        .args(["missing", "d"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"file\":\"d/only\",\"size\":4,"))
        .stdout(predicate::str::ends_with("}]\n"))
        .stderr(predicate::str::contains("opendir: "));
}
