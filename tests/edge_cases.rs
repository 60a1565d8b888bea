//! Edge case and error handling tests for roamtree


use harness::{TestTree, child_strings, run_roamtree, titles};
use std::fs;
use std::os::unix::fs::PermissionsExt;

// ============================================================================
// Unreadable Entries
// ============================================================================

#[test]
fn test_binary_file_dangling_reference() {
    let tree = TestTree::new();
    tree.add_bytes("logo.png", &[0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe, 0x00]);
    tree.add_file("readme.txt", "hi");

    let (_stdout, stderr, success) = run_roamtree(&tree, &["--color", "never"]);
    assert!(success, "binary files should not abort the run");
    assert_eq!(
        child_strings(&tree.read_toc()[0]),
        ["[[logo.png]]", "[[readme.txt]]"]
    );
    assert_eq!(titles(&tree.read_pages()), ["readme.txt"]);
    assert!(stderr.contains("Unable to open file"), "{}", stderr);
}

#[test]
#[cfg(unix)]
fn test_unreadable_file_dangling_reference() {
    let tree = TestTree::new();
    let file_path = tree.add_file("secret.txt", "top secret");
    tree.add_file("public.txt", "hello");

    let mut perms = fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&file_path, perms).expect("Failed to set permissions");

    // Permission bits do not apply to root
    let still_readable = fs::read(&file_path).is_ok();

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);

    let mut perms = fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o644);
    fs::set_permissions(&file_path, perms).expect("Failed to restore permissions");

    assert!(success, "unreadable files should not abort the run");
    assert_eq!(
        child_strings(&tree.read_toc()[0]),
        ["[[public.txt]]", "[[secret.txt]]"]
    );
    if !still_readable {
        assert_eq!(titles(&tree.read_pages()), ["public.txt"]);
    }
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_is_fatal() {
    let tree = TestTree::new();
    tree.add_file("readable/file.txt", "fine");
    let locked = tree.path().join("locked");
    fs::create_dir(&locked).expect("Failed to create dir");
    fs::write(locked.join("inner.txt"), "inner").expect("Failed to write file");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).expect("Failed to set permissions");

    let still_listable = fs::read_dir(&locked).is_ok();

    let (_stdout, stderr, success) = run_roamtree(&tree, &[]);

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).expect("Failed to restore permissions");

    if still_listable {
        return;
    }
    assert!(!success, "directory enumeration failure should abort");
    assert!(stderr.contains("cannot read directory"), "{}", stderr);
    assert!(!tree.toc_path().exists(), "no TOC should be written");
    assert!(!tree.pages_path().exists(), "no pages should be written");
}

#[test]
fn test_hidden_directory_contents_ignored_even_if_binary() {
    let tree = TestTree::new();
    tree.add_bytes(".git/objects/ab/cdef", &[0x78, 0x9c, 0xff, 0x00]);
    tree.add_file("src/lib.rs", "pub fn f() {}");

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);
    assert!(success);
    assert_eq!(child_strings(&tree.read_toc()[0]), ["src"]);
    assert_eq!(titles(&tree.read_pages()), ["lib.rs"]);
}

// ============================================================================
// Contents
// ============================================================================

#[test]
fn test_backticks_in_content_not_escaped() {
    let tree = TestTree::new();
    tree.add_file("README.md", "```rust\nfn main() {}\n```\n");

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);
    assert!(success);
    assert_eq!(
        tree.read_pages()[0]["children"][0]["string"],
        "``````rust\nfn main() {}\n```\n```"
    );
}

#[test]
fn test_empty_file_gets_page() {
    let tree = TestTree::new();
    tree.add_file("empty.txt", "");

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);
    assert!(success);
    assert_eq!(tree.read_pages()[0]["children"][0]["string"], "``````");
}

#[test]
fn test_unicode_names_and_contents() {
    let tree = TestTree::new();
    tree.add_file("日本語/メモ.txt", "こんにちは 🌍");

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);
    assert!(success);
    let toc = tree.read_toc();
    assert_eq!(child_strings(&toc[0]), ["日本語"]);
    assert_eq!(child_strings(&toc[0]["children"][0]), ["[[メモ.txt]]"]);
    assert_eq!(
        tree.read_pages()[0]["children"][0]["string"],
        "```こんにちは 🌍```"
    );
}

#[test]
fn test_duplicate_file_names_in_different_directories() {
    let tree = TestTree::new();
    tree.add_file("a/mod.rs", "a");
    tree.add_file("b/mod.rs", "b");

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);
    assert!(success);
    // No conflict resolution: both pages share a title
    assert_eq!(titles(&tree.read_pages()), ["mod.rs", "mod.rs"]);
}

#[test]
fn test_empty_subdirectory_still_listed() {
    let tree = TestTree::new();
    fs::create_dir(tree.path().join("empty")).unwrap();

    let (_stdout, _stderr, success) = run_roamtree(&tree, &[]);
    assert!(success);
    let toc = tree.read_toc();
    assert_eq!(child_strings(&toc[0]), ["empty"]);
    assert_eq!(toc[0]["children"][0]["children"], serde_json::json!([]));
}
