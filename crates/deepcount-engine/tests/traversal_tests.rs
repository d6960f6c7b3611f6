use std::fs;

use tempfile::TempDir;

use deepcount_core::CountConfig;
use deepcount_engine::DeepCounter;

/// Root with 2 files (10, 20 bytes) and 1 subdirectory holding 1 file (5).
fn mixed_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("ten.bin"), [0u8; 10]).unwrap();
    fs::write(root.join("twenty.bin"), [0u8; 20]).unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/five.bin"), [0u8; 5]).unwrap();

    temp
}

#[tokio::test]
async fn mixed_tree_snapshot() {
    let temp = mixed_tree();

    let counter = DeepCounter::new(CountConfig::new(temp.path()));
    let snap = counter.count().await.unwrap();

    assert_eq!(snap.file_items, 3);
    assert_eq!(snap.directory_items, 1);
    assert_eq!(snap.unreadable_items, 0);
    assert_eq!(snap.total_size, 35);
    assert!(snap.size_known);
}

#[tokio::test]
async fn file_root_uses_queried_size() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("answer");
    fs::write(&file, [0u8; 42]).unwrap();

    let counter = DeepCounter::new(CountConfig::new(&file));
    let snap = counter.count().await.unwrap();

    assert!(snap.size_known);
    assert_eq!(snap.total_size, 42);
    assert_eq!(snap.item_count(), 0);
}

#[tokio::test]
async fn item_count_matches_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // 3 directories, 5 files reachable from the root.
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::create_dir(root.join("c")).unwrap();
    fs::write(root.join("f1"), "x").unwrap();
    fs::write(root.join("a/f2"), "xx").unwrap();
    fs::write(root.join("a/b/f3"), "xxx").unwrap();
    fs::write(root.join("a/b/f4"), "xxxx").unwrap();
    fs::write(root.join("c/f5"), "xxxxx").unwrap();

    let counter = DeepCounter::new(CountConfig::new(root));
    let snap = counter.count().await.unwrap();

    assert_eq!(snap.file_items, 5);
    assert_eq!(snap.directory_items, 3);
    assert_eq!(snap.item_count(), 8);
    assert_eq!(snap.total_size, 1 + 2 + 3 + 4 + 5);
}

#[tokio::test]
async fn batching_is_invisible_in_the_result() {
    let temp = TempDir::new().unwrap();
    for i in 0..25 {
        fs::write(temp.path().join(format!("f{i}")), "data").unwrap();
    }

    let one = DeepCounter::new(
        CountConfig::builder()
            .root(temp.path())
            .batch_size(1usize)
            .build()
            .unwrap(),
    );
    let large = DeepCounter::new(
        CountConfig::builder()
            .root(temp.path())
            .batch_size(1000usize)
            .build()
            .unwrap(),
    );

    assert_eq!(one.count().await.unwrap(), large.count().await.unwrap());
}

#[cfg(unix)]
#[tokio::test]
async fn hardlinks_counted_twice_sized_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("original"), [0u8; 100]).unwrap();
    fs::hard_link(root.join("original"), root.join("link")).unwrap();

    let counter = DeepCounter::new(CountConfig::new(root));
    let snap = counter.count().await.unwrap();

    assert_eq!(snap.file_items, 2);
    assert_eq!(snap.total_size, 100);
}

#[cfg(unix)]
#[tokio::test]
async fn hardlink_across_subdirectories_sized_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir(root.join("a")).unwrap();
    fs::create_dir(root.join("b")).unwrap();
    fs::write(root.join("a/original"), [0u8; 64]).unwrap();
    fs::hard_link(root.join("a/original"), root.join("b/link")).unwrap();

    let counter = DeepCounter::new(CountConfig::new(root));
    let snap = counter.count().await.unwrap();

    assert_eq!(snap.file_items, 2);
    assert_eq!(snap.directory_items, 2);
    assert_eq!(snap.total_size, 64);
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_directory_not_descended() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir(root.join("real")).unwrap();
    fs::write(root.join("real/file"), [0u8; 30]).unwrap();
    std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

    let counter = DeepCounter::new(CountConfig::new(root));
    let snap = counter.count().await.unwrap();

    // The link counts as a file item; real/file is counted exactly once.
    assert_eq!(snap.directory_items, 1);
    assert_eq!(snap.file_items, 2);
}

#[cfg(unix)]
#[tokio::test]
async fn self_referential_symlink_terminates() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    std::os::unix::fs::symlink(root.join("loop"), root.join("loop")).unwrap();

    let counter = DeepCounter::new(CountConfig::new(root));
    let snap = counter.count().await.unwrap();

    assert_eq!(snap.file_items, 1);
    assert_eq!(snap.directory_items, 0);
    assert!(snap.size_known);
}

#[cfg(unix)]
#[tokio::test]
async fn unreadable_subdirectory_degrades() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir(root.join("locked")).unwrap();
    fs::write(root.join("locked/hidden"), [0u8; 50]).unwrap();
    fs::write(root.join("visible"), [0u8; 10]).unwrap();

    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(root.join("locked")).is_ok() {
        // Privileged process; permissions don't bite, nothing to test.
        fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let counter = DeepCounter::new(CountConfig::new(root));
    let result = counter.count().await;

    fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();

    let snap = result.unwrap();
    assert_eq!(snap.unreadable_items, 1);
    // The locked directory is still counted as a directory item; its
    // contents are not.
    assert_eq!(snap.directory_items, 1);
    assert_eq!(snap.file_items, 1);
    assert_eq!(snap.total_size, 10);
    assert!(snap.size_known);
}
