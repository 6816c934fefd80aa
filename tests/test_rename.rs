mod helpers;

use helpers::{names_in, snapshot, write_file};
use sen12mscr_prep::{PrepError, Renamer};
use tempfile::TempDir;

#[test]
fn test_rename_strips_modality_tags() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_file(&root.join("ROIs1158_spring_s1/ROIs1158_spring_s1_9_p100.tif"), "sar");
    write_file(&root.join("ROIs1158_spring_s2/ROIs1158_spring_s2_9_p100.tif"), "clear");
    write_file(&root.join("ROIs1158_spring_s2_cloudy/ROIs1158_spring_s2_cloudy_9_p100.tif"), "cloudy");

    let report = Renamer::new().rename(root).expect("Rename failed");

    assert_eq!(report.folders, 3);
    assert_eq!(report.files, 3);
    for folder in ["ROIs1158_spring_s1", "ROIs1158_spring_s2", "ROIs1158_spring_s2_cloudy"] {
        assert_eq!(names_in(&root.join(folder)), vec!["ROIs1158_spring_9_p100.tif"]);
    }
}

#[test]
fn test_rename_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_file(&root.join("ROIs1868_summer_s1/ROIs1868_summer_s1_43_p7.tif"), "a");
    write_file(&root.join("ROIs1868_summer_s1/unmarked.tif"), "b");

    Renamer::new().rename(root).expect("First rename failed");
    let after_first = snapshot(root);

    let report = Renamer::new().rename(root).expect("Second rename failed");
    assert_eq!(report.files, 0);
    assert_eq!(snapshot(root), after_first);
}

#[test]
fn test_rename_only_touches_folder_level_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_file(&root.join("root_s1.txt"), "root file");
    write_file(&root.join("ROIs_s1/nested/deep_s1.tif"), "nested");

    let report = Renamer::new().rename(root).expect("Rename failed");

    assert_eq!(report.files, 0);
    assert!(root.join("root_s1.txt").is_file());
    assert!(root.join("ROIs_s1/nested/deep_s1.tif").is_file());
}

#[test]
fn test_rename_refuses_to_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    write_file(&root.join("ROIs_s1/tile_s1.tif"), "tagged");
    write_file(&root.join("ROIs_s1/tile.tif"), "untagged");

    let result = Renamer::new().rename(root);
    assert!(matches!(result, Err(PrepError::Collision { ref file_name, .. }) if file_name == "tile.tif"));
    assert_eq!(names_in(&root.join("ROIs_s1")), vec!["tile.tif", "tile_s1.tif"]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_rename_rejects_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();
    let bad = root.join("ROIs_s1").join(OsStr::from_bytes(b"tile_s1_\xff.tif"));
    write_file(&bad, "x");

    let result = Renamer::new().rename(root);

    match result {
        Err(PrepError::NonUtf8Name { path }) => assert_eq!(path, bad),
        other => panic!("Expected non UTF-8 name error, got {:?}", other),
    }
    assert!(bad.is_file());
}
