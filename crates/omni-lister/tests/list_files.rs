//! End-to-end tests for `list_files` and `DirectoryLister` against real
//! temporary directories.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use omni_lister::{DirectoryLister, ListError, ListErrorKind, ListOutput, list_files};
use tempfile::TempDir;

/// Creates `B.txt`, `a.txt`, `.hidden` and `sub/` (with a file inside).
fn sample_dir() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let root = temp.path();
    fs::write(root.join("B.txt"), "b").unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join(".hidden"), "h").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("nested.txt"), "n").unwrap();
    temp
}

fn utf8(temp: &TempDir) -> &Utf8Path {
    Utf8Path::from_path(temp.path()).expect("Invalid path")
}

fn names(output: ListOutput) -> Vec<String> {
    match output {
        ListOutput::Names(names) => names,
        ListOutput::Paths(paths) => panic!("expected names, got paths: {paths:?}"),
    }
}

fn paths(output: ListOutput) -> Vec<Utf8PathBuf> {
    match output {
        ListOutput::Paths(paths) => paths,
        ListOutput::Names(names) => panic!("expected paths, got names: {names:?}"),
    }
}

#[test]
fn test_default_listing_excludes_hidden_and_directories() {
    let temp = sample_dir();
    let result = names(list_files(Some(utf8(&temp)), None, false, false).unwrap());
    assert_eq!(result, ["a.txt", "B.txt"]);
}

#[test]
fn test_show_hidden_includes_dotfiles() {
    let temp = sample_dir();
    let result = names(list_files(Some(utf8(&temp)), None, true, false).unwrap());

    insta::assert_json_snapshot!(result, @r#"
    [
      ".hidden",
      "a.txt",
      "B.txt"
    ]
    "#);
}

#[test]
fn test_hidden_excluded_is_subset_of_hidden_included() {
    let temp = sample_dir();
    let visible = names(list_files(Some(utf8(&temp)), None, false, false).unwrap());
    let all = names(list_files(Some(utf8(&temp)), None, true, false).unwrap());

    assert!(visible.len() <= all.len());
    assert!(visible.iter().all(|name| all.contains(name)));
}

#[test]
fn test_pattern_filters_names() {
    let temp = sample_dir();
    fs::write(temp.path().join("notes.md"), "m").unwrap();

    let unfiltered = names(list_files(Some(utf8(&temp)), None, false, false).unwrap());
    let txt = names(list_files(Some(utf8(&temp)), Some("*.txt"), false, false).unwrap());

    assert_eq!(txt, ["a.txt", "B.txt"]);
    assert!(txt.iter().all(|name| unfiltered.contains(name)));
    assert!(unfiltered.contains(&"notes.md".to_owned()));
}

#[test]
fn test_pattern_does_not_reach_into_subdirectories() {
    let temp = sample_dir();
    let result = names(list_files(Some(utf8(&temp)), Some("nested*"), false, false).unwrap());
    assert!(result.is_empty());
}

#[test]
fn test_pattern_with_show_hidden() {
    let temp = sample_dir();
    fs::write(temp.path().join(".env.txt"), "e").unwrap();

    let hidden = names(list_files(Some(utf8(&temp)), Some("*.txt"), true, false).unwrap());
    assert_eq!(hidden, [".env.txt", "a.txt", "B.txt"]);

    let visible = names(list_files(Some(utf8(&temp)), Some("*.txt"), false, false).unwrap());
    assert_eq!(visible, ["a.txt", "B.txt"]);
}

#[test]
fn test_empty_pattern_matches_everything() {
    let temp = sample_dir();
    let result = names(list_files(Some(utf8(&temp)), Some(""), false, false).unwrap());
    assert_eq!(result, ["a.txt", "B.txt"]);
}

#[test]
fn test_ordering_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    for name in ["zeta", "Alpha", "beta", "Gamma", "delta", "_under", "10.log", "9.log"] {
        fs::write(temp.path().join(name), "").unwrap();
    }

    let result = names(list_files(Some(utf8(&temp)), None, false, false).unwrap());
    assert_eq!(result.len(), 8);
    for pair in result.windows(2) {
        assert!(
            pair[0].to_lowercase() <= pair[1].to_lowercase(),
            "{} should not precede {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_return_paths_matches_names() {
    let temp = sample_dir();
    let dir = utf8(&temp);

    let plain = names(list_files(Some(dir), None, true, false).unwrap());
    let full = paths(list_files(Some(dir), None, true, true).unwrap());

    assert_eq!(plain.len(), full.len());
    for (name, path) in plain.iter().zip(&full) {
        assert_eq!(path.file_name(), Some(name.as_str()));
        assert!(path.is_absolute());
        assert!(path.is_file());
    }
}

#[test]
fn test_dot_dot_components_are_resolved() {
    let temp = sample_dir();
    let dir = utf8(&temp);
    let relative = dir.join("sub").join("..");

    let full = paths(list_files(Some(&relative), None, false, true).unwrap());
    assert_eq!(full.len(), 2);
    assert!(full.iter().all(|p| !p.as_str().contains("..")));
}

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().unwrap();
    let result = list_files(Some(utf8(&temp)), None, true, false).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_missing_directory_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = utf8(&temp).join("does-not-exist");

    let err = list_files(Some(&missing), None, false, false).unwrap_err();
    assert!(matches!(err, ListError::NotFound(ref p) if *p == missing));
    assert_eq!(err.kind(), ListErrorKind::NotFound);
}

#[test]
fn test_regular_file_is_invalid_argument() {
    let temp = sample_dir();
    let file = utf8(&temp).join("a.txt");

    let err = list_files(Some(&file), None, false, false).unwrap_err();
    assert!(matches!(err, ListError::NotADirectory(_)));
    assert_eq!(err.kind(), ListErrorKind::InvalidArgument);
}

#[test]
fn test_invalid_pattern_is_invalid_argument() {
    let temp = sample_dir();
    let err = list_files(Some(utf8(&temp)), Some("[a-"), false, false).unwrap_err();
    assert_eq!(err.kind(), ListErrorKind::InvalidArgument);
}

#[test]
fn test_scan_result_records_directory_and_pattern() {
    let temp = sample_dir();
    let result = DirectoryLister::new(Some(utf8(&temp)))
        .with_pattern("*.txt")
        .scan()
        .unwrap();

    assert_eq!(result.pattern(), Some("*.txt"));
    assert!(result.directory().as_path().is_absolute());
    assert!(result.paths().all(|p| p.starts_with(result.directory().as_path())));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[test]
    fn test_symlinks_to_files_are_excluded() {
        let temp = sample_dir();
        symlink(temp.path().join("a.txt"), temp.path().join("link.txt")).unwrap();
        symlink(temp.path().join("missing"), temp.path().join("dangling.txt")).unwrap();

        let result = names(list_files(Some(utf8(&temp)), None, false, false).unwrap());
        assert_eq!(result, ["a.txt", "B.txt"]);
    }

    #[test]
    fn test_symlinked_directory_is_resolved() {
        let temp = sample_dir();
        let link = utf8(&temp).join("alias");
        symlink(temp.path().join("sub"), &link).unwrap();

        let result = DirectoryLister::new(Some(&link)).scan().unwrap();
        assert_eq!(result.directory().as_path().file_name(), Some("sub"));
        assert_eq!(result.names().collect::<Vec<_>>(), ["nested.txt"]);
    }

    #[test]
    fn test_unreadable_directory_is_permission_denied() {
        let temp = TempDir::new().unwrap();
        let locked = utf8(&temp).join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "s").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass mode bits; nothing to assert then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = list_files(Some(&locked), None, false, false);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, ListError::PermissionDenied { .. }));
        assert_eq!(err.kind(), ListErrorKind::PermissionDenied);
    }
}
