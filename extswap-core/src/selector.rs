use crate::extension::SelectionSet;
use regex::{Regex, RegexBuilder};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory name that is never scanned.
pub const IGNORED_DIR: &str = "node_modules";

/// Predicate deciding whether a path (relative to the scan root) is selected.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    /// `None` when the selection is empty: an empty alternation would match
    /// every path, so nothing is matched instead.
    regex: Option<Regex>,
}

impl ExtensionMatcher {
    pub fn new(selection: &SelectionSet) -> Result<Self, regex::Error> {
        if selection.is_empty() {
            return Ok(Self { regex: None });
        }

        let escaped: Vec<String> = selection
            .iter()
            .map(|token| regex::escape(token.as_str()))
            .collect();
        let pattern = format!(r"\.(?:{})$", escaped.join("|"));
        let regex = RegexBuilder::new(&pattern).build()?;

        Ok(Self { regex: Some(regex) })
    }

    /// True if `relative` ends in one of the selected extensions and does not
    /// start with the `node_modules` segment.
    pub fn is_match(&self, relative: &Path) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };

        if starts_with_ignored_dir(relative) {
            return false;
        }

        regex.is_match(&relative.to_string_lossy())
    }
}

fn starts_with_ignored_dir(relative: &Path) -> bool {
    relative
        .components()
        .find(|c| !matches!(c, Component::CurDir))
        .is_some_and(|c| c.as_os_str() == OsStr::new(IGNORED_DIR))
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == IGNORED_DIR
}

/// Recursively collect the files under `root` matching `selection`.
///
/// Regular files and symlinks are candidates; a `root` naming a single file
/// yields at most that file. Traversal is depth-first with directory entries sorted by name, so the
/// result is stable for a fixed directory snapshot. A missing or unreadable
/// root yields an empty list rather than an error.
pub fn select_files(root: &Path, selection: &SelectionSet) -> Result<Vec<PathBuf>, regex::Error> {
    let matcher = ExtensionMatcher::new(selection)?;
    let strip_root = root == Path::new(".");

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    warn!("Cannot scan {}: {}", root.display(), err);
                } else {
                    debug!("Skipping unreadable entry: {}", err);
                }
                continue;
            },
        };

        // Symlinks are listed as themselves and never followed
        let file_type = entry.file_type();
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }

        let path = entry.path();
        // A root that is itself a file is matched by its own path
        let relative = if entry.depth() == 0 {
            path
        } else {
            path.strip_prefix(root).unwrap_or(path)
        };

        if !matcher.is_match(relative) {
            continue;
        }

        debug!("Selected {}", path.display());
        files.push(if strip_root {
            relative.to_path_buf()
        } else {
            path.to_path_buf()
        });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionToken;
    use std::fs;
    use tempfile::TempDir;

    fn selection(exts: &[&str], reverse: bool) -> SelectionSet {
        SelectionSet::new(
            exts.iter().map(|e| e.parse::<ExtensionToken>().unwrap()),
            reverse,
        )
    }

    #[test]
    fn test_matcher_selected_suffix() {
        let matcher = ExtensionMatcher::new(&selection(&["js", "css"], false)).unwrap();
        assert!(matcher.is_match(Path::new("app.js")));
        assert!(matcher.is_match(Path::new("src/style.css")));
        assert!(!matcher.is_match(Path::new("index.html")));
        assert!(!matcher.is_match(Path::new("app.jsx")));
        assert!(!matcher.is_match(Path::new("appjs")));
    }

    #[test]
    fn test_matcher_only_final_suffix_counts() {
        let matcher = ExtensionMatcher::new(&selection(&["js"], false)).unwrap();
        assert!(!matcher.is_match(Path::new("bundle.js.map")));
        assert!(matcher.is_match(Path::new("bundle.min.js")));
    }

    #[test]
    fn test_matcher_excludes_root_node_modules() {
        let matcher = ExtensionMatcher::new(&selection(&["js"], false)).unwrap();
        assert!(!matcher.is_match(Path::new("node_modules/dep.js")));
        assert!(!matcher.is_match(Path::new("./node_modules/dep.js")));
        assert!(matcher.is_match(Path::new("node_modules_backup/dep.js")));
    }

    #[test]
    fn test_matcher_empty_selection_matches_nothing() {
        let matcher = ExtensionMatcher::new(&SelectionSet::default()).unwrap();
        assert!(!matcher.is_match(Path::new("app.js")));
        assert!(!matcher.is_match(Path::new("README")));
        assert!(!matcher.is_match(Path::new("")));
    }

    #[test]
    fn test_matcher_reverse_selection() {
        let matcher = ExtensionMatcher::new(&selection(&["js"], true)).unwrap();
        assert!(matcher.is_match(Path::new("app.sj")));
        assert!(!matcher.is_match(Path::new("app.js")));
    }

    #[test]
    fn test_select_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("z.js"), "").unwrap();
        fs::write(root.join("a.js"), "").unwrap();
        fs::write(root.join("b/c.js"), "").unwrap();
        fs::write(root.join("b/d.txt"), "").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "").unwrap();

        let files = select_files(root, &selection(&["js"], false)).unwrap();
        assert_eq!(
            files,
            vec![root.join("a.js"), root.join("b/c.js"), root.join("z.js")]
        );
    }

    #[test]
    fn test_select_files_skips_directories_with_matching_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("vendor.js")).unwrap();
        fs::write(root.join("vendor.js/readme.txt"), "").unwrap();

        let files = select_files(root, &selection(&["js"], false)).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_select_files_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("app.js");
        fs::write(&file, "").unwrap();

        let files = select_files(&file, &selection(&["js"], false)).unwrap();
        assert_eq!(files, vec![file.clone()]);

        let files = select_files(&file, &selection(&["css"], false)).unwrap();
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_select_files_includes_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("real.txt"), "").unwrap();
        fs::create_dir_all(root.join("lib")).unwrap();
        symlink(root.join("real.txt"), root.join("link.js")).unwrap();
        symlink(root.join("lib"), root.join("dir-link.js")).unwrap();

        let files = select_files(root, &selection(&["js"], false)).unwrap();
        assert_eq!(files, vec![root.join("dir-link.js"), root.join("link.js")]);
    }

    #[test]
    fn test_select_files_missing_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let files =
            select_files(&temp_dir.path().join("missing"), &selection(&["js"], false)).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_select_files_empty_selection() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.js"), "").unwrap();
        let files = select_files(temp_dir.path(), &SelectionSet::default()).unwrap();
        assert!(files.is_empty());
    }
}
