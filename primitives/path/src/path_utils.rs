// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for resolving target-relative directories.
//!
//! Relative paths are decomposed into [`Component`]s rather than sliced as
//! strings, so `..` handling does not depend on the platform separator.

use std::path::{Component, Path, PathBuf};

/// Walk `levels` directories up from `root`
///
/// The walk saturates at the filesystem root: ascending above `/` stays at `/`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use protoplan_path::ascend;
/// assert_eq!(ascend(Path::new("/a/b/target"), 2), PathBuf::from("/a"));
/// assert_eq!(ascend(Path::new("/a"), 3), PathBuf::from("/"));
/// ```
pub fn ascend(root: &Path, levels: usize) -> PathBuf {
    let mut current = root.to_path_buf();
    for _ in 0..levels {
        if !current.pop() {
            break;
        }
    }
    current
}

/// Split a relative path into its leading ascent count and the remainder
///
/// Leading `..` components are counted, leading `.` components are skipped, and
/// the first other component starts the remainder. Root and prefix components
/// are dropped so the remainder is always relative. `..` components after the
/// first descending component are kept verbatim in the remainder.
///
/// # Returns
///
/// Returns `(levels, remainder)` where `levels` is the number of leading `..`
/// components.
pub fn split_ascent(relative: &Path) -> (usize, PathBuf) {
    let mut levels = 0;
    let mut remainder = PathBuf::new();
    let mut descending = false;

    for component in relative.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            Component::CurDir if !descending => {}
            Component::ParentDir if !descending => levels += 1,
            other => {
                descending = true;
                remainder.push(other.as_os_str());
            }
        }
    }

    (levels, remainder)
}

/// Resolve a configured source directory against a target root
///
/// # Arguments
///
/// * `root` - Root directory of the build target
/// * `relative` - Configured directory, relative to `root`; `None` means `root` itself
///
/// # Returns
///
/// Returns the directory obtained by ascending one level per leading `..` and then
/// descending into whatever remains.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use protoplan_path::resolve_source_directory;
/// let root = Path::new("/a/b/target");
/// assert_eq!(
///     resolve_source_directory(root, Some("../../shared/protos")),
///     PathBuf::from("/a/shared/protos")
/// );
/// assert_eq!(resolve_source_directory(root, None), PathBuf::from("/a/b/target"));
/// ```
pub fn resolve_source_directory(root: &Path, relative: Option<&str>) -> PathBuf {
    match relative {
        Some(relative) => {
            let (levels, remainder) = split_ascent(Path::new(relative));
            let base = ascend(root, levels);
            if remainder.as_os_str().is_empty() {
                base
            } else {
                base.join(remainder)
            }
        }
        None => root.to_path_buf(),
    }
}

/// Resolve a target-relative file path, keeping absolute paths as-is
pub fn resolve_target_file(root: &Path, file: &str) -> PathBuf {
    let file = Path::new(file);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascend() {
        let root = Path::new("/a/b/target");
        assert_eq!(ascend(root, 0), PathBuf::from("/a/b/target"));
        assert_eq!(ascend(root, 1), PathBuf::from("/a/b"));
        assert_eq!(ascend(root, 3), PathBuf::from("/"));
        assert_eq!(ascend(root, 10), PathBuf::from("/"));
    }

    #[test]
    fn test_split_ascent() {
        assert_eq!(split_ascent(Path::new("../../shared/protos")), (2, PathBuf::from("shared/protos")));
        assert_eq!(split_ascent(Path::new("./protos")), (0, PathBuf::from("protos")));
        assert_eq!(split_ascent(Path::new("..")), (1, PathBuf::new()));
        assert_eq!(split_ascent(Path::new("../.././x")), (2, PathBuf::from("x")));
        assert_eq!(split_ascent(Path::new("a/../b")), (0, PathBuf::from("a/../b")));
        assert_eq!(split_ascent(Path::new("/abs/dir")), (0, PathBuf::from("abs/dir")));
    }

    #[test]
    fn test_resolve_source_directory() {
        let root = Path::new("/a/b/target");
        assert_eq!(
            resolve_source_directory(root, Some("../../shared/protos")),
            PathBuf::from("/a/shared/protos")
        );
        assert_eq!(resolve_source_directory(root, Some("protos")), PathBuf::from("/a/b/target/protos"));
        assert_eq!(resolve_source_directory(root, Some("../")), PathBuf::from("/a/b"));
        assert_eq!(resolve_source_directory(root, Some("")), PathBuf::from("/a/b/target"));
        assert_eq!(resolve_source_directory(root, None), PathBuf::from("/a/b/target"));

        // No trailing separator leaks into the resolved directory
        let resolved = resolve_source_directory(root, Some("../"));
        assert_eq!(resolved.to_str(), Some("/a/b"));
    }

    #[test]
    fn test_resolve_target_file() {
        let root = Path::new("/pkg/Sources/Foo");
        assert_eq!(resolve_target_file(root, "mapping.asciipb"), PathBuf::from("/pkg/Sources/Foo/mapping.asciipb"));
        assert_eq!(resolve_target_file(root, "/etc/mapping.asciipb"), PathBuf::from("/etc/mapping.asciipb"));
    }
}
