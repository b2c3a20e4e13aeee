//! Path normalization.

use std::path::{Component, Path, PathBuf};

/// Returns the path in a normalized state: platform-appropriate separators,
/// no trailing separator, no duplicate separators, `.` and `..` segments
/// resolved lexically.
///
/// Purely lexical; the filesystem is never consulted and symlinks are not
/// resolved.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // ".." above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().map(|component| component.as_os_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(
            normalize(Path::new("/proj/shot010/scene_v001.hip")),
            PathBuf::from("/proj/shot010/scene_v001.hip")
        );
    }

    #[test]
    fn test_collapses_duplicate_separators() {
        assert_eq!(
            normalize(Path::new("/proj//shot010///scene_v001.hip")),
            PathBuf::from("/proj/shot010/scene_v001.hip")
        );
    }

    #[test]
    fn test_strips_trailing_separator() {
        assert_eq!(normalize(Path::new("/proj/shot010/")), PathBuf::from("/proj/shot010"));
    }

    #[test]
    fn test_removes_current_dir_segments() {
        assert_eq!(
            normalize(Path::new("/proj/./shot010/./scene_v001.hip")),
            PathBuf::from("/proj/shot010/scene_v001.hip")
        );
    }

    #[test]
    fn test_resolves_parent_dir_segments() {
        assert_eq!(
            normalize(Path::new("/proj/shot010/../shot020/scene_v001.hip")),
            PathBuf::from("/proj/shot020/scene_v001.hip")
        );
    }

    #[test]
    fn test_parent_dir_at_root_stays_at_root() {
        assert_eq!(normalize(Path::new("/../proj")), PathBuf::from("/proj"));
    }

    #[test]
    fn test_relative_parent_dir_preserved() {
        assert_eq!(normalize(Path::new("../scene_v001.hip")), PathBuf::from("../scene_v001.hip"));
    }

    #[test]
    fn test_empty_path_becomes_current_dir() {
        assert_eq!(normalize(Path::new("")), PathBuf::from("."));
    }

    #[test]
    fn test_relative_path_unchanged() {
        assert_eq!(
            normalize(Path::new("shots/scene_v001.hip")),
            PathBuf::from("shots/scene_v001.hip")
        );
    }
}
