use std::path::{Component, Path, PathBuf};

/// Join a page reference onto the base directory.
///
/// Leading separators do not escape the base directory: `/css/site.css` and
/// `css/site.css` resolve to the same file. `.` and `..` segments are folded lexically so
/// that a reference like `components/../style.css` works even when `components` is absent.
pub fn join_reference(base_dir: &Path, reference: &str) -> PathBuf {
    let relative = reference.trim_start_matches(['/', '\\']);
    normalize_lexically(&base_dir.join(relative))
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_slash_stays_inside_base() {
        let joined = join_reference(Path::new("/site"), "/css/main.css");
        assert_eq!(joined, PathBuf::from("/site/css/main.css"));
    }

    #[test]
    fn folds_parent_segments() {
        let joined = join_reference(Path::new("/site"), "components/../fonts/a.woff2");
        assert_eq!(joined, PathBuf::from("/site/fonts/a.woff2"));
    }

    #[test]
    fn parent_segments_can_leave_base() {
        let joined = join_reference(Path::new("/site/pages"), "../fonts/a.woff2");
        assert_eq!(joined, PathBuf::from("/site/fonts/a.woff2"));
    }

    #[test]
    fn keeps_leading_parents_of_relative_paths() {
        let normalized = normalize_lexically(Path::new("../shared/./x.css"));
        assert_eq!(normalized, PathBuf::from("../shared/x.css"));
    }

    #[test]
    fn cannot_climb_above_root() {
        let normalized = normalize_lexically(Path::new("/../etc"));
        assert_eq!(normalized, PathBuf::from("/etc"));
    }
}
