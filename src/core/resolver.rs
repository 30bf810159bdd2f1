use crate::core::models::ModulePath;
use std::path::{Component, Path, PathBuf};

/// Resolve `specifier` against the directory that contains `requester`.
///
/// Purely lexical: the target is not required to exist, and no extensions
/// or index files are probed. A missing file surfaces when it is read.
pub fn resolve(requester: &ModulePath, specifier: &str) -> ModulePath {
    let base = requester.as_path().parent().unwrap_or_else(|| Path::new(""));
    ModulePath::new(base.join(specifier))
}

/// Fold `.` and `..` segments without touching the filesystem.
///
/// `..` above the root of an absolute path is dropped; leading `..` on a
/// relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::Prefix(_) | Component::RootDir) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    normalized.push(Component::ParentDir.as_os_str());
                }
            },
            Component::Normal(segment) => normalized.push(segment),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(Component::CurDir.as_os_str());
    }

    normalized
}
