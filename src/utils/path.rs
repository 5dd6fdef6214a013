use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components.
///
/// The result is always relative: root and prefix components are dropped and
/// ".." never climbs above the start, so joining it onto a directory stays
/// inside that directory.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    result
}

/// Resolve a requested document path to a markdown file under `root`.
///
/// `root/<path>` wins when it is a file, otherwise `root/<path>.md` is tried.
pub fn resolve_document<P: AsRef<Path>>(root: P, requested: &str) -> Option<PathBuf> {
    let relative = normalize_path(requested.replace('\\', "/"));
    if relative.as_os_str().is_empty() {
        return None;
    }

    let exact = root.as_ref().join(&relative);
    if exact.is_file() {
        return Some(exact);
    }

    let mut with_ext = exact.into_os_string();
    with_ext.push(".md");
    let with_ext = PathBuf::from(with_ext);
    if with_ext.is_file() {
        Some(with_ext)
    } else {
        None
    }
}

/// Path of `path` relative to `base`, using "." for the base itself
pub fn relative_display<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> String {
    match path.as_ref().strip_prefix(base.as_ref()) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.as_ref().display().to_string(),
    }
}
