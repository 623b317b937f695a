//! Path resolution across the project, override and vendor roots.
//!
//! Paths coming from configuration may use either separator, carry leading
//! slashes or contain `.`/`..` segments. Everything that leaves this module
//! is absolute and normalized, and short forms are rendered with `/`.

use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve `path` to its canonical absolute form.
///
/// Resolves `.`, `..` and symlinks. The path must exist.
///
/// # Errors
/// Returns [`Error::Path`] if the path does not resolve.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| Error::path(path, e))
}

/// Join `segments` onto `root` and normalize the result lexically.
///
/// Segments are treated as relative even when they start with a separator,
/// and both `/` and `\` split them. The result is not required to exist.
pub fn join<I, S>(root: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = root.to_path_buf();
    for segment in segments {
        for part in segment
            .as_ref()
            .split(['/', '\\'])
            .filter(|p| !p.is_empty())
        {
            joined.push(part);
        }
    }
    clean(&joined)
}

/// Join and require the result to exist, returning its canonical form.
///
/// # Errors
/// Returns [`Error::Path`] if the joined path does not resolve.
pub fn resolve<I, S>(root: &Path, segments: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize(&join(root, segments))
}

/// Lexically remove `.` and `..` components.
///
/// `..` never climbs above the root of an absolute path.
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(out.last(), Some(Component::RootDir | Component::Prefix(_)));
                if matches!(out.last(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !at_root {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Render `path` with forward slashes.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Render the short, `root`-relative form of `path`.
///
/// Paths outside `root` are rendered unchanged. The root itself renders as
/// an empty string.
#[must_use]
pub fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => to_slash(relative).trim_start_matches('/').to_string(),
        Err(_) => to_slash(path),
    }
}
