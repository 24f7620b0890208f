//! Maps request targets onto files under a document root.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;

/// Index document served for directory targets.
pub const DEFAULT_INDEX: &str = "index.html";

/// Result of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    /// Absolute path of an existing regular file inside the root
    Found(PathBuf),
    NotFound,
}

impl ResolvedResource {
    pub fn is_found(&self) -> bool {
        matches!(self, ResolvedResource::Found(_))
    }
}

/// A canonicalized document root plus the index file name.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    index: String,
}

impl DocumentRoot {
    /// Canonicalizes `root`, which must be an existing directory.
    pub fn new(root: impl AsRef<Path>, index: impl Into<String>) -> anyhow::Result<Self> {
        let root = root.as_ref();
        let canonical = std::fs::canonicalize(root)
            .with_context(|| format!("invalid document root {}", root.display()))?;

        if !canonical.is_dir() {
            anyhow::bail!("document root {} is not a directory", canonical.display());
        }

        Ok(Self {
            root: canonical,
            index: index.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Resolves `target` to a regular file under the root.
    ///
    /// A directory resolves to its index file. Targets that climb out of the
    /// root with `..`, directly or through a symlink, are not found.
    pub async fn resolve(&self, target: &str) -> ResolvedResource {
        let Some(relative) = normalize_target(target) else {
            tracing::warn!(path = %target, "Rejected target escaping document root");
            return ResolvedResource::NotFound;
        };

        let mut candidate = self.root.join(relative);

        match tokio::fs::metadata(&candidate).await {
            Ok(meta) if meta.is_dir() => candidate.push(&self.index),
            Ok(_) => {}
            Err(_) => return ResolvedResource::NotFound,
        }

        let canonical = match tokio::fs::canonicalize(&candidate).await {
            Ok(path) => path,
            Err(_) => return ResolvedResource::NotFound,
        };

        if !canonical.starts_with(&self.root) {
            tracing::warn!(
                path = %target,
                resolved = %canonical.display(),
                "Rejected path resolving outside document root"
            );
            return ResolvedResource::NotFound;
        }

        match tokio::fs::metadata(&canonical).await {
            Ok(meta) if meta.is_file() => ResolvedResource::Found(canonical),
            _ => ResolvedResource::NotFound,
        }
    }
}

/// Turns a target into a root-relative path, folding `.` and `..` lexically.
///
/// Returns `None` when the target would leave the root, or carries a NUL byte
/// or a path prefix. Query strings are kept verbatim as part of the name.
pub fn normalize_target(target: &str) -> Option<PathBuf> {
    if target.contains('\0') {
        return None;
    }

    let trimmed = target.strip_prefix('/').unwrap_or(target);
    let mut normalized = PathBuf::new();

    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(normalized)
}
