use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;
use uuid::Uuid;

/// Writes uploaded files under a configured root directory and hands back
/// paths relative to that root; only the relative path is ever persisted.
#[derive(Clone)]
pub struct StorageService {
    root: PathBuf,
}

impl StorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store `bytes` under the root, prefixing the original file name with a
    /// UUID to avoid collisions. Returns the relative path.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let file_name = sanitize_file_name(original_name)?;
        let stored_name = format!("{}_{}", Uuid::new_v4(), file_name);

        tokio::fs::create_dir_all(&self.root).await?;
        let full_path = self.root.join(&stored_name);
        tokio::fs::write(&full_path, bytes).await?;

        info!("Stored upload {} ({} bytes)", stored_name, bytes.len());
        Ok(stored_name)
    }

    /// Resolve a stored relative path, refusing anything that would escape
    /// the root.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let rel = Path::new(relative);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("invalid stored path: {}", relative);
        }
        Ok(self.root.join(rel))
    }
}

fn sanitize_file_name(name: &str) -> Result<String> {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    if base.is_empty() || base == "." || base == ".." {
        bail!("invalid file name: {}", name);
    }
    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn store_returns_relative_path_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path());

        let rel = storage.store("counts.xlsx", b"spreadsheet").await.unwrap();
        assert!(rel.ends_with("_counts.xlsx"));
        assert!(!rel.contains('/'));

        let full = storage.resolve(&rel).unwrap();
        let bytes = tokio::fs::read(full).await.unwrap();
        assert_eq!(bytes, b"spreadsheet");
    }

    #[tokio::test]
    async fn resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path());

        assert!(storage.resolve("../etc/passwd").is_err());
        assert!(storage.resolve("/etc/passwd").is_err());
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("a/b/c.txt").unwrap(), "c.txt");
        assert!(sanitize_file_name("..").is_err());
        assert!(sanitize_file_name("").is_err());
    }
}
