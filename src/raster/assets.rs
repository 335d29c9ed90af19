//! Vector icon lookup by name.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CursorError, Result};
use crate::model::{ASSETS_SUBDIR, ASSET_EXTENSION};

/// Resolves an icon name (for example `cursor-heart`) to SVG bytes.
pub trait AssetStore {
    fn load(&self, name: &str) -> Result<Vec<u8>>;
}

fn not_found(name: &str) -> CursorError {
    CursorError::AssetNotFound {
        name: name.to_string(),
    }
}

/// Names are bare identifiers; anything that could escape the root is rejected.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Assets stored as `<name>.svg` files under a root directory.
///
/// Looks in `<root>/Resources/` first, then `<root>/`.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for `name`, in lookup order.
    pub fn candidates(&self, name: &str) -> [PathBuf; 2] {
        let file = format!("{name}.{ASSET_EXTENSION}");
        [self.root.join(ASSETS_SUBDIR).join(&file), self.root.join(file)]
    }
}

impl AssetStore for DirAssetStore {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        if !is_valid_name(name) {
            return Err(not_found(name));
        }
        for path in self.candidates(name) {
            match fs::read(&path) {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => log::warn!("[ASSETS] Cannot read {}: {}", path.display(), e),
            }
        }
        Err(not_found(name))
    }
}

/// In-memory assets, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(name.to_string(), bytes.into());
    }

    pub fn with(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetStore for MemoryAssetStore {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        self.assets.get(name).cloned().ok_or_else(|| not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mouse-fun-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join(ASSETS_SUBDIR)).unwrap();
        dir
    }

    #[test]
    fn test_resources_subdir_wins() {
        let dir = scratch_dir("subdir");
        fs::write(dir.join("Resources/cursor-star.svg"), b"inner").unwrap();
        fs::write(dir.join("cursor-star.svg"), b"outer").unwrap();

        let store = DirAssetStore::new(&dir);
        assert_eq!(store.load("cursor-star").unwrap(), b"inner");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_falls_back_to_root() {
        let dir = scratch_dir("root");
        fs::write(dir.join("cursor-moon.svg"), b"moon").unwrap();

        let store = DirAssetStore::new(&dir);
        assert_eq!(store.load("cursor-moon").unwrap(), b"moon");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_asset() {
        let dir = scratch_dir("missing");
        let store = DirAssetStore::new(&dir);
        assert_eq!(
            store.load("cursor-heart"),
            Err(CursorError::AssetNotFound {
                name: "cursor-heart".into()
            })
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_path_like_names_are_rejected() {
        let store = DirAssetStore::new("/");
        assert!(store.load("../etc/passwd").is_err());
        assert!(store.load("").is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryAssetStore::new().with("a", b"svg".to_vec());
        assert_eq!(store.load("a").unwrap(), b"svg");
        assert!(matches!(
            store.load("b"),
            Err(CursorError::AssetNotFound { .. })
        ));
    }
}
