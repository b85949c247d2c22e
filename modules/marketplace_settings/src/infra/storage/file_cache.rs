//! File-backed settings cache
//!
//! One document per cache key, stored as `<dir>/<key>.json` under the user
//! config directory. No locking: concurrent writers on the same device are
//! last-write-wins for the whole file.

use crate::domain::repository::SettingsCache;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Device-local cache rooted at a directory
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    /// Cache rooted at the platform config directory, e.g.
    /// `~/.config/<app>/` on Linux
    pub fn in_config_dir(app: &str) -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app);
        Self { dir }
    }

    /// Cache rooted at an explicit directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsCache for JsonFileCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes =
            fs::read(&path).with_context(|| format!("reading cache file {}", path.display()))?;
        Ok(Some(bytes))
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating cache directory {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, bytes)
            .with_context(|| format!("writing cache file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());

        assert!(cache.get("never_written").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path().join("nested"));

        cache.put("marketplace_settings", br#"{"marketplace_mode":false}"#).unwrap();

        let bytes = cache.get("marketplace_settings").unwrap().unwrap();
        assert_eq!(bytes, br#"{"marketplace_mode":false}"#);
    }

    #[test]
    fn test_put_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JsonFileCache::new(dir.path());

        cache.put("key", b"first").unwrap();
        cache.put("key", b"second").unwrap();

        assert_eq!(cache.get("key").unwrap().unwrap(), b"second");
    }
}
