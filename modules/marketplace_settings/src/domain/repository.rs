//! Port traits for the store's external collaborators
//!
//! These traits define the interface the service depends on.
//! Implementations are in infra/.

use crate::contract::{MarketplaceSettings, UserIdentity};
use anyhow::Result;
use async_trait::async_trait;

/// Device-local key-value byte store.
///
/// Synchronous access, no transactions. The store is shared by every
/// consumer on the device; concurrent writers are last-write-wins at the
/// granularity of the whole record.
pub trait SettingsCache: Send + Sync {
    /// Read the bytes stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// Session/identity backend holding the per-user metadata blob
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the current identity; `None` for an anonymous session
    async fn current_user(&self) -> Result<Option<UserIdentity>>;

    /// Read the settings sub-object from the current user's metadata.
    ///
    /// Returns `None` when there is no session or the sub-key has never
    /// been written.
    async fn read_settings_metadata(&self) -> Result<Option<serde_json::Value>>;

    /// Overwrite the settings sub-object in the current user's metadata
    async fn write_settings_metadata(&self, settings: &MarketplaceSettings) -> Result<()>;
}
