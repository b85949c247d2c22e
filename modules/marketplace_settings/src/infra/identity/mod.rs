//! Identity adapters

pub mod http;

pub use http::{HttpIdentityProvider, IdentityConfig};

use crate::contract::{MarketplaceSettings, UserIdentity};
use crate::domain::repository::IdentityProvider;
use anyhow::Result;
use async_trait::async_trait;

/// Identity provider for anonymous/offline operation: never yields a user,
/// so the store runs purely against the local cache.
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn current_user(&self) -> Result<Option<UserIdentity>> {
        Ok(None)
    }

    async fn read_settings_metadata(&self) -> Result<Option<serde_json::Value>> {
        Ok(None)
    }

    async fn write_settings_metadata(&self, _settings: &MarketplaceSettings) -> Result<()> {
        anyhow::bail!("no active session")
    }
}
