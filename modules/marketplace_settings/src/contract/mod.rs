//! Contract layer - public API for consumers of the settings store
//!
//! Models here are serde-visible on purpose: the same record shape is
//! persisted in the local cache and under the remote metadata sub-key.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use error::SettingsError;
pub use model::{
    MarketplaceSettings, SettingsPatch, SettingsSource, SyncOutcome, UserIdentity,
    SETTINGS_CACHE_KEY, SETTINGS_METADATA_KEY,
};
