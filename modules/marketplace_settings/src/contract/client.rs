//! Client trait for consumers of the settings store
//!
//! This trait is what every admin screen depends on. NO ambient singleton -
//! the implementation is passed explicitly to anything that reads or mutates
//! settings.

use super::error::SettingsError;
use super::model::{MarketplaceSettings, SettingsPatch, SyncOutcome};
use async_trait::async_trait;

/// Settings store API for in-process consumers
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Snapshot of the current record
    fn settings(&self) -> MarketplaceSettings;

    /// True while a load is in flight
    fn loading(&self) -> bool;

    /// Last user-visible error, if any
    fn error(&self) -> Option<String>;

    /// Derived view of the master flag; never stored independently
    fn is_portfolio_mode(&self) -> bool;

    /// Derived view of the master flag; never stored independently
    fn is_marketplace_mode(&self) -> bool;

    /// Apply a partial update: optimistic publish, synchronous cache write,
    /// best-effort remote write. Fails only when the cache write fails.
    async fn update(&self, patch: SettingsPatch) -> Result<SyncOutcome, SettingsError>;

    /// Force re-synchronization from cache and remote (e.g. after an
    /// out-of-band login). Never fails; remote problems degrade silently.
    async fn refresh(&self) -> SyncOutcome;
}
