//! Domain service - settings load/update orchestration

use crate::config::Config;
use crate::contract::{
    MarketplaceSettings, SettingsError, SettingsPatch, SettingsSource, SyncOutcome,
};
use super::events::{EventPublisher, SettingsEvent};
use super::repository::{IdentityProvider, SettingsCache};
use chrono::Utc;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// In-memory store state, guarded by a single lock.
struct StoreState {
    settings: MarketplaceSettings,
    loading: bool,
    error: Option<String>,
    /// Bumped on every publish. A remote result fetched against an older
    /// version lost the race to a newer publish and is discarded.
    version: u64,
}

/// Domain service owning the canonical settings record.
///
/// Load publishes up to twice (cache tier, then remote tier); update
/// publishes optimistically before persisting. Concurrent load/update
/// invocations are not serialized - the version counter resolves the
/// resulting races in favor of the newest publish.
pub struct Service {
    cache: Arc<dyn SettingsCache>,
    identity: Arc<dyn IdentityProvider>,
    event_publisher: Arc<dyn EventPublisher>,
    config: Config,
    state: RwLock<StoreState>,
    shutdown: CancellationToken,
}

impl Service {
    /// Create a new service instance starting from the default record
    pub fn new(
        cache: Arc<dyn SettingsCache>,
        identity: Arc<dyn IdentityProvider>,
        event_publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        tracing::info!(cache_key = %config.cache_key, "marketplace settings service initialized");
        Self {
            cache,
            identity,
            event_publisher,
            config,
            state: RwLock::new(StoreState {
                settings: MarketplaceSettings::default(),
                loading: false,
                error: None,
                version: 0,
            }),
            shutdown: CancellationToken::new(),
        }
    }

    // ===== Read accessors =====

    /// Snapshot of the current record
    pub fn settings(&self) -> MarketplaceSettings {
        self.state.read().settings.clone()
    }

    /// True while a load is in flight
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Last user-visible error, if any
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Derived view of the master flag
    pub fn is_marketplace_mode(&self) -> bool {
        self.state.read().settings.is_marketplace_mode()
    }

    /// Derived view of the master flag
    pub fn is_portfolio_mode(&self) -> bool {
        self.state.read().settings.is_portfolio_mode()
    }

    /// Abort in-flight and future remote steps. Local cache operation
    /// continues; remote legs resolve as failed and degrade silently.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    // ===== Operations =====

    /// Load the record: cache tier first for a fast possibly-stale publish,
    /// then the authoritative remote tier.
    ///
    /// Only a cache failure surfaces, and only as the store's error state;
    /// every remote failure degrades silently to whatever the cache tier
    /// produced.
    pub async fn load(&self) -> SyncOutcome {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        // Step 1: local cache, fast and possibly stale.
        match self.read_cache() {
            Ok(Some(settings)) => {
                let event = SettingsEvent::loaded(&settings, SettingsSource::Cache);
                self.publish(settings, event).await;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read settings cache");
                self.state.write().error = Some("Failed to load settings".to_string());
            }
        }

        // Step 2: remote tier, authoritative when present.
        let version_before = self.state.read().version;
        let outcome = match self.load_remote().await {
            Ok(Some(settings)) => {
                if self.state.read().version != version_before {
                    tracing::debug!("discarding remote settings; store advanced during fetch");
                    SyncOutcome::LocalOnly
                } else {
                    let event = SettingsEvent::loaded(&settings, SettingsSource::Remote);
                    self.publish(settings.clone(), event).await;
                    // Mirror the authoritative copy into the cache tier
                    if let Err(e) = self.write_cache(&settings) {
                        tracing::warn!(error = %e, "failed to mirror remote settings into cache");
                    }
                    SyncOutcome::Synced
                }
            }
            Ok(None) => SyncOutcome::LocalOnly,
            Err(e) => {
                tracing::debug!(error = %e, "remote settings unavailable, using local state");
                SyncOutcome::Failed
            }
        };

        self.state.write().loading = false;
        outcome
    }

    /// Explicit re-synchronization, e.g. after an out-of-band login
    pub async fn refresh(&self) -> SyncOutcome {
        self.load().await
    }

    /// Apply a partial update.
    ///
    /// The merged record is published before anything is persisted. The
    /// cache write is the durability baseline and its failure is returned to
    /// the caller - without rolling back the in-memory record. The remote
    /// write is best-effort and reported only through the outcome tag.
    pub async fn update(&self, patch: SettingsPatch) -> Result<SyncOutcome, SettingsError> {
        self.state.write().error = None;

        let next = {
            let state = self.state.read();
            state.settings.apply(&patch, Utc::now())
        };

        // Optimistic publish: consumers see the change before persistence.
        let event = SettingsEvent::updated(&next);
        self.publish(next.clone(), event).await;

        if let Err(e) = self.write_cache(&next) {
            self.state.write().error = Some("Failed to update settings".to_string());
            return Err(e);
        }

        let outcome = match self.push_remote(&next).await {
            Ok(true) => SyncOutcome::Synced,
            Ok(false) => SyncOutcome::LocalOnly,
            Err(e) => {
                tracing::debug!(error = %e, "remote settings write failed, saved locally");
                SyncOutcome::Failed
            }
        };

        // Let subscribers observe the publish before the caller proceeds.
        tokio::task::yield_now().await;

        Ok(outcome)
    }

    // ===== Helper methods =====

    /// Replace the current record and notify subscribers
    async fn publish(&self, settings: MarketplaceSettings, event: SettingsEvent) {
        {
            let mut state = self.state.write();
            state.settings = settings;
            state.version += 1;
        }
        if let Err(e) = self.event_publisher.publish(event).await {
            // Log error but don't fail the operation
            tracing::warn!(error = %e, "failed to publish settings event");
        }
    }

    fn read_cache(&self) -> Result<Option<MarketplaceSettings>, SettingsError> {
        let bytes = self
            .cache
            .get(&self.config.cache_key)
            .map_err(|e| SettingsError::CacheRead {
                reason: e.to_string(),
            })?;
        match bytes {
            Some(bytes) => {
                // Missing fields fall back to defaults here
                let settings = serde_json::from_slice::<MarketplaceSettings>(&bytes).map_err(
                    |e| SettingsError::CacheRead {
                        reason: e.to_string(),
                    },
                )?;
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    fn write_cache(&self, settings: &MarketplaceSettings) -> Result<(), SettingsError> {
        let bytes =
            serde_json::to_vec(settings).map_err(|e| SettingsError::Serialization {
                reason: e.to_string(),
            })?;
        self.cache
            .put(&self.config.cache_key, &bytes)
            .map_err(|e| SettingsError::CacheWrite {
                reason: e.to_string(),
            })
    }

    /// Resolve the identity and read the remote record, if both exist
    async fn load_remote(&self) -> anyhow::Result<Option<MarketplaceSettings>> {
        let Some(user) = self.remote_step(self.identity.current_user()).await? else {
            return Ok(None);
        };
        tracing::debug!(user = %user.id, "resolved identity, reading remote settings");

        let Some(value) = self
            .remote_step(self.identity.read_settings_metadata())
            .await?
        else {
            return Ok(None);
        };
        let settings = serde_json::from_value::<MarketplaceSettings>(value)?;
        Ok(Some(settings))
    }

    /// Write the record to the remote metadata blob when an identity exists.
    /// Returns false for an anonymous session.
    async fn push_remote(&self, settings: &MarketplaceSettings) -> anyhow::Result<bool> {
        let Some(user) = self.remote_step(self.identity.current_user()).await? else {
            return Ok(false);
        };
        tracing::debug!(user = %user.id, "writing settings to remote metadata");

        self.remote_step(self.identity.write_settings_metadata(settings))
            .await?;
        Ok(true)
    }

    /// Run one remote call under the configured timeout and the shutdown
    /// token. A hung remote call must not leave the store loading forever.
    async fn remote_step<T, F>(&self, fut: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        tokio::select! {
            _ = self.shutdown.cancelled() => {
                anyhow::bail!("remote step cancelled by shutdown")
            }
            res = tokio::time::timeout(self.config.remote_timeout, fut) => {
                res.map_err(|_| {
                    anyhow::anyhow!(
                        "remote step timed out after {:?}",
                        self.config.remote_timeout
                    )
                })?
            }
        }
    }
}
