//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{
    MarketplaceSettings, SettingsApi, SettingsError, SettingsPatch, SyncOutcome,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service.
///
/// This client is used for in-process communication; every admin screen
/// receives a clone instead of reaching for a global.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    fn settings(&self) -> MarketplaceSettings {
        self.service.settings()
    }

    fn loading(&self) -> bool {
        self.service.loading()
    }

    fn error(&self) -> Option<String> {
        self.service.error()
    }

    fn is_portfolio_mode(&self) -> bool {
        self.service.is_portfolio_mode()
    }

    fn is_marketplace_mode(&self) -> bool {
        self.service.is_marketplace_mode()
    }

    async fn update(&self, patch: SettingsPatch) -> Result<SyncOutcome, SettingsError> {
        self.service.update(patch).await
    }

    async fn refresh(&self) -> SyncOutcome {
        self.service.refresh().await
    }
}
