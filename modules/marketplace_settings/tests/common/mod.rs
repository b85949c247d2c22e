//! Common test utilities: in-memory implementations of the store's ports
#![allow(dead_code)] // each integration test binary uses its own subset

use anyhow::Result;
use async_trait::async_trait;
use marketplace_settings::domain::repository::{IdentityProvider, SettingsCache};
use marketplace_settings::{MarketplaceSettings, UserIdentity};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// In-memory key-value cache with a switchable write failure
#[derive(Clone, Default)]
pub struct MemoryCache {
    data: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with a raw JSON document
    pub fn seed(&self, key: &str, json: &str) {
        self.data
            .write()
            .insert(key.to_string(), json.as_bytes().to_vec());
    }

    /// All subsequent writes fail, as if the device store were full
    pub fn fail_writes(&self) {
        *self.fail_writes.write() = true;
    }

    /// Parse the stored document under `key`
    pub fn parsed(&self, key: &str) -> Option<serde_json::Value> {
        let data = self.data.read();
        let bytes = data.get(key)?;
        serde_json::from_slice(bytes).ok()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }
}

impl SettingsCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if *self.fail_writes.read() {
            anyhow::bail!("device store is full");
        }
        self.data.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// In-memory identity provider with switchable failures and an optional
/// read delay for race tests
#[derive(Clone, Default)]
pub struct MockIdentity {
    user: Arc<RwLock<Option<UserIdentity>>>,
    metadata: Arc<RwLock<Option<serde_json::Value>>>,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
    read_delay: Arc<RwLock<Option<Duration>>>,
    written: Arc<RwLock<Vec<serde_json::Value>>>,
}

impl MockIdentity {
    /// No session: every remote leg resolves as local-only
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Signed-in session with no stored settings metadata
    pub fn signed_in() -> Self {
        let mock = Self::default();
        *mock.user.write() = Some(UserIdentity {
            id: Uuid::new_v4(),
            email: Some("admin@atelier.example".to_string()),
        });
        mock
    }

    /// Signed-in session whose metadata already holds a settings record
    pub fn with_remote_settings(value: serde_json::Value) -> Self {
        let mock = Self::signed_in();
        *mock.metadata.write() = Some(value);
        mock
    }

    /// All subsequent identity/metadata reads fail
    pub fn fail_reads(&self) {
        *self.fail_reads.write() = true;
    }

    /// All subsequent metadata writes fail
    pub fn fail_writes(&self) {
        *self.fail_writes.write() = true;
    }

    /// Delay metadata reads, so a load's remote leg can lose a race
    pub fn delay_reads(&self, delay: Duration) {
        *self.read_delay.write() = Some(delay);
    }

    /// Replace the stored metadata, as if another device had written it
    pub fn set_remote_settings(&self, value: serde_json::Value) {
        *self.metadata.write() = Some(value);
    }

    /// Records written to the remote metadata blob, oldest first
    pub fn written(&self) -> Vec<serde_json::Value> {
        self.written.read().clone()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn current_user(&self) -> Result<Option<UserIdentity>> {
        if *self.fail_reads.read() {
            anyhow::bail!("identity service unreachable");
        }
        Ok(self.user.read().clone())
    }

    async fn read_settings_metadata(&self) -> Result<Option<serde_json::Value>> {
        let delay = *self.read_delay.read();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_reads.read() {
            anyhow::bail!("metadata read failed");
        }
        Ok(self.metadata.read().clone())
    }

    async fn write_settings_metadata(&self, settings: &MarketplaceSettings) -> Result<()> {
        if *self.fail_writes.read() {
            anyhow::bail!("metadata write failed");
        }
        let value = serde_json::to_value(settings)?;
        *self.metadata.write() = Some(value.clone());
        self.written.write().push(value);
        Ok(())
    }
}
