//! Contract models for the marketplace settings store

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed local-cache key holding the serialized settings record.
pub const SETTINGS_CACHE_KEY: &str = "marketplace_settings";

/// Fixed sub-key holding the settings record inside the user metadata blob.
pub const SETTINGS_METADATA_KEY: &str = "marketplace_settings";

/// Feature flags describing marketplace vs. portfolio behavior.
///
/// Decoding is forward-compatible: fields missing from a stored record fall
/// back to the defaults and unknown fields are ignored, so new flags can be
/// added without invalidating records already in the cache or remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceSettings {
    pub automatic_delivery_enabled: bool,
    pub payment_processing_enabled: bool,
    pub email_notifications_enabled: bool,
    pub order_auto_confirmation: bool,
    pub document_auto_generation: bool,
    pub show_prices_on_projects: bool,
    pub enable_checkout_process: bool,
    /// Master toggle: marketplace when true, portfolio when false.
    pub marketplace_mode: bool,
    /// Stamp of the last applied update.
    pub last_updated: DateTime<Utc>,
}

impl Default for MarketplaceSettings {
    fn default() -> Self {
        Self {
            automatic_delivery_enabled: true,
            payment_processing_enabled: true,
            email_notifications_enabled: true,
            order_auto_confirmation: true,
            document_auto_generation: true,
            show_prices_on_projects: true,
            enable_checkout_process: true,
            marketplace_mode: true,
            last_updated: Utc::now(),
        }
    }
}

impl MarketplaceSettings {
    /// Marketplace mode: payments, checkout and automatic delivery active.
    pub fn is_marketplace_mode(&self) -> bool {
        self.marketplace_mode
    }

    /// Portfolio mode: purchasing disabled, inventory display-only.
    ///
    /// Always the negation of [`is_marketplace_mode`](Self::is_marketplace_mode);
    /// the mode is derived from the master flag, never stored separately.
    pub fn is_portfolio_mode(&self) -> bool {
        !self.marketplace_mode
    }

    /// Merge a partial update over this record and stamp `last_updated`.
    pub fn apply(&self, patch: &SettingsPatch, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        if let Some(v) = patch.automatic_delivery_enabled {
            next.automatic_delivery_enabled = v;
        }
        if let Some(v) = patch.payment_processing_enabled {
            next.payment_processing_enabled = v;
        }
        if let Some(v) = patch.email_notifications_enabled {
            next.email_notifications_enabled = v;
        }
        if let Some(v) = patch.order_auto_confirmation {
            next.order_auto_confirmation = v;
        }
        if let Some(v) = patch.document_auto_generation {
            next.document_auto_generation = v;
        }
        if let Some(v) = patch.show_prices_on_projects {
            next.show_prices_on_projects = v;
        }
        if let Some(v) = patch.enable_checkout_process {
            next.enable_checkout_process = v;
        }
        if let Some(v) = patch.marketplace_mode {
            next.marketplace_mode = v;
        }
        // last_updated must strictly advance even when the clock does not
        next.last_updated = if now > self.last_updated {
            now
        } else {
            self.last_updated + Duration::nanoseconds(1)
        };
        next
    }
}

/// Partial update: any subset of the flag fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_delivery_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_processing_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_auto_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_auto_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_prices_on_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_checkout_process: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_mode: Option<bool>,
}

/// Where a published record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSource {
    /// Statically known defaults
    Defaults,
    /// Device-local cache (fast, possibly stale)
    Cache,
    /// Remote user metadata (authoritative)
    Remote,
}

/// Result of the remote leg of a load or update.
///
/// Remote failures never surface as errors; callers that care about sync
/// state inspect this tag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// No identity was available; the record lives in the local cache only
    LocalOnly,
    /// The record was read from or written to the remote metadata store
    Synced,
    /// A remote step was attempted and failed; local state stands
    Failed,
}

/// Resolved user identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: Uuid,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: MarketplaceSettings =
            serde_json::from_str(r#"{"marketplace_mode": false}"#).unwrap();

        assert!(!parsed.marketplace_mode);
        assert!(parsed.automatic_delivery_enabled);
        assert!(parsed.payment_processing_enabled);
        assert!(parsed.enable_checkout_process);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed: Result<MarketplaceSettings, _> =
            serde_json::from_str(r#"{"marketplace_mode": true, "future_flag": 42}"#);
        assert!(parsed.is_ok());
    }

    #[test]
    fn apply_merges_and_advances_stamp() {
        let base = MarketplaceSettings::default();
        let patch = SettingsPatch {
            marketplace_mode: Some(false),
            email_notifications_enabled: Some(false),
            ..Default::default()
        };

        let next = base.apply(&patch, Utc::now());

        assert!(!next.marketplace_mode);
        assert!(!next.email_notifications_enabled);
        assert!(next.payment_processing_enabled);
        assert!(next.last_updated > base.last_updated);
    }

    #[test]
    fn apply_advances_stamp_against_a_stalled_clock() {
        let base = MarketplaceSettings::default();
        let next = base.apply(&SettingsPatch::default(), base.last_updated);
        assert!(next.last_updated > base.last_updated);
    }

    #[test]
    fn mode_views_derive_from_master_flag() {
        let mut settings = MarketplaceSettings::default();
        assert!(settings.is_marketplace_mode());
        assert!(!settings.is_portfolio_mode());

        settings.marketplace_mode = false;
        assert!(!settings.is_marketplace_mode());
        assert!(settings.is_portfolio_mode());
    }
}
