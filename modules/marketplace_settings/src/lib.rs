//! Marketplace Settings Module
//!
//! Dual-tier feature-flag store for the Atelier admin dashboard. A
//! device-local cache gives fast, possibly-stale reads; the identity
//! provider's per-user metadata is the authoritative copy; subscribers are
//! notified on every publish. The `marketplace_mode` master flag switches the
//! storefront between marketplace and portfolio behavior.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, MarketplaceSettings, SettingsPatch,
    SettingsSource, SyncOutcome, UserIdentity,
};

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
