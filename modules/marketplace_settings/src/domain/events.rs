//! Domain events for the settings store
//!
//! An event is published on every state publish, before the triggering
//! operation returns. Subscribers that need serialized handling must queue
//! on their side; the store itself never blocks on a slow subscriber.

use crate::contract::model::{MarketplaceSettings, SettingsSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Domain event types for settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// A record was published during load (cache or remote tier)
    SettingsLoaded(SettingsLoadedEvent),
    /// A record was published by an update
    SettingsUpdated(SettingsUpdatedEvent),
}

/// Event data for a load-time publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsLoadedEvent {
    /// The record as published
    pub settings: MarketplaceSettings,
    /// Which tier produced the record
    pub source: SettingsSource,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for an update publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdatedEvent {
    /// The record as published (optimistic; persistence may still fail)
    pub settings: MarketplaceSettings,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl SettingsEvent {
    /// Create a new SettingsLoaded event
    pub fn loaded(settings: &MarketplaceSettings, source: SettingsSource) -> Self {
        SettingsEvent::SettingsLoaded(SettingsLoadedEvent {
            settings: settings.clone(),
            source,
            timestamp: Utc::now(),
        })
    }

    /// Create a new SettingsUpdated event
    pub fn updated(settings: &MarketplaceSettings) -> Self {
        SettingsEvent::SettingsUpdated(SettingsUpdatedEvent {
            settings: settings.clone(),
            timestamp: Utc::now(),
        })
    }

    /// The record carried by the event
    pub fn settings(&self) -> &MarketplaceSettings {
        match self {
            SettingsEvent::SettingsLoaded(e) => &e.settings,
            SettingsEvent::SettingsUpdated(e) => &e.settings,
        }
    }
}

/// Event publisher trait for notifying consumers of state publishes
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a settings event
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when notifications are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: SettingsEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

/// Broadcast-channel publisher.
///
/// Slow subscribers drop the oldest events rather than blocking the store.
pub struct BroadcastPublisher {
    tx: broadcast::Sender<SettingsEvent>,
}

impl BroadcastPublisher {
    /// Create a publisher with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all future settings events
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.tx.subscribe()
    }
}

#[async_trait::async_trait]
impl EventPublisher for BroadcastPublisher {
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()> {
        // A send error only means there are no subscribers right now
        let _ = self.tx.send(event);
        Ok(())
    }
}
