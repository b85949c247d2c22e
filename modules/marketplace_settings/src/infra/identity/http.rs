//! HTTP identity provider
//!
//! Talks to a GoTrue-compatible auth endpoint. The user record carries an
//! arbitrary metadata object; the settings record lives under the fixed
//! `marketplace_settings` sub-key. Login/refresh flows are out of scope -
//! the adapter only consumes an existing session token.

use crate::contract::model::{MarketplaceSettings, UserIdentity, SETTINGS_METADATA_KEY};
use crate::domain::repository::IdentityProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

/// Connection settings for the auth endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL, e.g. `https://auth.atelier.example`
    pub base_url: String,
    /// Project API key, sent as the `apikey` header
    pub api_key: String,
    /// Bearer token for the current session, if any
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Identity provider backed by the auth endpoint's user API
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    config: IdentityConfig,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

impl HttpIdentityProvider {
    /// Create a provider for the given endpoint
    pub fn new(config: IdentityConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("atelier-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building http client")?;
        Ok(Self { http, config })
    }

    async fn fetch_user(&self) -> Result<Option<UserResponse>> {
        let Some(token) = &self.config.access_token else {
            // Anonymous session
            return Ok(None);
        };

        let resp = self
            .http
            .get(format!("{}/auth/v1/user", self.config.base_url))
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .send()
            .await
            .context("requesting current user")?;

        // An expired session is an anonymous session, not a failure
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }

        let user = resp
            .error_for_status()
            .context("current user request failed")?
            .json::<UserResponse>()
            .await
            .context("decoding user response")?;
        Ok(Some(user))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_user(&self) -> Result<Option<UserIdentity>> {
        Ok(self.fetch_user().await?.map(|u| UserIdentity {
            id: u.id,
            email: u.email,
        }))
    }

    async fn read_settings_metadata(&self) -> Result<Option<serde_json::Value>> {
        let Some(user) = self.fetch_user().await? else {
            return Ok(None);
        };
        Ok(user.user_metadata.get(SETTINGS_METADATA_KEY).cloned())
    }

    async fn write_settings_metadata(&self, settings: &MarketplaceSettings) -> Result<()> {
        let Some(token) = &self.config.access_token else {
            anyhow::bail!("no active session");
        };

        let mut metadata = serde_json::Map::new();
        metadata.insert(
            SETTINGS_METADATA_KEY.to_string(),
            serde_json::to_value(settings).context("encoding settings record")?,
        );
        let body = serde_json::json!({ "data": metadata });

        self.http
            .put(format!("{}/auth/v1/user", self.config.base_url))
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .context("updating user metadata")?
            .error_for_status()
            .context("metadata update failed")?;
        Ok(())
    }
}
