//! Runtime configuration for webhook receivers.
//!
//! The only setting is the webhook secret, read from
//! `LIGHTSPARK_WEBHOOK_SECRET` and kept in a [`SecretString`] so it never ends
//! up in `Debug` output or logs.

use std::env;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use crate::{WebhookError, WebhookEvent};

/// Webhook verification settings for a server receiving Lightspark events.
#[derive(Debug)]
pub struct WebhookConfig {
    secret: SecretString,
}

impl WebhookConfig {
    /// The env var holding the webhook secret.
    pub const SECRET_ENV_VAR: &'static str = "LIGHTSPARK_WEBHOOK_SECRET";

    pub fn new(secret: String) -> Self {
        Self {
            secret: SecretString::new(secret),
        }
    }

    /// Read the webhook secret from `$LIGHTSPARK_WEBHOOK_SECRET`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_value(env::var(Self::SECRET_ENV_VAR))
    }

    fn from_env_value(
        value: Result<String, env::VarError>,
    ) -> anyhow::Result<Self> {
        let secret = value.with_context(|| {
            format!("Missing '{}' in env", Self::SECRET_ENV_VAR)
        })?;
        anyhow::ensure!(
            !secret.trim().is_empty(),
            "'{}' is empty",
            Self::SECRET_ENV_VAR,
        );
        Ok(Self::new(secret))
    }

    /// [`crate::verify_and_parse`] with the configured secret.
    pub fn verify_and_parse(
        &self,
        data: &[u8],
        hexdigest: &str,
    ) -> Result<WebhookEvent, WebhookError> {
        crate::verify_and_parse(data, hexdigest, self.secret.expose_secret())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn secret_from_env_value() {
        let config = WebhookConfig::from_env_value(Ok("s3cret".to_owned()))
            .unwrap();
        assert_eq!(config.secret.expose_secret(), "s3cret");
        // The secret never shows up in logs.
        assert!(!format!("{config:?}").contains("s3cret"));

        let err = WebhookConfig::from_env_value(Err(env::VarError::NotPresent))
            .unwrap_err();
        assert!(format!("{err:#}").contains("LIGHTSPARK_WEBHOOK_SECRET"));

        let err =
            WebhookConfig::from_env_value(Ok("  ".to_owned())).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn config_verifies_with_its_secret() {
        let body = br#"{"event_type": "NODE_STATUS", "event_id": "1615c8be5aa44e429eba700db2ed8ca5", "timestamp": "2023-05-17T23:56:47.874449+00:00", "entity_id": "lightning_node:01882c25-157a-f96b-0000-362d42b64397"}"#;
        let digest =
            "62a8829aeb48b4142533520b1f7f86cdb1ee7d718bf3ea15bc1c662d4c453b74";

        let config = WebhookConfig::new(
            "3gZ5oQQUASYmqQNuEk0KambNMVkOADDItIJjzUlAWjX".to_owned(),
        );
        let event = config.verify_and_parse(body, digest).unwrap();
        assert_eq!(event.event_id, "1615c8be5aa44e429eba700db2ed8ca5");

        let config = WebhookConfig::new("wrong".to_owned());
        let err = config.verify_and_parse(body, digest).unwrap_err();
        assert!(matches!(err, WebhookError::InvalidSignature));
    }
}
