//! Verify and parse the webhook events Lightspark POSTs to your server.
//!
//! Every request carries an HMAC-SHA256 of the raw body, keyed with the
//! webhook secret from the Lightspark API configuration, hex-encoded in the
//! [`SIGNATURE_HEADER`] header. Always verify before trusting the body:
//!
//! ```ignore
//! let hexdigest = headers.get(SIGNATURE_HEADER)?;
//! let event = config.verify_and_parse(&body, hexdigest)?;
//! ```

/// [`WebhookConfig`].
pub mod config;

use lightspark_objects::{
    decode::{self, FromJson, Path},
    enums::{BitcoinNetwork, RemoteSigningSubEventType, WebhookEventType},
    error::DecodeError,
    types::{EntityId, Timestamp},
};
use ring::hmac;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub use crate::config::WebhookConfig;

/// The header holding the hex-encoded HMAC-SHA256 of the request body.
pub const SIGNATURE_HEADER: &str = "lightspark-signature";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Webhook message hash does not match signature")]
    InvalidSignature,

    #[error("Webhook body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed webhook event: {0}")]
    Decode(#[from] DecodeError),
}

/// A webhook notification.
///
/// The event only names the entity that changed; query the API for its
/// current state.
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookEvent {
    pub event_type: WebhookEventType,
    pub event_id: String,
    pub timestamp: Timestamp,
    pub entity_id: EntityId,
    pub wallet_id: Option<EntityId>,
    /// Event-specific payload, e.g. the signing request of a
    /// `REMOTE_SIGNING` event. Numbers are kept exactly as sent.
    pub data: Option<Map<String, Value>>,
}

impl FromJson for WebhookEvent {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        let object = decode::expect_object(value, path)?;
        Ok(Self {
            event_type: decode::field(object, "event_type", path)?,
            event_id: decode::field(object, "event_id", path)?,
            timestamp: decode::field(object, "timestamp", path)?,
            entity_id: decode::field(object, "entity_id", path)?,
            wallet_id: decode::field(object, "wallet_id", path)?,
            data: decode::field(object, "data", path)?,
        })
    }
}

impl WebhookEvent {
    /// Decode the member `key` of [`WebhookEvent::data`].
    pub fn data_field<T: FromJson>(&self, key: &str) -> Result<T, DecodeError> {
        let root = Path::Root;
        let data_path = root.key("data");
        match &self.data {
            Some(data) => decode::field(data, key, data_path),
            None => T::absent(data_path),
        }
    }

    /// The signing request kind; `None` unless this is a `REMOTE_SIGNING`
    /// event.
    pub fn remote_signing_sub_event_type(
        &self,
    ) -> Result<Option<RemoteSigningSubEventType>, DecodeError> {
        if self.event_type != WebhookEventType::RemoteSigning {
            return Ok(None);
        }
        self.data_field("sub_event_type").map(Some)
    }

    /// The network of the node asking for a signature; `None` unless this is
    /// a `REMOTE_SIGNING` event.
    pub fn bitcoin_network(
        &self,
    ) -> Result<Option<BitcoinNetwork>, DecodeError> {
        if self.event_type != WebhookEventType::RemoteSigning {
            return Ok(None);
        }
        self.data_field("bitcoin_network").map(Some)
    }
}

/// Parse a webhook body without checking its signature.
pub fn parse(data: &[u8]) -> Result<WebhookEvent, WebhookError> {
    let value = serde_json::from_slice::<Value>(data)?;
    let event = WebhookEvent::decode(&value)?;
    debug!(
        event_type = %event.event_type,
        event_id = %event.event_id,
        "Parsed webhook event",
    );
    Ok(event)
}

/// Check `hexdigest` (the [`SIGNATURE_HEADER`] value, any case) against the
/// HMAC-SHA256 of `data` keyed with `webhook_secret`, then parse `data`.
pub fn verify_and_parse(
    data: &[u8],
    hexdigest: &str,
    webhook_secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    verify(data, hexdigest, webhook_secret)?;
    parse(data)
}

fn verify(
    data: &[u8],
    hexdigest: &str,
    webhook_secret: &str,
) -> Result<(), WebhookError> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, webhook_secret.as_bytes());
    // `hmac::verify` compares in constant time.
    let verified = hex::decode(hexdigest.trim())
        .ok()
        .is_some_and(|tag| hmac::verify(&key, data, &tag).is_ok());

    if verified {
        Ok(())
    } else {
        warn!(body_len = data.len(), "Rejected webhook: bad signature");
        Err(WebhookError::InvalidSignature)
    }
}

#[cfg(test)]
mod test {
    use lightspark_objects::{
        EntityRecord, Typename, error::DecodeErrorKind, test_utils::fixtures,
        unions::LightsparkNode,
    };
    use proptest::{
        arbitrary::any, collection::vec, prop_assert, proptest,
        test_runner::Config,
    };

    use serde_json::json;

    use super::*;

    const SECRET: &str = "3gZ5oQQUASYmqQNuEk0KambNMVkOADDItIJjzUlAWjX";

    const NODE_STATUS_BODY: &str = r#"{"event_type": "NODE_STATUS", "event_id": "1615c8be5aa44e429eba700db2ed8ca5", "timestamp": "2023-05-17T23:56:47.874449+00:00", "entity_id": "lightning_node:01882c25-157a-f96b-0000-362d42b64397"}"#;
    const NODE_STATUS_DIGEST: &str =
        "62a8829aeb48b4142533520b1f7f86cdb1ee7d718bf3ea15bc1c662d4c453b74";

    const WALLET_BODY: &str = r#"{"event_type": "WALLET_INCOMING_PAYMENT_FINISHED", "event_id": "1615c8be5aa44e429eba700db2ed8ca5", "timestamp": "2023-05-17T23:56:47.874449+00:00", "entity_id": "lightning_node:01882c25-157a-f96b-0000-362d42b64397", "wallet_id": "wallet:01882c25-157a-f96b-0000-362d42b64397" }"#;
    const WALLET_DIGEST: &str =
        "b4eeb95f18956b3c33b99e9effc61636effc4634f83604cb41de13470c42669a";

    const REMOTE_SIGNING_BODY: &str = r#"{"event_type": "REMOTE_SIGNING", "event_id": "8be9c360a68e420b9126b43ff6007a32", "timestamp": "2023-08-10T02:14:27.559234+00:00", "entity_id": "node_with_server_signing:0189d6bc-558d-88df-0000-502f04e71816", "data": {"sub_event_type": "GET_PER_COMMITMENT_POINT", "bitcoin_network": "TESTNET", "derivation_path": "m/3/2104864975", "per_commitment_point_idx": 281474976710654}}"#;

    #[test]
    fn verify_node_status_event() {
        logger::init_for_testing();

        let event = verify_and_parse(
            NODE_STATUS_BODY.as_bytes(),
            NODE_STATUS_DIGEST,
            SECRET,
        )
        .unwrap();

        assert_eq!(event.event_type, WebhookEventType::NodeStatus);
        assert_eq!(event.event_id, "1615c8be5aa44e429eba700db2ed8ca5");
        assert_eq!(
            event.entity_id.as_str(),
            "lightning_node:01882c25-157a-f96b-0000-362d42b64397",
        );
        assert_eq!(
            event.timestamp.to_rfc3339(),
            "2023-05-17T23:56:47.874449+00:00",
        );
        assert_eq!(event.wallet_id, None);
        assert_eq!(event.data, None);
        assert_eq!(event.remote_signing_sub_event_type().unwrap(), None);
    }

    #[test]
    fn verify_wallet_event() {
        let event =
            verify_and_parse(WALLET_BODY.as_bytes(), WALLET_DIGEST, SECRET)
                .unwrap();

        assert_eq!(
            event.event_type,
            WebhookEventType::WalletIncomingPaymentFinished,
        );
        assert_eq!(
            event.wallet_id.unwrap().as_str(),
            "wallet:01882c25-157a-f96b-0000-362d42b64397",
        );
    }

    #[test]
    fn digest_case_is_ignored() {
        let digest = NODE_STATUS_DIGEST.to_uppercase();
        verify_and_parse(NODE_STATUS_BODY.as_bytes(), &digest, SECRET)
            .unwrap();
    }

    #[test]
    fn bad_signatures_are_rejected() {
        logger::init_for_testing();
        let body = NODE_STATUS_BODY.as_bytes();

        let other_secret = "not the secret";
        let err = verify_and_parse(body, NODE_STATUS_DIGEST, other_secret)
            .unwrap_err();
        assert!(matches!(err, WebhookError::InvalidSignature));

        // The wallet event's digest doesn't match the node event's body.
        let err = verify_and_parse(body, WALLET_DIGEST, SECRET).unwrap_err();
        assert!(matches!(err, WebhookError::InvalidSignature));

        for digest in ["", "zz", &NODE_STATUS_DIGEST[..62]] {
            let err = verify_and_parse(body, digest, SECRET).unwrap_err();
            assert!(matches!(err, WebhookError::InvalidSignature));
        }
    }

    #[test]
    fn remote_signing_event() {
        let event = parse(REMOTE_SIGNING_BODY.as_bytes()).unwrap();

        let data = event.data.as_ref().unwrap();
        let idx = data["per_commitment_point_idx"].as_i64();
        assert_eq!(idx, Some(281_474_976_710_654));
        let idx = event.data_field::<i64>("per_commitment_point_idx");
        assert_eq!(idx.unwrap(), 281_474_976_710_654);

        assert_eq!(
            event.remote_signing_sub_event_type().unwrap(),
            Some(RemoteSigningSubEventType::GetPerCommitmentPoint),
        );
        assert_eq!(
            event.bitcoin_network().unwrap(),
            Some(BitcoinNetwork::Testnet),
        );
        let path = event.data_field::<String>("derivation_path").unwrap();
        assert_eq!(path, "m/3/2104864975");
    }

    #[test]
    fn data_members_decode_as_objects() {
        let node = fixtures::lightspark_node_with_remote_signing("n1");
        let body = json!({
            "event_type": "NODE_STATUS",
            "event_id": "e1",
            "timestamp": fixtures::TIMESTAMP,
            "entity_id": "n1",
            "data": { "node": node },
        });
        let event = parse(body.to_string().as_bytes()).unwrap();

        let node = event.data_field::<LightsparkNode>("node").unwrap();
        assert_eq!(node.typename(), "LightsparkNodeWithRemoteSigning");
        assert_eq!(node.id().as_str(), "n1");

        let err = event.data_field::<LightsparkNode>("owner").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "$.data.owner");
    }

    #[test]
    fn malformed_events() {
        let err = parse(b"{not json").unwrap_err();
        assert!(matches!(err, WebhookError::Json(_)));

        let body = r#"{"event_type": "NODE_STATUS", "timestamp": "2023-05-17T23:56:47Z", "entity_id": "n1"}"#;
        let WebhookError::Decode(err) = parse(body.as_bytes()).unwrap_err()
        else {
            panic!("expected a decode error");
        };
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "$.event_id");

        let event = parse(NODE_STATUS_BODY.as_bytes()).unwrap();
        let err = event.data_field::<String>("sub_event_type").unwrap_err();
        assert_eq!(err.path(), "$.data");
    }

    #[test]
    fn unknown_event_type_still_parses() {
        let body = NODE_STATUS_BODY.replace("NODE_STATUS", "NODE_EXPLODED");
        let event = parse(body.as_bytes()).unwrap();
        assert!(event.event_type.is_undefined());
    }

    proptest! {
        #![proptest_config(Config::with_cases(32))]

        #[test]
        fn only_the_signed_body_verifies(
            secret in "[A-Za-z0-9]{1,48}",
            flip in any::<usize>(),
            noise in vec(any::<u8>(), 1..64),
        ) {
            let body = WALLET_BODY.as_bytes();
            let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
            let digest = hex::encode(hmac::sign(&key, body).as_ref());

            prop_assert!(verify(body, &digest, &secret).is_ok());

            let mut tampered = body.to_vec();
            tampered[flip % body.len()] ^= 0x01;
            prop_assert!(verify(&tampered, &digest, &secret).is_err());

            let mut extended = body.to_vec();
            extended.extend_from_slice(&noise);
            prop_assert!(verify(&extended, &digest, &secret).is_err());
        }
    }
}
