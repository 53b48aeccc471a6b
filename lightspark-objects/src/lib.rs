//! Typed Lightspark API objects and the decoder that builds them from JSON.
//!
//! The API returns GraphQL JSON in which every object is keyed by prefixed
//! wire names (`account_id`, `channel_local_balance`, ...) and every
//! interface-typed value carries a `__typename` discriminator. This crate
//! holds the closed type registry for those objects and decodes a borrowed
//! [`serde_json::Value`] into it:
//!
//! - enumerations are forward-compatible: unknown values become `Undefined`;
//! - interface families are not: unknown discriminators are an error;
//! - links to other entities stay shallow [`EntityRef`]s.
//!
//! ```ignore
//! let entity = lightspark_objects::decode_entity(&json)?;
//! println!("{} {}", entity.typename(), entity.id());
//! ```
//!
//! The crate does no I/O. Sending queries and extracting the response tree is
//! the caller's job.

// `proptest_derive::Arbitrary` issue. This will hard-error for edition 2024 so
// hopefully it gets fixed soon...
// See: <https://github.com/proptest-rs/proptest/issues/447>
#![allow(non_local_definitions)]

// Declared first so the macros are visible to every module below.
#[macro_use]
mod macros;

/// Pagination envelopes.
pub mod connections;
/// The [`FromJson`] framework and top-level entry points.
pub mod decode;
/// Entity records.
pub mod entities;
/// Enumerations.
pub mod enums;
/// [`DecodeError`].
pub mod error;
/// Mutation and query inputs and outputs.
pub mod mutations;
/// Capability traits shared across interface families.
pub mod traits;
/// Scalars and shared records.
pub mod types;
/// Interface families.
pub mod unions;

/// Feature-gated test utilities that can be shared across crate boundaries.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::{
    decode::{
        FromJson, decode, decode_audit_log_actor, decode_connection,
        decode_entity, decode_lightning_transaction, decode_lightspark_node,
        decode_lightspark_node_owner, decode_node, decode_on_chain_transaction,
        decode_payment_request, decode_payment_request_data,
        decode_transaction,
    },
    error::{DecodeError, DecodeErrorKind},
    traits::{
        ConnectionRecord, EntityRecord, LightningTransactionRecord,
        LightsparkNodeRecord, NodeRecord, OnChainTransactionRecord,
        TransactionRecord, Typename,
    },
    types::{CurrencyAmount, EntityId, EntityRef, Timestamp},
    unions::{
        AuditLogActor, Connection, Entity, LightningTransaction,
        LightsparkNode, LightsparkNodeOwner, Node, OnChainTransaction,
        PaymentRequest, PaymentRequestData, Transaction,
    },
};

#[cfg(test)]
mod test {
    use proptest::{
        collection::btree_map, prop_assert_eq, prop_assume, proptest, sample,
        test_runner::Config,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        enums::BitcoinNetwork,
        test_utils::{fixtures, roundtrip::wire_roundtrip_ok},
    };

    #[test]
    fn minimal_account_entity() {
        logger::init_for_testing();

        let value = json!({
            "__typename": "Account",
            "account_id": "a1",
            "account_created_at": "2024-01-02T03:04:05Z",
            "account_updated_at": "2024-01-02T03:04:05Z",
            "account_name": null,
        });
        let Entity::Account(account) = decode_entity(&value).unwrap() else {
            panic!("not an account");
        };
        assert_eq!(account.id.as_str(), "a1");
        assert_eq!(account.name, None);
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn unknown_enum_inside_entity() {
        logger::init_for_testing();

        let mut value = fixtures::graph_node("g1");
        value["graph_node_bitcoin_network"] = json!("MARS");

        let node = decode_node(&value).unwrap();
        assert_eq!(node.bitcoin_network(), BitcoinNetwork::Undefined);
        let reencoded = serde_json::to_value(&node).unwrap();
        assert_eq!(reencoded["graph_node_bitcoin_network"], "undefined");
    }

    #[test]
    fn invoice_entity_with_graph_node_destination() {
        let value = fixtures::invoice("inv1", fixtures::graph_node("g1"));
        let Entity::Invoice(invoice) = decode_entity(&value).unwrap() else {
            panic!("not an invoice");
        };
        assert!(matches!(invoice.data.destination, Node::GraphNode(_)));
    }

    #[test]
    fn deep_errors_fail_the_whole_decode() {
        let mut page = json!({
            "__typename": "AccountToNodesConnection",
            "account_to_nodes_connection_count": 1,
            "account_to_nodes_connection_entities": [
                fixtures::lightspark_node_with_osk("n1"),
            ],
        });
        page["account_to_nodes_connection_entities"][0]
            ["lightspark_node_with_o_s_k_blockchain_balance"]
            ["blockchain_balance_total_balance"]
            ["currency_amount_original_unit"] = json!(7);

        let err = decode_connection(&page).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert_eq!(
            err.path(),
            "$.account_to_nodes_connection_entities[0]\
             .lightspark_node_with_o_s_k_blockchain_balance\
             .blockchain_balance_total_balance\
             .currency_amount_original_unit",
        );
    }

    #[test]
    fn links_ignore_everything_but_the_id() {
        let cases = [
            ("Channel", "channel_local_node"),
            ("Deposit", "deposit_destination"),
            ("Withdrawal", "withdrawal_origin"),
            ("OutgoingPayment", "outgoing_payment_origin"),
            (
                "OutgoingPaymentAttempt",
                "outgoing_payment_attempt_outgoing_payment",
            ),
            ("LightsparkNodeWithOSK", "lightspark_node_with_o_s_k_owner"),
            ("SignablePayload", "signable_payload_signable"),
            ("ChannelSnapshot", "channel_snapshot_channel"),
        ];
        for (typename, key) in cases {
            let mut value = fixtures::object(typename);
            value[key] = json!({ "id": "X", "__typename": "Y", "extra": 1 });

            let entity = decode_entity(&value).unwrap();
            let reencoded = serde_json::to_value(&entity).unwrap();
            assert_eq!(reencoded[key], json!({ "id": "X" }), "{typename}");
        }
    }

    #[test]
    fn null_and_absent_optionals_agree() {
        let mut with_null = fixtures::outgoing_payment("p1");
        with_null["outgoing_payment_failure_reason"] = Value::Null;
        let mut absent = with_null.clone();
        absent
            .as_object_mut()
            .unwrap()
            .remove("outgoing_payment_failure_reason");

        let a = serde_json::to_value(decode_entity(&with_null).unwrap());
        let b = serde_json::to_value(decode_entity(&absent).unwrap());
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn serialized_entities_decode_back() {
        for typename in Entity::TYPENAMES {
            let entity = decode_entity(&fixtures::object(typename)).unwrap();
            let json = wire_roundtrip_ok(&entity);
            assert_eq!(json["__typename"], *typename);

            // `Entity` equality only looks at ids, so compare the wire form:
            // every field must come back under the name it was written with.
            let redecoded = decode_entity(&json).unwrap();
            let rejson = serde_json::to_value(&redecoded).unwrap();
            assert_eq!(rejson, json, "{typename}");
        }
    }

    #[test]
    fn serialized_entities_keep_fixture_fields() {
        for typename in Entity::TYPENAMES {
            let value = fixtures::object(typename);
            let entity = decode_entity(&value).unwrap();
            let json = serde_json::to_value(&entity).unwrap();

            // Fixtures only hold fields the records declare, so each one is
            // written back under the same wire name.
            for key in value.as_object().unwrap().keys() {
                assert!(json.get(key).is_some(), "{typename}: {key}");
            }
        }
    }

    proptest! {
        #![proptest_config(Config::with_cases(64))]

        #[test]
        fn unknown_fields_are_ignored(
            typename in sample::select(Entity::TYPENAMES),
            extra in btree_map("x_[a-z_]{1,16}", "[a-z0-9 ]{0,8}", 1..4),
        ) {
            let value = fixtures::object(typename);
            let mut extended = value.clone();
            let object = extended.as_object_mut().unwrap();
            for (key, field) in extra {
                prop_assume!(!object.contains_key(&key));
                object.insert(key, json!(field));
            }

            let expected = serde_json::to_value(decode_entity(&value).unwrap())
                .unwrap();
            let actual = serde_json::to_value(decode_entity(&extended).unwrap())
                .unwrap();
            prop_assert_eq!(expected, actual);
        }
    }
}
