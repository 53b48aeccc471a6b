//! On-chain and lightning transactions.

use crate::{
    enums::{
        PaymentFailureReason, RoutingTransactionFailureReason,
        TransactionStatus,
    },
    types::{
        CurrencyAmount, EntityId, EntityRef, PostTransactionData, RichText,
        Timestamp,
    },
    unions::PaymentRequestData,
};

// --- On-chain --- //

graphql_object! {
    typename = "ChannelClosingTransaction";

    /// The on-chain transaction which closed a channel.
    #[derive(Clone, Debug)]
    pub struct ChannelClosingTransaction {
        pub id: EntityId => "channel_closing_transaction_id",
        pub created_at: Timestamp => "channel_closing_transaction_created_at",
        pub updated_at: Timestamp => "channel_closing_transaction_updated_at",
        pub status: TransactionStatus => "channel_closing_transaction_status",
        pub resolved_at: Option<Timestamp>
            => "channel_closing_transaction_resolved_at",
        pub amount: CurrencyAmount => "channel_closing_transaction_amount",
        pub transaction_hash: Option<String>
            => "channel_closing_transaction_transaction_hash",
        pub fees: Option<CurrencyAmount> => "channel_closing_transaction_fees",
        pub block_hash: Option<String>
            => "channel_closing_transaction_block_hash",
        pub block_height: i64 => "channel_closing_transaction_block_height",
        pub destination_addresses: Vec<String>
            => "channel_closing_transaction_destination_addresses",
        pub num_confirmations: Option<i64>
            => "channel_closing_transaction_num_confirmations",
        pub channel: Option<EntityRef> => "channel_closing_transaction_channel",
    }
}

graphql_object! {
    typename = "ChannelOpeningTransaction";

    /// The on-chain transaction which opened a channel.
    #[derive(Clone, Debug)]
    pub struct ChannelOpeningTransaction {
        pub id: EntityId => "channel_opening_transaction_id",
        pub created_at: Timestamp => "channel_opening_transaction_created_at",
        pub updated_at: Timestamp => "channel_opening_transaction_updated_at",
        pub status: TransactionStatus => "channel_opening_transaction_status",
        pub resolved_at: Option<Timestamp>
            => "channel_opening_transaction_resolved_at",
        pub amount: CurrencyAmount => "channel_opening_transaction_amount",
        pub transaction_hash: Option<String>
            => "channel_opening_transaction_transaction_hash",
        pub fees: Option<CurrencyAmount> => "channel_opening_transaction_fees",
        pub block_hash: Option<String>
            => "channel_opening_transaction_block_hash",
        pub block_height: i64 => "channel_opening_transaction_block_height",
        pub destination_addresses: Vec<String>
            => "channel_opening_transaction_destination_addresses",
        pub num_confirmations: Option<i64>
            => "channel_opening_transaction_num_confirmations",
        pub channel: Option<EntityRef> => "channel_opening_transaction_channel",
    }
}

graphql_object! {
    typename = "Deposit";

    /// Funds received on-chain by a node's wallet.
    #[derive(Clone, Debug)]
    pub struct Deposit {
        pub id: EntityId => "deposit_id",
        pub created_at: Timestamp => "deposit_created_at",
        pub updated_at: Timestamp => "deposit_updated_at",
        pub status: TransactionStatus => "deposit_status",
        pub resolved_at: Option<Timestamp> => "deposit_resolved_at",
        pub amount: CurrencyAmount => "deposit_amount",
        pub transaction_hash: Option<String> => "deposit_transaction_hash",
        pub fees: Option<CurrencyAmount> => "deposit_fees",
        pub block_hash: Option<String> => "deposit_block_hash",
        pub block_height: i64 => "deposit_block_height",
        pub destination_addresses: Vec<String>
            => "deposit_destination_addresses",
        pub num_confirmations: Option<i64> => "deposit_num_confirmations",
        /// The receiving node.
        pub destination: EntityRef => "deposit_destination",
    }
}

graphql_object! {
    typename = "Withdrawal";

    /// Funds sent on-chain out of a node's wallet.
    #[derive(Clone, Debug)]
    pub struct Withdrawal {
        pub id: EntityId => "withdrawal_id",
        pub created_at: Timestamp => "withdrawal_created_at",
        pub updated_at: Timestamp => "withdrawal_updated_at",
        pub status: TransactionStatus => "withdrawal_status",
        pub resolved_at: Option<Timestamp> => "withdrawal_resolved_at",
        pub amount: CurrencyAmount => "withdrawal_amount",
        pub transaction_hash: Option<String> => "withdrawal_transaction_hash",
        pub fees: Option<CurrencyAmount> => "withdrawal_fees",
        pub block_hash: Option<String> => "withdrawal_block_hash",
        pub block_height: i64 => "withdrawal_block_height",
        pub destination_addresses: Vec<String>
            => "withdrawal_destination_addresses",
        pub num_confirmations: Option<i64> => "withdrawal_num_confirmations",
        /// The sending node.
        pub origin: EntityRef => "withdrawal_origin",
    }
}

// --- Lightning --- //

graphql_object! {
    typename = "IncomingPayment";

    /// A lightning payment received by a node.
    #[derive(Clone, Debug)]
    pub struct IncomingPayment {
        pub id: EntityId => "incoming_payment_id",
        pub created_at: Timestamp => "incoming_payment_created_at",
        pub updated_at: Timestamp => "incoming_payment_updated_at",
        pub status: TransactionStatus => "incoming_payment_status",
        pub resolved_at: Option<Timestamp> => "incoming_payment_resolved_at",
        pub amount: CurrencyAmount => "incoming_payment_amount",
        pub transaction_hash: Option<String>
            => "incoming_payment_transaction_hash",
        /// Only known when the sender is also a Lightspark node.
        pub origin: Option<EntityRef> => "incoming_payment_origin",
        pub destination: EntityRef => "incoming_payment_destination",
        pub payment_request: Option<EntityRef>
            => "incoming_payment_payment_request",
    }
}

graphql_object! {
    typename = "OutgoingPayment";

    /// A lightning payment sent by a node.
    #[derive(Clone, Debug)]
    pub struct OutgoingPayment {
        pub id: EntityId => "outgoing_payment_id",
        pub created_at: Timestamp => "outgoing_payment_created_at",
        pub updated_at: Timestamp => "outgoing_payment_updated_at",
        pub status: TransactionStatus => "outgoing_payment_status",
        pub resolved_at: Option<Timestamp> => "outgoing_payment_resolved_at",
        pub amount: CurrencyAmount => "outgoing_payment_amount",
        pub transaction_hash: Option<String>
            => "outgoing_payment_transaction_hash",
        pub is_uma: bool => "outgoing_payment_is_uma",
        pub origin: EntityRef => "outgoing_payment_origin",
        pub destination: Option<EntityRef> => "outgoing_payment_destination",
        pub fees: Option<CurrencyAmount> => "outgoing_payment_fees",
        /// The decoded invoice this payment paid, if any.
        pub payment_request_data: Option<PaymentRequestData>
            => "outgoing_payment_payment_request_data",
        pub failure_reason: Option<PaymentFailureReason>
            => "outgoing_payment_failure_reason",
        pub failure_message: Option<RichText>
            => "outgoing_payment_failure_message",
        pub uma_post_transaction_data: Option<Vec<PostTransactionData>>
            => "outgoing_payment_uma_post_transaction_data",
        /// Proof of payment, once it succeeded.
        pub payment_preimage: Option<String>
            => "outgoing_payment_payment_preimage",
        /// Whether sender and receiver are both on Lightspark, in which case
        /// the payment never touched the lightning network.
        pub is_internal_payment: bool => "outgoing_payment_is_internal_payment",
        pub idempotency_key: Option<String>
            => "outgoing_payment_idempotency_key",
    }
}

graphql_object! {
    typename = "RoutingTransaction";

    /// A payment forwarded through a node on its way elsewhere.
    #[derive(Clone, Debug)]
    pub struct RoutingTransaction {
        pub id: EntityId => "routing_transaction_id",
        pub created_at: Timestamp => "routing_transaction_created_at",
        pub updated_at: Timestamp => "routing_transaction_updated_at",
        pub status: TransactionStatus => "routing_transaction_status",
        pub resolved_at: Option<Timestamp>
            => "routing_transaction_resolved_at",
        pub amount: CurrencyAmount => "routing_transaction_amount",
        pub transaction_hash: Option<String>
            => "routing_transaction_transaction_hash",
        pub incoming_channel: Option<EntityRef>
            => "routing_transaction_incoming_channel",
        pub outgoing_channel: Option<EntityRef>
            => "routing_transaction_outgoing_channel",
        /// The fees earned by forwarding.
        pub fees: Option<CurrencyAmount> => "routing_transaction_fees",
        pub failure_message: Option<RichText>
            => "routing_transaction_failure_message",
        pub failure_reason: Option<RoutingTransactionFailureReason>
            => "routing_transaction_failure_reason",
    }
}

impl_entity!(
    ChannelClosingTransaction,
    ChannelOpeningTransaction,
    Deposit,
    Withdrawal,
    IncomingPayment,
    OutgoingPayment,
    RoutingTransaction,
);
impl_on_chain_transaction!(
    ChannelClosingTransaction,
    ChannelOpeningTransaction,
    Deposit,
    Withdrawal,
);
impl_lightning_transaction!(
    IncomingPayment,
    OutgoingPayment,
    RoutingTransaction,
);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{
        decode::FromJson,
        error::DecodeErrorKind,
        test_utils::fixtures,
        traits::{OnChainTransactionRecord, TransactionRecord, Typename},
    };

    #[test]
    fn missing_required_status() {
        let mut value = fixtures::channel_closing_transaction("t1");
        value
            .as_object_mut()
            .unwrap()
            .remove("channel_closing_transaction_status");

        let err = ChannelClosingTransaction::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "$.channel_closing_transaction_status");
    }

    #[test]
    fn on_chain_fields() {
        let mut value = fixtures::deposit("d1");
        value["deposit_num_confirmations"] = json!(3);
        value["deposit_block_hash"] = json!("00000000abc");

        let deposit = Deposit::decode(&value).unwrap();
        assert_eq!(deposit.status(), TransactionStatus::Success);
        assert_eq!(deposit.num_confirmations(), Some(3));
        assert_eq!(deposit.block_hash(), Some("00000000abc"));
        assert_eq!(deposit.destination_addresses(), ["bcrt1qexample"]);
        assert_eq!(deposit.destination, EntityRef::new("node1"));
    }

    #[test]
    fn outgoing_payment_with_invoice_data() {
        let mut value = fixtures::outgoing_payment("p1");
        value["outgoing_payment_payment_request_data"] =
            fixtures::invoice_data(fixtures::graph_node("g1"));

        let payment = OutgoingPayment::decode(&value).unwrap();
        let data = payment.payment_request_data.unwrap();
        assert_eq!(data.typename(), "InvoiceData");
        let PaymentRequestData::InvoiceData(invoice_data) = data;
        assert_eq!(invoice_data.destination.typename(), "GraphNode");
    }

    #[test]
    fn outgoing_payment_request_data_needs_typename() {
        let mut value = fixtures::outgoing_payment("p1");
        let mut data = fixtures::invoice_data(fixtures::graph_node("g1"));
        data.as_object_mut().unwrap().remove("__typename");
        value["outgoing_payment_payment_request_data"] = data;

        let err = OutgoingPayment::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingTypename);
        assert_eq!(err.path(), "$.outgoing_payment_payment_request_data");
    }

    #[test]
    fn routing_failure() {
        let mut value = fixtures::routing_transaction("r1");
        value["routing_transaction_status"] = json!("FAILED");
        value["routing_transaction_failure_reason"] =
            json!("OUTGOING_LINK_FAILURE");
        value["routing_transaction_failure_message"] =
            json!({ "rich_text_text": "no liquidity" });

        let routed = RoutingTransaction::decode(&value).unwrap();
        assert_eq!(routed.status, TransactionStatus::Failed);
        assert_eq!(
            routed.failure_reason,
            Some(RoutingTransactionFailureReason::OutgoingLinkFailure),
        );
        assert_eq!(routed.failure_message.unwrap().text, "no liquidity");
    }
}
