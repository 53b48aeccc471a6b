use crate::{
    enums::{
        HtlcAttemptFailureCode, IncomingPaymentAttemptStatus,
        OutgoingPaymentAttemptStatus,
    },
    types::{CurrencyAmount, EntityId, EntityRef, Timestamp},
};

graphql_object! {
    typename = "IncomingPaymentAttempt";

    /// One HTLC of an incoming payment.
    #[derive(Clone, Debug)]
    pub struct IncomingPaymentAttempt {
        pub id: EntityId => "incoming_payment_attempt_id",
        pub created_at: Timestamp => "incoming_payment_attempt_created_at",
        pub updated_at: Timestamp => "incoming_payment_attempt_updated_at",
        pub status: IncomingPaymentAttemptStatus
            => "incoming_payment_attempt_status",
        pub resolved_at: Option<Timestamp>
            => "incoming_payment_attempt_resolved_at",
        pub amount: CurrencyAmount => "incoming_payment_attempt_amount",
        pub channel: EntityRef => "incoming_payment_attempt_channel",
    }
}

graphql_object! {
    typename = "OutgoingPaymentAttempt";

    /// One attempt at routing an outgoing payment.
    #[derive(Clone, Debug)]
    pub struct OutgoingPaymentAttempt {
        pub id: EntityId => "outgoing_payment_attempt_id",
        pub created_at: Timestamp => "outgoing_payment_attempt_created_at",
        pub updated_at: Timestamp => "outgoing_payment_attempt_updated_at",
        pub status: OutgoingPaymentAttemptStatus
            => "outgoing_payment_attempt_status",
        pub failure_code: Option<HtlcAttemptFailureCode>
            => "outgoing_payment_attempt_failure_code",
        /// Index of the hop which reported the failure; 0 is the sender.
        pub failure_source_index: Option<i64>
            => "outgoing_payment_attempt_failure_source_index",
        pub attempted_at: Timestamp => "outgoing_payment_attempt_attempted_at",
        pub resolved_at: Option<Timestamp>
            => "outgoing_payment_attempt_resolved_at",
        pub amount: Option<CurrencyAmount> => "outgoing_payment_attempt_amount",
        pub fees: Option<CurrencyAmount> => "outgoing_payment_attempt_fees",
        pub outgoing_payment: EntityRef
            => "outgoing_payment_attempt_outgoing_payment",
        pub channel_snapshot: Option<EntityRef>
            => "outgoing_payment_attempt_channel_snapshot",
    }
}

graphql_object! {
    typename = "Hop";

    /// One hop of the route taken by an outgoing payment attempt.
    #[derive(Clone, Debug)]
    pub struct Hop {
        pub id: EntityId => "hop_id",
        pub created_at: Timestamp => "hop_created_at",
        pub updated_at: Timestamp => "hop_updated_at",
        pub destination: Option<EntityRef> => "hop_destination",
        /// Position in the route, starting at 0.
        pub index: i64 => "hop_index",
        pub public_key: Option<String> => "hop_public_key",
        pub amount_to_forward: Option<CurrencyAmount>
            => "hop_amount_to_forward",
        pub fee: Option<CurrencyAmount> => "hop_fee",
        pub expiry_block_height: Option<i64> => "hop_expiry_block_height",
    }
}

impl_entity!(IncomingPaymentAttempt, OutgoingPaymentAttempt, Hop);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{decode::FromJson, test_utils::fixtures};

    #[test]
    fn failed_attempt() {
        let mut value = fixtures::outgoing_payment_attempt("att1");
        value["outgoing_payment_attempt_status"] = json!("FAILED");
        value["outgoing_payment_attempt_failure_code"] = json!("MPP_TIMEOUT");
        value["outgoing_payment_attempt_failure_source_index"] = json!(2);

        let attempt = OutgoingPaymentAttempt::decode(&value).unwrap();
        assert_eq!(attempt.status, OutgoingPaymentAttemptStatus::Failed);
        assert_eq!(
            attempt.failure_code,
            Some(HtlcAttemptFailureCode::MppTimeout),
        );
        assert_eq!(attempt.failure_source_index, Some(2));
        assert_eq!(attempt.outgoing_payment, EntityRef::new("p1"));
    }
}
