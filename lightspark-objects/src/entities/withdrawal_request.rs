use crate::{
    enums::{WithdrawalMode, WithdrawalRequestStatus},
    types::{CurrencyAmount, EntityId, EntityRef, Timestamp},
};

graphql_object! {
    typename = "WithdrawalRequest";

    /// A request to move funds from a node to an on-chain address.
    #[derive(Clone, Debug)]
    pub struct WithdrawalRequest {
        pub id: EntityId => "withdrawal_request_id",
        pub created_at: Timestamp => "withdrawal_request_created_at",
        pub updated_at: Timestamp => "withdrawal_request_updated_at",
        /// `None` means "withdraw everything".
        pub requested_amount: Option<CurrencyAmount>
            => "withdrawal_request_requested_amount",
        pub amount: CurrencyAmount => "withdrawal_request_amount",
        pub estimated_amount: Option<CurrencyAmount>
            => "withdrawal_request_estimated_amount",
        pub amount_withdrawn: Option<CurrencyAmount>
            => "withdrawal_request_amount_withdrawn",
        pub total_fees: Option<CurrencyAmount>
            => "withdrawal_request_total_fees",
        pub bitcoin_address: String => "withdrawal_request_bitcoin_address",
        pub withdrawal_mode: WithdrawalMode
            => "withdrawal_request_withdrawal_mode",
        pub status: WithdrawalRequestStatus => "withdrawal_request_status",
        pub completed_at: Option<Timestamp>
            => "withdrawal_request_completed_at",
        pub withdrawal: Option<EntityRef> => "withdrawal_request_withdrawal",
        pub idempotency_key: Option<String>
            => "withdrawal_request_idempotency_key",
    }
}

impl_entity!(WithdrawalRequest);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{decode::FromJson, test_utils::fixtures};

    #[test]
    fn unknown_mode_is_undefined() {
        let mut value = fixtures::withdrawal_request("wr1");
        value["withdrawal_request_withdrawal_mode"] = json!("CHANNELS_FIRST");

        let request = WithdrawalRequest::decode(&value).unwrap();
        assert!(request.withdrawal_mode.is_undefined());
        assert_eq!(request.status, WithdrawalRequestStatus::InProgress);
        assert_eq!(request.requested_amount, None);
    }
}
