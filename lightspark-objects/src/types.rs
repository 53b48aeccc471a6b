//! Scalars and the small shared records embedded inside entities.

use std::{borrow::Borrow, fmt};

use chrono::{DateTime, NaiveDate, Utc};
#[cfg(any(test, feature = "test-utils"))]
use proptest_derive::Arbitrary;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    decode::{self, FromJson, Path},
    entities::Channel,
    enums::{
        CurrencyUnit, LightningPaymentDirection, NodeAddressType,
        PaymentFailureReason, RoutingTransactionFailureReason,
    },
    error::DecodeError,
};

/// An instant with a timezone, normalized to UTC on decode.
pub type Timestamp = DateTime<Utc>;

/// A calendar day, `YYYY-MM-DD` on the wire.
pub type Date = NaiveDate;

/// The opaque id of an entity, e.g. `Account:0188...`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

/// A link to another entity: only the id is carried, never the object.
/// The full entity is loaded by a separate lookup.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct EntityRef {
    pub id: EntityId,
}

// --- impl EntityId --- //

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl FromJson for EntityId {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        String::from_json(value, path).map(Self)
    }
}

// --- impl EntityRef --- //

impl EntityRef {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self { id: id.into() }
    }
}

/// Any other members (`__typename`, partial fields) are ignored.
impl FromJson for EntityRef {
    fn from_json(value: &Value, path: Path<'_>) -> Result<Self, DecodeError> {
        let object = decode::expect_object(value, path)?;
        let id = decode::field(object, "id", path)?;
        Ok(Self { id })
    }
}

// --- Shared records --- //

graphql_object! {
    typename = "CurrencyAmount";

    /// An amount of money, both in its original unit and converted into the
    /// caller's preferred unit.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CurrencyAmount {
        /// The value in `original_unit`, e.g. msats.
        pub original_value: i64 => "currency_amount_original_value",
        pub original_unit: CurrencyUnit => "currency_amount_original_unit",
        pub preferred_currency_unit: CurrencyUnit
            => "currency_amount_preferred_currency_unit",
        /// Rounded to the smallest unit of `preferred_currency_unit`.
        pub preferred_currency_value_rounded: i64
            => "currency_amount_preferred_currency_value_rounded",
        /// Unrounded value, for display only.
        #[cfg_attr(
            any(test, feature = "test-utils"),
            proptest(strategy = "-1.0e12..1.0e12f64")
        )]
        pub preferred_currency_value_approx: f64
            => "currency_amount_preferred_currency_value_approx",
    }
}

graphql_object! {
    /// An amount to send as a mutation argument.
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct CurrencyAmountInput {
        pub value: i64 => "currency_amount_input_value",
        pub unit: CurrencyUnit => "currency_amount_input_unit",
    }
}

graphql_object! {
    typename = "Secret";

    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct Secret {
        pub encrypted_value: String => "secret_encrypted_value",
        pub cipher: String => "secret_cipher",
    }
}

graphql_object! {
    typename = "PageInfo";

    /// Cursor information for a page of a connection.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct PageInfo {
        pub has_next_page: Option<bool> => "page_info_has_next_page",
        pub has_previous_page: Option<bool> => "page_info_has_previous_page",
        pub start_cursor: Option<String> => "page_info_start_cursor",
        pub end_cursor: Option<String> => "page_info_end_cursor",
    }
}

graphql_object! {
    typename = "RichText";

    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct RichText {
        pub text: String => "rich_text_text",
    }
}

graphql_object! {
    typename = "NodeAddress";

    /// A network address at which a node can be reached.
    #[derive(Clone, Debug, PartialEq, Eq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct NodeAddress {
        pub address: String => "node_address_address",
        pub address_type: NodeAddressType => "node_address_type",
    }
}

graphql_object! {
    typename = "BlockchainBalance";

    /// The on-chain balances of a node.
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct BlockchainBalance {
        pub total_balance: Option<CurrencyAmount>
            => "blockchain_balance_total_balance",
        pub confirmed_balance: Option<CurrencyAmount>
            => "blockchain_balance_confirmed_balance",
        pub unconfirmed_balance: Option<CurrencyAmount>
            => "blockchain_balance_unconfirmed_balance",
        pub locked_balance: Option<CurrencyAmount>
            => "blockchain_balance_locked_balance",
        /// The amount that must stay on-chain to cover channel closures.
        pub required_reserve: Option<CurrencyAmount>
            => "blockchain_balance_required_reserve",
        pub available_balance: Option<CurrencyAmount>
            => "blockchain_balance_available_balance",
    }
}

graphql_object! {
    typename = "Balances";

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct Balances {
        /// Everything the node or wallet owns, including funds which cannot
        /// be spent right now.
        pub owned_balance: CurrencyAmount => "balances_owned_balance",
        pub available_to_send_balance: CurrencyAmount
            => "balances_available_to_send_balance",
        pub available_to_withdraw_balance: CurrencyAmount
            => "balances_available_to_withdraw_balance",
    }
}

graphql_object! {
    typename = "ChannelFees";

    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(any(test, feature = "test-utils"), derive(Arbitrary))]
    pub struct ChannelFees {
        pub base_fee: Option<CurrencyAmount> => "channel_fees_base_fee",
        pub fee_rate_per_mil: Option<i64> => "channel_fees_fee_rate_per_mil",
    }
}

graphql_object! {
    typename = "Htlc";

    #[derive(Clone, Debug, PartialEq)]
    pub struct Htlc {
        pub utxo: String => "htlc_utxo",
        pub amount: CurrencyAmount => "htlc_amount",
    }
}

graphql_object! {
    typename = "PostTransactionData";

    /// UTXO data reported after an UMA payment settles.
    #[derive(Clone, Debug, PartialEq)]
    pub struct PostTransactionData {
        pub utxo: String => "post_transaction_data_utxo",
        pub amount: CurrencyAmount => "post_transaction_data_amount",
    }
}

graphql_object! {
    typename = "FeeEstimate";

    #[derive(Clone, Debug, PartialEq)]
    pub struct FeeEstimate {
        pub fee_fast: CurrencyAmount => "fee_estimate_fee_fast",
        pub fee_min: CurrencyAmount => "fee_estimate_fee_min",
    }
}

graphql_object! {
    typename = "MultiSigAddressValidationParameters";

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct MultiSigAddressValidationParameters {
        /// Hex-encoded.
        pub counterparty_funding_pubkey: String
            => "multi_sig_address_validation_parameters_counterparty_funding_pubkey",
        pub funding_pubkey_derivation_path: String
            => "multi_sig_address_validation_parameters_funding_pubkey_derivation_path",
    }
}

graphql_object! {
    typename = "DailyLiquidityForecast";

    #[derive(Clone, Debug, PartialEq)]
    pub struct DailyLiquidityForecast {
        pub date: Date => "daily_liquidity_forecast_date",
        pub direction: LightningPaymentDirection
            => "daily_liquidity_forecast_direction",
        pub amount: CurrencyAmount => "daily_liquidity_forecast_amount",
    }
}

graphql_object! {
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct TransactionFailures {
        pub payment_failures: Option<Vec<PaymentFailureReason>>
            => "transaction_failures_payment_failures",
        pub routing_transaction_failures:
            Option<Vec<RoutingTransactionFailureReason>>
            => "transaction_failures_routing_transaction_failures",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct IdAndSignature {
        pub id: EntityId => "id_and_signature_id",
        pub signature: String => "id_and_signature_signature",
    }
}

graphql_object! {
    typename = "RipcordUpdate";

    #[derive(Clone, Debug, PartialEq)]
    pub struct RipcordUpdate {
        pub commitment_number: Option<i64>
            => "ripcord_update_commitment_number",
        pub ripcord_update_status: Option<String>
            => "ripcord_update_ripcord_update_status",
        pub data: Option<String> => "ripcord_update_data",
        /// Embedded in full rather than linked.
        pub channel: Option<Channel> => "ripcord_update_channel",
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{
        error::DecodeErrorKind,
        test_utils::{fixtures, roundtrip::wire_roundtrip_proptest},
    };

    #[test]
    fn currency_amount_decodes_exact_keys() {
        let amount = CurrencyAmount::decode(&fixtures::currency_amount(1_000))
            .unwrap();
        assert_eq!(amount.original_value, 1_000);
        assert_eq!(amount.original_unit, CurrencyUnit::Millisatoshi);
        assert_eq!(amount.preferred_currency_unit, CurrencyUnit::Satoshi);
        assert_eq!(amount.preferred_currency_value_rounded, 1);
        assert_eq!(amount.preferred_currency_value_approx, 1.0);
    }

    #[test]
    fn entity_ref_ignores_extra_keys() {
        let value = json!({ "id": "X", "__typename": "Y", "extra": 1 });
        let entity_ref = EntityRef::decode(&value).unwrap();
        assert_eq!(entity_ref, EntityRef::new("X"));

        let err = EntityRef::decode(&json!({ "__typename": "Y" })).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "$.id");
    }

    #[test]
    fn nested_record_error_paths() {
        let mut value = json!({
            "blockchain_balance_total_balance": fixtures::currency_amount(5),
        });
        value["blockchain_balance_total_balance"]
            ["currency_amount_original_value"] = json!("five");

        let err = BlockchainBalance::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert_eq!(
            err.path(),
            "$.blockchain_balance_total_balance.currency_amount_original_value",
        );
    }

    #[test]
    fn optional_records_accept_empty_objects() {
        let page_info = PageInfo::decode(&json!({})).unwrap();
        assert_eq!(page_info, PageInfo::default());

        let balance = BlockchainBalance::decode(&json!({
            "blockchain_balance_locked_balance": null,
        }))
        .unwrap();
        assert_eq!(balance.locked_balance, None);
        assert_eq!(balance.total_balance, None);
    }

    #[test]
    fn records_are_not_arrays() {
        let err = Secret::decode(&json!(["nope"])).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
        assert_eq!(err.path(), "$");
    }

    #[test]
    fn shared_records_wire_roundtrip() {
        wire_roundtrip_proptest::<CurrencyAmount>();
        wire_roundtrip_proptest::<CurrencyAmountInput>();
        wire_roundtrip_proptest::<Secret>();
        wire_roundtrip_proptest::<PageInfo>();
        wire_roundtrip_proptest::<RichText>();
        wire_roundtrip_proptest::<NodeAddress>();
        wire_roundtrip_proptest::<BlockchainBalance>();
        wire_roundtrip_proptest::<Balances>();
        wire_roundtrip_proptest::<ChannelFees>();
    }

    #[test]
    fn serialized_records_decode_to_the_same_value() {
        let forecast = DailyLiquidityForecast::decode(&json!({
            "daily_liquidity_forecast_date": "2024-03-01",
            "daily_liquidity_forecast_direction": "INCOMING",
            "daily_liquidity_forecast_amount": fixtures::currency_amount(42),
        }))
        .unwrap();

        let value = serde_json::to_value(&forecast).unwrap();
        assert_eq!(value["__typename"], "DailyLiquidityForecast");
        assert_eq!(value["daily_liquidity_forecast_date"], "2024-03-01");
        assert_eq!(DailyLiquidityForecast::decode(&value).unwrap(), forecast);
    }
}
