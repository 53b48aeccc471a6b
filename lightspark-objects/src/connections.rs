//! Pagination envelopes: `{ count, page_info, entities, ..aggregates }`.
//!
//! Where `entities` holds an interface family, each element is dispatched on
//! its own `__typename`, so one page may mix variants. A single bad element
//! fails the whole page.

use crate::{
    entities::{
        ApiToken, Channel, ChannelClosingTransaction, ChannelOpeningTransaction,
        Hop, IncomingPaymentAttempt, OutgoingPaymentAttempt, Wallet,
        Withdrawal, WithdrawalRequest,
    },
    enums::{LightningPaymentDirection, LightsparkNodePurpose},
    traits::ConnectionRecord,
    types::{
        CurrencyAmount, DailyLiquidityForecast, Date, NodeAddress, PageInfo,
        RipcordUpdate,
    },
    unions::{LightsparkNode, PaymentRequest, Transaction},
};

/// Implements [`ConnectionRecord`] for connections with a required count.
macro_rules! impl_connection {
    ($($name:ident),* $(,)?) => {
        $(
            impl ConnectionRecord for $name {
                #[inline]
                fn count(&self) -> Option<i64> {
                    Some(self.count)
                }
                #[inline]
                fn page_info(&self) -> Option<&PageInfo> {
                    self.page_info.as_ref()
                }
            }
        )*
    }
}

// --- Account --- //

graphql_object! {
    typename = "AccountToApiTokensConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToApiTokensConnection {
        pub count: i64 => "account_to_api_tokens_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_api_tokens_connection_page_info",
        pub entities: Vec<ApiToken>
            => "account_to_api_tokens_connection_entities",
    }
}

graphql_object! {
    typename = "AccountToChannelsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToChannelsConnection {
        pub count: i64 => "account_to_channels_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_channels_connection_page_info",
        pub entities: Vec<Channel> => "account_to_channels_connection_entities",
    }
}

graphql_object! {
    typename = "AccountToNodesConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToNodesConnection {
        pub count: i64 => "account_to_nodes_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_nodes_connection_page_info",
        /// The purpose the nodes were filtered by, if any.
        pub purpose: Option<LightsparkNodePurpose>
            => "account_to_nodes_connection_purpose",
        pub entities: Vec<LightsparkNode>
            => "account_to_nodes_connection_entities",
    }
}

graphql_object! {
    typename = "AccountToPaymentRequestsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToPaymentRequestsConnection {
        /// Only connection whose count the server may omit.
        pub count: Option<i64>
            => "account_to_payment_requests_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_payment_requests_connection_page_info",
        pub entities: Vec<PaymentRequest>
            => "account_to_payment_requests_connection_entities",
    }
}

graphql_object! {
    typename = "AccountToTransactionsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToTransactionsConnection {
        pub count: i64 => "account_to_transactions_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_transactions_connection_page_info",
        pub profit_loss: Option<CurrencyAmount>
            => "account_to_transactions_connection_profit_loss",
        pub average_fee_earned: Option<CurrencyAmount>
            => "account_to_transactions_connection_average_fee_earned",
        pub total_amount_transacted: Option<CurrencyAmount>
            => "account_to_transactions_connection_total_amount_transacted",
        pub entities: Vec<Transaction>
            => "account_to_transactions_connection_entities",
    }
}

graphql_object! {
    typename = "AccountToWalletsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToWalletsConnection {
        pub count: i64 => "account_to_wallets_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_wallets_connection_page_info",
        pub entities: Vec<Wallet> => "account_to_wallets_connection_entities",
    }
}

graphql_object! {
    typename = "AccountToWithdrawalRequestsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct AccountToWithdrawalRequestsConnection {
        pub count: i64 => "account_to_withdrawal_requests_connection_count",
        pub page_info: Option<PageInfo>
            => "account_to_withdrawal_requests_connection_page_info",
        pub entities: Vec<WithdrawalRequest>
            => "account_to_withdrawal_requests_connection_entities",
    }
}

// --- Payments --- //

graphql_object! {
    typename = "IncomingPaymentToAttemptsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct IncomingPaymentToAttemptsConnection {
        pub count: i64 => "incoming_payment_to_attempts_connection_count",
        pub page_info: Option<PageInfo>
            => "incoming_payment_to_attempts_connection_page_info",
        pub entities: Vec<IncomingPaymentAttempt>
            => "incoming_payment_to_attempts_connection_entities",
    }
}

graphql_object! {
    typename = "OutgoingPaymentToAttemptsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct OutgoingPaymentToAttemptsConnection {
        pub count: i64 => "outgoing_payment_to_attempts_connection_count",
        pub page_info: Option<PageInfo>
            => "outgoing_payment_to_attempts_connection_page_info",
        pub entities: Vec<OutgoingPaymentAttempt>
            => "outgoing_payment_to_attempts_connection_entities",
    }
}

graphql_object! {
    typename = "OutgoingPaymentAttemptToHopsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct OutgoingPaymentAttemptToHopsConnection {
        pub count: i64 => "outgoing_payment_attempt_to_hops_connection_count",
        pub page_info: Option<PageInfo>
            => "outgoing_payment_attempt_to_hops_connection_page_info",
        pub entities: Vec<Hop>
            => "outgoing_payment_attempt_to_hops_connection_entities",
    }
}

// --- Nodes --- //

graphql_object! {
    typename = "LightsparkNodeToChannelsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct LightsparkNodeToChannelsConnection {
        pub count: i64 => "lightspark_node_to_channels_connection_count",
        pub page_info: Option<PageInfo>
            => "lightspark_node_to_channels_connection_page_info",
        pub entities: Vec<Channel>
            => "lightspark_node_to_channels_connection_entities",
    }
}

graphql_object! {
    typename = "LightsparkNodeToDailyLiquidityForecastsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct LightsparkNodeToDailyLiquidityForecastsConnection {
        pub from_date: Date
            => "lightspark_node_to_daily_liquidity_forecasts_connection_from_date",
        pub to_date: Date
            => "lightspark_node_to_daily_liquidity_forecasts_connection_to_date",
        pub direction: LightningPaymentDirection
            => "lightspark_node_to_daily_liquidity_forecasts_connection_direction",
        pub entities: Vec<DailyLiquidityForecast>
            => "lightspark_node_to_daily_liquidity_forecasts_connection_entities",
    }
}

graphql_object! {
    typename = "LightsparkNodeToRipcordUpdatesConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct LightsparkNodeToRipcordUpdatesConnection {
        pub from_date: Date
            => "lightspark_node_to_ripcord_updates_connection_from_date",
        pub to_date: Date
            => "lightspark_node_to_ripcord_updates_connection_to_date",
        pub entities: Vec<RipcordUpdate>
            => "lightspark_node_to_ripcord_updates_connection_entities",
    }
}

graphql_object! {
    typename = "NodeToAddressesConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct NodeToAddressesConnection {
        pub count: i64 => "node_to_addresses_connection_count",
        pub entities: Vec<NodeAddress>
            => "node_to_addresses_connection_entities",
    }
}

graphql_object! {
    typename = "ChannelToTransactionsConnection";

    /// Aggregates only: the server never lists a channel's transactions.
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelToTransactionsConnection {
        pub count: i64 => "channel_to_transactions_connection_count",
        pub average_fee: Option<CurrencyAmount>
            => "channel_to_transactions_connection_average_fee",
        pub total_amount_transacted: Option<CurrencyAmount>
            => "channel_to_transactions_connection_total_amount_transacted",
        pub total_fees: Option<CurrencyAmount>
            => "channel_to_transactions_connection_total_fees",
    }
}

// --- Wallet --- //

graphql_object! {
    typename = "WalletToPaymentRequestsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WalletToPaymentRequestsConnection {
        pub count: i64 => "wallet_to_payment_requests_connection_count",
        pub page_info: Option<PageInfo>
            => "wallet_to_payment_requests_connection_page_info",
        pub entities: Vec<PaymentRequest>
            => "wallet_to_payment_requests_connection_entities",
    }
}

graphql_object! {
    typename = "WalletToTransactionsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WalletToTransactionsConnection {
        pub count: i64 => "wallet_to_transactions_connection_count",
        pub page_info: Option<PageInfo>
            => "wallet_to_transactions_connection_page_info",
        pub entities: Vec<Transaction>
            => "wallet_to_transactions_connection_entities",
    }
}

graphql_object! {
    typename = "WalletToWithdrawalRequestsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WalletToWithdrawalRequestsConnection {
        pub count: i64 => "wallet_to_withdrawal_requests_connection_count",
        pub page_info: Option<PageInfo>
            => "wallet_to_withdrawal_requests_connection_page_info",
        pub entities: Vec<WithdrawalRequest>
            => "wallet_to_withdrawal_requests_connection_entities",
    }
}

// --- Withdrawal requests --- //

graphql_object! {
    typename = "WithdrawalRequestToChannelClosingTransactionsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WithdrawalRequestToChannelClosingTransactionsConnection {
        pub count: i64
            => "withdrawal_request_to_channel_closing_transactions_connection_count",
        pub page_info: Option<PageInfo>
            => "withdrawal_request_to_channel_closing_transactions_connection_page_info",
        pub entities: Vec<ChannelClosingTransaction>
            => "withdrawal_request_to_channel_closing_transactions_connection_entities",
    }
}

graphql_object! {
    typename = "WithdrawalRequestToChannelOpeningTransactionsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WithdrawalRequestToChannelOpeningTransactionsConnection {
        pub count: i64
            => "withdrawal_request_to_channel_opening_transactions_connection_count",
        pub page_info: Option<PageInfo>
            => "withdrawal_request_to_channel_opening_transactions_connection_page_info",
        pub entities: Vec<ChannelOpeningTransaction>
            => "withdrawal_request_to_channel_opening_transactions_connection_entities",
    }
}

graphql_object! {
    typename = "WithdrawalRequestToWithdrawalsConnection";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WithdrawalRequestToWithdrawalsConnection {
        pub count: i64 => "withdrawal_request_to_withdrawals_connection_count",
        pub entities: Vec<Withdrawal>
            => "withdrawal_request_to_withdrawals_connection_entities",
    }
}

impl_connection!(
    AccountToApiTokensConnection,
    AccountToChannelsConnection,
    AccountToNodesConnection,
    AccountToTransactionsConnection,
    AccountToWalletsConnection,
    AccountToWithdrawalRequestsConnection,
    IncomingPaymentToAttemptsConnection,
    OutgoingPaymentToAttemptsConnection,
    OutgoingPaymentAttemptToHopsConnection,
    LightsparkNodeToChannelsConnection,
    WalletToPaymentRequestsConnection,
    WalletToTransactionsConnection,
    WalletToWithdrawalRequestsConnection,
    WithdrawalRequestToChannelClosingTransactionsConnection,
    WithdrawalRequestToChannelOpeningTransactionsConnection,
);

impl ConnectionRecord for AccountToPaymentRequestsConnection {
    fn count(&self) -> Option<i64> {
        self.count
    }
    fn page_info(&self) -> Option<&PageInfo> {
        self.page_info.as_ref()
    }
}

#[cfg(test)]
mod test {
    use proptest::{
        collection::vec, prop_assert, prop_assert_eq, proptest, sample,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        decode::FromJson,
        enums::TransactionStatus,
        error::DecodeErrorKind,
        test_utils::fixtures,
        traits::{EntityRecord, TransactionRecord, Typename},
    };

    #[test]
    fn mixed_node_page() {
        let value = json!({
            "__typename": "AccountToNodesConnection",
            "account_to_nodes_connection_count": 2,
            "account_to_nodes_connection_page_info": {
                "__typename": "PageInfo",
                "page_info_has_next_page": false,
                "page_info_end_cursor": "c2",
            },
            "account_to_nodes_connection_entities": [
                fixtures::lightspark_node_with_osk("n1"),
                fixtures::lightspark_node_with_remote_signing("n2"),
            ],
        });

        let page = AccountToNodesConnection::decode(&value).unwrap();
        assert_eq!(page.count(), Some(2));
        assert_eq!(page.purpose, None);
        let page_info = page.page_info().unwrap();
        assert_eq!(page_info.has_next_page, Some(false));
        assert_eq!(page_info.end_cursor.as_deref(), Some("c2"));

        let typenames = page
            .entities
            .iter()
            .map(Typename::typename)
            .collect::<Vec<_>>();
        assert_eq!(
            typenames,
            ["LightsparkNodeWithOSK", "LightsparkNodeWithRemoteSigning"],
        );
    }

    #[test]
    fn one_bad_element_fails_the_page() {
        let mut bad = fixtures::deposit("d2");
        bad["deposit_amount"]["currency_amount_original_value"] = json!(1.5);
        let value = json!({
            "account_to_transactions_connection_count": 3,
            "account_to_transactions_connection_entities": [
                fixtures::outgoing_payment("p1"),
                bad,
                fixtures::withdrawal("w1"),
            ],
        });

        let err = AccountToTransactionsConnection::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::ScalarParse);
        assert_eq!(
            err.path(),
            "$.account_to_transactions_connection_entities[1]\
             .deposit_amount.currency_amount_original_value",
        );
    }

    #[test]
    fn transaction_aggregates() {
        let value = json!({
            "account_to_transactions_connection_count": 0,
            "account_to_transactions_connection_profit_loss":
                fixtures::currency_amount(-3_000),
            "account_to_transactions_connection_average_fee_earned": null,
            "account_to_transactions_connection_entities": [],
        });

        let page = AccountToTransactionsConnection::decode(&value).unwrap();
        let profit_loss = page.profit_loss.as_ref().unwrap();
        assert_eq!(profit_loss.original_value, -3_000);
        assert_eq!(page.average_fee_earned, None);
        assert_eq!(page.total_amount_transacted, None);
        assert!(page.entities.is_empty());
        assert_eq!(page.page_info(), None);
    }

    #[test]
    fn payment_request_count_is_optional() {
        let value = json!({
            "account_to_payment_requests_connection_entities": [
                fixtures::invoice("inv1", fixtures::graph_node("g1")),
            ],
        });

        let page = AccountToPaymentRequestsConnection::decode(&value).unwrap();
        assert_eq!(page.count(), None);
        assert_eq!(page.entities.len(), 1);
        assert_eq!(page.entities[0].id().as_str(), "inv1");
    }

    #[test]
    fn liquidity_forecasts() {
        let prefix = "lightspark_node_to_daily_liquidity_forecasts_connection";
        let mut value = json!({});
        value[format!("{prefix}_from_date")] = json!("2024-03-01");
        value[format!("{prefix}_to_date")] = json!("2024-03-02");
        value[format!("{prefix}_direction")] = json!("OUTGOING");
        value[format!("{prefix}_entities")] = json!([{
            "daily_liquidity_forecast_date": "2024-03-01",
            "daily_liquidity_forecast_direction": "OUTGOING",
            "daily_liquidity_forecast_amount": fixtures::currency_amount(9),
        }]);

        let page =
            LightsparkNodeToDailyLiquidityForecastsConnection::decode(&value)
                .unwrap();
        assert_eq!(page.direction, LightningPaymentDirection::Outgoing);
        assert_eq!(page.from_date.to_string(), "2024-03-01");
        assert_eq!(page.to_date.to_string(), "2024-03-02");
        assert_eq!(page.entities[0].amount.original_value, 9);

        value[format!("{prefix}_to_date")] = json!("2024-03-02T00:00:00Z");
        let err =
            LightsparkNodeToDailyLiquidityForecastsConnection::decode(&value)
                .unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::ScalarParse);
    }

    /// Builds one page entry for each chosen transaction kind.
    fn transaction_payload(kind: &str, idx: usize) -> Value {
        let id = format!("tx{idx}");
        match kind {
            "ChannelClosingTransaction" =>
                fixtures::channel_closing_transaction(&id),
            "Deposit" => fixtures::deposit(&id),
            "OutgoingPayment" => fixtures::outgoing_payment(&id),
            "RoutingTransaction" => fixtures::routing_transaction(&id),
            "Withdrawal" => fixtures::withdrawal(&id),
            _ => fixtures::object(kind),
        }
    }

    proptest! {
        #[test]
        fn heterogeneous_pages_keep_order(
            kinds in vec(sample::select(Transaction::TYPENAMES), 0..16),
        ) {
            let entities = kinds
                .iter()
                .enumerate()
                .map(|(idx, kind)| transaction_payload(kind, idx))
                .collect::<Vec<_>>();
            let value = json!({
                "wallet_to_transactions_connection_count": entities.len(),
                "wallet_to_transactions_connection_entities": entities,
            });

            let page = WalletToTransactionsConnection::decode(&value).unwrap();
            prop_assert_eq!(page.count, kinds.len() as i64);
            prop_assert_eq!(page.entities.len(), kinds.len());
            for (tx, kind) in page.entities.iter().zip(&kinds) {
                prop_assert_eq!(tx.typename(), *kind);
                prop_assert!(tx.status() != TransactionStatus::Undefined);
            }
        }
    }
}
