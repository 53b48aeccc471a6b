//! Entity records: objects with an `id`, `created_at` and `updated_at`.
//!
//! References from one entity to another are always [`EntityRef`] links, so
//! cyclic graphs (channel -> node -> account -> node) never form in memory.
//!
//! [`EntityRef`]: crate::types::EntityRef

/// Implements [`TransactionRecord`](crate::traits::TransactionRecord) for
/// records with the common `status`, `resolved_at`, `amount` and
/// `transaction_hash` fields.
macro_rules! impl_transaction {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::traits::TransactionRecord for $name {
                fn status(&self) -> $crate::enums::TransactionStatus {
                    self.status
                }
                fn resolved_at(&self) -> Option<$crate::types::Timestamp> {
                    self.resolved_at
                }
                fn amount(&self) -> &$crate::types::CurrencyAmount {
                    &self.amount
                }
                fn transaction_hash(&self) -> Option<&str> {
                    self.transaction_hash.as_deref()
                }
            }
        )*
    }
}

macro_rules! impl_on_chain_transaction {
    ($($name:ident),* $(,)?) => {
        $(
            impl_transaction!($name);

            impl $crate::traits::OnChainTransactionRecord for $name {
                fn fees(&self) -> Option<&$crate::types::CurrencyAmount> {
                    self.fees.as_ref()
                }
                fn block_hash(&self) -> Option<&str> {
                    self.block_hash.as_deref()
                }
                fn block_height(&self) -> i64 {
                    self.block_height
                }
                fn destination_addresses(&self) -> &[String] {
                    &self.destination_addresses
                }
                fn num_confirmations(&self) -> Option<i64> {
                    self.num_confirmations
                }
            }
        )*
    }
}

macro_rules! impl_lightning_transaction {
    ($($name:ident),* $(,)?) => {
        $(
            impl_transaction!($name);

            impl $crate::traits::LightningTransactionRecord for $name {}
        )*
    }
}

macro_rules! impl_node {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::traits::NodeRecord for $name {
                fn alias(&self) -> Option<&str> {
                    self.alias.as_deref()
                }
                fn bitcoin_network(&self) -> $crate::enums::BitcoinNetwork {
                    self.bitcoin_network
                }
                fn color(&self) -> Option<&str> {
                    self.color.as_deref()
                }
                fn conductivity(&self) -> Option<i64> {
                    self.conductivity
                }
                fn display_name(&self) -> &str {
                    &self.display_name
                }
                fn public_key(&self) -> Option<&str> {
                    self.public_key.as_deref()
                }
            }
        )*
    }
}

mod account;
mod api_token;
mod attempts;
mod channel;
mod invoice;
mod node;
mod offer;
mod signing;
mod transactions;
mod uma;
mod wallet;
mod withdrawal_request;

pub use account::Account;
pub use api_token::ApiToken;
pub use attempts::{Hop, IncomingPaymentAttempt, OutgoingPaymentAttempt};
pub use channel::{Channel, ChannelSnapshot};
pub use invoice::{Invoice, InvoiceData};
pub use node::{
    GraphNode, LightsparkNodeWithOsk, LightsparkNodeWithRemoteSigning,
};
pub use offer::{Offer, OfferData};
pub use signing::{Signable, SignablePayload};
pub use transactions::{
    ChannelClosingTransaction, ChannelOpeningTransaction, Deposit,
    IncomingPayment, OutgoingPayment, RoutingTransaction, Withdrawal,
};
pub use uma::UmaInvitation;
pub use wallet::Wallet;
pub use withdrawal_request::WithdrawalRequest;
