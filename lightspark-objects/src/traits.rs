//! Capability traits shared by the members of each interface family.
//!
//! Concrete records implement these directly; the family enums in
//! [`crate::unions`] implement them by delegating to the wrapped record, so
//! callers can read common fields without matching on the variant.

use crate::{
    enums::{BitcoinNetwork, LightsparkNodeStatus, TransactionStatus},
    types::{
        Balances, BlockchainBalance, CurrencyAmount, EntityId, EntityRef,
        PageInfo, Timestamp,
    },
};

/// Objects which carry a `__typename` discriminator.
pub trait Typename {
    fn typename(&self) -> &'static str;
}

/// Top-level objects with an id, reachable through an entity lookup.
///
/// Two entities are equal iff their ids are equal.
pub trait EntityRecord: Typename {
    fn id(&self) -> &EntityId;
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;
}

/// Movement of funds, on-chain or over lightning.
pub trait TransactionRecord: EntityRecord {
    fn status(&self) -> TransactionStatus;
    /// When the transaction reached a terminal status, if it has.
    fn resolved_at(&self) -> Option<Timestamp>;
    fn amount(&self) -> &CurrencyAmount;
    fn transaction_hash(&self) -> Option<&str>;
}

pub trait OnChainTransactionRecord: TransactionRecord {
    fn fees(&self) -> Option<&CurrencyAmount>;
    fn block_hash(&self) -> Option<&str>;
    /// Zero while unconfirmed.
    fn block_height(&self) -> i64;
    fn destination_addresses(&self) -> &[String];
    fn num_confirmations(&self) -> Option<i64>;
}

/// Marker for transactions that happen over lightning.
pub trait LightningTransactionRecord: TransactionRecord {}

/// Any node of the lightning graph.
pub trait NodeRecord: EntityRecord {
    fn alias(&self) -> Option<&str>;
    fn bitcoin_network(&self) -> BitcoinNetwork;
    /// Hex color, e.g. `#3399ff`.
    fn color(&self) -> Option<&str>;
    fn conductivity(&self) -> Option<i64>;
    fn display_name(&self) -> &str;
    fn public_key(&self) -> Option<&str>;
}

/// A node managed by Lightspark.
///
/// `total_balance`, `total_local_balance`, `local_balance`, `remote_balance`
/// and `blockchain_balance` are deprecated upstream in favor of `balances`.
pub trait LightsparkNodeRecord: NodeRecord {
    /// The account or wallet that owns this node.
    fn owner(&self) -> &EntityRef;
    fn status(&self) -> Option<LightsparkNodeStatus>;
    fn total_balance(&self) -> Option<&CurrencyAmount>;
    fn total_local_balance(&self) -> Option<&CurrencyAmount>;
    fn local_balance(&self) -> Option<&CurrencyAmount>;
    fn remote_balance(&self) -> Option<&CurrencyAmount>;
    fn blockchain_balance(&self) -> Option<&BlockchainBalance>;
    fn uma_prescreening_utxos(&self) -> &[String];
    fn balances(&self) -> Option<&Balances>;
}

/// A page of a paginated list.
pub trait ConnectionRecord: Typename {
    /// The total number of entities across all pages. Only
    /// `AccountToPaymentRequestsConnection` may omit it.
    fn count(&self) -> Option<i64>;
    fn page_info(&self) -> Option<&PageInfo>;
}
