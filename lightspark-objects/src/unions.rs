//! Interface families, dispatched on the `__typename` discriminator.
//!
//! Each family is a closed enum generated from a literal dispatch table.
//! Unlike enumerations, interface families are NOT forward-compatible: a
//! discriminator missing from the table fails with
//! [`DecodeError::UnknownVariant`](crate::error::DecodeError::UnknownVariant).
//!
//! Narrower families convert into wider ones with [`From`]:
//! `LightsparkNode -> Node -> Entity` and
//! `LightningTransaction | OnChainTransaction -> Transaction -> Entity`.

use crate::{
    connections::{
        AccountToApiTokensConnection, AccountToChannelsConnection,
        AccountToNodesConnection, AccountToPaymentRequestsConnection,
        AccountToTransactionsConnection, AccountToWalletsConnection,
        AccountToWithdrawalRequestsConnection,
        IncomingPaymentToAttemptsConnection,
        LightsparkNodeToChannelsConnection,
        OutgoingPaymentAttemptToHopsConnection,
        OutgoingPaymentToAttemptsConnection,
        WalletToPaymentRequestsConnection, WalletToTransactionsConnection,
        WalletToWithdrawalRequestsConnection,
        WithdrawalRequestToChannelClosingTransactionsConnection,
        WithdrawalRequestToChannelOpeningTransactionsConnection,
    },
    entities::{
        Account, ApiToken, Channel, ChannelClosingTransaction,
        ChannelOpeningTransaction, ChannelSnapshot, Deposit, GraphNode, Hop,
        IncomingPayment, IncomingPaymentAttempt, Invoice, InvoiceData,
        LightsparkNodeWithOsk, LightsparkNodeWithRemoteSigning, Offer,
        OfferData, OutgoingPayment, OutgoingPaymentAttempt, RoutingTransaction,
        Signable, SignablePayload, UmaInvitation, Wallet, Withdrawal,
        WithdrawalRequest,
    },
    enums::{BitcoinNetwork, LightsparkNodeStatus, TransactionStatus},
    traits::{
        ConnectionRecord, EntityRecord, LightningTransactionRecord,
        LightsparkNodeRecord, NodeRecord, OnChainTransactionRecord,
        TransactionRecord,
    },
    types::{
        Balances, BlockchainBalance, CurrencyAmount, EntityId, EntityRef,
        PageInfo, Timestamp,
    },
};

graphql_union! {
    /// Any object reachable through the top-level `entity(id)` lookup.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum Entity: "Entity" {
        "Account" => Account(Account),
        "ApiToken" => ApiToken(ApiToken),
        "Channel" => Channel(Channel),
        "ChannelClosingTransaction" =>
            ChannelClosingTransaction(ChannelClosingTransaction),
        "ChannelOpeningTransaction" =>
            ChannelOpeningTransaction(ChannelOpeningTransaction),
        "ChannelSnapshot" => ChannelSnapshot(ChannelSnapshot),
        "Deposit" => Deposit(Deposit),
        "GraphNode" => GraphNode(GraphNode),
        "Hop" => Hop(Hop),
        "IncomingPayment" => IncomingPayment(IncomingPayment),
        "IncomingPaymentAttempt" =>
            IncomingPaymentAttempt(IncomingPaymentAttempt),
        "Invoice" => Invoice(Invoice),
        "LightsparkNodeWithOSK" =>
            LightsparkNodeWithOsk(LightsparkNodeWithOsk),
        "LightsparkNodeWithRemoteSigning" =>
            LightsparkNodeWithRemoteSigning(LightsparkNodeWithRemoteSigning),
        "Offer" => Offer(Offer),
        "OfferData" => OfferData(OfferData),
        "OutgoingPayment" => OutgoingPayment(OutgoingPayment),
        "OutgoingPaymentAttempt" =>
            OutgoingPaymentAttempt(OutgoingPaymentAttempt),
        "RoutingTransaction" => RoutingTransaction(RoutingTransaction),
        "Signable" => Signable(Signable),
        "SignablePayload" => SignablePayload(SignablePayload),
        "UmaInvitation" => UmaInvitation(UmaInvitation),
        "Wallet" => Wallet(Wallet),
        "Withdrawal" => Withdrawal(Withdrawal),
        "WithdrawalRequest" => WithdrawalRequest(WithdrawalRequest),
    }
}

graphql_union! {
    /// Any node of the lightning graph, managed by Lightspark or not.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum Node: "Node" {
        "GraphNode" => GraphNode(GraphNode),
        "LightsparkNodeWithOSK" =>
            LightsparkNodeWithOsk(LightsparkNodeWithOsk),
        "LightsparkNodeWithRemoteSigning" =>
            LightsparkNodeWithRemoteSigning(LightsparkNodeWithRemoteSigning),
    }
}

graphql_union! {
    /// A node managed by Lightspark.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum LightsparkNode: "LightsparkNode" {
        "LightsparkNodeWithOSK" => WithOsk(LightsparkNodeWithOsk),
        "LightsparkNodeWithRemoteSigning" =>
            WithRemoteSigning(LightsparkNodeWithRemoteSigning),
    }
}

graphql_union! {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum Transaction: "Transaction" {
        "ChannelClosingTransaction" =>
            ChannelClosingTransaction(ChannelClosingTransaction),
        "ChannelOpeningTransaction" =>
            ChannelOpeningTransaction(ChannelOpeningTransaction),
        "Deposit" => Deposit(Deposit),
        "IncomingPayment" => IncomingPayment(IncomingPayment),
        "OutgoingPayment" => OutgoingPayment(OutgoingPayment),
        "RoutingTransaction" => RoutingTransaction(RoutingTransaction),
        "Withdrawal" => Withdrawal(Withdrawal),
    }
}

graphql_union! {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum LightningTransaction: "LightningTransaction" {
        "IncomingPayment" => IncomingPayment(IncomingPayment),
        "OutgoingPayment" => OutgoingPayment(OutgoingPayment),
        "RoutingTransaction" => RoutingTransaction(RoutingTransaction),
    }
}

graphql_union! {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum OnChainTransaction: "OnChainTransaction" {
        "ChannelClosingTransaction" =>
            ChannelClosingTransaction(ChannelClosingTransaction),
        "ChannelOpeningTransaction" =>
            ChannelOpeningTransaction(ChannelOpeningTransaction),
        "Deposit" => Deposit(Deposit),
        "Withdrawal" => Withdrawal(Withdrawal),
    }
}

graphql_union! {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum PaymentRequest: "PaymentRequest" {
        "Invoice" => Invoice(Invoice),
    }
}

graphql_union! {
    #[derive(Clone, Debug, PartialEq)]
    pub enum PaymentRequestData: "PaymentRequestData" {
        "InvoiceData" => InvoiceData(InvoiceData),
    }
}

graphql_union! {
    /// Any page of a paginated list.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Connection: "Connection" {
        "AccountToApiTokensConnection" =>
            AccountToApiTokens(AccountToApiTokensConnection),
        "AccountToChannelsConnection" =>
            AccountToChannels(AccountToChannelsConnection),
        "AccountToNodesConnection" =>
            AccountToNodes(AccountToNodesConnection),
        "AccountToPaymentRequestsConnection" =>
            AccountToPaymentRequests(AccountToPaymentRequestsConnection),
        "AccountToTransactionsConnection" =>
            AccountToTransactions(AccountToTransactionsConnection),
        "AccountToWalletsConnection" =>
            AccountToWallets(AccountToWalletsConnection),
        "AccountToWithdrawalRequestsConnection" =>
            AccountToWithdrawalRequests(AccountToWithdrawalRequestsConnection),
        "IncomingPaymentToAttemptsConnection" =>
            IncomingPaymentToAttempts(IncomingPaymentToAttemptsConnection),
        "LightsparkNodeToChannelsConnection" =>
            LightsparkNodeToChannels(LightsparkNodeToChannelsConnection),
        "OutgoingPaymentAttemptToHopsConnection" =>
            OutgoingPaymentAttemptToHops(
                OutgoingPaymentAttemptToHopsConnection
            ),
        "OutgoingPaymentToAttemptsConnection" =>
            OutgoingPaymentToAttempts(OutgoingPaymentToAttemptsConnection),
        "WalletToPaymentRequestsConnection" =>
            WalletToPaymentRequests(WalletToPaymentRequestsConnection),
        "WalletToTransactionsConnection" =>
            WalletToTransactions(WalletToTransactionsConnection),
        "WalletToWithdrawalRequestsConnection" =>
            WalletToWithdrawalRequests(WalletToWithdrawalRequestsConnection),
        "WithdrawalRequestToChannelClosingTransactionsConnection" =>
            WithdrawalRequestToChannelClosingTransactions(
                WithdrawalRequestToChannelClosingTransactionsConnection
            ),
        "WithdrawalRequestToChannelOpeningTransactionsConnection" =>
            WithdrawalRequestToChannelOpeningTransactions(
                WithdrawalRequestToChannelOpeningTransactionsConnection
            ),
    }
}

graphql_union! {
    /// Whoever owns a Lightspark node.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum LightsparkNodeOwner: "LightsparkNodeOwner" {
        "Account" => Account(Account),
        "Wallet" => Wallet(Wallet),
    }
}

graphql_union! {
    /// Whoever performed an audited action.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum AuditLogActor: "AuditLogActor" {
        "ApiToken" => ApiToken(ApiToken),
    }
}

// --- Record accessors --- //

impl Entity {
    pub fn as_record(&self) -> &dyn EntityRecord {
        match self {
            Self::Account(x) => x,
            Self::ApiToken(x) => x,
            Self::Channel(x) => x,
            Self::ChannelClosingTransaction(x) => x,
            Self::ChannelOpeningTransaction(x) => x,
            Self::ChannelSnapshot(x) => x,
            Self::Deposit(x) => x,
            Self::GraphNode(x) => x,
            Self::Hop(x) => x,
            Self::IncomingPayment(x) => x,
            Self::IncomingPaymentAttempt(x) => x,
            Self::Invoice(x) => x,
            Self::LightsparkNodeWithOsk(x) => x,
            Self::LightsparkNodeWithRemoteSigning(x) => x,
            Self::Offer(x) => x,
            Self::OfferData(x) => x,
            Self::OutgoingPayment(x) => x,
            Self::OutgoingPaymentAttempt(x) => x,
            Self::RoutingTransaction(x) => x,
            Self::Signable(x) => x,
            Self::SignablePayload(x) => x,
            Self::UmaInvitation(x) => x,
            Self::Wallet(x) => x,
            Self::Withdrawal(x) => x,
            Self::WithdrawalRequest(x) => x,
        }
    }

    /// The transaction view of this entity, if it is one.
    pub fn as_transaction(&self) -> Option<&dyn TransactionRecord> {
        match self {
            Self::ChannelClosingTransaction(x) => Some(x),
            Self::ChannelOpeningTransaction(x) => Some(x),
            Self::Deposit(x) => Some(x),
            Self::IncomingPayment(x) => Some(x),
            Self::OutgoingPayment(x) => Some(x),
            Self::RoutingTransaction(x) => Some(x),
            Self::Withdrawal(x) => Some(x),
            _ => None,
        }
    }

    /// The node view of this entity, if it is one.
    pub fn as_node(&self) -> Option<&dyn NodeRecord> {
        match self {
            Self::GraphNode(x) => Some(x),
            Self::LightsparkNodeWithOsk(x) => Some(x),
            Self::LightsparkNodeWithRemoteSigning(x) => Some(x),
            _ => None,
        }
    }
}

impl Node {
    pub fn as_record(&self) -> &dyn NodeRecord {
        match self {
            Self::GraphNode(x) => x,
            Self::LightsparkNodeWithOsk(x) => x,
            Self::LightsparkNodeWithRemoteSigning(x) => x,
        }
    }

    /// `None` for nodes Lightspark does not manage.
    pub fn as_lightspark_node(&self) -> Option<&dyn LightsparkNodeRecord> {
        match self {
            Self::GraphNode(_) => None,
            Self::LightsparkNodeWithOsk(x) => Some(x),
            Self::LightsparkNodeWithRemoteSigning(x) => Some(x),
        }
    }
}

impl LightsparkNode {
    pub fn as_record(&self) -> &dyn LightsparkNodeRecord {
        match self {
            Self::WithOsk(x) => x,
            Self::WithRemoteSigning(x) => x,
        }
    }
}

impl Transaction {
    pub fn as_record(&self) -> &dyn TransactionRecord {
        match self {
            Self::ChannelClosingTransaction(x) => x,
            Self::ChannelOpeningTransaction(x) => x,
            Self::Deposit(x) => x,
            Self::IncomingPayment(x) => x,
            Self::OutgoingPayment(x) => x,
            Self::RoutingTransaction(x) => x,
            Self::Withdrawal(x) => x,
        }
    }
}

impl LightningTransaction {
    pub fn as_record(&self) -> &dyn LightningTransactionRecord {
        match self {
            Self::IncomingPayment(x) => x,
            Self::OutgoingPayment(x) => x,
            Self::RoutingTransaction(x) => x,
        }
    }
}

impl OnChainTransaction {
    pub fn as_record(&self) -> &dyn OnChainTransactionRecord {
        match self {
            Self::ChannelClosingTransaction(x) => x,
            Self::ChannelOpeningTransaction(x) => x,
            Self::Deposit(x) => x,
            Self::Withdrawal(x) => x,
        }
    }
}

impl PaymentRequest {
    pub fn as_record(&self) -> &dyn EntityRecord {
        match self {
            Self::Invoice(x) => x,
        }
    }

    pub fn data(&self) -> PaymentRequestData {
        match self {
            Self::Invoice(invoice) =>
                PaymentRequestData::InvoiceData(invoice.data.clone()),
        }
    }
}

impl PaymentRequestData {
    pub fn encoded_payment_request(&self) -> &str {
        match self {
            Self::InvoiceData(x) => &x.encoded_payment_request,
        }
    }

    pub fn bitcoin_network(&self) -> BitcoinNetwork {
        match self {
            Self::InvoiceData(x) => x.bitcoin_network,
        }
    }
}

impl Connection {
    pub fn as_record(&self) -> &dyn ConnectionRecord {
        match self {
            Self::AccountToApiTokens(x) => x,
            Self::AccountToChannels(x) => x,
            Self::AccountToNodes(x) => x,
            Self::AccountToPaymentRequests(x) => x,
            Self::AccountToTransactions(x) => x,
            Self::AccountToWallets(x) => x,
            Self::AccountToWithdrawalRequests(x) => x,
            Self::IncomingPaymentToAttempts(x) => x,
            Self::LightsparkNodeToChannels(x) => x,
            Self::OutgoingPaymentAttemptToHops(x) => x,
            Self::OutgoingPaymentToAttempts(x) => x,
            Self::WalletToPaymentRequests(x) => x,
            Self::WalletToTransactions(x) => x,
            Self::WalletToWithdrawalRequests(x) => x,
            Self::WithdrawalRequestToChannelClosingTransactions(x) => x,
            Self::WithdrawalRequestToChannelOpeningTransactions(x) => x,
        }
    }
}

impl LightsparkNodeOwner {
    pub fn as_record(&self) -> &dyn EntityRecord {
        match self {
            Self::Account(x) => x,
            Self::Wallet(x) => x,
        }
    }
}

impl AuditLogActor {
    pub fn as_record(&self) -> &dyn EntityRecord {
        match self {
            Self::ApiToken(x) => x,
        }
    }
}

// --- Capability delegation --- //

macro_rules! delegate_entity_record {
    ($($family:ident),* $(,)?) => {
        $(
            impl EntityRecord for $family {
                fn id(&self) -> &EntityId {
                    self.as_record().id()
                }
                fn created_at(&self) -> Timestamp {
                    self.as_record().created_at()
                }
                fn updated_at(&self) -> Timestamp {
                    self.as_record().updated_at()
                }
            }
        )*
    }
}

macro_rules! delegate_transaction_record {
    ($($family:ident),* $(,)?) => {
        $(
            impl TransactionRecord for $family {
                fn status(&self) -> TransactionStatus {
                    self.as_record().status()
                }
                fn resolved_at(&self) -> Option<Timestamp> {
                    self.as_record().resolved_at()
                }
                fn amount(&self) -> &CurrencyAmount {
                    self.as_record().amount()
                }
                fn transaction_hash(&self) -> Option<&str> {
                    self.as_record().transaction_hash()
                }
            }
        )*
    }
}

macro_rules! delegate_node_record {
    ($($family:ident),* $(,)?) => {
        $(
            impl NodeRecord for $family {
                fn alias(&self) -> Option<&str> {
                    self.as_record().alias()
                }
                fn bitcoin_network(&self) -> BitcoinNetwork {
                    self.as_record().bitcoin_network()
                }
                fn color(&self) -> Option<&str> {
                    self.as_record().color()
                }
                fn conductivity(&self) -> Option<i64> {
                    self.as_record().conductivity()
                }
                fn display_name(&self) -> &str {
                    self.as_record().display_name()
                }
                fn public_key(&self) -> Option<&str> {
                    self.as_record().public_key()
                }
            }
        )*
    }
}

delegate_entity_record!(
    Entity,
    Node,
    LightsparkNode,
    Transaction,
    LightningTransaction,
    OnChainTransaction,
    PaymentRequest,
    LightsparkNodeOwner,
    AuditLogActor,
);
delegate_transaction_record!(
    Transaction,
    LightningTransaction,
    OnChainTransaction,
);
delegate_node_record!(Node, LightsparkNode);

impl LightningTransactionRecord for LightningTransaction {}

impl OnChainTransactionRecord for OnChainTransaction {
    fn fees(&self) -> Option<&CurrencyAmount> {
        self.as_record().fees()
    }
    fn block_hash(&self) -> Option<&str> {
        self.as_record().block_hash()
    }
    fn block_height(&self) -> i64 {
        self.as_record().block_height()
    }
    fn destination_addresses(&self) -> &[String] {
        self.as_record().destination_addresses()
    }
    fn num_confirmations(&self) -> Option<i64> {
        self.as_record().num_confirmations()
    }
}

impl LightsparkNodeRecord for LightsparkNode {
    fn owner(&self) -> &EntityRef {
        self.as_record().owner()
    }
    fn status(&self) -> Option<LightsparkNodeStatus> {
        self.as_record().status()
    }
    fn total_balance(&self) -> Option<&CurrencyAmount> {
        self.as_record().total_balance()
    }
    fn total_local_balance(&self) -> Option<&CurrencyAmount> {
        self.as_record().total_local_balance()
    }
    fn local_balance(&self) -> Option<&CurrencyAmount> {
        self.as_record().local_balance()
    }
    fn remote_balance(&self) -> Option<&CurrencyAmount> {
        self.as_record().remote_balance()
    }
    fn blockchain_balance(&self) -> Option<&BlockchainBalance> {
        self.as_record().blockchain_balance()
    }
    fn uma_prescreening_utxos(&self) -> &[String] {
        self.as_record().uma_prescreening_utxos()
    }
    fn balances(&self) -> Option<&Balances> {
        self.as_record().balances()
    }
}

impl ConnectionRecord for Connection {
    fn count(&self) -> Option<i64> {
        self.as_record().count()
    }
    fn page_info(&self) -> Option<&PageInfo> {
        self.as_record().page_info()
    }
}

// --- Widening conversions --- //

impl From<LightsparkNode> for Node {
    fn from(node: LightsparkNode) -> Self {
        match node {
            LightsparkNode::WithOsk(x) => Self::LightsparkNodeWithOsk(x),
            LightsparkNode::WithRemoteSigning(x) =>
                Self::LightsparkNodeWithRemoteSigning(x),
        }
    }
}

impl From<Node> for Entity {
    fn from(node: Node) -> Self {
        match node {
            Node::GraphNode(x) => Self::GraphNode(x),
            Node::LightsparkNodeWithOsk(x) => Self::LightsparkNodeWithOsk(x),
            Node::LightsparkNodeWithRemoteSigning(x) =>
                Self::LightsparkNodeWithRemoteSigning(x),
        }
    }
}

impl From<LightsparkNode> for Entity {
    fn from(node: LightsparkNode) -> Self {
        Self::from(Node::from(node))
    }
}

impl From<LightningTransaction> for Transaction {
    fn from(tx: LightningTransaction) -> Self {
        match tx {
            LightningTransaction::IncomingPayment(x) =>
                Self::IncomingPayment(x),
            LightningTransaction::OutgoingPayment(x) =>
                Self::OutgoingPayment(x),
            LightningTransaction::RoutingTransaction(x) =>
                Self::RoutingTransaction(x),
        }
    }
}

impl From<OnChainTransaction> for Transaction {
    fn from(tx: OnChainTransaction) -> Self {
        match tx {
            OnChainTransaction::ChannelClosingTransaction(x) =>
                Self::ChannelClosingTransaction(x),
            OnChainTransaction::ChannelOpeningTransaction(x) =>
                Self::ChannelOpeningTransaction(x),
            OnChainTransaction::Deposit(x) => Self::Deposit(x),
            OnChainTransaction::Withdrawal(x) => Self::Withdrawal(x),
        }
    }
}

impl From<Transaction> for Entity {
    fn from(tx: Transaction) -> Self {
        match tx {
            Transaction::ChannelClosingTransaction(x) =>
                Self::ChannelClosingTransaction(x),
            Transaction::ChannelOpeningTransaction(x) =>
                Self::ChannelOpeningTransaction(x),
            Transaction::Deposit(x) => Self::Deposit(x),
            Transaction::IncomingPayment(x) => Self::IncomingPayment(x),
            Transaction::OutgoingPayment(x) => Self::OutgoingPayment(x),
            Transaction::RoutingTransaction(x) => Self::RoutingTransaction(x),
            Transaction::Withdrawal(x) => Self::Withdrawal(x),
        }
    }
}

impl From<LightningTransaction> for Entity {
    fn from(tx: LightningTransaction) -> Self {
        Self::from(Transaction::from(tx))
    }
}

impl From<OnChainTransaction> for Entity {
    fn from(tx: OnChainTransaction) -> Self {
        Self::from(Transaction::from(tx))
    }
}

impl From<PaymentRequest> for Entity {
    fn from(request: PaymentRequest) -> Self {
        match request {
            PaymentRequest::Invoice(x) => Self::Invoice(x),
        }
    }
}

impl From<LightsparkNodeOwner> for Entity {
    fn from(owner: LightsparkNodeOwner) -> Self {
        match owner {
            LightsparkNodeOwner::Account(x) => Self::Account(x),
            LightsparkNodeOwner::Wallet(x) => Self::Wallet(x),
        }
    }
}

impl From<AuditLogActor> for Entity {
    fn from(actor: AuditLogActor) -> Self {
        match actor {
            AuditLogActor::ApiToken(x) => Self::ApiToken(x),
        }
    }
}
