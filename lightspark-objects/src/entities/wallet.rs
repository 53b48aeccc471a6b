use crate::types::{Balances, EntityId, Timestamp};

graphql_object! {
    typename = "Wallet";

    /// A Lightspark wallet, owned by one of the account's end users.
    #[derive(Clone, Debug)]
    pub struct Wallet {
        pub id: EntityId => "wallet_id",
        pub created_at: Timestamp => "wallet_created_at",
        pub updated_at: Timestamp => "wallet_updated_at",
        pub last_login_at: Option<Timestamp> => "wallet_last_login_at",
        pub balances: Option<Balances> => "wallet_balances",
        /// The id the account assigned to this wallet's user.
        pub third_party_identifier: String
            => "wallet_third_party_identifier",
    }
}

impl_entity!(Wallet);
