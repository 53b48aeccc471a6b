use crate::{
    enums::{BitcoinNetwork, LightsparkNodeStatus},
    traits::LightsparkNodeRecord,
    types::{
        Balances, BlockchainBalance, CurrencyAmount, EntityId, EntityRef,
        Secret, Timestamp,
    },
};

graphql_object! {
    typename = "GraphNode";

    /// A node on the public lightning graph which Lightspark does not manage.
    #[derive(Clone, Debug)]
    pub struct GraphNode {
        pub id: EntityId => "graph_node_id",
        pub created_at: Timestamp => "graph_node_created_at",
        pub updated_at: Timestamp => "graph_node_updated_at",
        pub alias: Option<String> => "graph_node_alias",
        pub bitcoin_network: BitcoinNetwork => "graph_node_bitcoin_network",
        pub color: Option<String> => "graph_node_color",
        /// A 0-10 score of how well connected the node is.
        pub conductivity: Option<i64> => "graph_node_conductivity",
        pub display_name: String => "graph_node_display_name",
        pub public_key: Option<String> => "graph_node_public_key",
    }
}

graphql_object! {
    typename = "LightsparkNodeWithOSK";

    /// A Lightspark node whose signing key is stored, encrypted, by
    /// Lightspark (an Operation Signing Key).
    #[derive(Clone, Debug)]
    pub struct LightsparkNodeWithOsk {
        pub id: EntityId => "lightspark_node_with_o_s_k_id",
        pub created_at: Timestamp => "lightspark_node_with_o_s_k_created_at",
        pub updated_at: Timestamp => "lightspark_node_with_o_s_k_updated_at",
        pub alias: Option<String> => "lightspark_node_with_o_s_k_alias",
        pub bitcoin_network: BitcoinNetwork
            => "lightspark_node_with_o_s_k_bitcoin_network",
        pub color: Option<String> => "lightspark_node_with_o_s_k_color",
        pub conductivity: Option<i64>
            => "lightspark_node_with_o_s_k_conductivity",
        pub display_name: String => "lightspark_node_with_o_s_k_display_name",
        pub public_key: Option<String>
            => "lightspark_node_with_o_s_k_public_key",
        pub owner: EntityRef => "lightspark_node_with_o_s_k_owner",
        pub status: Option<LightsparkNodeStatus>
            => "lightspark_node_with_o_s_k_status",
        pub total_balance: Option<CurrencyAmount>
            => "lightspark_node_with_o_s_k_total_balance",
        pub total_local_balance: Option<CurrencyAmount>
            => "lightspark_node_with_o_s_k_total_local_balance",
        pub local_balance: Option<CurrencyAmount>
            => "lightspark_node_with_o_s_k_local_balance",
        pub remote_balance: Option<CurrencyAmount>
            => "lightspark_node_with_o_s_k_remote_balance",
        pub blockchain_balance: Option<BlockchainBalance>
            => "lightspark_node_with_o_s_k_blockchain_balance",
        pub uma_prescreening_utxos: Vec<String>
            => "lightspark_node_with_o_s_k_uma_prescreening_utxos",
        pub balances: Option<Balances> => "lightspark_node_with_o_s_k_balances",
        pub encrypted_signing_private_key: Option<Secret>
            => "lightspark_node_with_o_s_k_encrypted_signing_private_key",
    }
}

graphql_object! {
    typename = "LightsparkNodeWithRemoteSigning";

    /// A Lightspark node whose keys never leave the owner's infrastructure;
    /// signing requests are delivered as `REMOTE_SIGNING` webhooks.
    #[derive(Clone, Debug)]
    pub struct LightsparkNodeWithRemoteSigning {
        pub id: EntityId => "lightspark_node_with_remote_signing_id",
        pub created_at: Timestamp
            => "lightspark_node_with_remote_signing_created_at",
        pub updated_at: Timestamp
            => "lightspark_node_with_remote_signing_updated_at",
        pub alias: Option<String>
            => "lightspark_node_with_remote_signing_alias",
        pub bitcoin_network: BitcoinNetwork
            => "lightspark_node_with_remote_signing_bitcoin_network",
        pub color: Option<String>
            => "lightspark_node_with_remote_signing_color",
        pub conductivity: Option<i64>
            => "lightspark_node_with_remote_signing_conductivity",
        pub display_name: String
            => "lightspark_node_with_remote_signing_display_name",
        pub public_key: Option<String>
            => "lightspark_node_with_remote_signing_public_key",
        pub owner: EntityRef => "lightspark_node_with_remote_signing_owner",
        pub status: Option<LightsparkNodeStatus>
            => "lightspark_node_with_remote_signing_status",
        pub total_balance: Option<CurrencyAmount>
            => "lightspark_node_with_remote_signing_total_balance",
        pub total_local_balance: Option<CurrencyAmount>
            => "lightspark_node_with_remote_signing_total_local_balance",
        pub local_balance: Option<CurrencyAmount>
            => "lightspark_node_with_remote_signing_local_balance",
        pub remote_balance: Option<CurrencyAmount>
            => "lightspark_node_with_remote_signing_remote_balance",
        pub blockchain_balance: Option<BlockchainBalance>
            => "lightspark_node_with_remote_signing_blockchain_balance",
        pub uma_prescreening_utxos: Vec<String>
            => "lightspark_node_with_remote_signing_uma_prescreening_utxos",
        pub balances: Option<Balances>
            => "lightspark_node_with_remote_signing_balances",
    }
}

impl_entity!(GraphNode, LightsparkNodeWithOsk, LightsparkNodeWithRemoteSigning);
impl_node!(GraphNode, LightsparkNodeWithOsk, LightsparkNodeWithRemoteSigning);

macro_rules! impl_lightspark_node {
    ($($name:ident),*) => {
        $(
            impl LightsparkNodeRecord for $name {
                fn owner(&self) -> &EntityRef {
                    &self.owner
                }
                fn status(&self) -> Option<LightsparkNodeStatus> {
                    self.status
                }
                fn total_balance(&self) -> Option<&CurrencyAmount> {
                    self.total_balance.as_ref()
                }
                fn total_local_balance(&self) -> Option<&CurrencyAmount> {
                    self.total_local_balance.as_ref()
                }
                fn local_balance(&self) -> Option<&CurrencyAmount> {
                    self.local_balance.as_ref()
                }
                fn remote_balance(&self) -> Option<&CurrencyAmount> {
                    self.remote_balance.as_ref()
                }
                fn blockchain_balance(&self) -> Option<&BlockchainBalance> {
                    self.blockchain_balance.as_ref()
                }
                fn uma_prescreening_utxos(&self) -> &[String] {
                    &self.uma_prescreening_utxos
                }
                fn balances(&self) -> Option<&Balances> {
                    self.balances.as_ref()
                }
            }
        )*
    }
}

impl_lightspark_node!(LightsparkNodeWithOsk, LightsparkNodeWithRemoteSigning);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        decode::FromJson,
        error::DecodeErrorKind,
        test_utils::fixtures,
        traits::{NodeRecord, Typename},
    };

    #[test]
    fn osk_wire_prefix() {
        let mut value = fixtures::lightspark_node_with_osk("n1");
        let key = "lightspark_node_with_o_s_k_encrypted_signing_private_key";
        value[key] = serde_json::json!({
            "secret_encrypted_value": "deadbeef",
            "secret_cipher": "AES-256-GCM",
        });

        let node = LightsparkNodeWithOsk::decode(&value).unwrap();
        assert_eq!(node.typename(), "LightsparkNodeWithOSK");
        assert_eq!(node.bitcoin_network(), BitcoinNetwork::Regtest);
        let key = node.encrypted_signing_private_key.unwrap();
        assert_eq!(key.cipher, "AES-256-GCM");
    }

    #[test]
    fn deprecated_balances_still_decode() {
        let mut value = fixtures::lightspark_node_with_remote_signing("n2");
        value["lightspark_node_with_remote_signing_total_balance"] =
            fixtures::currency_amount(7_000);

        let node = LightsparkNodeWithRemoteSigning::decode(&value).unwrap();
        assert_eq!(node.total_balance().unwrap().original_value, 7_000);
        assert!(node.balances().is_some());
        assert!(node.blockchain_balance().is_none());
    }

    #[test]
    fn utxo_list_is_required() {
        let mut value = fixtures::lightspark_node_with_osk("n1");
        value
            .as_object_mut()
            .unwrap()
            .remove("lightspark_node_with_o_s_k_uma_prescreening_utxos");

        let err = LightsparkNodeWithOsk::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(
            err.path(),
            "$.lightspark_node_with_o_s_k_uma_prescreening_utxos",
        );
    }
}
