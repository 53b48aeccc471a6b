use crate::{
    enums::ChannelStatus,
    types::{ChannelFees, CurrencyAmount, EntityId, EntityRef, Timestamp},
};

graphql_object! {
    typename = "Channel";

    /// A lightning channel between a Lightspark node and a remote node.
    #[derive(Clone, Debug)]
    pub struct Channel {
        pub id: EntityId => "channel_id",
        pub created_at: Timestamp => "channel_created_at",
        pub updated_at: Timestamp => "channel_updated_at",
        /// The on-chain transaction which opened this channel.
        pub funding_transaction: Option<EntityRef>
            => "channel_funding_transaction",
        pub capacity: Option<CurrencyAmount> => "channel_capacity",
        pub local_balance: Option<CurrencyAmount> => "channel_local_balance",
        pub local_unsettled_balance: Option<CurrencyAmount>
            => "channel_local_unsettled_balance",
        pub remote_balance: Option<CurrencyAmount> => "channel_remote_balance",
        pub remote_unsettled_balance: Option<CurrencyAmount>
            => "channel_remote_unsettled_balance",
        pub unsettled_balance: Option<CurrencyAmount>
            => "channel_unsettled_balance",
        pub total_balance: Option<CurrencyAmount> => "channel_total_balance",
        pub status: Option<ChannelStatus> => "channel_status",
        pub estimated_force_closure_wait_minutes: Option<i64>
            => "channel_estimated_force_closure_wait_minutes",
        pub commit_fee: Option<CurrencyAmount> => "channel_commit_fee",
        pub fees: Option<ChannelFees> => "channel_fees",
        /// `None` for private channels the graph does not know about.
        pub remote_node: Option<EntityRef> => "channel_remote_node",
        pub local_node: EntityRef => "channel_local_node",
        pub short_channel_id: Option<String> => "channel_short_channel_id",
    }
}

graphql_object! {
    typename = "ChannelSnapshot";

    /// The balances of a channel at the time of a payment attempt.
    #[derive(Clone, Debug)]
    pub struct ChannelSnapshot {
        pub id: EntityId => "channel_snapshot_id",
        pub created_at: Timestamp => "channel_snapshot_created_at",
        pub updated_at: Timestamp => "channel_snapshot_updated_at",
        pub local_balance: Option<CurrencyAmount>
            => "channel_snapshot_local_balance",
        pub local_unsettled_balance: Option<CurrencyAmount>
            => "channel_snapshot_local_unsettled_balance",
        pub remote_balance: Option<CurrencyAmount>
            => "channel_snapshot_remote_balance",
        pub remote_unsettled_balance: Option<CurrencyAmount>
            => "channel_snapshot_remote_unsettled_balance",
        pub status: Option<String> => "channel_snapshot_status",
        pub channel: EntityRef => "channel_snapshot_channel",
        pub local_channel_reserve: Option<CurrencyAmount>
            => "channel_snapshot_local_channel_reserve",
        pub timestamp: Timestamp => "channel_snapshot_timestamp",
    }
}

impl_entity!(Channel, ChannelSnapshot);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{decode::FromJson, test_utils::fixtures};

    #[test]
    fn links_keep_only_the_id() {
        let mut value = fixtures::channel("ch1");
        value["channel_local_node"] = json!({
            "id": "n1",
            "__typename": "LightsparkNodeWithOSK",
            "lightspark_node_with_o_s_k_display_name": "ignored",
        });
        value["channel_status"] = json!("UNBALANCED_FOR_SEND");

        let channel = Channel::decode(&value).unwrap();
        assert_eq!(channel.local_node, EntityRef::new("n1"));
        assert_eq!(channel.remote_node, None);
        assert_eq!(channel.status, Some(ChannelStatus::UnbalancedForSend));
    }
}
