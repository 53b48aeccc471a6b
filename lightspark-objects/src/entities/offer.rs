use crate::{
    enums::BitcoinNetwork,
    types::{CurrencyAmount, EntityId, EntityRef, Timestamp},
};

graphql_object! {
    typename = "Offer";

    /// A BOLT 12 offer.
    #[derive(Clone, Debug)]
    pub struct Offer {
        pub id: EntityId => "offer_id",
        pub created_at: Timestamp => "offer_created_at",
        pub updated_at: Timestamp => "offer_updated_at",
        pub data: EntityRef => "offer_data",
        pub encoded_offer: String => "offer_encoded_offer",
        pub amount: Option<CurrencyAmount> => "offer_amount",
        pub description: Option<String> => "offer_description",
    }
}

graphql_object! {
    typename = "OfferData";

    #[derive(Clone, Debug)]
    pub struct OfferData {
        pub id: EntityId => "offer_data_id",
        pub created_at: Timestamp => "offer_data_created_at",
        pub updated_at: Timestamp => "offer_data_updated_at",
        pub amount: Option<CurrencyAmount> => "offer_data_amount",
        pub encoded_offer: String => "offer_data_encoded_offer",
        pub bitcoin_networks: Vec<BitcoinNetwork>
            => "offer_data_bitcoin_networks",
        pub expires_at: Option<Timestamp> => "offer_data_expires_at",
    }
}

impl_entity!(Offer, OfferData);
