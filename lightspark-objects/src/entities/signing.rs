use crate::{
    enums::SignablePayloadStatus,
    types::{EntityId, EntityRef, Timestamp},
};

graphql_object! {
    typename = "Signable";

    #[derive(Clone, Debug)]
    pub struct Signable {
        pub id: EntityId => "signable_id",
        pub created_at: Timestamp => "signable_created_at",
        pub updated_at: Timestamp => "signable_updated_at",
    }
}

graphql_object! {
    typename = "SignablePayload";

    /// A message a remote-signing node is asked to sign.
    #[derive(Clone, Debug)]
    pub struct SignablePayload {
        pub id: EntityId => "signable_payload_id",
        pub created_at: Timestamp => "signable_payload_created_at",
        pub updated_at: Timestamp => "signable_payload_updated_at",
        /// Hex-encoded message.
        pub payload: String => "signable_payload_payload",
        /// BIP 32 path of the signing key, e.g. `m/3/2104864975`.
        pub derivation_path: String => "signable_payload_derivation_path",
        pub status: SignablePayloadStatus => "signable_payload_status",
        pub add_tweak: Option<String> => "signable_payload_add_tweak",
        pub mul_tweak: Option<String> => "signable_payload_mul_tweak",
        pub signable: EntityRef => "signable_payload_signable",
    }
}

impl_entity!(Signable, SignablePayload);
