use crate::{
    enums::Permission,
    types::{EntityId, Timestamp},
};

graphql_object! {
    typename = "ApiToken";

    /// An API token, used to authenticate against the Lightspark API.
    #[derive(Clone, Debug)]
    pub struct ApiToken {
        pub id: EntityId => "api_token_id",
        pub created_at: Timestamp => "api_token_created_at",
        pub updated_at: Timestamp => "api_token_updated_at",
        /// Sent with every request. Not a secret.
        pub client_id: String => "api_token_client_id",
        pub name: String => "api_token_name",
        pub permissions: Vec<Permission> => "api_token_permissions",
    }
}

impl_entity!(ApiToken);
