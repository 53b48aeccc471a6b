use crate::types::{EntityId, Timestamp};

graphql_object! {
    typename = "Account";

    /// A Lightspark account. Owns nodes, API tokens and wallets.
    #[derive(Clone, Debug)]
    pub struct Account {
        pub id: EntityId => "account_id",
        pub created_at: Timestamp => "account_created_at",
        pub updated_at: Timestamp => "account_updated_at",
        pub name: Option<String> => "account_name",
    }
}

impl_entity!(Account);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{
        decode::FromJson,
        error::DecodeErrorKind,
        traits::{EntityRecord, Typename},
    };

    #[test]
    fn minimal_account() {
        let value = json!({
            "__typename": "Account",
            "account_id": "a1",
            "account_created_at": "2024-01-02T03:04:05Z",
            "account_updated_at": "2024-01-02T03:04:05Z",
            "account_name": null,
        });
        let account = Account::decode(&value).unwrap();

        assert_eq!(account.id(), &EntityId::new("a1"));
        assert_eq!(account.name, None);
        let created_at = account.created_at().to_rfc3339();
        assert_eq!(created_at, "2024-01-02T03:04:05+00:00");
        assert_eq!(account.created_at, account.updated_at);
        assert_eq!(account.typename(), "Account");
    }

    #[test]
    fn missing_timestamp() {
        let value = json!({
            "account_id": "a1",
            "account_created_at": "2024-01-02T03:04:05Z",
        });
        let err = Account::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
        assert_eq!(err.path(), "$.account_updated_at");
    }

    #[test]
    fn equality_is_by_id() {
        let a = json!({
            "account_id": "a1",
            "account_created_at": "2024-01-02T03:04:05Z",
            "account_updated_at": "2024-01-02T03:04:05Z",
            "account_name": "first",
        });
        let mut b = a.clone();
        b["account_name"] = json!("renamed");
        b["account_updated_at"] = json!("2025-01-01T00:00:00Z");

        assert_eq!(Account::decode(&a).unwrap(), Account::decode(&b).unwrap());

        b["account_id"] = json!("a2");
        assert_ne!(Account::decode(&a).unwrap(), Account::decode(&b).unwrap());
    }
}
