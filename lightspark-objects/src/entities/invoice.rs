use crate::{
    enums::{BitcoinNetwork, PaymentRequestStatus},
    types::{CurrencyAmount, EntityId, Timestamp},
    unions::Node,
};

graphql_object! {
    typename = "Invoice";

    /// A BOLT 11 invoice created by a Lightspark node.
    #[derive(Clone, Debug)]
    pub struct Invoice {
        pub id: EntityId => "invoice_id",
        pub created_at: Timestamp => "invoice_created_at",
        pub updated_at: Timestamp => "invoice_updated_at",
        pub data: InvoiceData => "invoice_data",
        pub status: PaymentRequestStatus => "invoice_status",
        /// What has been received so far; may differ from the requested
        /// amount for AMP or amountless invoices.
        pub amount_paid: Option<CurrencyAmount> => "invoice_amount_paid",
    }
}

graphql_object! {
    typename = "InvoiceData";

    /// The decoded contents of an invoice.
    #[derive(Clone, Debug, PartialEq)]
    pub struct InvoiceData {
        /// The bech32 `lnbc...` string.
        pub encoded_payment_request: String
            => "invoice_data_encoded_payment_request",
        pub bitcoin_network: BitcoinNetwork => "invoice_data_bitcoin_network",
        pub payment_hash: String => "invoice_data_payment_hash",
        pub amount: CurrencyAmount => "invoice_data_amount",
        pub created_at: Timestamp => "invoice_data_created_at",
        pub expires_at: Timestamp => "invoice_data_expires_at",
        pub memo: Option<String> => "invoice_data_memo",
        /// The node which will receive the payment. Embedded, not linked.
        pub destination: Node => "invoice_data_destination",
    }
}

impl_entity!(Invoice);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{
        decode::FromJson,
        error::DecodeErrorKind,
        test_utils::fixtures,
        traits::{NodeRecord, Typename},
    };

    #[test]
    fn graph_node_destination() {
        let value = fixtures::invoice("inv1", fixtures::graph_node("g1"));
        let invoice = Invoice::decode(&value).unwrap();

        assert_eq!(invoice.status, PaymentRequestStatus::Open);
        let destination = &invoice.data.destination;
        assert_eq!(destination.typename(), "GraphNode");
        assert!(matches!(destination, Node::GraphNode(_)));
        assert_eq!(destination.display_name(), "graph node g1");
    }

    #[test]
    fn null_destination_is_an_invalid_interface() {
        let mut value = fixtures::invoice("inv1", fixtures::graph_node("g1"));
        value["invoice_data"]["invoice_data_destination"] = json!(null);

        let err = Invoice::decode(&value).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidInterface);
        assert_eq!(err.path(), "$.invoice_data.invoice_data_destination");
    }

    #[test]
    fn unknown_destination_variant() {
        let mut value = fixtures::invoice("inv1", fixtures::graph_node("g1"));
        value["invoice_data"]["invoice_data_destination"]["__typename"] =
            json!("Account");

        let err = Invoice::decode(&value).unwrap_err();
        assert_eq!(
            err,
            crate::error::DecodeError::UnknownVariant {
                path: "$.invoice_data.invoice_data_destination".to_owned(),
                family: "Node",
                typename: "Account".to_owned(),
            },
        );
    }
}
