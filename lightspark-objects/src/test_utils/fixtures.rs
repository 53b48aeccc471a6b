//! Minimal but complete payloads, as the API would return them.
//!
//! Builders take the entity id and fill every required field, so tests only
//! spell out the fields they care about.

use serde_json::{Map, Value, json};

pub const TIMESTAMP: &str = "2024-01-02T03:04:05Z";

/// `{prefix}_{key}` for every `key` in `fields`, plus the `__typename`, id and
/// timestamps every entity carries.
pub fn entity(typename: &str, prefix: &str, id: &str, fields: Value) -> Value {
    let mut object = Map::new();
    object.insert("__typename".to_owned(), json!(typename));
    object.insert(format!("{prefix}_id"), json!(id));
    object.insert(format!("{prefix}_created_at"), json!(TIMESTAMP));
    object.insert(format!("{prefix}_updated_at"), json!(TIMESTAMP));
    if let Value::Object(fields) = fields {
        for (key, value) in fields {
            object.insert(format!("{prefix}_{key}"), value);
        }
    }
    Value::Object(object)
}

/// An entity link, as embedded in other entities.
pub fn link(id: &str) -> Value {
    json!({ "id": id })
}

pub fn currency_amount(msats: i64) -> Value {
    json!({
        "__typename": "CurrencyAmount",
        "currency_amount_original_value": msats,
        "currency_amount_original_unit": "MILLISATOSHI",
        "currency_amount_preferred_currency_unit": "SATOSHI",
        "currency_amount_preferred_currency_value_rounded": msats / 1000,
        "currency_amount_preferred_currency_value_approx":
            msats as f64 / 1000.0,
    })
}

pub fn balances(msats: i64) -> Value {
    json!({
        "__typename": "Balances",
        "balances_owned_balance": currency_amount(msats),
        "balances_available_to_send_balance": currency_amount(msats),
        "balances_available_to_withdraw_balance": currency_amount(msats),
    })
}

// --- Accounts and nodes --- //

pub fn account(id: &str) -> Value {
    entity("Account", "account", id, json!({ "name": "Acme" }))
}

pub fn api_token(id: &str) -> Value {
    entity(
        "ApiToken",
        "api_token",
        id,
        json!({
            "client_id": "client1",
            "name": "test token",
            "permissions": ["ALL"],
        }),
    )
}

pub fn wallet(id: &str) -> Value {
    entity(
        "Wallet",
        "wallet",
        id,
        json!({
            "balances": balances(2_000),
            "third_party_identifier": "user-42",
        }),
    )
}

pub fn graph_node(id: &str) -> Value {
    entity(
        "GraphNode",
        "graph_node",
        id,
        json!({
            "bitcoin_network": "REGTEST",
            "display_name": format!("graph node {id}"),
            "public_key": "02aa",
        }),
    )
}

pub fn lightspark_node_with_osk(id: &str) -> Value {
    entity(
        "LightsparkNodeWithOSK",
        "lightspark_node_with_o_s_k",
        id,
        json!({
            "alias": "osk",
            "bitcoin_network": "REGTEST",
            "display_name": "OSK node",
            "owner": link("acct1"),
            "status": "READY",
            "blockchain_balance": {
                "blockchain_balance_total_balance": currency_amount(1_000),
            },
            "uma_prescreening_utxos": ["txid:0"],
            "encrypted_signing_private_key": null,
        }),
    )
}

pub fn lightspark_node_with_remote_signing(id: &str) -> Value {
    entity(
        "LightsparkNodeWithRemoteSigning",
        "lightspark_node_with_remote_signing",
        id,
        json!({
            "bitcoin_network": "REGTEST",
            "display_name": "remote signing node",
            "owner": link("acct1"),
            "status": "READY",
            "uma_prescreening_utxos": [],
            "balances": balances(3_000),
        }),
    )
}

pub fn channel(id: &str) -> Value {
    entity(
        "Channel",
        "channel",
        id,
        json!({
            "capacity": currency_amount(100_000),
            "status": "OK",
            "local_node": link("n1"),
        }),
    )
}

pub fn channel_snapshot(id: &str) -> Value {
    entity(
        "ChannelSnapshot",
        "channel_snapshot",
        id,
        json!({
            "channel": link("ch1"),
            "timestamp": TIMESTAMP,
        }),
    )
}

// --- Transactions --- //

fn on_chain(typename: &str, prefix: &str, id: &str, extra: Value) -> Value {
    let mut fields = json!({
        "status": "SUCCESS",
        "resolved_at": TIMESTAMP,
        "amount": currency_amount(50_000),
        "transaction_hash": "a1b2",
        "block_height": 100,
        "destination_addresses": ["bcrt1qexample"],
    });
    if let (Some(object), Value::Object(extra)) =
        (fields.as_object_mut(), extra)
    {
        object.extend(extra);
    }
    entity(typename, prefix, id, fields)
}

pub fn channel_closing_transaction(id: &str) -> Value {
    on_chain(
        "ChannelClosingTransaction",
        "channel_closing_transaction",
        id,
        json!({ "channel": link("ch1") }),
    )
}

pub fn channel_opening_transaction(id: &str) -> Value {
    on_chain(
        "ChannelOpeningTransaction",
        "channel_opening_transaction",
        id,
        json!({ "channel": link("ch1") }),
    )
}

pub fn deposit(id: &str) -> Value {
    on_chain("Deposit", "deposit", id, json!({ "destination": link("node1") }))
}

pub fn withdrawal(id: &str) -> Value {
    on_chain("Withdrawal", "withdrawal", id, json!({ "origin": link("node1") }))
}

pub fn incoming_payment(id: &str) -> Value {
    entity(
        "IncomingPayment",
        "incoming_payment",
        id,
        json!({
            "status": "PENDING",
            "amount": currency_amount(10_000),
            "destination": link("n1"),
        }),
    )
}

pub fn outgoing_payment(id: &str) -> Value {
    entity(
        "OutgoingPayment",
        "outgoing_payment",
        id,
        json!({
            "status": "SUCCESS",
            "resolved_at": TIMESTAMP,
            "amount": currency_amount(10_000),
            "is_uma": false,
            "origin": link("n1"),
            "fees": currency_amount(1_000),
            "payment_request_data": null,
            "is_internal_payment": false,
        }),
    )
}

pub fn routing_transaction(id: &str) -> Value {
    entity(
        "RoutingTransaction",
        "routing_transaction",
        id,
        json!({
            "status": "SUCCESS",
            "amount": currency_amount(20_000),
            "incoming_channel": link("ch1"),
            "outgoing_channel": link("ch2"),
            "fees": currency_amount(10),
        }),
    )
}

pub fn incoming_payment_attempt(id: &str) -> Value {
    entity(
        "IncomingPaymentAttempt",
        "incoming_payment_attempt",
        id,
        json!({
            "status": "ACCEPTED",
            "amount": currency_amount(10_000),
            "channel": link("ch1"),
        }),
    )
}

pub fn outgoing_payment_attempt(id: &str) -> Value {
    entity(
        "OutgoingPaymentAttempt",
        "outgoing_payment_attempt",
        id,
        json!({
            "status": "SUCCEEDED",
            "attempted_at": TIMESTAMP,
            "amount": currency_amount(10_000),
            "outgoing_payment": link("p1"),
        }),
    )
}

pub fn hop(id: &str) -> Value {
    entity(
        "Hop",
        "hop",
        id,
        json!({
            "destination": link("g1"),
            "index": 0,
            "public_key": "02aa",
        }),
    )
}

// --- Payment requests --- //

pub fn invoice_data(destination: Value) -> Value {
    json!({
        "__typename": "InvoiceData",
        "invoice_data_encoded_payment_request": "lnbcrt1test",
        "invoice_data_bitcoin_network": "REGTEST",
        "invoice_data_payment_hash": "ff00",
        "invoice_data_amount": currency_amount(10_000),
        "invoice_data_created_at": TIMESTAMP,
        "invoice_data_expires_at": "2024-01-03T03:04:05Z",
        "invoice_data_memo": null,
        "invoice_data_destination": destination,
    })
}

pub fn invoice(id: &str, destination: Value) -> Value {
    entity(
        "Invoice",
        "invoice",
        id,
        json!({
            "data": invoice_data(destination),
            "status": "OPEN",
        }),
    )
}

pub fn offer(id: &str) -> Value {
    entity(
        "Offer",
        "offer",
        id,
        json!({
            "data": link("od1"),
            "encoded_offer": "lno1test",
        }),
    )
}

pub fn offer_data(id: &str) -> Value {
    entity(
        "OfferData",
        "offer_data",
        id,
        json!({
            "encoded_offer": "lno1test",
            "bitcoin_networks": ["REGTEST"],
        }),
    )
}

// --- Signing, UMA and withdrawals --- //

pub fn signable(id: &str) -> Value {
    entity("Signable", "signable", id, json!({}))
}

pub fn signable_payload(id: &str) -> Value {
    entity(
        "SignablePayload",
        "signable_payload",
        id,
        json!({
            "payload": "deadbeef",
            "derivation_path": "m/3/2104864975",
            "status": "CREATED",
            "signable": link("s1"),
        }),
    )
}

pub fn uma_invitation(id: &str) -> Value {
    entity(
        "UmaInvitation",
        "uma_invitation",
        id,
        json!({
            "code": "abc",
            "url": "https://uma.me/i/abc",
            "inviter_uma": "$alice@example.com",
            "incentives_status": "PENDING",
        }),
    )
}

pub fn withdrawal_request(id: &str) -> Value {
    entity(
        "WithdrawalRequest",
        "withdrawal_request",
        id,
        json!({
            "amount": currency_amount(50_000),
            "bitcoin_address": "bcrt1qexample",
            "withdrawal_mode": "WALLET_ONLY",
            "status": "IN_PROGRESS",
        }),
    )
}

// --- By typename --- //

/// The minimal payload for any entity or connection typename.
///
/// Panics on a typename with no fixture.
pub fn object(typename: &str) -> Value {
    match typename {
        "Account" => account("a1"),
        "ApiToken" => api_token("t1"),
        "Channel" => channel("ch1"),
        "ChannelClosingTransaction" => channel_closing_transaction("cc1"),
        "ChannelOpeningTransaction" => channel_opening_transaction("co1"),
        "ChannelSnapshot" => channel_snapshot("cs1"),
        "Deposit" => deposit("d1"),
        "GraphNode" => graph_node("g1"),
        "Hop" => hop("h1"),
        "IncomingPayment" => incoming_payment("ip1"),
        "IncomingPaymentAttempt" => incoming_payment_attempt("ia1"),
        "Invoice" => invoice("inv1", graph_node("g1")),
        "InvoiceData" => invoice_data(graph_node("g1")),
        "LightsparkNodeWithOSK" => lightspark_node_with_osk("n1"),
        "LightsparkNodeWithRemoteSigning" =>
            lightspark_node_with_remote_signing("n2"),
        "Offer" => offer("o1"),
        "OfferData" => offer_data("od1"),
        "OutgoingPayment" => outgoing_payment("p1"),
        "OutgoingPaymentAttempt" => outgoing_payment_attempt("oa1"),
        "RoutingTransaction" => routing_transaction("r1"),
        "Signable" => signable("s1"),
        "SignablePayload" => signable_payload("sp1"),
        "UmaInvitation" => uma_invitation("ui1"),
        "Wallet" => wallet("w1"),
        "Withdrawal" => withdrawal("wd1"),
        "WithdrawalRequest" => withdrawal_request("wr1"),
        connection if connection.ends_with("Connection") =>
            empty_connection(connection),
        _ => panic!("no fixture for `{typename}`"),
    }
}

/// An empty page of the given connection type.
pub fn empty_connection(typename: &str) -> Value {
    let prefix = snake_case(typename);
    let mut object = Map::new();
    object.insert("__typename".to_owned(), json!(typename));
    object.insert(format!("{prefix}_count"), json!(0));
    object.insert(format!("{prefix}_entities"), json!([]));
    Value::Object(object)
}

/// `AccountToNodesConnection` -> `account_to_nodes_connection`.
fn snake_case(typename: &str) -> String {
    let mut out = String::with_capacity(typename.len() + 8);
    for (idx, c) in typename.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if idx > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
