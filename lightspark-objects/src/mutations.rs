//! Mutation and query inputs and outputs.
//!
//! Inputs serialize to the exact wire names the API expects as GraphQL
//! variables. Outputs decode like any other record; the entities they return
//! stay [`EntityRef`] links to be fetched separately.

use crate::{
    entities::{ApiToken, IncomingPayment, OutgoingPayment, SignablePayload},
    enums::{
        ComplianceProvider, CryptoSanctionsScreeningProvider, InvoiceType,
        OnChainFeeTarget, PaymentDirection, PaymentFailureReason, Permission,
        RegionCode, RiskRating, TransactionStatus, WithdrawalMode,
    },
    types::{CurrencyAmount, EntityRef, IdAndSignature},
};

// --- Invoices --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CancelInvoiceInput {
        pub invoice_id: String => "cancel_invoice_input_invoice_id",
    }
}

graphql_object! {
    typename = "CancelInvoiceOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CancelInvoiceOutput {
        pub invoice: EntityRef => "cancel_invoice_output_invoice",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateInvoiceInput {
        pub node_id: String => "create_invoice_input_node_id",
        pub amount_msats: i64 => "create_invoice_input_amount_msats",
        pub memo: Option<String> => "create_invoice_input_memo",
        pub invoice_type: Option<InvoiceType>
            => "create_invoice_input_invoice_type",
        /// Server default is 86400 (one day).
        pub expiry_secs: Option<i64> => "create_invoice_input_expiry_secs",
    }
}

graphql_object! {
    typename = "CreateInvoiceOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateInvoiceOutput {
        pub invoice: EntityRef => "create_invoice_output_invoice",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateLnurlInvoiceInput {
        pub node_id: String => "create_lnurl_invoice_input_node_id",
        pub amount_msats: i64 => "create_lnurl_invoice_input_amount_msats",
        pub metadata_hash: String => "create_lnurl_invoice_input_metadata_hash",
        pub expiry_secs: Option<i64>
            => "create_lnurl_invoice_input_expiry_secs",
        pub payment_hash: Option<String>
            => "create_lnurl_invoice_input_payment_hash",
        pub preimage_nonce: Option<String>
            => "create_lnurl_invoice_input_preimage_nonce",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateUmaInvoiceInput {
        pub node_id: String => "create_uma_invoice_input_node_id",
        pub amount_msats: i64 => "create_uma_invoice_input_amount_msats",
        pub metadata_hash: String => "create_uma_invoice_input_metadata_hash",
        pub expiry_secs: Option<i64> => "create_uma_invoice_input_expiry_secs",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateTestModeInvoiceInput {
        pub local_node_id: String
            => "create_test_mode_invoice_input_local_node_id",
        pub amount_msats: i64 => "create_test_mode_invoice_input_amount_msats",
        pub memo: Option<String> => "create_test_mode_invoice_input_memo",
        pub invoice_type: Option<InvoiceType>
            => "create_test_mode_invoice_input_invoice_type",
    }
}

graphql_object! {
    typename = "CreateTestModeInvoiceOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateTestModeInvoiceOutput {
        pub encoded_payment_request: String
            => "create_test_mode_invoice_output_encoded_payment_request",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FailHtlcsInput {
        pub invoice_id: String => "fail_htlcs_input_invoice_id",
        pub cancel_invoice: bool => "fail_htlcs_input_cancel_invoice",
    }
}

graphql_object! {
    typename = "FailHtlcsOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct FailHtlcsOutput {
        pub invoice: EntityRef => "fail_htlcs_output_invoice",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct InvoiceForPaymentHashInput {
        pub payment_hash: String
            => "invoice_for_payment_hash_input_payment_hash",
    }
}

graphql_object! {
    typename = "InvoiceForPaymentHashOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct InvoiceForPaymentHashOutput {
        /// `None` if no invoice has this payment hash.
        pub invoice: Option<EntityRef>
            => "invoice_for_payment_hash_output_invoice",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ReleasePaymentPreimageInput {
        pub invoice_id: String => "release_payment_preimage_input_invoice_id",
        pub payment_preimage: String
            => "release_payment_preimage_input_payment_preimage",
    }
}

graphql_object! {
    typename = "ReleasePaymentPreimageOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct ReleasePaymentPreimageOutput {
        pub invoice: EntityRef => "release_payment_preimage_output_invoice",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SetInvoicePaymentHashInput {
        pub invoice_id: String => "set_invoice_payment_hash_input_invoice_id",
        pub payment_hash: String
            => "set_invoice_payment_hash_input_payment_hash",
        pub preimage_nonce: Option<String>
            => "set_invoice_payment_hash_input_preimage_nonce",
    }
}

graphql_object! {
    typename = "SetInvoicePaymentHashOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct SetInvoicePaymentHashOutput {
        pub invoice: EntityRef => "set_invoice_payment_hash_output_invoice",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SignInvoiceInput {
        pub invoice_id: String => "sign_invoice_input_invoice_id",
        pub signature: String => "sign_invoice_input_signature",
        pub recovery_id: i64 => "sign_invoice_input_recovery_id",
    }
}

graphql_object! {
    typename = "SignInvoiceOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct SignInvoiceOutput {
        pub invoice: EntityRef => "sign_invoice_output_invoice",
    }
}

// --- Offers --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateOfferInput {
        pub node_id: String => "create_offer_input_node_id",
        pub amount_msats: Option<i64> => "create_offer_input_amount_msats",
        pub description: Option<String> => "create_offer_input_description",
    }
}

graphql_object! {
    typename = "CreateOfferOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateOfferOutput {
        pub offer: EntityRef => "create_offer_output_offer",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct PayOfferInput {
        pub node_id: String => "pay_offer_input_node_id",
        pub encoded_offer: String => "pay_offer_input_encoded_offer",
        pub timeout_secs: i64 => "pay_offer_input_timeout_secs",
        pub maximum_fees_msats: i64 => "pay_offer_input_maximum_fees_msats",
        pub amount_msats: Option<i64> => "pay_offer_input_amount_msats",
        pub idempotency_key: Option<String>
            => "pay_offer_input_idempotency_key",
    }
}

graphql_object! {
    typename = "PayOfferOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct PayOfferOutput {
        pub payment: EntityRef => "pay_offer_output_payment",
    }
}

// --- Payments --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct PayInvoiceInput {
        pub node_id: String => "pay_invoice_input_node_id",
        pub encoded_invoice: String => "pay_invoice_input_encoded_invoice",
        pub timeout_secs: i64 => "pay_invoice_input_timeout_secs",
        pub maximum_fees_msats: i64 => "pay_invoice_input_maximum_fees_msats",
        /// Only for zero-amount invoices.
        pub amount_msats: Option<i64> => "pay_invoice_input_amount_msats",
    }
}

graphql_object! {
    typename = "PayInvoiceOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct PayInvoiceOutput {
        pub payment: EntityRef => "pay_invoice_output_payment",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct PayTestModeInvoiceInput {
        pub node_id: String => "pay_test_mode_invoice_input_node_id",
        pub encoded_invoice: String
            => "pay_test_mode_invoice_input_encoded_invoice",
        pub timeout_secs: i64 => "pay_test_mode_invoice_input_timeout_secs",
        pub maximum_fees_msats: i64
            => "pay_test_mode_invoice_input_maximum_fees_msats",
        pub failure_reason: Option<PaymentFailureReason>
            => "pay_test_mode_invoice_input_failure_reason",
        pub amount_msats: Option<i64>
            => "pay_test_mode_invoice_input_amount_msats",
        pub idempotency_key: Option<String>
            => "pay_test_mode_invoice_input_idempotency_key",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct PayUmaInvoiceInput {
        pub node_id: String => "pay_uma_invoice_input_node_id",
        pub encoded_invoice: String => "pay_uma_invoice_input_encoded_invoice",
        pub timeout_secs: i64 => "pay_uma_invoice_input_timeout_secs",
        pub maximum_fees_msats: i64
            => "pay_uma_invoice_input_maximum_fees_msats",
        pub amount_msats: Option<i64> => "pay_uma_invoice_input_amount_msats",
        pub idempotency_key: Option<String>
            => "pay_uma_invoice_input_idempotency_key",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SendPaymentInput {
        pub node_id: String => "send_payment_input_node_id",
        pub destination_public_key: String
            => "send_payment_input_destination_public_key",
        pub timeout_secs: i64 => "send_payment_input_timeout_secs",
        pub amount_msats: i64 => "send_payment_input_amount_msats",
        pub maximum_fees_msats: i64 => "send_payment_input_maximum_fees_msats",
        pub idempotency_key: Option<String>
            => "send_payment_input_idempotency_key",
    }
}

graphql_object! {
    typename = "SendPaymentOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct SendPaymentOutput {
        pub payment: EntityRef => "send_payment_output_payment",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateTestModePaymentInput {
        pub local_node_id: String
            => "create_test_mode_payment_input_local_node_id",
        pub encoded_invoice: String
            => "create_test_mode_payment_input_encoded_invoice",
        pub amount_msats: Option<i64>
            => "create_test_mode_payment_input_amount_msats",
    }
}

graphql_object! {
    typename = "CreateTestModePaymentoutput";

    /// The payments created by a test mode payment.
    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateTestModePaymentoutput {
        /// Deprecated: use `incoming_payment`.
        pub payment: EntityRef => "create_test_mode_paymentoutput_payment",
        pub incoming_payment: EntityRef
            => "create_test_mode_paymentoutput_incoming_payment",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct LightningFeeEstimateForInvoiceInput {
        pub node_id: String
            => "lightning_fee_estimate_for_invoice_input_node_id",
        pub encoded_payment_request: String
            => "lightning_fee_estimate_for_invoice_input_encoded_payment_request",
        pub amount_msats: Option<i64>
            => "lightning_fee_estimate_for_invoice_input_amount_msats",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct LightningFeeEstimateForNodeInput {
        pub node_id: String => "lightning_fee_estimate_for_node_input_node_id",
        pub destination_node_public_key: String
            => "lightning_fee_estimate_for_node_input_destination_node_public_key",
        pub amount_msats: i64
            => "lightning_fee_estimate_for_node_input_amount_msats",
    }
}

graphql_object! {
    typename = "LightningFeeEstimateOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct LightningFeeEstimateOutput {
        pub fee_estimate: CurrencyAmount
            => "lightning_fee_estimate_output_fee_estimate",
    }
}

graphql_object! {
    typename = "OutgoingPaymentForIdempotencyKeyOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct OutgoingPaymentForIdempotencyKeyOutput {
        pub payment: Option<EntityRef>
            => "outgoing_payment_for_idempotency_key_output_payment",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct IncomingPaymentsForInvoiceQueryInput {
        pub invoice_id: String
            => "incoming_payments_for_invoice_query_input_invoice_id",
        pub statuses: Option<Vec<TransactionStatus>>
            => "incoming_payments_for_invoice_query_input_statuses",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct IncomingPaymentsForPaymentHashQueryInput {
        pub payment_hash: String
            => "incoming_payments_for_payment_hash_query_input_payment_hash",
        pub statuses: Option<Vec<TransactionStatus>>
            => "incoming_payments_for_payment_hash_query_input_statuses",
    }
}

graphql_object! {
    typename = "IncomingPaymentsForPaymentHashQueryOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct IncomingPaymentsForPaymentHashQueryOutput {
        pub payments: Vec<IncomingPayment>
            => "incoming_payments_for_payment_hash_query_output_payments",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct OutgoingPaymentsForInvoiceQueryInput {
        pub encoded_invoice: String
            => "outgoing_payments_for_invoice_query_input_encoded_invoice",
        pub statuses: Option<Vec<TransactionStatus>>
            => "outgoing_payments_for_invoice_query_input_statuses",
    }
}

graphql_object! {
    typename = "OutgoingPaymentsForInvoiceQueryOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct OutgoingPaymentsForInvoiceQueryOutput {
        pub payments: Vec<OutgoingPayment>
            => "outgoing_payments_for_invoice_query_output_payments",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct OutgoingPaymentsForPaymentHashQueryInput {
        pub payment_hash: String
            => "outgoing_payments_for_payment_hash_query_input_payment_hash",
        pub statuses: Option<Vec<TransactionStatus>>
            => "outgoing_payments_for_payment_hash_query_input_statuses",
    }
}

graphql_object! {
    typename = "OutgoingPaymentsForPaymentHashQueryOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct OutgoingPaymentsForPaymentHashQueryOutput {
        pub payments: Vec<OutgoingPayment>
            => "outgoing_payments_for_payment_hash_query_output_payments",
    }
}

// --- Nodes and channels --- //

graphql_object! {
    typename = "CreateNodeWalletAddressOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateNodeWalletAddressOutput {
        pub node: EntityRef => "create_node_wallet_address_output_node",
        pub wallet_address: String
            => "create_node_wallet_address_output_wallet_address",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FundNodeInput {
        pub node_id: String => "fund_node_input_node_id",
        pub amount_sats: Option<i64> => "fund_node_input_amount_sats",
    }
}

graphql_object! {
    typename = "FundNodeOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct FundNodeOutput {
        pub amount: CurrencyAmount => "fund_node_output_amount",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct UpdateNodeSharedSecretInput {
        pub node_id: String => "update_node_shared_secret_input_node_id",
        pub shared_secret: String
            => "update_node_shared_secret_input_shared_secret",
    }
}

graphql_object! {
    typename = "UpdateNodeSharedSecretOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct UpdateNodeSharedSecretOutput {
        pub node: EntityRef => "update_node_shared_secret_output_node",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct UpdateChannelPerCommitmentPointInput {
        pub channel_id: String
            => "update_channel_per_commitment_point_input_channel_id",
        pub per_commitment_point: String
            => "update_channel_per_commitment_point_input_per_commitment_point",
        pub per_commitment_point_index: i64
            => "update_channel_per_commitment_point_input_per_commitment_point_index",
    }
}

graphql_object! {
    typename = "UpdateChannelPerCommitmentPointOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct UpdateChannelPerCommitmentPointOutput {
        pub channel: EntityRef
            => "update_channel_per_commitment_point_output_channel",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ReleaseChannelPerCommitmentSecretInput {
        pub channel_id: String
            => "release_channel_per_commitment_secret_input_channel_id",
        pub per_commitment_secret: String
            => "release_channel_per_commitment_secret_input_per_commitment_secret",
    }
}

graphql_object! {
    typename = "ReleaseChannelPerCommitmentSecretOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct ReleaseChannelPerCommitmentSecretOutput {
        pub channel: EntityRef
            => "release_channel_per_commitment_secret_output_channel",
    }
}

// --- Remote signing --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    /// Signatures for payloads from a `REMOTE_SIGNING` webhook.
    pub struct SignMessagesInput {
        pub signatures: Vec<IdAndSignature> => "sign_messages_input_signatures",
    }
}

graphql_object! {
    typename = "SignMessagesOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct SignMessagesOutput {
        pub signed_payloads: Vec<SignablePayload>
            => "sign_messages_output_signed_payloads",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct DeclineToSignMessagesInput {
        pub payload_ids: Vec<String>
            => "decline_to_sign_messages_input_payload_ids",
    }
}

graphql_object! {
    typename = "DeclineToSignMessagesOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct DeclineToSignMessagesOutput {
        pub declined_payloads: Vec<SignablePayload>
            => "decline_to_sign_messages_output_declined_payloads",
    }
}

// --- Withdrawals --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RequestWithdrawalInput {
        pub node_id: String => "request_withdrawal_input_node_id",
        pub bitcoin_address: String
            => "request_withdrawal_input_bitcoin_address",
        pub amount_sats: i64 => "request_withdrawal_input_amount_sats",
        pub withdrawal_mode: WithdrawalMode
            => "request_withdrawal_input_withdrawal_mode",
        pub idempotency_key: Option<String>
            => "request_withdrawal_input_idempotency_key",
        /// Set at most one of `fee_target` and `sats_per_vbyte`. With
        /// neither, the server targets `MEDIUM`.
        pub fee_target: Option<OnChainFeeTarget>
            => "request_withdrawal_input_fee_target",
        pub sats_per_vbyte: Option<i64>
            => "request_withdrawal_input_sats_per_vbyte",
    }
}

graphql_object! {
    typename = "RequestWithdrawalOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct RequestWithdrawalOutput {
        pub request: EntityRef => "request_withdrawal_output_request",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct WithdrawalFeeEstimateInput {
        pub node_id: String => "withdrawal_fee_estimate_input_node_id",
        pub amount_sats: i64 => "withdrawal_fee_estimate_input_amount_sats",
        pub withdrawal_mode: WithdrawalMode
            => "withdrawal_fee_estimate_input_withdrawal_mode",
    }
}

graphql_object! {
    typename = "WithdrawalFeeEstimateOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct WithdrawalFeeEstimateOutput {
        pub fee_estimate: CurrencyAmount
            => "withdrawal_fee_estimate_output_fee_estimate",
    }
}

// --- API tokens --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateApiTokenInput {
        pub name: String => "create_api_token_input_name",
        pub permissions: Vec<Permission>
            => "create_api_token_input_permissions",
    }
}

graphql_object! {
    typename = "CreateApiTokenOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateApiTokenOutput {
        pub api_token: ApiToken => "create_api_token_output_api_token",
        /// Returned once and never stored by the server.
        pub client_secret: String => "create_api_token_output_client_secret",
    }
}

graphql_object! {
    typename = "DeleteApiTokenOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct DeleteApiTokenOutput {
        pub account: EntityRef => "delete_api_token_output_account",
    }
}

// --- Compliance --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RegisterPaymentInput {
        pub provider: ComplianceProvider => "register_payment_input_provider",
        pub payment_id: String => "register_payment_input_payment_id",
        pub node_pubkey: String => "register_payment_input_node_pubkey",
        pub direction: PaymentDirection => "register_payment_input_direction",
    }
}

graphql_object! {
    typename = "RegisterPaymentOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct RegisterPaymentOutput {
        pub payment: EntityRef => "register_payment_output_payment",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ScreenNodeInput {
        pub provider: ComplianceProvider => "screen_node_input_provider",
        pub node_pubkey: String => "screen_node_input_node_pubkey",
    }
}

graphql_object! {
    typename = "ScreenNodeOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct ScreenNodeOutput {
        pub rating: RiskRating => "screen_node_output_rating",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ScreenBitcoinAddressesInput {
        pub provider: CryptoSanctionsScreeningProvider
            => "screen_bitcoin_addresses_input_provider",
        pub addresses: Vec<String>
            => "screen_bitcoin_addresses_input_addresses",
    }
}

graphql_object! {
    typename = "ScreenBitcoinAddressesOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct ScreenBitcoinAddressesOutput {
        pub ratings: Vec<RiskRating>
            => "screen_bitcoin_addresses_output_ratings",
    }
}

// --- UMA invitations --- //

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateUmaInvitationInput {
        pub inviter_uma: String => "create_uma_invitation_input_inviter_uma",
    }
}

graphql_object! {
    typename = "CreateUmaInvitationOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateUmaInvitationOutput {
        pub invitation: EntityRef => "create_uma_invitation_output_invitation",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CreateInvitationWithIncentivesInput {
        pub inviter_uma: String
            => "create_invitation_with_incentives_input_inviter_uma",
        pub inviter_phone_hash: String
            => "create_invitation_with_incentives_input_inviter_phone_hash",
        pub inviter_region: RegionCode
            => "create_invitation_with_incentives_input_inviter_region",
    }
}

graphql_object! {
    typename = "CreateInvitationWithIncentivesOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct CreateInvitationWithIncentivesOutput {
        pub invitation: EntityRef
            => "create_invitation_with_incentives_output_invitation",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ClaimUmaInvitationInput {
        pub invitation_code: String
            => "claim_uma_invitation_input_invitation_code",
        pub invitee_uma: String => "claim_uma_invitation_input_invitee_uma",
    }
}

graphql_object! {
    typename = "ClaimUmaInvitationOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct ClaimUmaInvitationOutput {
        pub invitation: EntityRef => "claim_uma_invitation_output_invitation",
    }
}

graphql_object! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ClaimUmaInvitationWithIncentivesInput {
        pub invitation_code: String
            => "claim_uma_invitation_with_incentives_input_invitation_code",
        pub invitee_uma: String
            => "claim_uma_invitation_with_incentives_input_invitee_uma",
        pub invitee_phone_hash: String
            => "claim_uma_invitation_with_incentives_input_invitee_phone_hash",
        pub invitee_region: RegionCode
            => "claim_uma_invitation_with_incentives_input_invitee_region",
    }
}

graphql_object! {
    typename = "ClaimUmaInvitationWithIncentivesOutput";

    #[derive(Clone, Debug, PartialEq)]
    pub struct ClaimUmaInvitationWithIncentivesOutput {
        pub invitation: EntityRef
            => "claim_uma_invitation_with_incentives_output_invitation",
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::{decode::FromJson, test_utils::fixtures, types::EntityId};

    #[test]
    fn inputs_serialize_wire_names() {
        let input = RequestWithdrawalInput {
            node_id: "n1".to_owned(),
            bitcoin_address: "bcrt1qexample".to_owned(),
            amount_sats: 10_000,
            withdrawal_mode: WithdrawalMode::WalletOnly,
            idempotency_key: None,
            fee_target: Some(OnChainFeeTarget::Medium),
            sats_per_vbyte: None,
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "request_withdrawal_input_node_id": "n1",
                "request_withdrawal_input_bitcoin_address": "bcrt1qexample",
                "request_withdrawal_input_amount_sats": 10_000,
                "request_withdrawal_input_withdrawal_mode": "WALLET_ONLY",
                "request_withdrawal_input_idempotency_key": null,
                "request_withdrawal_input_fee_target": "MEDIUM",
                "request_withdrawal_input_sats_per_vbyte": null,
            }),
        );
        assert_eq!(RequestWithdrawalInput::decode(&value).unwrap(), input);
    }

    #[test]
    fn nested_input_records() {
        let input = SignMessagesInput {
            signatures: vec![IdAndSignature {
                id: EntityId::new("sp1"),
                signature: "3045".to_owned(),
            }],
        };

        let value = serde_json::to_value(&input).unwrap();
        let signatures = &value["sign_messages_input_signatures"];
        assert_eq!(signatures[0]["id_and_signature_id"], "sp1");
        assert_eq!(signatures[0]["id_and_signature_signature"], "3045");
    }

    #[test]
    fn outputs_keep_links() {
        let value = json!({
            "__typename": "PayInvoiceOutput",
            "pay_invoice_output_payment": {
                "id": "p1",
                "__typename": "OutgoingPayment",
            },
        });
        let output = PayInvoiceOutput::decode(&value).unwrap();
        assert_eq!(output.payment, EntityRef::new("p1"));

        let value = json!({ "invoice_for_payment_hash_output_invoice": null });
        let output = InvoiceForPaymentHashOutput::decode(&value).unwrap();
        assert_eq!(output.invoice, None);
    }

    #[test]
    fn test_mode_payment_output() {
        let value = json!({
            "__typename": "CreateTestModePaymentoutput",
            "create_test_mode_paymentoutput_payment": { "id": "p1" },
            "create_test_mode_paymentoutput_incoming_payment": {
                "id": "p1",
                "__typename": "IncomingPayment",
            },
        });
        let output = CreateTestModePaymentoutput::decode(&value).unwrap();
        assert_eq!(output.payment, EntityRef::new("p1"));
        assert_eq!(output.incoming_payment, EntityRef::new("p1"));

        let reencoded = serde_json::to_value(&output).unwrap();
        assert_eq!(reencoded["__typename"], "CreateTestModePaymentoutput");
        assert_eq!(
            reencoded["create_test_mode_paymentoutput_incoming_payment"],
            json!({ "id": "p1" }),
        );

        let value = json!({
            "create_test_mode_paymentoutput_payment": { "id": "p1" },
        });
        let err = CreateTestModePaymentoutput::decode(&value).unwrap_err();
        assert_eq!(
            err.path(),
            "$.create_test_mode_paymentoutput_incoming_payment",
        );
    }

    #[test]
    fn outputs_with_full_records() {
        let value = json!({
            "outgoing_payments_for_invoice_query_output_payments": [
                fixtures::outgoing_payment("p1"),
                fixtures::outgoing_payment("p2"),
            ],
        });
        let output = OutgoingPaymentsForInvoiceQueryOutput::decode(&value)
            .unwrap();
        let ids = output
            .payments
            .iter()
            .map(|payment| payment.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["p1", "p2"]);

        let value = json!({
            "screen_bitcoin_addresses_output_ratings":
                ["HIGH_RISK", "LOW_RISK", "SOMETHING_NEW"],
        });
        let output = ScreenBitcoinAddressesOutput::decode(&value).unwrap();
        assert_eq!(
            output.ratings,
            [RiskRating::HighRisk, RiskRating::LowRisk, RiskRating::Undefined],
        );
    }
}
