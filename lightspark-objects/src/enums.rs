//! Closed enumerations.
//!
//! Every enumeration decodes from its UPPER_SNAKE_CASE wire string. Any string
//! the SDK does not recognize decodes to the enumeration's `Undefined` variant
//! instead of failing, so that new server-side values never break decoding of
//! an otherwise valid response. `Undefined` encodes back as `"undefined"`.

graphql_enum! {
    /// A particular Bitcoin network.
    pub enum BitcoinNetwork {
        /// The production Bitcoin blockchain.
        Mainnet = "MAINNET",
        Regtest = "REGTEST",
        Signet = "SIGNET",
        Testnet = "TESTNET",
    }
}

graphql_enum! {
    pub enum ChannelStatus {
        /// Online and able to send and receive.
        Ok = "OK",
        /// Being opened.
        Pending = "PENDING",
        /// The remote node is not reachable.
        Offline = "OFFLINE",
        /// Most of the balance is on the remote side.
        UnbalancedForSend = "UNBALANCED_FOR_SEND",
        /// Most of the balance is on the local side.
        UnbalancedForReceive = "UNBALANCED_FOR_RECEIVE",
        Closed = "CLOSED",
        /// Something unexpected happened; contact support.
        Error = "ERROR",
    }
}

graphql_enum! {
    pub enum ComplianceProvider {
        Chainalysis = "CHAINALYSIS",
    }
}

graphql_enum! {
    pub enum CryptoSanctionsScreeningProvider {
        Chainalysis = "CHAINALYSIS",
    }
}

graphql_enum! {
    /// The unit of a [`CurrencyAmount`](crate::types::CurrencyAmount).
    pub enum CurrencyUnit {
        Bitcoin = "BITCOIN",
        /// 0.00000001 BTC.
        Satoshi = "SATOSHI",
        /// 0.001 satoshi.
        Millisatoshi = "MILLISATOSHI",
        Usd = "USD",
        Mxn = "MXN",
        Php = "PHP",
        Nanobitcoin = "NANOBITCOIN",
        Microbitcoin = "MICROBITCOIN",
        Millibitcoin = "MILLIBITCOIN",
    }
}

graphql_enum! {
    /// BOLT #4 failure codes reported for a failed HTLC attempt.
    pub enum HtlcAttemptFailureCode {
        IncorrectOrUnknownPaymentDetails =
            "INCORRECT_OR_UNKNOWN_PAYMENT_DETAILS",
        IncorrectPaymentAmount = "INCORRECT_PAYMENT_AMOUNT",
        FinalIncorrectCltvExpiry = "FINAL_INCORRECT_CLTV_EXPIRY",
        FinalIncorrectHtlcAmount = "FINAL_INCORRECT_HTLC_AMOUNT",
        FinalExpiryTooSoon = "FINAL_EXPIRY_TOO_SOON",
        InvalidRealm = "INVALID_REALM",
        ExpiryTooSoon = "EXPIRY_TOO_SOON",
        InvalidOnionVersion = "INVALID_ONION_VERSION",
        InvalidOnionHmac = "INVALID_ONION_HMAC",
        InvalidOnionKey = "INVALID_ONION_KEY",
        AmountBelowMinimum = "AMOUNT_BELOW_MINIMUM",
        FeeInsufficient = "FEE_INSUFFICIENT",
        IncorrectCltvExpiry = "INCORRECT_CLTV_EXPIRY",
        ChannelDisabled = "CHANNEL_DISABLED",
        TemporaryChannelFailure = "TEMPORARY_CHANNEL_FAILURE",
        RequiredNodeFeatureMissing = "REQUIRED_NODE_FEATURE_MISSING",
        RequiredChannelFeatureMissing = "REQUIRED_CHANNEL_FEATURE_MISSING",
        UnknownNextPeer = "UNKNOWN_NEXT_PEER",
        TemporaryNodeFailure = "TEMPORARY_NODE_FAILURE",
        PermanentNodeFailure = "PERMANENT_NODE_FAILURE",
        PermanentChannelFailure = "PERMANENT_CHANNEL_FAILURE",
        ExpiryTooFar = "EXPIRY_TOO_FAR",
        MppTimeout = "MPP_TIMEOUT",
        InvalidOnionPayload = "INVALID_ONION_PAYLOAD",
        InternalFailure = "INTERNAL_FAILURE",
        UnknownFailure = "UNKNOWN_FAILURE",
        UnreadableFailure = "UNREADABLE_FAILURE",
    }
}

graphql_enum! {
    pub enum IncentivesIneligibilityReason {
        /// Incentives are disabled for this invitation.
        Disabled = "DISABLED",
        SenderNotEligible = "SENDER_NOT_ELIGIBLE",
        ReceiverNotEligible = "RECEIVER_NOT_ELIGIBLE",
        SendingVaspNotEligible = "SENDING_VASP_NOT_ELIGIBLE",
        ReceivingVaspNotEligible = "RECEIVING_VASP_NOT_ELIGIBLE",
        /// Inviter and invitee are in the same region.
        NotCrossBorder = "NOT_CROSS_BORDER",
    }
}

graphql_enum! {
    pub enum IncentivesStatus {
        Pending = "PENDING",
        Validated = "VALIDATED",
        Ineligible = "INELIGIBLE",
    }
}

graphql_enum! {
    pub enum IncomingPaymentAttemptStatus {
        Accepted = "ACCEPTED",
        Settled = "SETTLED",
        Canceled = "CANCELED",
        Unknown = "UNKNOWN",
    }
}

graphql_enum! {
    pub enum InvoiceType {
        /// A standard BOLT 11 invoice.
        Standard = "STANDARD",
        /// An Atomic Multipath Payment invoice.
        Amp = "AMP",
    }
}

graphql_enum! {
    pub enum LightningPaymentDirection {
        Incoming = "INCOMING",
        Outgoing = "OUTGOING",
    }
}

graphql_enum! {
    pub enum LightsparkNodePurpose {
        Send = "SEND",
        Receive = "RECEIVE",
        Routing = "ROUTING",
    }
}

graphql_enum! {
    pub enum LightsparkNodeStatus {
        Created = "CREATED",
        Deployed = "DEPLOYED",
        Started = "STARTED",
        Syncing = "SYNCING",
        Ready = "READY",
        Stopped = "STOPPED",
        Terminated = "TERMINATED",
        Terminating = "TERMINATING",
        WalletLocked = "WALLET_LOCKED",
        FailedToDeploy = "FAILED_TO_DEPLOY",
    }
}

graphql_enum! {
    pub enum NodeAddressType {
        Ipv4 = "IPV4",
        Ipv6 = "IPV6",
        Tor = "TOR",
    }
}

graphql_enum! {
    /// How quickly an on-chain withdrawal should confirm.
    pub enum OnChainFeeTarget {
        /// Within the next block.
        High = "HIGH",
        /// Within the next three blocks.
        Medium = "MEDIUM",
        /// Within the next six blocks.
        Low = "LOW",
        /// Within the next 1008 blocks.
        Background = "BACKGROUND",
    }
}

graphql_enum! {
    pub enum OutgoingPaymentAttemptStatus {
        InFlight = "IN_FLIGHT",
        Succeeded = "SUCCEEDED",
        Failed = "FAILED",
    }
}

graphql_enum! {
    pub enum PaymentDirection {
        Sent = "SENT",
        Received = "RECEIVED",
    }
}

graphql_enum! {
    pub enum PaymentFailureReason {
        None = "NONE",
        Timeout = "TIMEOUT",
        NoRoute = "NO_ROUTE",
        Error = "ERROR",
        IncorrectPaymentDetails = "INCORRECT_PAYMENT_DETAILS",
        InsufficientBalance = "INSUFFICIENT_BALANCE",
        InvoiceAlreadyPaid = "INVOICE_ALREADY_PAID",
        SelfPayment = "SELF_PAYMENT",
        InvoiceExpired = "INVOICE_EXPIRED",
        InvoiceCancelled = "INVOICE_CANCELLED",
        RiskScreeningFailed = "RISK_SCREENING_FAILED",
        InsufficientBalanceOnSinglePathInvoice =
            "INSUFFICIENT_BALANCE_ON_SINGLE_PATH_INVOICE",
    }
}

graphql_enum! {
    pub enum PaymentRequestStatus {
        Open = "OPEN",
        Closed = "CLOSED",
    }
}

graphql_enum! {
    /// A permission granted to an API token.
    pub enum Permission {
        All = "ALL",
        MainnetView = "MAINNET_VIEW",
        MainnetTransact = "MAINNET_TRANSACT",
        MainnetManage = "MAINNET_MANAGE",
        TestnetView = "TESTNET_VIEW",
        TestnetTransact = "TESTNET_TRANSACT",
        TestnetManage = "TESTNET_MANAGE",
        RegtestView = "REGTEST_VIEW",
        RegtestTransact = "REGTEST_TRANSACT",
        RegtestManage = "REGTEST_MANAGE",
        UserView = "USER_VIEW",
        UserManage = "USER_MANAGE",
        AccountView = "ACCOUNT_VIEW",
        AccountManage = "ACCOUNT_MANAGE",
    }
}

graphql_enum! {
    /// ISO 3166-1 alpha-2 region codes.
    pub enum RegionCode {
        Af = "AF",
        Ax = "AX",
        Al = "AL",
        Dz = "DZ",
        As = "AS",
        Ad = "AD",
        Ao = "AO",
        Ai = "AI",
        Aq = "AQ",
        Ag = "AG",
        Ar = "AR",
        Am = "AM",
        Aw = "AW",
        Au = "AU",
        At = "AT",
        Az = "AZ",
        Bs = "BS",
        Bh = "BH",
        Bd = "BD",
        Bb = "BB",
        By = "BY",
        Be = "BE",
        Bz = "BZ",
        Bj = "BJ",
        Bm = "BM",
        Bt = "BT",
        Bo = "BO",
        Bq = "BQ",
        Ba = "BA",
        Bw = "BW",
        Bv = "BV",
        Br = "BR",
        Io = "IO",
        Bn = "BN",
        Bg = "BG",
        Bf = "BF",
        Bi = "BI",
        Kh = "KH",
        Cm = "CM",
        Ca = "CA",
        Cv = "CV",
        Ky = "KY",
        Cf = "CF",
        Td = "TD",
        Cl = "CL",
        Cn = "CN",
        Cx = "CX",
        Cc = "CC",
        Co = "CO",
        Km = "KM",
        Cg = "CG",
        Cd = "CD",
        Ck = "CK",
        Cr = "CR",
        Ci = "CI",
        Hr = "HR",
        Cu = "CU",
        Cw = "CW",
        Cy = "CY",
        Cz = "CZ",
        Dk = "DK",
        Dj = "DJ",
        Dm = "DM",
        Do = "DO",
        Ec = "EC",
        Eg = "EG",
        Sv = "SV",
        Gq = "GQ",
        Er = "ER",
        Ee = "EE",
        Et = "ET",
        Fk = "FK",
        Fo = "FO",
        Fj = "FJ",
        Fi = "FI",
        Fr = "FR",
        Gf = "GF",
        Pf = "PF",
        Tf = "TF",
        Ga = "GA",
        Gm = "GM",
        Ge = "GE",
        De = "DE",
        Gh = "GH",
        Gi = "GI",
        Gr = "GR",
        Gl = "GL",
        Gd = "GD",
        Gp = "GP",
        Gu = "GU",
        Gt = "GT",
        Gg = "GG",
        Gn = "GN",
        Gw = "GW",
        Gy = "GY",
        Ht = "HT",
        Hm = "HM",
        Va = "VA",
        Hn = "HN",
        Hk = "HK",
        Hu = "HU",
        Is = "IS",
        In = "IN",
        Id = "ID",
        Ir = "IR",
        Iq = "IQ",
        Ie = "IE",
        Im = "IM",
        Il = "IL",
        It = "IT",
        Jm = "JM",
        Jp = "JP",
        Je = "JE",
        Jo = "JO",
        Kz = "KZ",
        Ke = "KE",
        Ki = "KI",
        Kp = "KP",
        Kr = "KR",
        Kw = "KW",
        Kg = "KG",
        La = "LA",
        Lv = "LV",
        Lb = "LB",
        Ls = "LS",
        Lr = "LR",
        Ly = "LY",
        Li = "LI",
        Lt = "LT",
        Lu = "LU",
        Mo = "MO",
        Mk = "MK",
        Mg = "MG",
        Mw = "MW",
        My = "MY",
        Mv = "MV",
        Ml = "ML",
        Mt = "MT",
        Mh = "MH",
        Mq = "MQ",
        Mr = "MR",
        Mu = "MU",
        Yt = "YT",
        Mx = "MX",
        Fm = "FM",
        Md = "MD",
        Mc = "MC",
        Mn = "MN",
        Me = "ME",
        Ms = "MS",
        Ma = "MA",
        Mz = "MZ",
        Mm = "MM",
        Na = "NA",
        Nr = "NR",
        Np = "NP",
        Nl = "NL",
        Nc = "NC",
        Nz = "NZ",
        Ni = "NI",
        Ne = "NE",
        Ng = "NG",
        Nu = "NU",
        Nf = "NF",
        Mp = "MP",
        No = "NO",
        Om = "OM",
        Pk = "PK",
        Pw = "PW",
        Ps = "PS",
        Pa = "PA",
        Pg = "PG",
        Py = "PY",
        Pe = "PE",
        Ph = "PH",
        Pn = "PN",
        Pl = "PL",
        Pt = "PT",
        Pr = "PR",
        Qa = "QA",
        Re = "RE",
        Ro = "RO",
        Ru = "RU",
        Rw = "RW",
        Bl = "BL",
        Sh = "SH",
        Kn = "KN",
        Lc = "LC",
        Mf = "MF",
        Pm = "PM",
        Vc = "VC",
        Ws = "WS",
        Sm = "SM",
        St = "ST",
        Sa = "SA",
        Sn = "SN",
        Rs = "RS",
        Sc = "SC",
        Sl = "SL",
        Sg = "SG",
        Sx = "SX",
        Sk = "SK",
        Si = "SI",
        Sb = "SB",
        So = "SO",
        Za = "ZA",
        Gs = "GS",
        Ss = "SS",
        Es = "ES",
        Lk = "LK",
        Sd = "SD",
        Sr = "SR",
        Sj = "SJ",
        Sz = "SZ",
        Se = "SE",
        Ch = "CH",
        Sy = "SY",
        Tw = "TW",
        Tj = "TJ",
        Tz = "TZ",
        Th = "TH",
        Tl = "TL",
        Tg = "TG",
        Tk = "TK",
        To = "TO",
        Tt = "TT",
        Tn = "TN",
        Tr = "TR",
        Tm = "TM",
        Tc = "TC",
        Tv = "TV",
        Ug = "UG",
        Ua = "UA",
        Ae = "AE",
        Gb = "GB",
        Us = "US",
        Um = "UM",
        Uy = "UY",
        Uz = "UZ",
        Vu = "VU",
        Ve = "VE",
        Vn = "VN",
        Vg = "VG",
        Vi = "VI",
        Wf = "WF",
        Eh = "EH",
        Ye = "YE",
        Zm = "ZM",
        Zw = "ZW",
    }
}

graphql_enum! {
    /// The kind of request carried by a `REMOTE_SIGNING` webhook.
    pub enum RemoteSigningSubEventType {
        Ecdh = "ECDH",
        GetPerCommitmentPoint = "GET_PER_COMMITMENT_POINT",
        ReleasePerCommitmentSecret = "RELEASE_PER_COMMITMENT_SECRET",
        SignInvoice = "SIGN_INVOICE",
        DeriveKeyAndSign = "DERIVE_KEY_AND_SIGN",
        ReleasePaymentPreimage = "RELEASE_PAYMENT_PREIMAGE",
        RequestInvoicePaymentHash = "REQUEST_INVOICE_PAYMENT_HASH",
        RevealCounterpartyPerCommitmentSecret =
            "REVEAL_COUNTERPARTY_PER_COMMITMENT_SECRET",
    }
}

graphql_enum! {
    pub enum RequestInitiator {
        Customer = "CUSTOMER",
        Lightspark = "LIGHTSPARK",
    }
}

graphql_enum! {
    pub enum RiskRating {
        HighRisk = "HIGH_RISK",
        LowRisk = "LOW_RISK",
        Unknown = "UNKNOWN",
    }
}

graphql_enum! {
    pub enum RoutingTransactionFailureReason {
        IncomingLinkFailure = "INCOMING_LINK_FAILURE",
        OutgoingLinkFailure = "OUTGOING_LINK_FAILURE",
        ForwardingFailure = "FORWARDING_FAILURE",
    }
}

graphql_enum! {
    pub enum SignablePayloadStatus {
        Created = "CREATED",
        Signed = "SIGNED",
        ValidationFailed = "VALIDATION_FAILED",
        InvalidSignature = "INVALID_SIGNATURE",
    }
}

graphql_enum! {
    pub enum TransactionStatus {
        Success = "SUCCESS",
        Failed = "FAILED",
        Pending = "PENDING",
        NotStarted = "NOT_STARTED",
        Expired = "EXPIRED",
        Cancelled = "CANCELLED",
    }
}

graphql_enum! {
    pub enum TransactionType {
        OutgoingPayment = "OUTGOING_PAYMENT",
        IncomingPayment = "INCOMING_PAYMENT",
        Routed = "ROUTED",
        L1Withdraw = "L1_WITHDRAW",
        L1Deposit = "L1_DEPOSIT",
        ChannelOpen = "CHANNEL_OPEN",
        ChannelClose = "CHANNEL_CLOSE",
        /// Any lightning payment, in either direction.
        Payment = "PAYMENT",
        PaymentRequest = "PAYMENT_REQUEST",
        Route = "ROUTE",
    }
}

graphql_enum! {
    pub enum WalletStatus {
        NotSetup = "NOT_SETUP",
        Deploying = "DEPLOYING",
        Deployed = "DEPLOYED",
        Initializing = "INITIALIZING",
        Ready = "READY",
        Unavailable = "UNAVAILABLE",
        Failed = "FAILED",
        Terminating = "TERMINATING",
        Terminated = "TERMINATED",
    }
}

graphql_enum! {
    pub enum WebhookEventType {
        PaymentFinished = "PAYMENT_FINISHED",
        ForceClosure = "FORCE_CLOSURE",
        WithdrawalFinished = "WITHDRAWAL_FINISHED",
        FundsReceived = "FUNDS_RECEIVED",
        NodeStatus = "NODE_STATUS",
        UmaInvitationClaimed = "UMA_INVITATION_CLAIMED",
        WalletStatus = "WALLET_STATUS",
        WalletOutgoingPaymentFinished = "WALLET_OUTGOING_PAYMENT_FINISHED",
        WalletIncomingPaymentFinished = "WALLET_INCOMING_PAYMENT_FINISHED",
        WalletWithdrawalFinished = "WALLET_WITHDRAWAL_FINISHED",
        WalletFundsReceived = "WALLET_FUNDS_RECEIVED",
        RemoteSigning = "REMOTE_SIGNING",
        LowBalance = "LOW_BALANCE",
        HighBalance = "HIGH_BALANCE",
        ChannelOpeningFees = "CHANNEL_OPENING_FEES",
    }
}

graphql_enum! {
    pub enum WithdrawalMode {
        WalletOnly = "WALLET_ONLY",
        WalletThenChannels = "WALLET_THEN_CHANNELS",
    }
}

graphql_enum! {
    pub enum WithdrawalRequestStatus {
        Created = "CREATED",
        Failed = "FAILED",
        InProgress = "IN_PROGRESS",
        Successful = "SUCCESSFUL",
    }
}
