/// Devnet
pub const SUINFT_DEVNET_PACKAGE_ID: &str = "0x8f2cbd75b31dcbbf7a2ab0e27c1bde1f5cfa6530bc7ae26aea6eb1e58e1d9b04";

/// Testnet
pub const SUINFT_TESTNET_PACKAGE_ID: &str = "0x5d0fb7ab24c0f6ebc84f4f6dd8e65af1a7ec1db7ca68b1f24c63409cbdbca5fa";

/// Mainnet deployment pending; an empty package id never matches a
/// whitelist ticket, so eligibility stays off there.
pub const SUINFT_MAINNET_PACKAGE_ID: &str = "";

// Collection parameters shown in the stats header
pub const TOTAL_SUPPLY: u64 = 10_000;
pub const MINTED_AT_LAUNCH: u64 = 3_847;
pub const ROYALTY_PERCENT: u64 = 5;

// Prices in MIST (1 SUI = 10^9 MIST)
pub const MINT_PRICE_MIST: u64 = 100_000_000;
pub const WHITELIST_PRICE_MIST: u64 = 50_000_000;
pub const OG_PRICE_MIST: u64 = 500_000_000;

// Per-variant mint bounds
pub const MAX_STANDARD_MINT: u64 = 10;
pub const MAX_WHITELIST_MINT: u64 = 4;

// Custom 1-of-1 artwork upload limit
pub const MAX_ARTWORK_BYTES: u64 = 10 * 1024 * 1024;

// Simulated submission latencies; the OG flow mints a unique object and
// takes longer
pub const SUBMIT_LATENCY_MILLIS: u64 = 2000;
pub const OG_SUBMIT_LATENCY_MILLIS: u64 = 3000;

pub const ACTIVITY_LOG_MAX_LINES: usize = 1000;

pub const SUI_DECIMALS: f64 = 1_000_000_000.0;
pub const MESSAGE_AREA_MARGIN: u16 = 4;

pub struct NetworkPackageIds {
    pub suinft_package_id: &'static str,
}

pub const NETWORK_PACKAGE_IDS: [NetworkPackageIds; 3] = [
    NetworkPackageIds {
        suinft_package_id: SUINFT_DEVNET_PACKAGE_ID,
    },
    NetworkPackageIds {
        suinft_package_id: SUINFT_TESTNET_PACKAGE_ID,
    },
    NetworkPackageIds {
        suinft_package_id: SUINFT_MAINNET_PACKAGE_ID,
    },
];

pub const NETWORKS: [(&str, &str); 3] = [
    ("devnet", "https://fullnode.devnet.sui.io:443"),
    ("testnet", "https://fullnode.testnet.sui.io:443"),
    ("mainnet", "https://fullnode.mainnet.sui.io:443"),
];

/// Full struct tag of the whitelist marker object owned by OG addresses.
pub fn whitelist_ticket_type(package_id: &str) -> String {
    format!("{}::og_ticket::OgTicket", package_id)
}
