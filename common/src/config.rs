use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Base mainnet, the only chain contributions are accepted on.
// The controller requests a wallet switch when connected elsewhere.
pub const TARGET_CHAIN_ID: u64 = 8453;

// Fixed recipient for all presale contributions
pub const PURCHASE_ADDRESS: &str = "0xaB920659eb7457b7C223e450D33959ED923E9Ffe";

// 18 decimals numbers
pub const COIN_DECIMALS: u8 = 18;
// 10^18 wei to represent 1 whole coin
pub const WEI_PER_COIN: u128 = 10u128.pow(COIN_DECIMALS as u32);

// Quick-fill amounts offered next to the input, in display form
pub const PRESET_AMOUNTS: [&str; 3] = ["0.01", "0.1", "1"];

// How long the "Copied!" indicator stays up after a copy
pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(2000);

// Characters of the transaction handle kept in the success status
pub const TX_HANDLE_DISPLAY_LEN: usize = 10;

// Default base URL when the environment does not provide one
pub const DEFAULT_BASE_URL: &str = "https://6000-mini.vercel.app";

// Signed association between the hosting domain and the operator account,
// served verbatim in the manifest so the embedding platform can verify
// ownership of the domain.
pub const ACCOUNT_ASSOCIATION_HEADER: &str =
    "eyJmaWQiOjQ5NTksInR5cGUiOiJjdXN0b2R5Iiwia2V5IjoiMHhBYjRmQjk1ZEFDOTgyREQ2Q2Y0ZkVBOGEyRTlEM0UxQ2U3N0Q5M2I3In0";
pub const ACCOUNT_ASSOCIATION_PAYLOAD: &str = "eyJkb21haW4iOiI2MDAwLW1pbmkudmVyY2VsLmFwcCJ9";
pub const ACCOUNT_ASSOCIATION_SIGNATURE: &str =
    "MHhiMGIyZDQwNzMwYmZmZDg4ZTUyM2Y3NzgxYzQ4YWVmNzE2NWZmN2Y1MjcyYjk3MDAxY2QzOWZmNmZkYzczODkyNDA4ZGYwOGU5NGZjNGYwZTljYzNkOTkxYTllYmViMDE2YzcxNzFmOGQ5ZDE2M2Y3ZTM3ZWI5Y2U4Y2I3NDU1MTFj";

// ===== SALE PAGE COPY =====
// Fixed marketing content shown on the landing page

pub const PAGE_TITLE: &str = "TOKEN PRESALE";
pub const TICKER: &str = "$TAXES";
pub const CHAIN_LINE: &str = "Base (also Mainnet, OP, Arbitrum)";
// exact IRS bill
pub const TOTAL_SUPPLY_LINE: &str = "1,095,171.79";
pub const PRESALE_WINDOW_LINE: &str = "Jun 2 - Jun 9 2025";
pub const DISTRIBUTION_LINE: &str =
    "90% to presale participants, 10% to liquidity pool (locked)";
pub const TRADING_LINE: &str = "Zero fees or taxes";
pub const ALLOCATION_BOOSTS: [&str; 3] = [
    "Beat the game & sign the ending message",
    "Own a Song-a-Day 1/1",
    "Own 10+ Song-a-Day 1/1s",
];
pub const SEND_WARNING_LINE: &str = "Send only ETH (mainnet, base, arb, op) to this address.";
pub const FOOTER_LABEL: &str = "BUILT ON BASE WITH MINIKIT";
pub const FOOTER_URL: &str = "https://base.org/builders/minikit";
