// AT = Address Type
pub const AT_VOTING_ESCROW: &str = "VOTING_ESCROW";
pub const AT_DIVIDEND_DISTRIBUTOR: &str = "DIVIDEND_DISTRIBUTOR";

pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;

// Seconds in one week, the default epoch duration.
// mainnet: 7 * 86400
// testnet: 60 * 60
pub const SECONDS_PER_WEEK: u64 = 7 * 86400;
