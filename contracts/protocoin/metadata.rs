//! Static token metadata and deployment defaults.

pub const NAME: &str = "New ProtoCoin";
pub const SYMBOL: &str = "NPC";
pub const DECIMALS: u8 = 18;

/// Credited to the authority at instantiation: 1000 whole tokens.
pub const INITIAL_SUPPLY: u128 = 1_000 * 10u128.pow(DECIMALS as u32);

/// Cooldown applied when the deployer does not pick one.
pub const DEFAULT_MINT_DELAY_SECS: u64 = 60 * 60 * 24;

/// Block timestamps arrive in milliseconds.
pub const MILLIS_PER_SEC: u64 = 1_000;
