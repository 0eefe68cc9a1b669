use core::fmt;

use crate::metadata::DEFAULT_MINT_DELAY_SECS;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    InsufficientBalance,
    InsufficientAllowance,
    InvalidRecipient,
    InvalidSpender,
    Unauthorized,
    MintingDisabled,
    MintingTooSoon,
    Overflow,
}

impl Error {
    /// User-facing reason, stable across releases.
    pub fn message(&self) -> &'static str {
        match self {
            Error::InsufficientBalance => "Insufficient balance.",
            Error::InsufficientAllowance => "Insufficient allowance.",
            Error::InvalidRecipient => "Invalid recipient.",
            Error::InvalidSpender => "Invalid spender.",
            Error::Unauthorized => "You do not have permission.",
            Error::MintingDisabled => "Minting is not enabled.",
            Error::MintingTooSoon => "You cannot mint twice in a row.",
            Error::Overflow => "Arithmetic overflow.",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Issuance dials. Only the authority moves them.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct IssuanceConfig {
    /// Units credited per successful mint; zero disables minting.
    pub mint_amount: u128,
    /// Minimum seconds between two mints by the same account.
    pub mint_delay_secs: u64,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            mint_amount: 0,
            mint_delay_secs: DEFAULT_MINT_DELAY_SECS,
        }
    }
}

impl IssuanceConfig {
    pub fn is_enabled(&self) -> bool {
        self.mint_amount != 0
    }

    /// Where an account sits in its mint cycle at `now_secs`.
    pub fn status(&self, last_mint_opt: Option<u64>, now_secs: u64) -> MintStatus {
        let Some(last_secs) = last_mint_opt else {
            return MintStatus::Eligible
        };
        if now_secs.saturating_sub(last_secs) >= self.mint_delay_secs {
            MintStatus::Eligible
        } else {
            MintStatus::CoolingDown {
                ready_at: last_secs.saturating_add(self.mint_delay_secs),
            }
        }
    }
}

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum MintStatus {
    Eligible,
    /// `ready_at` is in seconds, same clock as the block timestamp.
    CoolingDown { ready_at: u64 },
}
