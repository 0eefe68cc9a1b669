use ink::primitives::AccountId;

/// Balance movement. `from` is `None` for issuance.
#[ink::event]
pub struct Transfer {
    #[ink(topic)]
    pub from: Option<AccountId>,
    #[ink(topic)]
    pub to: Option<AccountId>,
    pub value: u128,
}

#[ink::event]
pub struct Approval {
    #[ink(topic)]
    pub owner: AccountId,
    #[ink(topic)]
    pub spender: AccountId,
    pub value: u128,
}

#[ink::event]
pub struct MintAmountSet {
    pub mint_amount: u128,
}

#[ink::event]
pub struct MintDelaySet {
    pub mint_delay_secs: u64,
}
