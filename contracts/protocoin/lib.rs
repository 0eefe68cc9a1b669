#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod events;
pub mod metadata;
pub mod model;

#[ink::contract]
mod protocoin {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    use crate::events::{Approval, MintAmountSet, MintDelaySet, Transfer};
    use crate::metadata;
    use crate::model::{Error, IssuanceConfig, MintStatus, Result};

    #[ink(storage)]
    pub struct ProtoCoin {
        // governance
        authority_acc: AccountId,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // issuance
        issuance: IssuanceConfig,
        last_mint_at: Mapping<AccountId, u64>, // account -> seconds of last successful mint
    }

    impl ProtoCoin {
        /// Minting starts disabled with the default cooldown.
        #[ink(constructor)]
        pub fn new() -> Self {
            Self::with_issuance(0, metadata::DEFAULT_MINT_DELAY_SECS)
        }

        #[ink(constructor)]
        pub fn with_issuance(mint_amount: Balance, mint_delay_secs: u64) -> Self {
            let authority_acc = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(&authority_acc, &metadata::INITIAL_SUPPLY);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(authority_acc),
                value: metadata::INITIAL_SUPPLY,
            });

            Self {
                authority_acc,
                total_supply: metadata::INITIAL_SUPPLY,
                balances,
                allowances: Mapping::default(),
                issuance: IssuanceConfig {
                    mint_amount,
                    mint_delay_secs,
                },
                last_mint_at: Mapping::default(),
            }
        }

        // -------- metadata --------

        #[ink(message)]
        pub fn name(&self) -> String {
            String::from(metadata::NAME)
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            String::from(metadata::SYMBOL)
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            metadata::DECIMALS
        }

        // -------- ledger reads --------

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn my_balance(&self) -> Balance {
            let caller_acc = self.env().caller();
            self.balance_of(caller_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        // -------- ledger writes --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount)
        }

        /// Overwrites any previous allowance; it never accumulates.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount: Balance) -> Result<()> {
            if spender_acc == Self::null_acc() {
                return Err(Error::InvalidSpender)
            }
            let owner_acc = self.env().caller();
            self.allowances.insert(&(owner_acc, spender_acc), &amount);
            self.env().emit_event(Approval {
                owner: owner_acc,
                spender: spender_acc,
                value: amount,
            });
            Ok(())
        }

        /// Checks run recipient, then allowance, then balance.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount: Balance,
        ) -> Result<()> {
            if to_acc == Self::null_acc() {
                return Err(Error::InvalidRecipient)
            }

            let caller_acc = self.env().caller();
            let allowance_amt = self.allowance(from_acc, caller_acc);
            if allowance_amt < amount {
                return Err(Error::InsufficientAllowance)
            }
            let new_allowance = allowance_amt.checked_sub(amount).ok_or(Error::Overflow)?;

            self.move_balance(from_acc, to_acc, amount)?;
            self.allowances.insert(&(from_acc, caller_acc), &new_allowance);
            Ok(())
        }

        // -------- issuance reads --------

        #[ink(message)]
        pub fn authority(&self) -> AccountId {
            self.authority_acc
        }

        #[ink(message)]
        pub fn mint_amount(&self) -> Balance {
            self.issuance.mint_amount
        }

        #[ink(message)]
        pub fn mint_delay(&self) -> u64 {
            self.issuance.mint_delay_secs
        }

        #[ink(message)]
        pub fn last_mint_at(&self, account: AccountId) -> Option<u64> {
            self.last_mint_at.get(&account)
        }

        #[ink(message)]
        pub fn mint_status(&self, account: AccountId) -> MintStatus {
            self.issuance
                .status(self.last_mint_at.get(&account), self.now_secs())
        }

        // -------- issuance writes --------

        #[ink(message)]
        pub fn set_mint_amount(&mut self, mint_amount: Balance) -> Result<()> {
            self.only_authority()?;
            self.issuance.mint_amount = mint_amount;
            ink::env::debug_println!("mint amount set to {}", mint_amount);
            self.env().emit_event(MintAmountSet { mint_amount });
            Ok(())
        }

        #[ink(message)]
        pub fn set_mint_delay(&mut self, mint_delay_secs: u64) -> Result<()> {
            self.only_authority()?;
            self.issuance.mint_delay_secs = mint_delay_secs;
            ink::env::debug_println!("mint delay set to {}s", mint_delay_secs);
            self.env().emit_event(MintDelaySet { mint_delay_secs });
            Ok(())
        }

        /// Open faucet: any account may mint `mint_amount` once per cooldown.
        #[ink(message)]
        pub fn mint(&mut self) -> Result<()> {
            if !self.issuance.is_enabled() {
                return Err(Error::MintingDisabled)
            }

            let to_acc = self.env().caller();
            let now_secs = self.now_secs();
            if let MintStatus::CoolingDown { ready_at } =
                self.issuance.status(self.last_mint_at.get(&to_acc), now_secs)
            {
                ink::env::debug_println!(
                    "mint by {:?} rejected, cooling down until {}",
                    to_acc,
                    ready_at
                );
                return Err(Error::MintingTooSoon)
            }

            self.mint_to(to_acc, self.issuance.mint_amount)?;
            self.last_mint_at.insert(&to_acc, &now_secs);
            Ok(())
        }

        // ---- internals ----

        fn null_acc() -> AccountId {
            AccountId::from([0u8; 32])
        }

        fn now_secs(&self) -> u64 {
            self.env().block_timestamp() / metadata::MILLIS_PER_SEC
        }

        fn only_authority(&self) -> Result<()> {
            let caller_acc = self.env().caller();
            if caller_acc != self.authority_acc {
                ink::env::debug_println!("privileged call from {:?} rejected", caller_acc);
                return Err(Error::Unauthorized)
            }
            Ok(())
        }

        fn mint_to(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            let new_total = self.total_supply.checked_add(amount).ok_or(Error::Overflow)?;
            let new_bal = self
                .balance_of(to_acc)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;

            self.total_supply = new_total;
            self.balances.insert(&to_acc, &new_bal);

            self.env().emit_event(Transfer {
                from: None,
                to: Some(to_acc),
                value: amount,
            });
            Ok(())
        }

        // All checks and arithmetic happen before the first write.
        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
            if to_acc == Self::null_acc() {
                return Err(Error::InvalidRecipient)
            }

            let from_bal = self.balance_of(from_acc);
            if from_bal < amount {
                return Err(Error::InsufficientBalance)
            }
            let new_from = from_bal.checked_sub(amount).ok_or(Error::Overflow)?;

            let to_bal = if from_acc == to_acc {
                new_from
            } else {
                self.balance_of(to_acc)
            };
            let new_to = to_bal.checked_add(amount).ok_or(Error::Overflow)?;

            self.balances.insert(&from_acc, &new_from);
            self.balances.insert(&to_acc, &new_to);

            self.env().emit_event(Transfer {
                from: Some(from_acc),
                to: Some(to_acc),
                value: amount,
            });
            Ok(())
        }
    }


    #[cfg(all(test, feature = "e2e-tests"))]
    mod e2e_tests {
        use super::*;
        use ink_e2e::ContractsBackend;

        type E2EResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

        #[ink_e2e::test]
        async fn faucet_mints_once_per_cooldown<Client: E2EBackend>(
            mut client: Client,
        ) -> E2EResult<()> {
            let mut constructor = ProtoCoinRef::new();
            let contract = client
                .instantiate("protocoin", &ink_e2e::alice(), &mut constructor)
                .submit()
                .await
                .expect("instantiate failed");
            let mut call_builder = contract.call_builder::<ProtoCoin>();

            let mint = call_builder.mint();
            let disabled = client.call(&ink_e2e::bob(), &mint).dry_run().await?;
            assert_eq!(disabled.return_value(), Err(Error::MintingDisabled));

            let set_amount = call_builder.set_mint_amount(1_000);
            client
                .call(&ink_e2e::alice(), &set_amount)
                .submit()
                .await
                .expect("set_mint_amount failed");

            client
                .call(&ink_e2e::bob(), &mint)
                .submit()
                .await
                .expect("mint failed");

            let again = client.call(&ink_e2e::bob(), &mint).dry_run().await?;
            assert_eq!(again.return_value(), Err(Error::MintingTooSoon));

            let bob_acc = ink_e2e::account_id(ink_e2e::AccountKeyring::Bob);
            let balance_of = call_builder.balance_of(bob_acc);
            let balance = client.call(&ink_e2e::bob(), &balance_of).dry_run().await?;
            assert_eq!(balance.return_value(), 1_000);

            Ok(())
        }

        #[ink_e2e::test]
        async fn non_authority_cannot_set_amount<Client: E2EBackend>(
            mut client: Client,
        ) -> E2EResult<()> {
            let mut constructor = ProtoCoinRef::new();
            let contract = client
                .instantiate("protocoin", &ink_e2e::alice(), &mut constructor)
                .submit()
                .await
                .expect("instantiate failed");
            let mut call_builder = contract.call_builder::<ProtoCoin>();

            let set_amount = call_builder.set_mint_amount(1_000);
            let res = client.call(&ink_e2e::bob(), &set_amount).dry_run().await?;
            assert_eq!(res.return_value(), Err(Error::Unauthorized));

            Ok(())
        }
    }
}
