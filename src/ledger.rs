multiversx_sc::imports!();

use crate::{
    ERR_ALREADY_CLAIMED, ERR_ESCROW_MISMATCH, ERR_INSUFFICIENT_BALANCE, ERR_INVALID_ADDRESS,
    ERR_INVALID_AMOUNT,
};

/// Tokens minted to an account by its one and only `claim`.
pub const CLAIM_ALLOTMENT: u64 = 100;

/// Balances, claims and the escrow total.
///
/// Every balance change in the contract goes through `debit` / `credit`, and
/// every escrow movement through `escrow` / `release_escrow`, so that
/// `sum(balances) + total_escrowed == total_minted` holds after each transaction.
#[multiversx_sc::module]
pub trait AccountLedger: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: claim
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) {
        let caller = self.blockchain().get_caller();
        require!(!self.claimed(&caller).get(), ERR_ALREADY_CLAIMED);

        let allotment = BigUint::from(CLAIM_ALLOTMENT);
        self.claimed(&caller).set(true);
        self.credit(&caller, &allotment);
        self.total_minted().update(|minted| *minted += &allotment);
        self.claim_count().update(|count| *count += 1);

        self.tokens_claimed_event(&caller);
    }

    // ========================================================
    // ENDPOINT: transfer
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(!to.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            to != self.blockchain().get_sc_address(),
            ERR_INVALID_ADDRESS
        );

        let caller = self.blockchain().get_caller();
        self.debit(&caller, &amount);
        self.credit(&to, &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    // ========================================================
    // INTERNAL: balance movement
    // ========================================================

    fn debit(&self, account: &ManagedAddress, amount: &BigUint) {
        let balance_mapper = self.balances(account);
        let balance = balance_mapper.get();
        require!(balance >= *amount, ERR_INSUFFICIENT_BALANCE);
        balance_mapper.set(balance - amount);
    }

    fn credit(&self, account: &ManagedAddress, amount: &BigUint) {
        self.balances(account).update(|balance| *balance += amount);
    }

    /// Moves `amount` out of the account's free balance into escrow.
    fn escrow(&self, account: &ManagedAddress, amount: &BigUint) {
        self.debit(account, amount);
        self.total_escrowed().update(|escrowed| *escrowed += amount);
    }

    /// Moves `amount` out of escrow into the account's free balance.
    fn release_escrow(&self, account: &ManagedAddress, amount: &BigUint) {
        let escrowed_mapper = self.total_escrowed();
        let escrowed = escrowed_mapper.get();
        require!(escrowed >= *amount, ERR_ESCROW_MISMATCH);
        escrowed_mapper.set(escrowed - amount);
        self.credit(account, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balances(&account).get()
    }

    #[view(hasClaimed)]
    fn has_claimed(&self, account: ManagedAddress) -> bool {
        self.claimed(&account).get()
    }

    /// (total minted, total escrowed, successful claims)
    #[view(getSupplyStats)]
    fn get_supply_stats(&self) -> MultiValue3<BigUint, BigUint, u64> {
        (
            self.total_minted().get(),
            self.total_escrowed().get(),
            self.claim_count().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("claimed")]
    fn claimed(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("totalMinted")]
    fn total_minted(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("claimCount")]
    fn claim_count(&self) -> SingleValueMapper<u64>;

    // Appended by the proposals layout.
    #[storage_mapper("totalEscrowed")]
    fn total_escrowed(&self) -> SingleValueMapper<BigUint>;
}
