multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Ledger ──

    #[event("tokensClaimed")]
    fn tokens_claimed_event(&self, #[indexed] account: &ManagedAddress);

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] goal: &BigUint,
        #[indexed] recipient: &ManagedAddress,
    );

    #[event("tokensPledged")]
    fn tokens_pledged_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // ── Settlement ──

    #[event("proposalCancelled")]
    fn proposal_cancelled_event(&self, #[indexed] proposal_id: u64);

    #[event("proposalDisbursed")]
    fn proposal_disbursed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] amount: &BigUint,
        #[indexed] recipient: &ManagedAddress,
    );

    // ── Administration ──

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("layoutMigrated")]
    fn layout_migrated_event(&self, #[indexed] from_version: u32, #[indexed] to_version: u32);
}
