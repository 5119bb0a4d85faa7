multiversx_sc::imports!();

use crate::types::Proposal;
use crate::{
    ERR_INVALID_ADDRESS, ERR_INVALID_AMOUNT, ERR_PROPOSAL_NOT_ACTIVE, ERR_UNKNOWN_PROPOSAL,
};

/// Largest page returned by `getProposals`.
pub const MAX_PAGE_SIZE: u64 = 100;

#[multiversx_sc::module]
pub trait ProposalStore:
    crate::admin::AdminModule + crate::events::EventsModule + crate::ledger::AccountLedger
{
    // ========================================================
    // ENDPOINT: createProposal
    // Owner only. Ids are sequential from 0 and never reused.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, goal: BigUint, recipient: ManagedAddress) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);
        require!(goal > 0u64, ERR_INVALID_AMOUNT);
        require!(!recipient.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            recipient != self.blockchain().get_sc_address(),
            ERR_INVALID_ADDRESS
        );

        let proposal_id = self.proposal_count().get();
        let proposal = Proposal {
            id: proposal_id,
            goal: goal.clone(),
            pledged_total: BigUint::zero(),
            pledger_count: 0,
            recipient: recipient.clone(),
            active: true,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &goal, &recipient);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: pledge
    // Escrows part of the caller's balance. Repeated pledges add up.
    // Pledging past the goal is allowed.
    // ========================================================

    #[endpoint(pledge)]
    fn pledge(&self, proposal_id: u64, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_active_proposal(proposal_id);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.escrow(&caller, &amount);

        if self.pledgers(proposal_id).insert(caller.clone()) {
            proposal.pledger_count += 1;
        }
        self.pledges(proposal_id, &caller)
            .update(|pledged| *pledged += &amount);
        proposal.pledged_total += &amount;
        self.proposals(proposal_id).set(&proposal);

        self.tokens_pledged_event(&caller, &amount);
    }

    // ========================================================
    // INTERNAL: lookups
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            ERR_UNKNOWN_PROPOSAL
        );
        self.proposals(proposal_id).get()
    }

    fn require_active_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.active, ERR_PROPOSAL_NOT_ACTIVE);
        proposal
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(proposals)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(numProposals)]
    fn num_proposals(&self) -> u64 {
        self.proposal_count().get()
    }

    /// Zero for an unknown proposal or an account that never pledged.
    #[view(getPledge)]
    fn get_pledge(&self, proposal_id: u64, account: ManagedAddress) -> BigUint {
        self.pledges(proposal_id, &account).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let page = core::cmp::min(count, MAX_PAGE_SIZE);
        let end = core::cmp::min(from.saturating_add(page), total);

        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    /// Scans the full proposal history; prefer `getProposals` once it grows large.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();

        for proposal_id in 0..total {
            let proposal = self.proposals(proposal_id).get();
            if proposal.active {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getPledgers)]
    fn get_pledgers(&self, proposal_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for pledger in self.pledgers(proposal_id).iter() {
            result.push(pledger);
        }
        result
    }

    // ========================================================
    // STORAGE (appended by the proposals layout)
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("pledges")]
    fn pledges(&self, proposal_id: u64, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("pledgers")]
    fn pledgers(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
