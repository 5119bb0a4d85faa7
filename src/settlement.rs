multiversx_sc::imports!();

use crate::types::{Proposal, SettlementOutcome};
use crate::ERR_ESCROW_MISMATCH;

#[multiversx_sc::module]
pub trait SettlementEngine:
    crate::admin::AdminModule
    + crate::events::EventsModule
    + crate::ledger::AccountLedger
    + crate::proposals::ProposalStore
{
    // ========================================================
    // ENDPOINT: endProposal
    // Owner only. Active → settled, exactly once. Goal met
    // (pledged >= goal) disburses, otherwise every pledger is
    // refunded. Any failed check reverts the whole settlement.
    // ========================================================

    #[endpoint(endProposal)]
    fn end_proposal(&self, proposal_id: u64) -> SettlementOutcome {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);
        let mut proposal = self.require_active_proposal(proposal_id);

        proposal.active = false;

        let outcome = if proposal.pledged_total >= proposal.goal {
            self.disburse(&proposal);
            SettlementOutcome::Disbursed
        } else {
            self.refund_pledgers(&proposal);
            proposal.pledged_total = BigUint::zero();
            SettlementOutcome::Cancelled
        };

        self.proposals(proposal_id).set(&proposal);
        self.settlement_outcome(proposal_id).set(outcome);

        outcome
    }

    // ========================================================
    // INTERNAL: settlement branches
    // ========================================================

    /// Pledges stay recorded; the pledged tokens now belong to the recipient.
    fn disburse(&self, proposal: &Proposal<Self::Api>) {
        self.release_escrow(&proposal.recipient, &proposal.pledged_total);
        self.proposal_disbursed_event(proposal.id, &proposal.pledged_total, &proposal.recipient);
    }

    /// Walks every pledger of the proposal in one transaction, so the gas cost
    /// grows with the number of distinct pledgers.
    fn refund_pledgers(&self, proposal: &Proposal<Self::Api>) {
        let mut refunded = BigUint::zero();
        for pledger in self.pledgers(proposal.id).iter() {
            let amount = self.pledges(proposal.id, &pledger).take();
            if amount == 0u64 {
                continue;
            }
            self.release_escrow(&pledger, &amount);
            refunded += &amount;
        }

        // Never return more or less than was escrowed for this proposal.
        require!(refunded == proposal.pledged_total, ERR_ESCROW_MISMATCH);
        self.proposal_cancelled_event(proposal.id);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getSettlementOutcome)]
    fn get_settlement_outcome(&self, proposal_id: u64) -> SettlementOutcome {
        self.require_proposal(proposal_id);
        if self.settlement_outcome(proposal_id).is_empty() {
            SettlementOutcome::Pending
        } else {
            self.settlement_outcome(proposal_id).get()
        }
    }

    // ========================================================
    // STORAGE (appended by the proposals layout)
    // ========================================================

    #[storage_mapper("settlementOutcome")]
    fn settlement_outcome(&self, proposal_id: u64) -> SingleValueMapper<SettlementOutcome>;
}
