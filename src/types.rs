multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal: a funding request, kept forever as settlement history
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub goal: BigUint<M>,
    /// Always equals the sum of the live pledges for this id.
    pub pledged_total: BigUint<M>,
    /// Distinct accounts that pledged at least once.
    pub pledger_count: u64,
    pub recipient: ManagedAddress<M>,
    /// True from creation until `endProposal`. Never set back.
    pub active: bool,
}

// ============================================================
// Settlement Outcome: recorded by endProposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettlementOutcome {
    /// Not settled yet. Also what an empty storage entry decodes to.
    Pending,
    /// Goal met, escrow sent to the recipient.
    Disbursed,
    /// Goal missed, every pledge returned.
    Cancelled,
}
