#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod layout;
pub mod ledger;
pub mod proposals;
pub mod settlement;
pub mod types;

use layout::{CURRENT_LAYOUT_VERSION, PROPOSALS_LAYOUT_VERSION};

// ============================================================
// Errors
// ============================================================

pub const ERR_ALREADY_CLAIMED: &str = "ERR_ALREADY_CLAIMED";
pub const ERR_INSUFFICIENT_BALANCE: &str = "ERR_INSUFFICIENT_BALANCE";
pub const ERR_UNKNOWN_PROPOSAL: &str = "ERR_UNKNOWN_PROPOSAL";
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "ERR_PROPOSAL_NOT_ACTIVE";
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT";
pub const ERR_INVALID_ADDRESS: &str = "ERR_INVALID_ADDRESS";
pub const ERR_ESCROW_MISMATCH: &str = "ERR_ESCROW_MISMATCH";
pub const ERR_LAYOUT_DOWNGRADE: &str = "ERR_LAYOUT_DOWNGRADE";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CrowdfundToken:
    admin::AdminModule
    + events::EventsModule
    + layout::LayoutModule
    + ledger::AccountLedger
    + proposals::ProposalStore
    + settlement::SettlementEngine
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.total_minted().set(BigUint::zero());
        self.claim_count().set(0u64);
        self.proposal_count().set(0u64);
        self.total_escrowed().set(BigUint::zero());
        self.layout_version().set(CURRENT_LAYOUT_VERSION);
    }

    /// Binds new code to the existing storage. Keys written by older code keep
    /// their meaning; keys introduced since are initialized only when absent.
    #[upgrade]
    fn upgrade(&self) {
        let from = self.stored_layout_version();
        require!(from <= CURRENT_LAYOUT_VERSION, ERR_LAYOUT_DOWNGRADE);
        if from == CURRENT_LAYOUT_VERSION {
            return;
        }

        if from < PROPOSALS_LAYOUT_VERSION {
            if self.proposal_count().is_empty() {
                self.proposal_count().set(0u64);
            }
            if self.total_escrowed().is_empty() {
                self.total_escrowed().set(BigUint::zero());
            }
        }

        self.layout_version().set(CURRENT_LAYOUT_VERSION);
        self.layout_migrated_event(from, CURRENT_LAYOUT_VERSION);
    }
}
