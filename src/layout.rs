multiversx_sc::imports!();

/// Balances, claims, supply counters and owner.
pub const TOKEN_LAYOUT_VERSION: u32 = 1;

/// Appends proposals, pledges, pledgers, escrow total and settlement outcomes.
pub const PROPOSALS_LAYOUT_VERSION: u32 = 2;

pub const CURRENT_LAYOUT_VERSION: u32 = PROPOSALS_LAYOUT_VERSION;

#[multiversx_sc::module]
pub trait LayoutModule {
    #[view(getLayoutVersion)]
    fn get_layout_version(&self) -> u32 {
        self.stored_layout_version()
    }

    /// Deployments that predate version tracking only ever wrote the token layout.
    fn stored_layout_version(&self) -> u32 {
        if self.layout_version().is_empty() {
            TOKEN_LAYOUT_VERSION
        } else {
            self.layout_version().get()
        }
    }

    #[storage_mapper("layoutVersion")]
    fn layout_version(&self) -> SingleValueMapper<u32>;
}
