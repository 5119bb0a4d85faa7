multiversx_sc::imports!();

use crate::{ERR_INVALID_ADDRESS, ERR_UNAUTHORIZED};

/// Single-owner gate for proposal administration.
#[multiversx_sc::module]
pub trait AdminModule: crate::events::EventsModule {
    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);
        require!(!new_owner.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            new_owner != self.blockchain().get_sc_address(),
            ERR_INVALID_ADDRESS
        );

        self.owner().set(&new_owner);
        self.ownership_transferred_event(&caller, &new_owner);
    }

    #[view(owner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    fn is_owner(&self, account: &ManagedAddress) -> bool {
        !self.owner().is_empty() && self.owner().get() == *account
    }

    fn require_owner(&self, caller: &ManagedAddress) {
        require!(self.is_owner(caller), ERR_UNAUTHORIZED);
    }

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;
}
