use crate::access::{AccessControl, AccessControlTrait};
use crate::errors::AccessControlError;
use crate::storage::put_owner;
use soroban_sdk::{log, panic_with_error, Address, Env};

pub trait TransferOwnershipTrait {
    // Replaces the owner and returns the previous one.
    fn transfer_ownership(&self, caller: &Address, new_owner: &Option<Address>) -> Address;
}

impl TransferOwnershipTrait for AccessControl {
    fn transfer_ownership(&self, caller: &Address, new_owner: &Option<Address>) -> Address {
        self.assert_address_is_owner(caller);

        let new_owner = match new_owner {
            Some(address) => address,
            None => panic_with_error!(&self.0, AccessControlError::InvalidOwner),
        };

        let previous_owner = self.get_owner();
        put_owner(&self.0, new_owner);
        log!(&self.0, "ownership transferred", previous_owner, new_owner.clone());
        previous_owner
    }
}
