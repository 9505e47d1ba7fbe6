use crate::errors::AccessControlError;
use crate::storage::{get_owner, put_owner};
use soroban_sdk::{panic_with_error, Address, Env};

pub use crate::storage::{owner_slot, OWNER_NAMESPACE};

#[derive(Clone)]
pub struct AccessControl(pub(crate) Env);

impl AccessControl {
    pub fn new(env: &Env) -> AccessControl {
        AccessControl(env.clone())
    }
}

pub trait AccessControlTrait {
    fn get_owner_safe(&self) -> Option<Address>;
    fn get_owner(&self) -> Address;
    fn init_owner(&self, owner: &Address);
    fn address_is_owner(&self, address: &Address) -> bool;
    fn assert_address_is_owner(&self, address: &Address);
}

impl AccessControlTrait for AccessControl {
    fn get_owner_safe(&self) -> Option<Address> {
        get_owner(&self.0)
    }

    fn get_owner(&self) -> Address {
        match self.get_owner_safe() {
            Some(address) => address,
            None => panic_with_error!(&self.0, AccessControlError::OwnerNotFound),
        }
    }

    // Records the first owner. Ownership changes afterwards go through `transfer_ownership`.
    fn init_owner(&self, owner: &Address) {
        if self.get_owner_safe().is_some() {
            panic_with_error!(&self.0, AccessControlError::OwnerAlreadySet);
        }
        put_owner(&self.0, owner);
    }

    fn address_is_owner(&self, address: &Address) -> bool {
        match self.get_owner_safe() {
            Some(owner) => address == &owner,
            None => false,
        }
    }

    fn assert_address_is_owner(&self, address: &Address) {
        if !self.address_is_owner(address) {
            panic_with_error!(&self.0, AccessControlError::NotOwner);
        }
    }
}
