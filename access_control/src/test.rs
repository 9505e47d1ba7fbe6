#![cfg(test)]
extern crate std;

use crate::access::{owner_slot, AccessControl, AccessControlTrait};
use crate::transfer::TransferOwnershipTrait;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage_slots::{sequential_slot, SlotTable};

#[contract]
struct OwnedHost;

#[contractimpl]
impl OwnedHost {
    pub fn noop() {}
}

fn setup() -> (Env, Address, Address) {
    let e = Env::default();
    let host = e.register(OwnedHost, ());
    let owner = Address::generate(&e);
    e.as_contract(&host, || AccessControl::new(&e).init_owner(&owner));
    (e, host, owner)
}

#[test]
fn test_owner_lives_in_namespaced_slot() {
    let (e, host, owner) = setup();
    e.as_contract(&host, || {
        let slots = SlotTable::load(&e);
        assert_eq!(slots.read::<Address>(&owner_slot(&e)), Some(owner.clone()));
        assert!(!slots.has(&sequential_slot(&e, 0)));
        assert_eq!(AccessControl::new(&e).get_owner(), owner);
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_init_owner_twice() {
    let (e, host, owner) = setup();
    e.as_contract(&host, || AccessControl::new(&e).init_owner(&owner));
}

#[test]
fn test_transfer_ownership() {
    let (e, host, owner) = setup();
    let new_owner = Address::generate(&e);
    e.as_contract(&host, || {
        let access_control = AccessControl::new(&e);
        let previous = access_control.transfer_ownership(&owner, &Some(new_owner.clone()));
        assert_eq!(previous, owner);
        assert!(access_control.address_is_owner(&new_owner));
        assert!(!access_control.address_is_owner(&owner));
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_transfer_ownership_not_owner() {
    let (e, host, _owner) = setup();
    let stranger = Address::generate(&e);
    e.as_contract(&host, || {
        AccessControl::new(&e).transfer_ownership(&stranger, &Some(stranger.clone()));
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn test_transfer_ownership_to_nobody() {
    let (e, host, owner) = setup();
    e.as_contract(&host, || {
        AccessControl::new(&e).transfer_ownership(&owner, &None);
    });
}
