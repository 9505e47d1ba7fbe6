use soroban_sdk::{Address, Env};
use storage_slots::{namespaced_slot, Slot, SlotTable};

pub const OWNER_NAMESPACE: &str = "dispatcher.slots.owner";

pub fn owner_slot(e: &Env) -> Slot {
    namespaced_slot(e, OWNER_NAMESPACE)
}

// owner
pub(crate) fn get_owner(e: &Env) -> Option<Address> {
    SlotTable::load(e).read(&owner_slot(e))
}

pub(crate) fn put_owner(e: &Env, owner: &Address) {
    let mut slots = SlotTable::load(e);
    slots.write(&owner_slot(e), owner.clone());
    slots.store();
}
