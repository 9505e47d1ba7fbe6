use soroban_sdk::{Address, Env};
use storage_slots::{namespaced_slot, Slot, SlotTable};

pub const IMPLEMENTATION_NAMESPACE: &str = "dispatcher.slots.implementation";
pub const ACTIVATION_NAMESPACE: &str = "dispatcher.slots.activation";

pub fn implementation_slot(e: &Env) -> Slot {
    namespaced_slot(e, IMPLEMENTATION_NAMESPACE)
}

pub fn activation_slot(e: &Env) -> Slot {
    namespaced_slot(e, ACTIVATION_NAMESPACE)
}

// implementation pointer
pub fn get_implementation(e: &Env) -> Option<Address> {
    SlotTable::load(e).read(&implementation_slot(e))
}

// number of implementations activated so far, zero while unset
pub fn get_activation(e: &Env) -> u32 {
    SlotTable::load(e).read_or(&activation_slot(e), 0)
}

// pointer and activation always move together
pub(crate) fn put_implementation(e: &Env, implementation: &Address, activation: u32) {
    let mut slots = SlotTable::load(e);
    slots.write(&implementation_slot(e), implementation.clone());
    slots.write(&activation_slot(e), activation);
    slots.store();
}
