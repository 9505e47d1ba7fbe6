use crate::errors::ImplementationError;
use crate::types::{CallFrame, CallKind};
use soroban_sdk::{panic_with_error, Env};
use storage_slots::{namespaced_slot, Slot, SlotTable};

pub const INITIALIZED_NAMESPACE: &str = "implementation.initialized";
pub const INITIALIZED_ACTIVATION_NAMESPACE: &str = "implementation.initialized_activation";

pub fn initialized_slot(e: &Env) -> Slot {
    namespaced_slot(e, INITIALIZED_NAMESPACE)
}

pub fn initialized_activation_slot(e: &Env) -> Slot {
    namespaced_slot(e, INITIALIZED_ACTIVATION_NAMESPACE)
}

// Highest layout version the storage has been initialized or migrated to.
pub fn initialized_version(e: &Env, storage: &SlotTable) -> u32 {
    storage.read_or(&initialized_slot(e), 0)
}

// Dispatcher activation the last initialization or migration ran in, zero if none.
pub fn initialized_activation(e: &Env, storage: &SlotTable) -> u32 {
    storage.read_or(&initialized_activation_slot(e), 0)
}

pub fn require_migration(e: &Env, frame: &CallFrame) {
    if frame.kind != CallKind::Migration {
        panic_with_error!(e, ImplementationError::NotMigrating);
    }
}

// Marks the storage as migrated to `version` during the frame's activation.
// Only valid inside a migration frame and only for a version above the
// recorded one.
pub fn initialize(e: &Env, frame: &CallFrame, storage: &mut SlotTable, version: u32) {
    require_migration(e, frame);
    if initialized_version(e, storage) >= version {
        panic_with_error!(e, ImplementationError::AlreadyInitialized);
    }
    storage.write(&initialized_slot(e), version);
    storage.write(&initialized_activation_slot(e), frame.activation);
}
