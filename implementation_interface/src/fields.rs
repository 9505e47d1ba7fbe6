use crate::errors::ImplementationError;
use soroban_sdk::{panic_with_error, Env, TryFromVal, Val};
use storage_slots::{sequential_slot, SlotTable};

// Position every version keeps the running total of attached value at.
pub const DEPOSITS_FIELD: u32 = 1;

// Reads the field declared at `position`, failing with `MissingField` when the
// storage was never written there.
pub fn read_field<T>(e: &Env, storage: &SlotTable, position: u32) -> T
where
    T: TryFromVal<Env, Val>,
{
    match storage.read(&sequential_slot(e, position)) {
        Some(v) => v,
        None => panic_with_error!(e, ImplementationError::MissingField),
    }
}

pub fn get_deposits(e: &Env, storage: &SlotTable) -> i128 {
    storage.read_or(&sequential_slot(e, DEPOSITS_FIELD), 0)
}

pub fn record_deposit(e: &Env, storage: &mut SlotTable, value: i128) {
    if value <= 0 {
        return;
    }
    let total = match get_deposits(e, storage).checked_add(value) {
        Some(v) => v,
        None => panic_with_error!(e, ImplementationError::DepositOverflow),
    };
    storage.write(&sequential_slot(e, DEPOSITS_FIELD), total);
}
