#![no_std]

pub mod errors;
pub mod events;
pub mod interface;
mod storage;

use crate::errors::UpgradeError;
use crate::storage::put_implementation;
use soroban_sdk::{log, panic_with_error, Address, Env};

pub use crate::storage::{
    activation_slot, get_activation, get_implementation, implementation_slot,
    ACTIVATION_NAMESPACE, IMPLEMENTATION_NAMESPACE,
};

// Records the implementation supplied at creation. `None` leaves the pointer unset.
pub fn init_implementation(e: &Env, implementation: &Option<Address>) {
    if let Some(implementation) = implementation {
        put_implementation(e, implementation, 1);
    }
}

// Swaps the implementation pointer and opens a new activation.
// Callers are responsible for the ownership check.
pub fn upgrade(e: &Env, new_implementation: &Option<Address>) -> Address {
    let new_implementation = match new_implementation {
        Some(v) => v,
        None => panic_with_error!(e, UpgradeError::InvalidImplementation),
    };

    if get_implementation(e).as_ref() == Some(new_implementation) {
        panic_with_error!(e, UpgradeError::ImplementationUnchanged);
    }

    let activation = get_activation(e) + 1;
    put_implementation(e, new_implementation, activation);
    log!(e, "implementation upgraded", new_implementation.clone(), activation);
    new_implementation.clone()
}
