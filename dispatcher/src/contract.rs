use crate::errors::DispatcherError;
use crate::forward::{credit_attached_value, relay, require_valid_value};
use crate::interface::DispatcherInterface;
use crate::storage::{get_native_token, set_native_token};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::OwnableContract;
use access_control::transfer::TransferOwnershipTrait;
use implementation_interface::CallKind;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, Bytes, BytesN, Env, IntoVal, Val,
};
use storage_slots::SlotTable;
use upgrade::events::Events as UpgradeEvents;
use upgrade::interface::UpgradeableContract;

#[contract]
pub struct Dispatcher;

#[contractimpl]
impl Dispatcher {
    // Records the owner, the initial implementation and the native token before
    // anything else can touch the dispatcher.
    //
    // # Arguments
    //
    // * `owner` - The address allowed to upgrade and transfer ownership.
    // * `implementation` - The implementation to forward to. `None` leaves the pointer unset.
    // * `native_token` - The token attached value is paid in.
    pub fn __constructor(
        e: Env,
        owner: Address,
        implementation: Option<Address>,
        native_token: Address,
    ) {
        AccessControl::new(&e).init_owner(&owner);
        upgrade::init_implementation(&e, &implementation);
        set_native_token(&e, &native_token);
    }
}

#[contractimpl]
impl DispatcherInterface for Dispatcher {
    // Forwards an encoded call to the current implementation. The implementation
    // runs against the dispatcher's storage; its output or failure is returned as is.
    // Anyone may forward; access control is up to the implementation.
    //
    // # Arguments
    //
    // * `caller` - The address the implementation sees as the caller.
    // * `input` - The encoded call.
    // * `value` - Amount of native token moved from `caller` to the dispatcher.
    //
    // # Returns
    //
    // The implementation's output.
    fn forward(e: Env, caller: Address, input: Bytes, value: i128) -> Val {
        caller.require_auth();
        require_valid_value(&e, value);

        let implementation = match upgrade::get_implementation(&e) {
            Some(v) => v,
            None => panic_with_error!(&e, DispatcherError::ImplementationNotSet),
        };
        relay(&e, &implementation, &caller, CallKind::Forward, &input, value)
    }

    fn native_token(e: Env) -> Address {
        get_native_token(&e)
    }

    fn balance(e: Env) -> i128 {
        token::TokenClient::new(&e, &get_native_token(&e))
            .balance(&e.current_contract_address())
    }

    // Returns the raw value stored at `slot`, if any.
    fn read_slot(e: Env, slot: BytesN<32>) -> Option<Val> {
        SlotTable::load(&e).read(&slot)
    }
}

#[contractimpl]
impl OwnableContract for Dispatcher {
    fn current_owner(e: Env) -> Address {
        AccessControl::new(&e).get_owner()
    }

    // Hands administrative control over to `new_owner`.
    //
    // # Arguments
    //
    // * `caller` - The current owner.
    // * `new_owner` - The next owner. `None` is rejected.
    fn transfer_ownership(e: Env, caller: Address, new_owner: Option<Address>) {
        caller.require_auth();
        let access_control = AccessControl::new(&e);
        let previous_owner = access_control.transfer_ownership(&caller, &new_owner);
        AccessControlEvents::new(&e)
            .transfer_ownership(previous_owner, access_control.get_owner());
    }
}

#[contractimpl]
impl UpgradeableContract for Dispatcher {
    // Returns the version of the contract.
    //
    // # Returns
    //
    // The version of the contract as a u32.
    fn version() -> u32 {
        100
    }

    fn current_implementation(e: Env) -> Option<Address> {
        upgrade::get_implementation(&e)
    }

    // Points the dispatcher at a new implementation.
    //
    // # Arguments
    //
    // * `caller` - The current owner.
    // * `new_implementation` - The implementation to forward to from now on.
    fn upgrade(e: Env, caller: Address, new_implementation: Option<Address>) {
        caller.require_auth();
        AccessControl::new(&e).assert_address_is_owner(&caller);

        let implementation = upgrade::upgrade(&e, &new_implementation);
        UpgradeEvents::new(&e).upgrade(implementation);
    }

    // Points the dispatcher at a new implementation and runs `payload` on it as a
    // migration. Pointer swap, value transfer and migration succeed or fail together.
    //
    // # Arguments
    //
    // * `caller` - The current owner.
    // * `new_implementation` - The implementation to forward to from now on.
    // * `payload` - The encoded initializer or migration call. Empty means no call.
    // * `value` - Amount of native token moved from `caller` to the dispatcher.
    //
    // # Returns
    //
    // The output of the migration call, or void when `payload` is empty.
    fn upgrade_and_call(
        e: Env,
        caller: Address,
        new_implementation: Option<Address>,
        payload: Bytes,
        value: i128,
    ) -> Val {
        caller.require_auth();
        AccessControl::new(&e).assert_address_is_owner(&caller);
        require_valid_value(&e, value);

        let implementation = upgrade::upgrade(&e, &new_implementation);
        UpgradeEvents::new(&e).upgrade(implementation.clone());

        if payload.is_empty() {
            credit_attached_value(&e, &caller, value);
            return ().into_val(&e);
        }
        relay(
            &e,
            &implementation,
            &caller,
            CallKind::Migration,
            &payload,
            value,
        )
    }
}
