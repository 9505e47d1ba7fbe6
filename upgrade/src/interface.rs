use soroban_sdk::{Address, Bytes, Env, Val};

pub trait UpgradeableContract {
    // Get contract version
    fn version() -> u32;

    // Get the implementation calls are forwarded to, if any
    fn current_implementation(e: Env) -> Option<Address>;

    // Point the dispatcher at a new implementation
    fn upgrade(e: Env, caller: Address, new_implementation: Option<Address>);

    // Point the dispatcher at a new implementation and run `payload` on it
    // in the same invocation. Empty payload means no call.
    fn upgrade_and_call(
        e: Env,
        caller: Address,
        new_implementation: Option<Address>,
        payload: Bytes,
        value: i128,
    ) -> Val;
}
