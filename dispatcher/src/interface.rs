use soroban_sdk::{Address, Bytes, BytesN, Env, Val};

pub trait DispatcherInterface {
    // Relay an encoded call to the current implementation
    fn forward(e: Env, caller: Address, input: Bytes, value: i128) -> Val;

    // Get the token attached value is paid in
    fn native_token(e: Env) -> Address;

    // Get the native balance held by the dispatcher
    fn balance(e: Env) -> i128;

    // Read a raw storage slot
    fn read_slot(e: Env, slot: BytesN<32>) -> Option<Val>;
}
