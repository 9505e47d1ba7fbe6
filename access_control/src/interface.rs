use soroban_sdk::{Address, Env};

pub trait OwnableContract {
    // Get the address allowed to run administrative operations
    fn current_owner(e: Env) -> Address;

    // Hand administrative control over to a new address
    fn transfer_ownership(e: Env, caller: Address, new_owner: Option<Address>);
}
