use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

// Kept outside the slot table: implementations never see or rewrite it.
#[derive(Clone)]
#[contracttype]
enum DataKey {
    NativeToken,
}

generate_instance_storage_getter_and_setter!(native_token, DataKey::NativeToken, Address);
