#![cfg(test)]
extern crate std;

use crate::DispatcherClient;
use implementation_interface::calldata::{argument, decode_call_or_panic, encode_call};
use implementation_interface::errors::ImplementationError;
use implementation_interface::{CallFrame, CallKind, CallOutcome, ImplementationInterface};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, Address, Bytes, Env,
    IntoVal, Symbol, Val, Vec,
};
use storage_slots::{sequential_slot, SlotTable};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockError {
    Exploded = 9001,
}

// Implementation exposing raw slot access so tests can observe what the
// dispatcher commits.
#[contract]
pub struct MockImplementation;

#[contractimpl]
impl ImplementationInterface for MockImplementation {
    fn execute(e: Env, frame: CallFrame, input: Bytes) -> CallOutcome {
        let (function, args) = decode_call_or_panic(&e, &input);
        let mut storage = SlotTable::from_map(&e, frame.storage.clone());

        let output: Val = if function == symbol_short!("echo") {
            argument::<Val>(&e, &args, 0)
        } else if function == symbol_short!("store") {
            let slot = sequential_slot(&e, argument::<u32>(&e, &args, 0));
            storage.write(&slot, argument::<Val>(&e, &args, 1));
            ().into_val(&e)
        } else if function == symbol_short!("load") {
            let slot = sequential_slot(&e, argument::<u32>(&e, &args, 0));
            storage.read::<Val>(&slot).unwrap_or(().into_val(&e))
        } else if function == symbol_short!("explode") {
            storage.write(&sequential_slot(&e, 0), 666_u32);
            panic_with_error!(&e, MockError::Exploded);
        } else if function == symbol_short!("trap") {
            storage.write(&sequential_slot(&e, 0), 667_u32);
            panic!("trapped");
        } else if function == symbol_short!("hollow") {
            return CallOutcome {
                output: Vec::new(&e),
                storage: storage.into_map(),
            };
        } else if function == symbol_short!("frame") {
            (
                frame.caller.clone(),
                frame.kind == CallKind::Migration,
                frame.activation,
                frame.value,
            )
                .into_val(&e)
        } else {
            panic_with_error!(&e, ImplementationError::UnknownFunction);
        };

        CallOutcome::new(&e, output, storage.into_map())
    }
}

pub(crate) fn call(e: &Env, function: &str, args: Vec<Val>) -> Bytes {
    encode_call(e, &Symbol::new(e, function), args)
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(e, &e.register_stellar_asset_contract_v2(admin.clone()).address())
}

pub(crate) fn get_token_admin_client<'a>(e: &Env, address: &Address) -> StellarAssetClient<'a> {
    StellarAssetClient::new(e, address)
}

pub(crate) fn create_mock_implementation(e: &Env) -> Address {
    e.register(MockImplementation, ())
}

pub(crate) fn create_dispatcher<'a>(
    e: &Env,
    owner: &Address,
    implementation: Option<Address>,
    native_token: &Address,
) -> DispatcherClient<'a> {
    DispatcherClient::new(
        e,
        &e.register(
            crate::contract::Dispatcher {},
            (owner.clone(), implementation, native_token.clone()),
        ),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) implementation: Address,
    pub(crate) native_token: TokenClient<'a>,
    pub(crate) native_token_admin: StellarAssetClient<'a>,
    pub(crate) dispatcher: DispatcherClient<'a>,
}

impl Default for Setup<'_> {
    // Dispatcher pointing at a mock implementation
    fn default() -> Self {
        Self::setup(true)
    }
}

impl Setup<'_> {
    // Dispatcher created without an implementation
    pub(crate) fn unset() -> Self {
        Self::setup(false)
    }

    fn setup(with_implementation: bool) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let token_admin = Address::generate(&env);
        let native_token = create_token_contract(&env, &token_admin);
        let native_token_admin = get_token_admin_client(&env, &native_token.address);

        let implementation = create_mock_implementation(&env);
        let dispatcher = create_dispatcher(
            &env,
            &owner,
            match with_implementation {
                true => Some(implementation.clone()),
                false => None,
            },
            &native_token.address,
        );

        Setup {
            env,
            owner,
            implementation,
            native_token,
            native_token_admin,
            dispatcher,
        }
    }
}
