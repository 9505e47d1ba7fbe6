#![cfg(test)]
extern crate std;

use implementation_interface::calldata::encode_call;
use soroban_dispatcher_contract::{Dispatcher, DispatcherClient};
use soroban_implementation_v1_contract::ImplementationV1;
use soroban_implementation_v2_contract::ImplementationV2;
use soroban_implementation_v3_contract::ImplementationV3;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Bytes, Env, Symbol, TryFromVal, Val, Vec};

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) owner: Address,
    pub(crate) user: Address,
    pub(crate) native_token: SorobanTokenClient<'a>,
    pub(crate) native_token_admin: SorobanTokenAdminClient<'a>,
    pub(crate) dispatcher: DispatcherClient<'a>,
    pub(crate) v1: Address,
    pub(crate) v2: Address,
    pub(crate) v3: Address,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::setup()
    }
}

impl Setup<'_> {
    // Dispatcher created without an implementation, with all three versions deployed
    pub(crate) fn setup() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&e);
        let user = Address::generate(&e);

        let native_token = create_token_contract(&e, &owner);
        let native_token_admin = SorobanTokenAdminClient::new(&e, &native_token.address);

        let v1 = e.register(ImplementationV1 {}, ());
        let v2 = e.register(ImplementationV2 {}, ());
        let v3 = e.register(ImplementationV3 {}, ());

        let dispatcher = DispatcherClient::new(
            &e,
            &e.register(
                Dispatcher {},
                (owner.clone(), None::<Address>, native_token.address.clone()),
            ),
        );

        Self {
            env: e,
            owner,
            user,
            native_token,
            native_token_admin,
            dispatcher,
            v1,
            v2,
            v3,
        }
    }

    pub(crate) fn call(&self, function: &str, args: Vec<Val>) -> Bytes {
        encode_call(&self.env, &Symbol::new(&self.env, function), args)
    }

    // Forwards a read-only call as `user` and decodes its output.
    pub(crate) fn view<T: TryFromVal<Env, Val>>(&self, function: &str) -> T {
        let output = self.dispatcher.forward(
            &self.user,
            &self.call(function, Vec::new(&self.env)),
            &0,
        );
        match T::try_from_val(&self.env, &output) {
            Ok(v) => v,
            Err(_) => panic!("unexpected output of {}", function),
        }
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone()).address(),
    )
}
