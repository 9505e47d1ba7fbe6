#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use implementation_interface::initializable::initialized_activation_slot;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Bytes, IntoVal, TryFromVal};
use utils::test_utils::events_named;

fn run_chain(setup: &Setup) {
    let e = &setup.env;
    let dispatcher = &setup.dispatcher;

    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v1.clone()),
        &setup.call("initialize", vec![e, 42_u32.into_val(e)]),
        &0,
    );
    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v2.clone()),
        &setup.call("migrate", vec![e, 10_u32.into_val(e), 42_u32.into_val(e)]),
        &0,
    );
    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v3.clone()),
        &setup.call("migrate", vec![e]),
        &0,
    );
}

#[test]
fn test_migration_chain() {
    let setup = Setup::default();
    let e = &setup.env;
    let dispatcher = &setup.dispatcher;
    assert_eq!(dispatcher.current_implementation(), None);

    // V1
    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v1.clone()),
        &setup.call("initialize", vec![e, 42_u32.into_val(e)]),
        &0,
    );
    assert_eq!(dispatcher.current_implementation(), Some(setup.v1.clone()));
    assert_eq!(setup.view::<u32>("version"), 1);
    assert_eq!(setup.view::<u32>("x"), 42);

    // V2 introduces `y`
    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v2.clone()),
        &setup.call("migrate", vec![e, 10_u32.into_val(e), 42_u32.into_val(e)]),
        &0,
    );
    assert_eq!(dispatcher.current_implementation(), Some(setup.v2.clone()));
    assert_eq!(setup.view::<u32>("version"), 2);
    assert_eq!(setup.view::<u32>("x"), 10);
    assert_eq!(setup.view::<u32>("y"), 42);

    // V3 swaps the roles of `x` and `y`
    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v3.clone()),
        &setup.call("migrate", vec![e]),
        &0,
    );
    assert_eq!(dispatcher.current_implementation(), Some(setup.v3.clone()));
    assert_eq!(setup.view::<u32>("version"), 3);
    assert_eq!(setup.view::<u32>("x"), 42);
    assert_eq!(setup.view::<u32>("y"), 10);
    assert_eq!(setup.view::<u64>("sum"), 52);

    // the last migration ran in the third activation
    let activation = dispatcher.read_slot(&initialized_activation_slot(e)).unwrap();
    assert_eq!(u32::try_from_val(e, &activation).unwrap(), 3);

    assert_eq!(dispatcher.current_owner(), setup.owner);
}

#[test]
fn test_each_upgrade_notifies_once() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v1.clone()),
        &setup.call("initialize", vec![e, 1_u32.into_val(e)]),
        &0,
    );
    let upgrades = events_named(e, &setup.dispatcher.address, "upgraded");
    assert_eq!(upgrades.len(), 1);
    let (_, _, data) = upgrades.last().unwrap();
    assert_eq!(
        vec![e, data],
        vec![e, (setup.v1.clone(),).into_val(e)]
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2902)")]
fn test_initialize_current_implementation_rejected() {
    let setup = Setup::default();
    let e = &setup.env;
    run_chain(&setup);

    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v3.clone()),
        &setup.call("migrate", vec![e]),
        &0,
    );
}

#[test]
fn test_failed_migration_rolls_back() {
    let setup = Setup::default();
    let e = &setup.env;
    let dispatcher = &setup.dispatcher;

    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v1.clone()),
        &setup.call("initialize", vec![e, 42_u32.into_val(e)]),
        &0,
    );
    setup.native_token_admin.mint(&setup.owner, &1_000);

    // migrate needs two arguments
    assert!(dispatcher
        .try_upgrade_and_call(
            &setup.owner,
            &Some(setup.v2.clone()),
            &setup.call("migrate", vec![e, 10_u32.into_val(e)]),
            &1_000,
        )
        .is_err());

    assert_eq!(dispatcher.current_implementation(), Some(setup.v1.clone()));
    assert_eq!(setup.view::<u32>("version"), 1);
    assert_eq!(setup.view::<u32>("x"), 42);
    assert_eq!(dispatcher.balance(), 0);
    assert_eq!(setup.native_token.balance(&setup.owner), 1_000);

    // the same migration goes through once corrected
    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v2.clone()),
        &setup.call("migrate", vec![e, 10_u32.into_val(e), 42_u32.into_val(e)]),
        &0,
    );
    assert_eq!(setup.view::<u32>("y"), 42);
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn test_migration_needs_previous_version() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v2.clone()),
        &setup.call("migrate", vec![e, 10_u32.into_val(e), 42_u32.into_val(e)]),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #304)")]
fn test_migration_not_forwardable() {
    let setup = Setup::default();
    let e = &setup.env;
    run_chain(&setup);

    setup
        .dispatcher
        .forward(&setup.user, &setup.call("migrate", vec![e]), &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_migration_runs_once() {
    let setup = Setup::default();
    let e = &setup.env;
    run_chain(&setup);

    // going back to V2 is allowed, replaying V3's migration is not
    setup
        .dispatcher
        .upgrade(&setup.owner, &Some(setup.v2.clone()));
    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v3.clone()),
        &setup.call("migrate", vec![e]),
        &0,
    );
}

#[test]
fn test_plain_upgrade_keeps_fields() {
    let setup = Setup::default();
    let e = &setup.env;
    run_chain(&setup);

    // V2 reads the same positions; roles stay as V3 left them
    setup
        .dispatcher
        .upgrade(&setup.owner, &Some(setup.v2.clone()));
    assert_eq!(setup.view::<u32>("x"), 42);
    assert_eq!(setup.view::<u32>("y"), 10);

    setup.dispatcher.forward(
        &setup.user,
        &setup.call("set_y", vec![e, 7_u32.into_val(e)]),
        &0,
    );
    assert_eq!(setup.view::<u32>("y"), 7);
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn test_plain_upgrade_skips_migration() {
    let setup = Setup::default();
    let e = &setup.env;

    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v1.clone()),
        &setup.call("initialize", vec![e, 42_u32.into_val(e)]),
        &0,
    );
    setup
        .dispatcher
        .upgrade(&setup.owner, &Some(setup.v2.clone()));
    setup.view::<u32>("y");
}

#[test]
fn test_attached_value_credited() {
    let setup = Setup::default();
    let e = &setup.env;
    let dispatcher = &setup.dispatcher;
    setup.native_token_admin.mint(&setup.owner, &1_000);
    setup.native_token_admin.mint(&setup.user, &1_000);

    dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.v1.clone()),
        &setup.call("initialize", vec![e, 42_u32.into_val(e)]),
        &300,
    );
    assert_eq!(dispatcher.balance(), 300);
    assert_eq!(setup.view::<i128>("deposited"), 300);

    // credited even when no call runs
    dispatcher.upgrade_and_call(&setup.owner, &Some(setup.v2.clone()), &Bytes::new(e), &200);
    assert_eq!(dispatcher.balance(), 500);
    assert_eq!(setup.view::<i128>("deposited"), 300);

    // plain forwards carry value too
    dispatcher.forward(&setup.user, &setup.call("deposited", vec![e]), &50);
    assert_eq!(dispatcher.balance(), 550);
    assert_eq!(setup.view::<i128>("deposited"), 350);
    assert_eq!(setup.native_token.balance(&setup.owner), 500);
    assert_eq!(setup.native_token.balance(&setup.user), 950);
}

#[test]
fn test_ownership_survives_upgrades() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    run_chain(&setup);

    setup
        .dispatcher
        .transfer_ownership(&setup.owner, &Some(new_owner.clone()));
    assert_eq!(setup.dispatcher.current_owner(), new_owner);
    assert!(setup
        .dispatcher
        .try_upgrade(&setup.owner, &Some(setup.v1.clone()))
        .is_err());
    setup
        .dispatcher
        .upgrade(&new_owner, &Some(setup.v1.clone()));
    assert_eq!(setup.view::<u32>("x"), 42);
}
