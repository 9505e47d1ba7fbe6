#![cfg(test)]

use crate::testutils::{call, create_mock_implementation, Setup};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Bytes, IntoVal};

// upgrade
#[test]
fn test_upgrade_third_party_user() {
    let setup = Setup::default();
    let dispatcher = setup.dispatcher;
    let user = Address::generate(&setup.env);
    let new_implementation = create_mock_implementation(&setup.env);

    assert!(dispatcher
        .try_upgrade(&user, &Some(new_implementation.clone()))
        .is_err());
    assert_eq!(
        dispatcher.current_implementation(),
        Some(setup.implementation)
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_upgrade_not_owner() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup
        .dispatcher
        .upgrade(&user, &Some(create_mock_implementation(&setup.env)));
}

#[test]
fn test_upgrade_owner() {
    let setup = Setup::default();
    assert!(setup
        .dispatcher
        .try_upgrade(&setup.owner, &Some(create_mock_implementation(&setup.env)))
        .is_ok());
}

#[test]
#[should_panic(expected = "Error(Contract, #2901)")]
fn test_upgrade_to_nobody() {
    let setup = Setup::default();
    setup.dispatcher.upgrade(&setup.owner, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #2902)")]
fn test_upgrade_to_current_implementation() {
    let setup = Setup::default();
    setup
        .dispatcher
        .upgrade(&setup.owner, &Some(setup.implementation.clone()));
}

#[test]
fn test_upgrade_to_current_implementation_any_caller() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    assert!(setup
        .dispatcher
        .try_upgrade(&user, &Some(setup.implementation.clone()))
        .is_err());
    assert!(setup
        .dispatcher
        .try_upgrade(&setup.owner, &Some(setup.implementation.clone()))
        .is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_upgrade_and_call_not_owner() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    setup.dispatcher.upgrade_and_call(
        &user,
        &Some(create_mock_implementation(e)),
        &call(e, "frame", vec![e]),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2902)")]
fn test_upgrade_and_call_to_current_implementation() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(setup.implementation.clone()),
        &Bytes::new(e),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #202)")]
fn test_upgrade_and_call_negative_value() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.dispatcher.upgrade_and_call(
        &setup.owner,
        &Some(create_mock_implementation(e)),
        &Bytes::new(e),
        &-5,
    );
}

// forwarding carries no ownership gate
#[test]
fn test_forward_third_party_user() {
    let setup = Setup::default();
    let e = &setup.env;
    let user = Address::generate(e);
    assert!(setup
        .dispatcher
        .try_forward(&user, &call(e, "echo", vec![e, 1_u32.into_val(e)]), &0)
        .is_ok());
}

// transfer ownership
#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_transfer_ownership_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup
        .dispatcher
        .transfer_ownership(&user, &Some(user.clone()));
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn test_transfer_ownership_to_nobody() {
    let setup = Setup::default();
    setup.dispatcher.transfer_ownership(&setup.owner, &None);
}

#[test]
fn test_transfer_ownership_failures_keep_owner() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);

    assert!(setup
        .dispatcher
        .try_transfer_ownership(&setup.owner, &None)
        .is_err());
    assert!(setup
        .dispatcher
        .try_transfer_ownership(&user, &Some(user.clone()))
        .is_err());
    assert_eq!(setup.dispatcher.current_owner(), setup.owner);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let dispatcher = setup.dispatcher;
    let owner_original = setup.owner;
    let owner_new = Address::generate(&setup.env);

    dispatcher.transfer_ownership(&owner_original, &Some(owner_new.clone()));
    assert_eq!(dispatcher.current_owner(), owner_new);

    // previous owner lost every privilege
    assert!(dispatcher
        .try_upgrade(&owner_original, &Some(create_mock_implementation(&setup.env)))
        .is_err());
    assert!(dispatcher
        .try_transfer_ownership(&owner_original, &Some(owner_original.clone()))
        .is_err());

    assert!(dispatcher
        .try_upgrade(&owner_new, &Some(create_mock_implementation(&setup.env)))
        .is_ok());
}
