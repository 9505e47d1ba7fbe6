#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Events;
use soroban_sdk::{Address, Env, Symbol, TryFromVal, Val, Vec};

// Events published by `contract` whose first topic is `name`, oldest first.
pub fn events_named(e: &Env, contract: &Address, name: &str) -> Vec<(Address, Vec<Val>, Val)> {
    let topic = Symbol::new(e, name);
    let mut result = Vec::new(e);
    for (emitter, topics, data) in e.events().all().iter() {
        if &emitter != contract {
            continue;
        }
        let first = match topics.first() {
            Some(value) => value,
            None => continue,
        };
        if let Ok(symbol) = Symbol::try_from_val(e, &first) {
            if symbol == topic {
                result.push_back((emitter, topics, data));
            }
        }
    }
    result
}
