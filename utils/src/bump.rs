use crate::constant::{INSTANCE_TTL_THRESHOLD, MAX_INSTANCE_TTL};
use soroban_sdk::Env;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, MAX_INSTANCE_TTL);
}
