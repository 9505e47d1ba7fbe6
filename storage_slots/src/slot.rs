use soroban_sdk::{Bytes, BytesN, Env};

// A storage location inside the dispatcher's slot table.
pub type Slot = BytesN<32>;

// Location of a field owned by a namespace rather than by declaration order.
//
// The location is the keccak256 digest of the namespace string, so it can only
// collide with a sequential slot if the digest has 28 leading zero bytes.
pub fn namespaced_slot(e: &Env, namespace: &str) -> Slot {
    e.crypto()
        .keccak256(&Bytes::from_slice(e, namespace.as_bytes()))
        .to_bytes()
}

// Location of the `index`-th field an implementation declares.
pub fn sequential_slot(e: &Env, index: u32) -> Slot {
    let mut slot = [0u8; 32];
    slot[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(e, &slot)
}
