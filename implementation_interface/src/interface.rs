use crate::types::{CallFrame, CallOutcome};
use soroban_sdk::{contractclient, Bytes, Env};

#[contractclient(name = "ImplementationClient")]
pub trait ImplementationInterface {
    // Run the encoded call in `input` against the storage carried by `frame`.
    fn execute(e: Env, frame: CallFrame, input: Bytes) -> CallOutcome;
}
