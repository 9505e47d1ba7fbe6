use crate::errors::DispatcherError;
use crate::storage::get_native_token;
use implementation_interface::{CallFrame, CallKind, ImplementationClient};
use soroban_sdk::xdr::ScErrorType;
use soroban_sdk::{panic_with_error, token, Address, Bytes, Env, Val};
use storage_slots::SlotTable;

pub(crate) fn require_valid_value(e: &Env, value: i128) {
    if value < 0 {
        panic_with_error!(e, DispatcherError::InvalidValue);
    }
}

// Moves attached value from the caller into the dispatcher's balance.
pub(crate) fn credit_attached_value(e: &Env, caller: &Address, value: i128) {
    require_valid_value(e, value);
    if value == 0 {
        return;
    }
    token::TokenClient::new(e, &get_native_token(e)).transfer(
        caller,
        &e.current_contract_address(),
        &value,
    );
}

// Runs `input` on `implementation` against the dispatcher's slot table and
// commits whatever table the implementation hands back. Any failure of the
// callee becomes the failure of the whole invocation.
pub(crate) fn relay(
    e: &Env,
    implementation: &Address,
    caller: &Address,
    kind: CallKind,
    input: &Bytes,
    value: i128,
) -> Val {
    credit_attached_value(e, caller, value);

    let frame = CallFrame {
        dispatcher: e.current_contract_address(),
        caller: caller.clone(),
        kind,
        activation: upgrade::get_activation(e),
        value,
        storage: SlotTable::load(e).into_map(),
    };

    let outcome = match ImplementationClient::new(e, implementation).try_execute(&frame, input) {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(_)) => panic_with_error!(e, DispatcherError::MalformedOutcome),
        // contract errors keep their code, host traps do not
        Err(Ok(error)) if error.is_type(ScErrorType::Contract) => panic_with_error!(e, error),
        Err(_) => panic_with_error!(e, DispatcherError::CalleeAborted),
    };
    let output = match outcome.returned() {
        Some(v) => v,
        None => panic_with_error!(e, DispatcherError::MalformedOutcome),
    };

    SlotTable::from_map(e, outcome.storage).store();
    output
}
