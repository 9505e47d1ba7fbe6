use crate::layout::{LayoutV1, VERSION};
use implementation_interface::calldata::{argument, decode_call_or_panic, require_arity};
use implementation_interface::errors::ImplementationError;
use implementation_interface::fields::{get_deposits, record_deposit};
use implementation_interface::initializable::initialize;
use implementation_interface::{CallFrame, CallOutcome, ImplementationInterface};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Bytes, Env, IntoVal, Symbol, Val,
};
use storage_slots::SlotTable;

#[contract]
pub struct ImplementationV1;

#[contractimpl]
impl ImplementationInterface for ImplementationV1 {
    // Entry point for every call relayed by the dispatcher.
    //
    // # Arguments
    //
    // * `frame` - The dispatcher's call context and slot table.
    // * `input` - The encoded call.
    //
    // # Returns
    //
    // The call output and the slot table to commit.
    fn execute(e: Env, frame: CallFrame, input: Bytes) -> CallOutcome {
        let (function, args) = decode_call_or_panic(&e, &input);
        let mut storage = SlotTable::from_map(&e, frame.storage.clone());
        record_deposit(&e, &mut storage, frame.value);

        let output: Val = if function == Symbol::new(&e, "initialize") {
            require_arity(&e, &args, 1);
            initialize(&e, &frame, &mut storage, VERSION);
            LayoutV1 {
                x: argument(&e, &args, 0),
            }
            .save(&e, &mut storage);
            ().into_val(&e)
        } else if function == symbol_short!("x") {
            LayoutV1::load(&e, &storage).x.into_val(&e)
        } else if function == symbol_short!("set_x") {
            require_arity(&e, &args, 1);
            let mut layout = LayoutV1::load(&e, &storage);
            layout.x = argument(&e, &args, 0);
            layout.save(&e, &mut storage);
            ().into_val(&e)
        } else if function == symbol_short!("deposited") {
            get_deposits(&e, &storage).into_val(&e)
        } else if function == symbol_short!("version") {
            VERSION.into_val(&e)
        } else {
            panic_with_error!(&e, ImplementationError::UnknownFunction);
        };

        CallOutcome::new(&e, output, storage.into_map())
    }
}
