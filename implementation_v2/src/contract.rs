use crate::layout::{LayoutV2, PreviousLayout, VERSION};
use implementation_interface::calldata::{argument, decode_call_or_panic, require_arity};
use implementation_interface::errors::ImplementationError;
use implementation_interface::fields::{get_deposits, record_deposit};
use implementation_interface::initializable::initialize;
use implementation_interface::{CallFrame, CallOutcome, ImplementationInterface};
use soroban_sdk::{contract, contractimpl, panic_with_error, symbol_short, Bytes, Env, IntoVal, Val};
use storage_slots::SlotTable;

#[contract]
pub struct ImplementationV2;

#[contractimpl]
impl ImplementationInterface for ImplementationV2 {
    fn execute(e: Env, frame: CallFrame, input: Bytes) -> CallOutcome {
        let (function, args) = decode_call_or_panic(&e, &input);
        let mut storage = SlotTable::from_map(&e, frame.storage.clone());
        record_deposit(&e, &mut storage, frame.value);

        let output: Val = if function == symbol_short!("migrate") {
            require_arity(&e, &args, 2);
            initialize(&e, &frame, &mut storage, VERSION);
            let previous = PreviousLayout::load(&e, &storage);
            LayoutV2::migrate_from(previous, argument(&e, &args, 0), argument(&e, &args, 1))
                .save(&e, &mut storage);
            ().into_val(&e)
        } else if function == symbol_short!("x") {
            LayoutV2::load(&e, &storage).x.into_val(&e)
        } else if function == symbol_short!("y") {
            LayoutV2::load(&e, &storage).y.into_val(&e)
        } else if function == symbol_short!("set_y") {
            require_arity(&e, &args, 1);
            let mut layout = LayoutV2::load(&e, &storage);
            layout.y = argument(&e, &args, 0);
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
