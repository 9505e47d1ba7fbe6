use soroban_sdk::{contracttype, Address, BytesN, Env, Map, Val, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallKind {
    // Ordinary call relayed by `forward`
    Forward,
    // Payload run by `upgrade_and_call` right after the pointer swap
    Migration,
}

// Everything an implementation sees of the invocation it serves.
// `storage` is the dispatcher's whole slot table, not the implementation's own.
#[contracttype]
#[derive(Clone)]
pub struct CallFrame {
    pub dispatcher: Address,
    pub caller: Address,
    pub kind: CallKind,
    pub activation: u32,
    pub value: i128,
    pub storage: Map<BytesN<32>, Val>,
}

// Result of an implementation call. The dispatcher commits `storage` as its own
// and hands the single value in `output` back to the original caller.
#[contracttype]
#[derive(Clone)]
pub struct CallOutcome {
    pub output: Vec<Val>,
    pub storage: Map<BytesN<32>, Val>,
}

impl CallOutcome {
    pub fn new(e: &Env, output: Val, storage: Map<BytesN<32>, Val>) -> CallOutcome {
        CallOutcome {
            output: Vec::from_array(e, [output]),
            storage,
        }
    }

    // The returned value, `None` unless `output` holds exactly one.
    pub fn returned(&self) -> Option<Val> {
        if self.output.len() != 1 {
            return None;
        }
        self.output.first()
    }
}
