use implementation_interface::fields::read_field;
use soroban_sdk::Env;
use storage_slots::{sequential_slot, SlotTable};

pub(crate) const VERSION: u32 = 1;

// field positions, `deposits` sits at `DEPOSITS_FIELD`
const X: u32 = 0;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LayoutV1 {
    pub(crate) x: u32,
}

impl LayoutV1 {
    pub(crate) fn load(e: &Env, storage: &SlotTable) -> LayoutV1 {
        LayoutV1 {
            x: read_field(e, storage, X),
        }
    }

    pub(crate) fn save(&self, e: &Env, storage: &mut SlotTable) {
        storage.write(&sequential_slot(e, X), self.x);
    }
}
