use implementation_interface::fields::read_field;
use soroban_sdk::Env;
use storage_slots::{sequential_slot, SlotTable};

pub(crate) const VERSION: u32 = 2;

// Field positions. `y` is appended after the fields version 1 declared.
const X: u32 = 0;
const Y: u32 = 2;

// What version 1 leaves behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PreviousLayout {
    pub(crate) x: u32,
}

impl PreviousLayout {
    pub(crate) fn load(e: &Env, storage: &SlotTable) -> PreviousLayout {
        PreviousLayout {
            x: read_field(e, storage, X),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LayoutV2 {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl LayoutV2 {
    // Version 1 storage must exist; its `x` is replaced by the migration arguments.
    pub(crate) fn migrate_from(_previous: PreviousLayout, x: u32, y: u32) -> LayoutV2 {
        LayoutV2 { x, y }
    }

    pub(crate) fn load(e: &Env, storage: &SlotTable) -> LayoutV2 {
        LayoutV2 {
            x: read_field(e, storage, X),
            y: read_field(e, storage, Y),
        }
    }

    pub(crate) fn save(&self, e: &Env, storage: &mut SlotTable) {
        storage.write(&sequential_slot(e, X), self.x);
        storage.write(&sequential_slot(e, Y), self.y);
    }
}
