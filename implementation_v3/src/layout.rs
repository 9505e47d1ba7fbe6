use implementation_interface::fields::read_field;
use soroban_sdk::Env;
use storage_slots::{sequential_slot, SlotTable};

pub(crate) const VERSION: u32 = 3;

// Same positions as version 2.
const X: u32 = 0;
const Y: u32 = 2;

// What version 2 leaves behind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PreviousLayout {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl PreviousLayout {
    pub(crate) fn load(e: &Env, storage: &SlotTable) -> PreviousLayout {
        PreviousLayout {
            x: read_field(e, storage, X),
            y: read_field(e, storage, Y),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LayoutV3 {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl LayoutV3 {
    // The two fields trade roles: what version 2 kept as `y` is `x` from now on.
    pub(crate) fn migrate_from(previous: PreviousLayout) -> LayoutV3 {
        LayoutV3 {
            x: previous.y,
            y: previous.x,
        }
    }

    pub(crate) fn load(e: &Env, storage: &SlotTable) -> LayoutV3 {
        LayoutV3 {
            x: read_field(e, storage, X),
            y: read_field(e, storage, Y),
        }
    }

    pub(crate) fn save(&self, e: &Env, storage: &mut SlotTable) {
        storage.write(&sequential_slot(e, X), self.x);
        storage.write(&sequential_slot(e, Y), self.y);
    }

    pub(crate) fn sum(&self) -> u64 {
        self.x as u64 + self.y as u64
    }
}
