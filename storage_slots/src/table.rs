use crate::slot::Slot;
use soroban_sdk::{contracttype, panic_with_error, Env, IntoVal, Map, TryFromVal, Val};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    SlotTable,
}

// Every persistent field the dispatcher and its active implementation own,
// keyed by slot. Namespaced and sequential fields share this one keyspace.
#[derive(Clone)]
pub struct SlotTable {
    env: Env,
    slots: Map<Slot, Val>,
}

impl SlotTable {
    pub fn new(e: &Env) -> SlotTable {
        SlotTable {
            env: e.clone(),
            slots: Map::new(e),
        }
    }

    pub fn from_map(e: &Env, slots: Map<Slot, Val>) -> SlotTable {
        SlotTable {
            env: e.clone(),
            slots,
        }
    }

    // Loads the table of the current contract from instance storage.
    pub fn load(e: &Env) -> SlotTable {
        bump_instance(e);
        let slots = e
            .storage()
            .instance()
            .get(&DataKey::SlotTable)
            .unwrap_or(Map::new(e));
        SlotTable::from_map(e, slots)
    }

    pub fn store(&self) {
        bump_instance(&self.env);
        self.env
            .storage()
            .instance()
            .set(&DataKey::SlotTable, &self.slots);
    }

    pub fn has(&self, slot: &Slot) -> bool {
        self.slots.contains_key(slot.clone())
    }

    pub fn read<T>(&self, slot: &Slot) -> Option<T>
    where
        T: TryFromVal<Env, Val>,
    {
        let value = self.slots.get(slot.clone())?;
        match T::try_from_val(&self.env, &value) {
            Ok(v) => Some(v),
            Err(_) => panic_with_error!(&self.env, StorageError::ValueTypeMismatch),
        }
    }

    pub fn read_or<T>(&self, slot: &Slot, default: T) -> T
    where
        T: TryFromVal<Env, Val>,
    {
        self.read(slot).unwrap_or(default)
    }

    pub fn write<T>(&mut self, slot: &Slot, value: T)
    where
        T: IntoVal<Env, Val>,
    {
        self.slots.set(slot.clone(), value.into_val(&self.env));
    }

    pub fn remove(&mut self, slot: &Slot) {
        self.slots.remove(slot.clone());
    }

    pub fn len(&self) -> u32 {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_map(self) -> Map<Slot, Val> {
        self.slots
    }
}
