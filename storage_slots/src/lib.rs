#![no_std]

pub mod slot;
pub mod table;

pub use crate::slot::{namespaced_slot, sequential_slot, Slot};
pub use crate::table::SlotTable;
