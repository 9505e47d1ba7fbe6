#![no_std]

pub mod calldata;
pub mod errors;
pub mod fields;
pub mod initializable;
pub mod interface;
pub mod types;

pub use crate::interface::{ImplementationClient, ImplementationInterface};
pub use crate::types::{CallFrame, CallKind, CallOutcome};
