#![no_std]

mod contract;
mod layout;

pub use crate::contract::{ImplementationV2, ImplementationV2Client};
