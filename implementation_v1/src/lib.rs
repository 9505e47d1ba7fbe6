#![no_std]

mod contract;
mod layout;

pub use crate::contract::{ImplementationV1, ImplementationV1Client};
