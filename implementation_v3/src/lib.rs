#![no_std]

mod contract;
mod layout;

pub use crate::contract::{ImplementationV3, ImplementationV3Client};
