#![no_std]

mod contract;
mod errors;
mod forward;
mod interface;
mod storage;
mod test_permissions;
mod testutils;

pub use crate::contract::{Dispatcher, DispatcherClient};
pub use crate::errors::DispatcherError;
