use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessControlError {
    OwnerNotFound = 101,
    NotOwner = 102,
    InvalidOwner = 103,
    OwnerAlreadySet = 104,
}
