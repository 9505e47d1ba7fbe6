use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ImplementationError {
    UnknownFunction = 301,
    MalformedInput = 302,
    AlreadyInitialized = 303,
    NotMigrating = 304,
    MissingField = 305,
    InvalidArguments = 306,
    DepositOverflow = 307,
}
