use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DispatcherError {
    ImplementationNotSet = 201,
    InvalidValue = 202,
    CalleeAborted = 203,
    MalformedOutcome = 204,
}
