// Encoding of forwarded calls. The dispatcher never looks inside a payload:
// callers build one with `encode_call` and implementations take it apart with
// `decode_call` or `decode_call_or_panic`.

use crate::errors::ImplementationError;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{panic_with_error, Bytes, Env, Symbol, TryFromVal, Val, Vec};

// Encodes `function` and its `args` as an opaque payload.
pub fn encode_call(e: &Env, function: &Symbol, args: Vec<Val>) -> Bytes {
    (function.clone(), args).to_xdr(e)
}

// Decodes a payload produced by `encode_call`.
pub fn decode_call(e: &Env, input: &Bytes) -> Option<(Symbol, Vec<Val>)> {
    if input.is_empty() {
        return None;
    }
    <(Symbol, Vec<Val>)>::from_xdr(e, input).ok()
}

pub fn decode_call_or_panic(e: &Env, input: &Bytes) -> (Symbol, Vec<Val>) {
    match decode_call(e, input) {
        Some(call) => call,
        None => panic_with_error!(e, ImplementationError::MalformedInput),
    }
}

// Reads the argument at `index`, failing with `InvalidArguments` when it is
// missing or of another type.
pub fn argument<T>(e: &Env, args: &Vec<Val>, index: u32) -> T
where
    T: TryFromVal<Env, Val>,
{
    let value = match args.get(index) {
        Some(v) => v,
        None => panic_with_error!(e, ImplementationError::InvalidArguments),
    };
    match T::try_from_val(e, &value) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, ImplementationError::InvalidArguments),
    }
}

pub fn require_arity(e: &Env, args: &Vec<Val>, arity: u32) {
    if args.len() != arity {
        panic_with_error!(e, ImplementationError::InvalidArguments);
    }
}
