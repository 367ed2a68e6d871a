//! The greeting callable
//!
//! Two arities: with no argument it greets [`DEFAULT_SUBJECT`], with one
//! argument it greets that value. Output goes through the print port.

use once_cell::sync::Lazy;

use crate::error::HostError;
use crate::multi_fn::MultiFn;
use crate::print;
use crate::value::Value;

pub const GREETING: &str = "Hello ";
pub const DEFAULT_SUBJECT: &str = "World";

static GREET: Lazy<MultiFn> = Lazy::new(|| {
    MultiFn::builder("greet")
        .arity(0, |args| match args {
            [] => arity0(),
            _ => Err(HostError::invalid_arity(args.len())),
        })
        .arity(1, |args| match args {
            [subject] => arity1(subject.clone()),
            _ => Err(HostError::invalid_arity(args.len())),
        })
        .build()
});

/// The frozen dispatch table
pub fn callable() -> &'static MultiFn {
    &GREET
}

/// Dispatch on argument count.
pub fn apply(args: &[Value]) -> Result<Value, HostError> {
    GREET.apply(args)
}

/// Re-enters the dispatcher with the default subject.
pub fn arity0() -> Result<Value, HostError> {
    apply(&[Value::from(DEFAULT_SUBJECT)])
}

/// Emits `GREETING` and `subject` as two separate values.
pub fn arity1(subject: Value) -> Result<Value, HostError> {
    Ok(print::emit(&[Value::from(GREETING), subject]))
}
