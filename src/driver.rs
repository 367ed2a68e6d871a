//! Demonstration run of the greeting callable

use crate::error::HostError;
use crate::greet;
use crate::value::Value;

/// Call the greeting through every entry, ending with an unsupported arity.
///
/// The last call always fails; its error is returned without recovery.
pub fn run() -> Result<(), HostError> {
    greet::apply(&[])?;
    greet::apply(&[Value::from("Space")])?;
    greet::arity0()?;
    greet::arity1(Value::from("Space"))?;
    greet::apply(&[Value::from("Space"), Value::from("Hyper")])?;
    Ok(())
}
