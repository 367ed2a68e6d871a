//! ClojureScript-style multi-arity dispatch
//!
//! A callable exposes one dispatching entry plus one directly addressable
//! entry per supported arity. Output flows through a process-wide print
//! port, and a thin host shim provides the JS-flavored values callables
//! pass around.

pub mod driver;
pub mod error;
pub mod greet;
pub mod host;
pub mod multi_fn;
pub mod print;
pub mod value;

// Re-export commonly used items for convenience
pub use error::{ErrorKind, HostError};
pub use multi_fn::{ArityFn, Entry, MultiFn, MultiFnBuilder};
pub use print::{PrintFn, Recorder, SinkGuard, emit, reset_print_fn, set_print_fn};
pub use value::Value;
