//! Console logging

use std::io::{self, Write};

use tracing::warn;

use crate::value::Value;

/// Join values with single spaces, the way `console.log` renders them
pub fn format_line(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write `values` as one line on stdout. Returns `Nil`.
pub fn log(values: &[Value]) -> Value {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let written = writeln!(handle, "{}", format_line(values)).and_then(|()| handle.flush());
    if let Err(e) = written {
        warn!("console.log: I/O error: {e}");
    }

    Value::Nil
}
