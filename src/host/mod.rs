//! Thin JS-style host shim
//!
//! Small stand-ins for the browser primitives the value model refers to:
//! a console, regular expressions, UTC dates, numeric parsers and a
//! UTF-16 indexed string adapter. None of them take part in dispatch.

pub mod console;
pub mod date;
pub mod parse;
pub mod regexp;
pub mod string;
