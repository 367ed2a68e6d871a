//! Arity-dispatched callables
//!
//! A [`MultiFn`] is one named callable backed by a table of arity-specific
//! entries. [`MultiFn::apply`] selects an entry by argument count; callers
//! that know the arity statically can fetch the entry with
//! [`MultiFn::entry`] and skip the lookup.
//!
//! A callable is assembled with a [`MultiFnBuilder`] and frozen by
//! [`MultiFnBuilder::build`]. The frozen table has no mutating API, so a
//! `MultiFn` behind a `static` is safe for concurrent readers.
//!
//! ```
//! use multiarity::multi_fn::MultiFn;
//! use multiarity::Value;
//!
//! let count = MultiFn::builder("count")
//!     .arity(0, |_| Ok(Value::from(0.0)))
//!     .variadic(1, |args| Ok(Value::from(args.len() as f64)))
//!     .build();
//!
//! assert_eq!(count.apply(&[]).unwrap(), Value::from(0.0));
//! assert_eq!(count.apply(&[Value::Nil, Value::Nil]).unwrap(), Value::from(2.0));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use crate::error::HostError;
use crate::value::Value;

/// An arity entry. Receives exactly the arguments the caller supplied.
pub type ArityFn = fn(&[Value]) -> Result<Value, HostError>;

/// A fixed-arity entry fetched with [`MultiFn::entry`].
///
/// Calling it with any other argument count fails the same way
/// [`MultiFn::apply`] would, without running the entry.
#[derive(Clone, Copy)]
pub struct Entry {
    arity: usize,
    f: ArityFn,
}

impl Entry {
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, HostError> {
        if args.len() != self.arity {
            return Err(HostError::invalid_arity(args.len()));
        }
        (self.f)(args)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("arity", &self.arity).finish()
    }
}

#[derive(Clone, Copy)]
struct Variadic {
    min: usize,
    f: ArityFn,
}

/// A callable whose behavior is selected by argument count.
#[derive(Clone)]
pub struct MultiFn {
    name: &'static str,
    fixed: BTreeMap<usize, ArityFn>,
    variadic: Option<Variadic>,
}

/// Collects arity entries before a [`MultiFn`] is frozen.
pub struct MultiFnBuilder {
    name: &'static str,
    fixed: BTreeMap<usize, ArityFn>,
    variadic: Option<Variadic>,
}

impl MultiFnBuilder {
    /// Install the entry for exactly `n` arguments, replacing any previous one
    pub fn arity(mut self, n: usize, f: ArityFn) -> Self {
        self.fixed.insert(n, f);
        self
    }

    /// Install a rest-args entry for `min` or more arguments.
    ///
    /// Fixed entries take precedence over the variadic one.
    pub fn variadic(mut self, min: usize, f: ArityFn) -> Self {
        self.variadic = Some(Variadic { min, f });
        self
    }

    pub fn build(self) -> MultiFn {
        MultiFn {
            name: self.name,
            fixed: self.fixed,
            variadic: self.variadic,
        }
    }
}

impl MultiFn {
    pub fn builder(name: &'static str) -> MultiFnBuilder {
        MultiFnBuilder {
            name,
            fixed: BTreeMap::new(),
            variadic: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Dispatch on `args.len()` and run the selected entry.
    ///
    /// Fails with an arity mismatch when no entry accepts the count. The
    /// failure is returned to the caller, never handled here.
    pub fn apply(&self, args: &[Value]) -> Result<Value, HostError> {
        trace!(callable = self.name, arity = args.len(), "dispatch");

        match self.select(args.len()) {
            Some(f) => f(args),
            None => Err(HostError::invalid_arity(args.len())),
        }
    }

    fn select(&self, n: usize) -> Option<ArityFn> {
        if let Some(f) = self.fixed.get(&n) {
            return Some(*f);
        }
        match self.variadic {
            Some(Variadic { min, f }) if n >= min => Some(f),
            _ => None,
        }
    }

    /// The fixed-arity entry for `n`, if one is installed
    pub fn entry(&self, n: usize) -> Option<Entry> {
        self.fixed.get(&n).map(|&f| Entry { arity: n, f })
    }

    /// Supported fixed arities in ascending order
    pub fn arities(&self) -> Vec<usize> {
        self.fixed.keys().copied().collect()
    }

    /// Minimum argument count of the variadic entry, if any
    pub fn variadic_min(&self) -> Option<usize> {
        self.variadic.map(|v| v.min)
    }

    /// Whether a call with `n` arguments would dispatch
    pub fn accepts(&self, n: usize) -> bool {
        self.select(n).is_some()
    }
}

impl fmt::Debug for MultiFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiFn")
            .field("name", &self.name)
            .field("arities", &self.arities())
            .field("variadic_min", &self.variadic_min())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn zero(_: &[Value]) -> Result<Value, HostError> {
        Ok(Value::from("zero"))
    }

    fn one(args: &[Value]) -> Result<Value, HostError> {
        Ok(args[0].clone())
    }

    fn rest(args: &[Value]) -> Result<Value, HostError> {
        Ok(Value::from(args.len() as f64))
    }

    #[test]
    fn test_dispatch_selects_by_count() {
        let f = MultiFn::builder("f").arity(0, zero).arity(1, one).build();

        assert_eq!(f.apply(&[]).unwrap(), Value::from("zero"));
        assert_eq!(f.apply(&[Value::from(5.0)]).unwrap(), Value::from(5.0));
    }

    #[test]
    fn test_unsupported_arity_fails() {
        let f = MultiFn::builder("f").arity(0, zero).arity(1, one).build();
        let err = f
            .apply(&[Value::Nil, Value::Nil, Value::Nil])
            .unwrap_err();

        assert_eq!(err.message(), "Invalid arity: 3");
    }

    #[test]
    fn test_empty_table_rejects_everything() {
        let f = MultiFn::builder("empty").build();
        assert!(f.arities().is_empty());
        assert_eq!(f.apply(&[]).unwrap_err().message(), "Invalid arity: 0");
    }

    #[test]
    fn test_fixed_entries_take_precedence_over_variadic() {
        let f = MultiFn::builder("f")
            .arity(1, one)
            .variadic(0, rest)
            .build();

        assert_eq!(f.apply(&[Value::from("x")]).unwrap(), Value::from("x"));
        assert_eq!(f.apply(&[]).unwrap(), Value::from(0.0));
        assert_eq!(
            f.apply(&[Value::Nil, Value::Nil]).unwrap(),
            Value::from(2.0)
        );
    }

    #[test]
    fn test_variadic_minimum_enforced() {
        let f = MultiFn::builder("f").variadic(2, rest).build();

        assert!(!f.accepts(1));
        assert!(f.accepts(2));
        assert!(f.accepts(10));
        assert_eq!(
            f.apply(&[Value::Nil]).unwrap_err().message(),
            "Invalid arity: 1"
        );
    }

    #[test]
    fn test_reinstalling_arity_replaces_entry() {
        let f = MultiFn::builder("f").arity(0, rest).arity(0, zero).build();
        assert_eq!(f.arities(), vec![0]);
        assert_eq!(f.apply(&[]).unwrap(), Value::from("zero"));
    }

    #[test]
    fn test_introspection() {
        let f = MultiFn::builder("intro")
            .arity(2, rest)
            .arity(0, zero)
            .variadic(3, rest)
            .build();

        assert_eq!(f.name(), "intro");
        assert_eq!(f.arities(), vec![0, 2]);
        assert_eq!(f.variadic_min(), Some(3));
        assert!(f.entry(1).is_none());
        assert!(f.entry(3).is_none());
    }

    #[test]
    fn test_entry_matches_apply() {
        let f = MultiFn::builder("f").arity(1, one).build();
        let direct = f.entry(1).unwrap();
        let args = [Value::from("same")];

        assert_eq!(direct.arity(), 1);
        assert_eq!(direct.call(&args).unwrap(), f.apply(&args).unwrap());
    }

    #[test]
    fn test_entry_rejects_other_counts() {
        let f = MultiFn::builder("f").arity(1, one).build();
        let direct = f.entry(1).unwrap();

        let err = direct.call(&[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArityMismatch { count: 0 });
        assert_eq!(
            direct.call(&[Value::Nil, Value::Nil]).unwrap_err().message(),
            "Invalid arity: 2"
        );
    }

    #[test]
    fn test_debug_lists_arities() {
        let f = MultiFn::builder("dbg").arity(1, one).build();
        let rendered = format!("{f:?}");
        assert!(rendered.contains("dbg"));
        assert!(rendered.contains("[1]"));
    }

    #[test]
    fn test_multi_fn_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MultiFn>();
    }
}
