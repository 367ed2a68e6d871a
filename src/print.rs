//! Process-wide print port
//!
//! All line-oriented output of callables flows through a single replaceable
//! sink. The sink starts out writing to stdout and can be swapped at runtime,
//! which lets tests substitute a [`Recorder`] without touching any callable.

use std::sync::{Arc, Mutex, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::host::console;
use crate::value::Value;

/// A sink consuming an ordered list of values for its side effect.
pub type PrintFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

static DEFAULT_PRINT_FN: Lazy<PrintFn> = Lazy::new(|| Arc::new(default_sink));

static PRINT_FN: Lazy<RwLock<PrintFn>> = Lazy::new(|| RwLock::new(default_print_fn()));

/// The default sink: space-separated values and a newline on stdout.
pub fn default_sink(values: &[Value]) -> Value {
    console::log(values)
}

/// The shared default sink. Every call returns the same `Arc`.
pub fn default_print_fn() -> PrintFn {
    Arc::clone(&DEFAULT_PRINT_FN)
}

/// The currently installed sink
pub fn print_fn() -> PrintFn {
    let slot = PRINT_FN.read().unwrap_or_else(|e| e.into_inner());
    Arc::clone(&slot)
}

/// Replace the current sink. Takes effect for the next `emit`.
pub fn set_print_fn(sink: PrintFn) {
    let mut slot = PRINT_FN.write().unwrap_or_else(|e| e.into_inner());
    *slot = sink;
    debug!("print sink replaced");
}

/// Reinstall the default stdout sink
pub fn reset_print_fn() {
    set_print_fn(default_print_fn());
}

/// Forward `values` unchanged to the current sink and return its result.
///
/// The sink is cloned out of the slot before it runs, so a sink may itself
/// call [`set_print_fn`].
pub fn emit(values: &[Value]) -> Value {
    let sink = print_fn();
    sink(values)
}

/// Restores the default sink when dropped, including during unwinding.
#[must_use = "the default sink is restored as soon as the guard is dropped"]
pub struct SinkGuard {
    _private: (),
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        reset_print_fn();
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// In-memory sink capturing each emitted argument tuple.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that appends into this recorder and returns `Nil`
    pub fn sink(&self) -> PrintFn {
        let calls = Arc::clone(&self.calls);
        Arc::new(move |values: &[Value]| {
            calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(values.to_vec());
            Value::Nil
        })
    }

    /// Every recorded tuple, in emit order
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded tuples rendered as the default sink would print them
    pub fn lines(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| console::format_line(call))
            .collect()
    }

    /// Install this recorder as the current sink until the guard drops
    pub fn install(&self) -> SinkGuard {
        set_print_fn(self.sink());
        SinkGuard { _private: () }
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_emit_routes_to_installed_sink() {
        let recorder = Recorder::new();
        let result = {
            let _guard = recorder.install();
            emit(&[Value::from("a"), Value::from(1.0)])
        };

        assert_eq!(result, Value::Nil);
        assert_eq!(
            recorder.calls(),
            vec![vec![Value::from("a"), Value::from(1.0)]]
        );
    }

    #[test]
    #[serial]
    fn test_replacement_leaves_previous_sink_untouched() {
        let first = Recorder::new();
        let second = Recorder::new();
        {
            let _guard = first.install();
            emit(&[Value::from("one")]);
            set_print_fn(second.sink());
            emit(&[Value::from("two")]);
        }

        assert_eq!(first.lines(), vec!["one"]);
        assert_eq!(second.lines(), vec!["two"]);
    }

    #[test]
    #[serial]
    fn test_emit_returns_sink_result() {
        set_print_fn(Arc::new(|values: &[Value]| {
            Value::from(values.len() as f64)
        }));
        let _guard = SinkGuard { _private: () };

        let result = emit(&[Value::Nil, Value::Nil, Value::Nil]);
        assert_eq!(result, Value::from(3.0));
    }

    #[test]
    #[serial]
    fn test_sink_may_replace_itself() {
        let recorder = Recorder::new();
        let next = recorder.sink();
        set_print_fn(Arc::new(move |_: &[Value]| {
            set_print_fn(next.clone());
            Value::Nil
        }));
        let _guard = SinkGuard { _private: () };

        emit(&[Value::from("swallowed")]);
        emit(&[Value::from("kept")]);

        assert_eq!(recorder.lines(), vec!["kept"]);
    }

    #[test]
    #[serial]
    fn test_reset_reinstalls_the_initial_sink() {
        let initial = print_fn();
        assert!(Arc::ptr_eq(&initial, &default_print_fn()));

        set_print_fn(Recorder::new().sink());
        assert!(!Arc::ptr_eq(&print_fn(), &initial));

        reset_print_fn();
        reset_print_fn();
        assert!(Arc::ptr_eq(&print_fn(), &initial));
    }

    #[test]
    #[serial]
    fn test_guard_restores_default_on_panic() {
        let recorder = Recorder::new();
        let outcome = std::panic::catch_unwind(|| {
            let _guard = recorder.install();
            panic!("assertion failed while recording");
        });

        assert!(outcome.is_err());
        assert!(Arc::ptr_eq(&print_fn(), &default_print_fn()));
    }

    #[test]
    fn test_recorder_lines_join_with_single_space() {
        let recorder = Recorder::new();
        let sink = recorder.sink();
        sink(&[Value::from("Hello "), Value::from("World")]);

        assert_eq!(recorder.lines(), vec!["Hello  World"]);
        recorder.clear();
        assert!(recorder.calls().is_empty());
    }
}
