//! JS-style string adapter
//!
//! Indices count UTF-16 code units, so results line up with what a JS host
//! reports for the same text.

use std::fmt;

use crate::host::regexp::JsRegExp;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsString {
    s: String,
}

impl JsString {
    pub fn new(s: impl Into<String>) -> Self {
        JsString { s: s.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.s
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.s.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    fn code_unit(&self, index: usize) -> Option<u16> {
        self.s.encode_utf16().nth(index)
    }

    /// The code unit at `index` as a string; empty when out of range
    pub fn char_at(&self, index: usize) -> String {
        self.code_unit(index)
            .map(|u| String::from_utf16_lossy(&[u]))
            .unwrap_or_default()
    }

    /// The code unit at `index`; `NaN` when out of range
    pub fn char_code_at(&self, index: usize) -> f64 {
        self.code_unit(index).map_or(f64::NAN, f64::from)
    }

    /// Index of the first match, or -1
    pub fn search(&self, re: &JsRegExp) -> i64 {
        match re.regex().find(&self.s) {
            Some(m) => self.s[..m.start()].encode_utf16().count() as i64,
            None => -1,
        }
    }

    /// Replace the first match (every match for a global regex) with the
    /// result of `f`.
    ///
    /// `f` receives the whole match followed by each capture group; groups
    /// that did not participate are empty strings.
    pub fn replace<F>(&self, re: &JsRegExp, mut f: F) -> JsString
    where
        F: FnMut(&[&str]) -> String,
    {
        let limit = if re.global() { usize::MAX } else { 1 };
        let mut out = String::with_capacity(self.s.len());
        let mut last = 0;

        for caps in re.regex().captures_iter(&self.s).take(limit) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let parts: Vec<&str> = caps
                .iter()
                .map(|m| m.map_or("", |m| m.as_str()))
                .collect();

            out.push_str(&self.s[last..whole.start()]);
            out.push_str(&f(&parts));
            last = whole.end();
        }
        out.push_str(&self.s[last..]);

        JsString { s: out }
    }
}

/// Build a string from UTF-16 code units. Lone surrogates become U+FFFD.
pub fn from_char_code(codes: &[u16]) -> String {
    String::from_utf16_lossy(codes)
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s)
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        JsString::new(s)
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        JsString { s }
    }
}
