//! Regular expressions with JS-style flags, backed by the `regex` crate.

use std::fmt;

use regex::{Captures, Regex, RegexBuilder};

use crate::error::HostError;

/// A compiled pattern plus the flags it was created with.
#[derive(Debug, Clone)]
pub struct JsRegExp {
    source: String,
    flags: String,
    global: bool,
    regex: Regex,
}

impl JsRegExp {
    /// Compile `source` with `flags` drawn from `g`, `i`, `m` and `s`.
    pub fn new(source: &str, flags: &str) -> Result<Self, HostError> {
        let mut builder = RegexBuilder::new(source);
        let mut global = false;
        let mut seen = String::new();

        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(HostError::invalid_pattern(
                    source,
                    format!("duplicate flag '{flag}'"),
                ));
            }
            match flag {
                'g' => global = true,
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                other => {
                    return Err(HostError::invalid_pattern(
                        source,
                        format!("unsupported flag '{other}'"),
                    ));
                }
            }
            seen.push(flag);
        }

        let regex = builder
            .build()
            .map_err(|e| HostError::invalid_pattern(source, e))?;

        Ok(JsRegExp {
            source: source.to_string(),
            flags: flags.to_string(),
            global,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn global(&self) -> bool {
        self.global
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whole match followed by every capture group; empty when nothing matches.
    ///
    /// Groups that did not participate in the match come back as empty
    /// strings.
    pub fn exec(&self, input: &str) -> Vec<String> {
        self.regex
            .captures(input)
            .map(|caps| captures_to_strings(&caps))
            .unwrap_or_default()
    }

    pub fn test(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

fn captures_to_strings(caps: &Captures<'_>) -> Vec<String> {
    caps.iter()
        .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect()
}

impl PartialEq for JsRegExp {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for JsRegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
