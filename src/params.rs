// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::token::{canonical_name, Token, FALSE_VALUE, NEGATION_PREFIX, OPT_PREFIX};

const TRUE_VALUE: &str = "1";

/// The result of parsing a command line.
///
/// A `Params` is built by [Parser::parse()](crate::Parser::parse) and is not
/// changed by any of its getters. Share it by wrapping it in an
/// [Arc](std::sync::Arc), or publish it via [ParamsCell](crate::ParamsCell).
///
/// All lookups accept names with or without leading dashes: `"-foo"`,
/// `"--foo"` and `"foo"` are the same flag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Params {
    /// Canonical flag name to the value of its last occurrence.
    pub(crate) values: HashMap<String, String>,
    /// Flags switched off by `-noX` and not reasserted anywhere.
    pub(crate) negated: HashSet<String>,
    /// Every value supplied for each literal flag name, in order.
    pub(crate) multi: HashMap<String, Vec<String>>,
    /// Arguments that did not start with a dash.
    pub(crate) positional: Vec<String>,
}

impl Params {
    /// Create an empty set of parameters (as if nothing was specified).
    pub fn new() -> Self {
        Params::default()
    }

    /// Returns the boolean value of a flag.
    ///
    /// - A negated flag (`-nofoo`) is always `false`.
    /// - A flag with the value `"0"` is `false`; any other value (including
    ///   no value at all, as in `-foo`) is `true`.
    /// - An unspecified flag returns `default`.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let name = canonical_name(name);

        if self.negated.contains(name) {
            return false;
        }

        match self.values.get(name) {
            Some(value) => value != FALSE_VALUE,
            None => default,
        }
    }

    /// Returns the string value of a flag, or `default` if it was not
    /// specified.
    ///
    /// A flag given without a value (`-foo` or `-foo=`) returns `""`, not
    /// `default`. Negation is not considered here.
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.values
            .get(canonical_name(name))
            .map(String::as_str)
            .unwrap_or(default)
    }

    /// Returns the integer value of a flag, or `default` if it was not
    /// specified.
    ///
    /// Only the leading numeric part of the value is used, so `"12abc"` is
    /// `12` and a value with no leading digits (`"NaN"`, `""`) is `0`.
    /// Out of range values saturate.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.values
            .get(canonical_name(name))
            .map(|value| parse_int_prefix(value))
            .unwrap_or(default)
    }

    /// Strict version of [Params::get_int()].
    ///
    /// Returns `Ok(None)` if the flag was not specified and an error if the
    /// whole value is not a valid integer.
    pub fn try_get_int(&self, name: &str) -> Result<Option<i64>> {
        let name = canonical_name(name);

        let value = match self.values.get(name) {
            Some(value) => value,
            None => return Ok(None),
        };

        value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| Error::InvalidInt {
                name: name.into(),
                value: value.clone(),
            })
    }

    /// Returns every value given for `name`, in command-line order.
    ///
    /// Values implied by negations or added by [Params::soft_set()] are not
    /// included.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.multi
            .get(canonical_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Determine if a value is recorded for the flag.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(canonical_name(name))
    }

    /// Determine if the flag was switched off with `-noX`.
    pub fn is_negated(&self, name: &str) -> bool {
        self.negated.contains(canonical_name(name))
    }

    /// Arguments that were not flags, in command-line order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Returns the number of recorded flags.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no flags were recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Set a flag value unless the user already specified (or negated) it.
    ///
    /// Returns `true` if the value was applied.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        let name = canonical_name(name);

        if self.values.contains_key(name) || self.negated.contains(name) {
            return false;
        }

        self.values.insert(name.into(), value.into());

        true
    }

    /// Boolean form of [Params::soft_set()].
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        let value = if value { TRUE_VALUE } else { FALSE_VALUE };

        self.soft_set(name, value)
    }

    /// Record `value` for a positive occurrence of `name`.
    pub(crate) fn assert_flag(&mut self, name: &str, value: &str) {
        self.values.insert(name.into(), value.into());
        self.multi
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Mark `name` as switched off.
    pub(crate) fn negate_flag(&mut self, name: &str) {
        self.values.insert(name.into(), String::new());
        self.negated.insert(name.into());
    }

    /// Record `name` as on without adding it to the value history.
    pub(crate) fn imply_true(&mut self, name: &str) {
        self.values.insert(name.into(), TRUE_VALUE.into());
    }
}

impl fmt::Display for Params {
    /// Renders the flags as canonical tokens, sorted and space separated.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = BTreeSet::<String>::new();

        for (name, value) in &self.values {
            if self.negated.contains(name) {
                tokens.insert(format!("{}{}{}", OPT_PREFIX, NEGATION_PREFIX, name));
                continue;
            }

            let value = if value.is_empty() {
                None
            } else {
                Some(value.as_str())
            };

            tokens.insert(
                Token {
                    name: name.as_str(),
                    value,
                }
                .to_string(),
            );
        }

        let tokens: Vec<String> = tokens.into_iter().collect();

        write!(f, "{}", tokens.join(" "))
    }
}

/// Read the leading integer of `s` the way `atoi64` does.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. No digits means 0.
fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim_start();

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;

    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');

        n = if negative {
            n.saturating_mul(10).saturating_sub(digit)
        } else {
            n.saturating_mul(10).saturating_add(digit)
        };
    }

    n
}
