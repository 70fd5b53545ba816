// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::params::Params;
use crate::token::Token;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, stop looking for flags at the first argument that does not
    /// start with a dash. That argument and everything after it is
    /// recorded as positional.
    stop_at_positional: bool,

    /// If set, `-noX` is an ordinary flag called `noX` and does not
    /// switch off `X`.
    no_negation: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Stop parsing flags at the first positional argument.
    ///
    /// By default, positional arguments are skipped and parsing continues,
    /// so in `prog -a foo -b` both `-a` and `-b` are flags. With this
    /// setting only `-a` is; `foo` and `-b` are positional.
    pub fn stop_at_positional(self) -> Self {
        Settings {
            stop_at_positional: true,
            ..self
        }
    }

    /// Disable the `-noX` negation shorthand.
    pub fn no_negation(self) -> Self {
        Settings {
            no_negation: true,
            ..self
        }
    }
}

/// Get all command-line arguments specified to the program, including the
/// program name.
///
/// Unlike [std::env::args()], this does not panic if an argument is not
/// valid unicode.
pub fn get_args() -> Result<Vec<String>> {
    os_args_to_strings(env::args_os())
}

/// Convert raw arguments to strings, failing on the first one that is not
/// valid unicode.
fn os_args_to_strings<I>(os_args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    os_args
        .into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|arg| Error::InvalidUnicode {
                index,
                lossy: arg.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// Converts a command line into [Params].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Parser {
    settings: Settings,
}

impl Parser {
    /// Create a parser with the default settings.
    pub fn new() -> Self {
        Parser::default()
    }

    /// Specify any settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        Parser { settings }
    }

    /// Stop parsing at the first positional argument.
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn stop_at_positional(self) -> Self {
        self.settings(self.settings.stop_at_positional())
    }

    /// Disable `-noX` negation.
    ///
    /// # Note
    ///
    /// This is an alternative to calling the `settings()` method.
    pub fn no_negation(self) -> Self {
        self.settings(self.settings.no_negation())
    }

    /// Parse a command line.
    ///
    /// # Arguments
    ///
    /// - `cli_args`: the arguments _including_ the program name, which is
    ///   always skipped (as returned by [get_args()] or
    ///   [std::env::args()]).
    ///
    /// # Notes
    ///
    /// - `-foo` and `--foo` are the same flag.
    /// - A flag's value is whatever follows the first `=`, or `""`.
    /// - If a flag is given more than once, the last value wins.
    /// - `-nofoo` switches `foo` off, but any positive occurrence of
    ///   `foo` (before or after) takes priority. `-nofoo=0` switches
    ///   `foo` on.
    /// - Parsing never fails: malformed flags such as `-` are recorded
    ///   under the empty name.
    pub fn parse<I, S>(&self, cli_args: I) -> Params
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Params::new();

        // Base name to whether any negation of it was a double negative
        // (-nofoo=0), which asserts the flag wherever it appears.
        let mut negations = HashMap::<String, bool>::new();

        let mut end_of_flags = false;

        // Skip the program name
        for cli_arg in cli_args.into_iter().skip(1) {
            let cli_arg = cli_arg.as_ref();

            if end_of_flags {
                params.positional.push(cli_arg.into());
                continue;
            }

            let token = match Token::parse(cli_arg) {
                Some(token) => token,
                None => {
                    debug!(arg = cli_arg, "positional argument");

                    params.positional.push(cli_arg.into());
                    end_of_flags = self.settings.stop_at_positional;

                    continue;
                }
            };

            trace!(name = token.name, value = ?token.value, "flag");

            params.assert_flag(token.name, token.value());

            if self.settings.no_negation {
                continue;
            }

            if let Some(base) = token.negated_name() {
                *negations.entry(base.into()).or_default() |= token.is_double_negative();
            }
        }

        for (name, double_negative) in negations {
            // Every positive occurrence is in the value history.
            if params.multi.contains_key(&name) {
                debug!(name = name.as_str(), "negation overridden");
                continue;
            }

            if double_negative {
                params.imply_true(&name);
            } else {
                debug!(name = name.as_str(), "negated");
                params.negate_flag(&name);
            }
        }

        params
    }

    /// Parse the command line of the current process.
    pub fn parse_env(&self) -> Result<Params> {
        let args = get_args()?;

        Ok(self.parse(args))
    }
}
