// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for parsing dash-style flags and reading them back as typed
//! values.
//!
//! If you want subcommands, help generation or validation, you should
//! consider the excellent [`clap`](https://crates.io/crates/clap) crate
//! instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Flag syntax](#flag-syntax)
//! * [Negation](#negation)
//! * [Reading values](#reading-values)
//! * [Sharing the result](#sharing-the-result)
//!
//! ---
//!
//! # Overview
//!
//! Flags do not need to be registered up front. The whole command line is
//! parsed into a [Params] value which maps each flag name to the string it
//! was given, and remembers which flags were switched off with the `-noX`
//! shorthand. The caller then asks for flags by name, supplying a default
//! for each lookup.
//!
//! # Quickstart
//!
//! ```rust
//! use getarg::Parser;
//!
//! let params = Parser::new().parse(&["prog", "-verbose", "--port=8333", "-nolisten"]);
//!
//! assert!(params.get_bool("-verbose", false));
//! assert!(!params.get_bool("-listen", true));
//! assert_eq!(params.get_int("-port", 8000), 8333);
//! assert_eq!(params.get_str("-datadir", "/tmp"), "/tmp");
//! ```
//!
//! To parse the arguments of the running program, use
//! [Parser::parse_env()]:
//!
//! ```rust
//! use getarg::{Parser, Result};
//!
//! fn main() -> Result<()> {
//!     let params = Parser::new().parse_env()?;
//!
//!     let debug = params.get_bool("-debug", false);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Details
//!
//! ## Flag syntax
//!
//! - The first argument is the program name and is always skipped.
//! - A flag is any argument starting with a dash: `-name`, `-name=value`,
//!   `--name` or `--name=value`. One and two dashes are equivalent.
//! - The value is everything after the _first_ `=`. A flag without `=`
//!   has the empty string as its value.
//! - If a flag is specified more than once, the last value wins. All the
//!   values are still available via [Params::get_all()].
//! - Arguments that do not start with a dash are positional. They are
//!   available via [Params::positional()] and are otherwise ignored (see
//!   [Settings::stop_at_positional()] for the alternative).
//! - Nothing is ever rejected: a lone `-` is a flag with an empty name.
//!
//! ## Negation
//!
//! `-nofoo` is shorthand for "`foo` is off":
//!
//! ```rust
//! # use getarg::Parser;
//! #
//! let params = Parser::new().parse(&["prog", "-nofoo"]);
//! assert!(!params.get_bool("-foo", true));
//!
//! // "-nofoo=0" is a double negative.
//! let params = Parser::new().parse(&["prog", "-nofoo=0"]);
//! assert!(params.get_bool("-foo", false));
//! ```
//!
//! If `foo` is _also_ specified without the prefix, that occurrence always
//! takes priority, whichever order the two appear in:
//!
//! ```rust
//! # use getarg::Parser;
//! #
//! let params = Parser::new().parse(&["prog", "-nofoo", "-foo"]);
//! assert!(params.get_bool("-foo", false));
//!
//! let params = Parser::new().parse(&["prog", "-foo", "-nofoo"]);
//! assert!(params.get_bool("-foo", false));
//! ```
//!
//! > **Note:** The prefix is matched literally, so `-noise` both sets
//! > `noise` _and_ switches off `ise`. Use [Settings::no_negation()] if
//! > your flag names clash with the shorthand.
//!
//! ## Reading values
//!
//! | Method | Unset | `-x` | `-x=0` | `-x=7` | `-x=abc` | `-nox` |
//! |-|-|-|-|-|-|-|
//! | [Params::get_bool()] | default | `true` | `false` | `true` | `true` | `false` |
//! | [Params::get_str()] | default | `""` | `"0"` | `"7"` | `"abc"` | `""` |
//! | [Params::get_int()] | default | `0` | `0` | `7` | `0` | `0` |
//!
//! Use [Params::try_get_int()] if a malformed number should be an error
//! rather than `0`.
//!
//! ## Sharing the result
//!
//! [Params] never changes once it has been handed out. To make the parsed
//! command line available to the whole program, publish it to a
//! [ParamsCell] (or the process-wide one via [parse_parameters()]) and
//! read it back with the free functions:
//!
//! ```rust
//! use getarg::{get_bool_arg, get_int_arg, parse_parameters};
//!
//! parse_parameters(&["prog", "-threads=4"]);
//!
//! assert_eq!(get_int_arg("-threads", 1), 4);
//! assert!(!get_bool_arg("-server", false));
//! ```

mod error;
mod params;
mod parser;
mod shared;
mod token;

pub use error::{Error, Result};

pub use params::Params;
pub use parser::{get_args, Parser, Settings};
pub use shared::{
    current, get_arg, get_bool_arg, get_int_arg, global, parse_parameters, ParamsCell,
};
pub use token::{canonical_name, Token};
