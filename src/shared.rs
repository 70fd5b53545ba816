// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::params::Params;
use crate::parser::Parser;

/// Holds the current [Params] snapshot.
///
/// Readers get an [Arc] to a complete snapshot; publishing swaps in a new
/// one without affecting readers still holding the old one.
#[derive(Debug, Default)]
pub struct ParamsCell {
    current: RwLock<Arc<Params>>,
}

impl ParamsCell {
    /// Create a cell holding an empty snapshot.
    pub fn new() -> Self {
        ParamsCell::default()
    }

    /// Replace the current snapshot, returning the new one.
    pub fn publish(&self, params: Params) -> Arc<Params> {
        let params = Arc::new(params);

        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        *current = Arc::clone(&params);

        debug!(flags = params.len(), "published parameters");

        params
    }

    /// Returns the current snapshot.
    pub fn load(&self) -> Arc<Params> {
        let current = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        Arc::clone(&current)
    }
}

static PARAMS: OnceLock<ParamsCell> = OnceLock::new();

/// The process-wide cell.
pub fn global() -> &'static ParamsCell {
    PARAMS.get_or_init(ParamsCell::new)
}

/// Parse `cli_args` (including the program name) with the default settings
/// and make the result the process-wide snapshot.
///
/// Any previously parsed arguments are discarded.
pub fn parse_parameters<I, S>(cli_args: I) -> Arc<Params>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    global().publish(Parser::new().parse(cli_args))
}

/// Returns the process-wide snapshot.
pub fn current() -> Arc<Params> {
    global().load()
}

/// [Params::get_bool()] against the process-wide snapshot.
pub fn get_bool_arg(name: &str, default: bool) -> bool {
    current().get_bool(name, default)
}

/// [Params::get_str()] against the process-wide snapshot.
pub fn get_arg(name: &str, default: &str) -> String {
    current().get_str(name, default).into()
}

/// [Params::get_int()] against the process-wide snapshot.
pub fn get_int_arg(name: &str, default: i64) -> i64 {
    current().get_int(name, default)
}
