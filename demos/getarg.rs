// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// Show how flags on the command line are interpreted.
///
/// Try:
///
/// ```bash
/// $ RUST_LOG=getarg=trace cargo run --example getarg -- -nolisten --port=8333 -v=0 -add=a -add=b
/// ```
use getarg::{current, get_arg, get_bool_arg, get_int_arg, global, Parser, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut params = Parser::new().parse_env()?;

    // Defaults that apply unless the user said otherwise.
    params.soft_set_bool("-listen", true);
    params.soft_set("-port", "8000");

    global().publish(params);

    println!("INFO: parsed: {}", current());

    println!("INFO: listen: {}", get_bool_arg("-listen", false));
    println!("INFO: port: {}", get_int_arg("-port", 0));
    println!("INFO: verbose: {}", get_bool_arg("-v", false));
    println!("INFO: datadir: {:?}", get_arg("-datadir", "~/.getarg"));

    let params = current();

    println!("INFO: add: {:?}", params.get_all("-add"));
    println!("INFO: positional: {:?}", params.positional());

    match params.try_get_int("-port") {
        Ok(_) => (),
        Err(e) => println!("WARNING: {}", e),
    }

    Ok(())
}
