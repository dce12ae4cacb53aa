//! Sentinel identity demo
//!
//! Declares one process-wide sentinel, routes it through a wrapper and confirms
//! the wrapper still matches the sentinel by identity.
//!
//! Run with: `cargo run --example sentinel_identity`

use error_chainlink::prelude::*;

sentinel!(static MY_ERR = "myErr");

fn failing_call() -> NodeResult<()> {
    Err(MY_ERR.clone()).wrap_err()
}

fn main() {
    let Err(err) = failing_call() else {
        return;
    };

    if err.is(&MY_ERR) {
        println!("{}", err);
        println!(
            "matched sentinel \"{}\" through {} wrap layer(s)",
            *MY_ERR,
            err.depth()
        );
    }
}
