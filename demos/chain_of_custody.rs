//! Chain-of-custody demo
//!
//! Builds a two-level chain (an invalid-character error wrapped once) and
//! prints the kind and value seen at each unwrap step until the chain runs out.
//!
//! Run with: `cargo run --example chain_of_custody`
//! Checked by: `cargo test --example chain_of_custody`

use error_chainlink::prelude::*;
use std::io::{self, Write};

fn must_fail_parse() -> NodeResult<()> {
    Err(ErrorNode::invalid_character())
}

fn wrapped_error() -> NodeResult<()> {
    must_fail_parse().wrap_err()
}

fn describe(out: &mut impl Write, node: Option<&ErrorNode>) -> io::Result<()> {
    match node {
        Some(node) => writeln!(out, "Kind:{}\nValue:{}", node.kind(), node),
        None => writeln!(out, "Kind:<nil>\nValue:<nil>"),
    }
}

/// Describes `err`, then each of the next two unwrap steps.
fn custody(out: &mut impl Write, err: &ErrorNode) -> io::Result<()> {
    let mut current = Some(err);
    describe(out, current)?;

    for _ in 0..2 {
        writeln!(out, "---")?;
        current = current.and_then(ErrorNode::unwrap);
        describe(out, current)?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let Err(err) = wrapped_error() else {
        return Ok(());
    };
    custody(&mut io::stdout().lock(), &err)
}
