//! Checks the registered tool set for naming conflicts.
//!
//! Exits non-zero and lists every violation when the set is invalid.

use anyhow::Result;
use tuulbox::{discover, verify};

fn main() -> Result<()> {
    let tools = discover();
    verify(&tools)?;

    println!("{} tools verified", tools.len());
    for tool in tools.iter() {
        println!(
            "  /{:<12} {}",
            tool.url_name().unwrap_or(""),
            tool.name().unwrap_or(tool.type_name())
        );
    }
    Ok(())
}
