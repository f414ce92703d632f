//! Parse an OMFL document and render it in every output format.
//!
//! Run with: cargo run --example simple

use omfl::{parse, Format};
use std::error::Error;

const CONFIG: &str = r#"
title = "inventory"
enabled = true

[limits.storage]
max-items = 250
ratio = -0.75
shelves = [1, [2, 3], "x,y"]
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse(CONFIG);
    if !doc.valid() {
        return Err("configuration is invalid".into());
    }

    let storage = doc.get("limits.storage")?;
    println!("max-items: {}", storage.get("max-items")?.as_int_or_default(0));
    println!("second shelf: {}\n", doc.get("limits.storage.shelves")?[1]);

    for format in Format::ALL {
        println!("{:?}:\n{}", format, doc.render(format));
    }

    Ok(())
}
