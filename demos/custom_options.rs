//! Customizing rendered output and parse limits.
//!
//! Run with: cargo run --example custom_options

use omfl::{parse_with_options, Format, ParseOptions, WriteOptions};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "[server]\nhosts = [\"a\", \"b\"]\nmatrix = [[1, 2], [3]]\n";

    // Tight limits: two levels of array nesting, three path segments
    let limits = ParseOptions::new().with_max_depth(2).with_max_path_depth(3);
    let doc = parse_with_options(text, &limits);
    println!("valid under tight limits: {}\n", doc.valid());

    // Default XML
    println!("Default XML:");
    println!("{}", doc.render(Format::Xml));

    // Renamed XML containers, four-space indent
    println!("Custom XML:");
    let options = WriteOptions::new()
        .with_indent(4)
        .with_root_name("config")
        .with_item_name("entry")
        .with_array_prefix("list");
    println!("{}", doc.render_with_options(Format::Xml, &options));

    // Straight to stdout
    println!("JSON, indent 1:");
    doc.to_writer(io::stdout().lock(), Format::Json, &WriteOptions::new().with_indent(1))?;

    Ok(())
}
