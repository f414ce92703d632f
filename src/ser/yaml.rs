//! YAML rendering.
//!
//! Tables become block mappings; arrays use flow sequences so that arrays of
//! arrays stay on one line.

use super::Writer;
use crate::names::is_valid_name;
use crate::{Section, SectionMap};

/// Plain scalars YAML would read as something other than a string.
const RESERVED: [&str; 11] = [
    "true", "false", "null", "yes", "no", "on", "off", "y", "n", "nan", "inf",
];

pub(super) fn write_document(root: &Section, w: &mut Writer) {
    match root {
        Section::Table(map) if map.is_empty() => w.push_str("{}\n"),
        Section::Table(map) => write_table(map, 0, w),
        Section::Leaf(unit) => {
            w.write_flow(unit);
            w.push('\n');
        }
    }
}

fn write_table(map: &SectionMap, depth: usize, w: &mut Writer) {
    for (name, child) in map {
        w.indent(depth);
        write_key(name, w);
        match child {
            Section::Leaf(unit) => {
                w.push_str(": ");
                w.write_flow(unit);
                w.push('\n');
            }
            Section::Table(inner) if inner.is_empty() => w.push_str(": {}\n"),
            Section::Table(inner) => {
                w.push_str(":\n");
                write_table(inner, depth + 1, w);
            }
        }
    }
}

fn write_key(name: &str, w: &mut Writer) {
    if is_plain_key(name) {
        w.push_str(name);
    } else {
        w.write_quoted(name);
    }
}

fn is_plain_key(name: &str) -> bool {
    let starts_with_letter = name
        .bytes()
        .next()
        .map_or(false, |b| b.is_ascii_alphabetic() || b == b'_');
    starts_with_letter
        && is_valid_name(name)
        && !RESERVED.iter().any(|word| word.eq_ignore_ascii_case(name))
}
