//! XML rendering.
//!
//! ```text
//! <root>
//!   <name>value</name>
//!   <section>
//!     <key>1</key>
//!   </section>
//!   <array_list>
//!     <item>1</item>
//!     <array_item>
//!       <item>2</item>
//!     </array_item>
//!   </array_list>
//! </root>
//! ```

use super::Writer;
use crate::{Section, SectionMap, Unit};

pub(super) fn write_document(root: &Section, w: &mut Writer) {
    let root_name = &w.options().root_name;
    match root {
        Section::Table(map) => {
            open(w, 0, root_name);
            write_table(map, 1, w);
            close(w, 0, root_name);
        }
        Section::Leaf(unit) => write_unit(unit, root_name, 0, w),
    }
}

fn write_table(map: &SectionMap, depth: usize, w: &mut Writer) {
    for (name, child) in map {
        match child {
            Section::Table(inner) => {
                open(w, depth, name);
                write_table(inner, depth + 1, w);
                close(w, depth, name);
            }
            Section::Leaf(unit) => write_unit(unit, name, depth, w),
        }
    }
}

fn write_unit(unit: &Unit, name: &str, depth: usize, w: &mut Writer) {
    let options = w.options();
    match unit {
        Unit::Array(items) => {
            let container = options.array_container(name);
            open(w, depth, &container);
            for item in items {
                write_unit(item, &options.item_name, depth + 1, w);
            }
            close(w, depth, &container);
        }
        Unit::String(s) => {
            w.indent(depth);
            tag(w, "<", name);
            write_text(w, s);
            tag(w, "</", name);
            w.push('\n');
        }
        scalar => {
            w.indent(depth);
            tag(w, "<", name);
            w.write_literal(scalar);
            tag(w, "</", name);
            w.push('\n');
        }
    }
}

fn tag(w: &mut Writer, opener: &str, name: &str) {
    w.push_str(opener);
    w.push_str(name);
    w.push('>');
}

fn open(w: &mut Writer, depth: usize, name: &str) {
    w.indent(depth);
    tag(w, "<", name);
    w.push('\n');
}

fn close(w: &mut Writer, depth: usize, name: &str) {
    w.indent(depth);
    tag(w, "</", name);
    w.push('\n');
}

fn write_text(w: &mut Writer, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => w.push_str("&amp;"),
            '<' => w.push_str("&lt;"),
            '>' => w.push_str("&gt;"),
            _ => w.push(ch),
        }
    }
}
