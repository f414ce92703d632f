//! JSON rendering.
//!
//! Tables become objects with one member per line; arrays are written inline.

use super::Writer;
use crate::{Section, SectionMap};

pub(super) fn write_document(root: &Section, w: &mut Writer) {
    write_section(root, 0, w);
    w.push('\n');
}

fn write_section(section: &Section, depth: usize, w: &mut Writer) {
    match section {
        Section::Leaf(unit) => w.write_flow(unit),
        Section::Table(map) => write_table(map, depth, w),
    }
}

fn write_table(map: &SectionMap, depth: usize, w: &mut Writer) {
    if map.is_empty() {
        w.push_str("{}");
        return;
    }

    w.push_str("{\n");
    let last = map.len() - 1;
    for (i, (name, child)) in map.iter().enumerate() {
        w.indent(depth + 1);
        w.write_quoted(name);
        w.push_str(": ");
        write_section(child, depth + 1, w);
        if i < last {
            w.push(',');
        }
        w.push('\n');
    }
    w.indent(depth);
    w.push('}');
}

#[cfg(test)]
mod tests {
    use crate::{parse, Format, WriteOptions};

    #[test]
    fn test_empty_document() {
        assert_eq!(parse("").render(Format::Json), "{}\n");
    }

    #[test]
    fn test_nested_tables() {
        let doc = parse("[a.b]\nx = 1\ny = \"two\"\n[a]\nz = [true, []]");
        assert_eq!(
            doc.render(Format::Json),
            "{\n  \"a\": {\n    \"b\": {\n      \"x\": 1,\n      \"y\": \"two\"\n    },\n    \"z\": [true, []]\n  }\n}\n"
        );
    }

    #[test]
    fn test_indent_option() {
        let doc = parse("[s]\nk = 1");
        let options = WriteOptions::new().with_indent(4);
        assert_eq!(
            doc.render_with_options(Format::Json, &options),
            "{\n    \"s\": {\n        \"k\": 1\n    }\n}\n"
        );
    }

    #[test]
    fn test_output_is_valid_json() {
        let doc = parse(
            "s = \"back\\slash\"\nn = -17\nf = 2.25\nl = [1, [\"a\", false], 0.5]\n[t]\ne = bad\n",
        );
        let rendered = doc.render(Format::Json);
        let reparsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, serde_json::to_value(&doc).unwrap());
        assert_eq!(reparsed["s"], "back\\slash");
        assert!(reparsed["t"]["e"].is_null());
    }
}
