use omfl::{parse, parse_reader, unit, Error, Kind, Section, Unit};

#[test]
fn test_booleans() {
    let doc = parse("on = true\noff = false");
    assert!(doc.valid());
    assert_eq!(doc.get("on").unwrap().as_bool(), Some(true));
    assert_eq!(doc.get("off").unwrap().as_bool(), Some(false));
    assert!(doc.get("on").unwrap().is_bool());
}

#[test]
fn test_numbers() {
    let doc = parse("int = 42\nneg = -3.5\nplus = +12");
    assert!(doc.valid());
    assert_eq!(doc.get("int").unwrap().as_int(), Some(42));
    assert_eq!(doc.get("neg").unwrap().as_float(), Some(-3.5));
    assert_eq!(doc.get("plus").unwrap().as_int(), Some(12));
    assert!(!doc.get("neg").unwrap().is_int());
}

#[test]
fn test_rejected_values() {
    for line in [
        "key = +", "key = -", "key =", "key = 3.", "key = .3", "key = 1.2.3", "key = word",
        "key = 'single'", "key = \"unterminated", "key = [1, 2",
    ] {
        assert!(!parse(line).valid(), "{line:?} should be invalid");
    }
}

#[test]
fn test_string_with_structural_characters() {
    let doc = parse("key = \"a,b[c]\"");
    assert!(doc.valid());
    assert_eq!(doc.get("key").unwrap().as_str(), Some("a,b[c]"));
}

#[test]
fn test_string_with_brackets_at_edges() {
    let doc = parse("a = \"[x]\"\nb = [\"]\", \"[\"]\nc = \"]\"");
    assert!(doc.valid());
    assert_eq!(doc.get("a").unwrap().as_str(), Some("[x]"));
    assert_eq!(doc.get("b").unwrap().unit(), Some(&unit!(["]", "["])));
    assert_eq!(doc.get("c").unwrap().as_str(), Some("]"));
}

#[test]
fn test_nested_array() {
    let doc = parse("key = [1, [2, 3], \"x,y\"]");
    assert!(doc.valid());
    let key = doc.get("key").unwrap();
    assert!(key.is_array());
    assert_eq!(key.as_array().map(<[Unit]>::len), Some(3));
    assert_eq!(key[0].as_int(), Some(1));
    assert_eq!(key[1], unit!([2, 3]));
    assert_eq!(key[2].as_str(), Some("x,y"));
    assert!(key[3].is_empty());
}

#[test]
fn test_heterogeneous_array() {
    let doc = parse("mixed = [true, 1, 2.5, \"s\", [], [[false]]]");
    assert!(doc.valid());
    let kinds: Vec<Kind> = doc.get("mixed").unwrap().as_array().unwrap().iter().map(Unit::kind).collect();
    assert_eq!(
        kinds,
        [Kind::Bool, Kind::Int, Kind::Float, Kind::String, Kind::Array, Kind::Array]
    );
}

#[test]
fn test_leaf_section_conflict() {
    let doc = parse("a = 1\n[a.b]\nc = 2\n");
    assert!(!doc.valid());
    assert_eq!(doc.get("a").unwrap(), &Section::Leaf(Unit::Int(1)));
    assert!(matches!(doc.get("a.b"), Err(Error::PathNotFound { .. })));
}

#[test]
fn test_section_then_leaf_conflict() {
    let doc = parse("[a]\nb = 1\n[]\na = 2\n");
    assert!(!doc.valid());
    assert!(doc.get("a").unwrap().is_table());
}

#[test]
fn test_deep_section_path() {
    let doc = parse("[a.b.c]\nx = 5");
    assert!(doc.valid());
    for path in ["a", "a.b", "a.b.c"] {
        assert!(doc.get(path).unwrap().is_table(), "{path}");
    }
    assert_eq!(doc.get("a.b.c.x").unwrap().as_int(), Some(5));
    assert_eq!(doc.get("a").unwrap().get("b.c.x").unwrap().as_int(), Some(5));
}

#[test]
fn test_duplicate_key() {
    let doc = parse("[s]\nk = 1\nk = 2\n");
    assert!(!doc.valid());
    assert_eq!(doc.get("s.k").unwrap().as_int(), Some(1));
}

#[test]
fn test_malformed_headers() {
    for header in ["[]", "[ ]", "[.a]", "[a.]", "[a..b]", "[a b]", "[\"a\"]", "[a.[b]]", "[-a]"] {
        let text = format!("{header}\nk = 1");
        assert!(!parse(&text).valid(), "{header}");
    }
    for header in ["[a]", "[a.b-c]", "[_x.y_1]", "[1.2]"] {
        let text = format!("{header}\nk = 1");
        assert!(parse(&text).valid(), "{header}");
    }
}

#[test]
fn test_invalid_keys() {
    for line in ["-k = 1", "a.b = 1", "k k = 1", "= 1", "\"k\" = 1", "ключ = 1"] {
        assert!(!parse(line).valid(), "{line:?}");
    }
    assert!(parse("k-1_x = 1").valid());
}

#[test]
fn test_comments() {
    let doc = parse(
        "# leading comment\n\
         a = 1 # trailing\n\
         b = \"\\# kept\" # dropped\n\
         [s] # header comment\n\
         c = [1, 2] # array comment\n",
    );
    assert!(doc.valid());
    assert_eq!(doc.get("a").unwrap().as_int(), Some(1));
    assert_eq!(doc.get("b").unwrap().as_str(), Some("\\# kept"));
    assert_eq!(doc.get("s.c").unwrap()[1].as_int(), Some(2));
}

#[test]
fn test_comment_marker_inside_quotes_cuts_the_line() {
    let doc = parse("k = \"a#b\"\nnext = 1");
    assert!(!doc.valid());
    assert_eq!(doc.get("k").unwrap().unit(), Some(&Unit::Empty));
    assert_eq!(doc.get("next").unwrap().as_int(), Some(1));
}

#[test]
fn test_string_ending_in_backslash() {
    let doc = parse(r#"path = "C:\dir\""#);
    assert!(doc.valid());
    assert_eq!(doc.get("path").unwrap().as_str(), Some(r"C:\dir\"));
}

#[test]
fn test_whitespace_tolerance() {
    let doc = parse("\t a=1\r\n  [s]  \n\tb   =   \"x\"\t\n");
    assert!(doc.valid());
    assert_eq!(doc.get("a").unwrap().as_int(), Some(1));
    assert_eq!(doc.get("s.b").unwrap().as_str(), Some("x"));
}

#[test]
fn test_errors_do_not_stop_parsing() {
    let doc = parse("a = nope\n[s]\nb = [1, oops]\nc = 3\n");
    assert!(!doc.valid());
    assert_eq!(doc.get("a").unwrap().unit(), Some(&Unit::Empty));
    assert_eq!(doc.get("s.b").unwrap().unit(), Some(&unit!([1, empty])));
    assert_eq!(doc.get("s.c").unwrap().as_int(), Some(3));
}

#[test]
fn test_defaults_and_conversions() {
    let doc = parse("i = 7\nf = 0.5\ns = \"str\"\nb = true");
    let i = doc.get("i").unwrap();
    assert_eq!(i.as_int_or_default(0), 7);
    assert_eq!(i.as_float_or_default(1.5), 1.5);
    assert_eq!(i.as_string_or_default("none"), "none");
    assert!(!i.as_bool_or_default(false));

    let s = doc.get("s").unwrap();
    assert_eq!(String::try_from(s).unwrap(), "str");
    assert_eq!(f32::try_from(doc.get("f").unwrap()).unwrap(), 0.5);
    assert!(bool::try_from(doc.get("b").unwrap()).unwrap());
    assert_eq!(
        i32::try_from(s),
        Err(Error::type_mismatch("integer", "string"))
    );
}

#[test]
fn test_missing_paths() {
    let doc = parse("[a]\nb = 1");
    for path in ["", "x", "a.c", "a.b.c", "a..b", ".a"] {
        assert_eq!(doc.get(path), Err(Error::path_not_found(path)), "{path:?}");
    }
}

#[test]
fn test_parse_reader() {
    let doc = parse_reader("[a]\nb = 2\n".as_bytes()).unwrap();
    assert!(doc.valid());
    assert_eq!(doc.get("a.b").unwrap().as_int(), Some(2));
}

#[test]
fn test_serialize_through_serde() {
    let doc = parse("[a]\nb = [1, \"x\"]\nc = 0.5\nd = bad");
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "a": { "b": [1, "x"], "c": 0.5, "d": null } })
    );
}
