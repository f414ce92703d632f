use omfl::{parse, Format};

const FIXTURE: &str = r#"
title = "demo"

[server]
enabled = true
port = 8080
ratio = 0.5
levels = [1, [2, 3]]
"#;

#[test]
fn test_fixture_xml() {
    let doc = parse(FIXTURE);
    assert!(doc.valid());
    let expected = "\
<root>
  <title>demo</title>
  <server>
    <enabled>true</enabled>
    <port>8080</port>
    <ratio>0.5</ratio>
    <array_levels>
      <item>1</item>
      <array_item>
        <item>2</item>
        <item>3</item>
      </array_item>
    </array_levels>
  </server>
</root>
";
    assert_eq!(doc.to_xml(), expected);
}

#[test]
fn test_fixture_json() {
    let doc = parse(FIXTURE);
    let expected = r#"{
  "title": "demo",
  "server": {
    "enabled": true,
    "port": 8080,
    "ratio": 0.5,
    "levels": [1, [2, 3]]
  }
}
"#;
    assert_eq!(doc.to_json(), expected);
}

#[test]
fn test_fixture_yaml() {
    let doc = parse(FIXTURE);
    let expected = "\
title: \"demo\"
server:
  enabled: true
  port: 8080
  ratio: 0.5
  levels: [1, [2, 3]]
";
    assert_eq!(doc.to_yaml(), expected);
}

#[test]
fn test_rendering_is_repeatable() {
    let doc = parse(FIXTURE);
    for format in Format::ALL {
        assert_eq!(doc.render(format), doc.render(format), "{format:?}");
        assert_eq!(doc.render(format), parse(FIXTURE).render(format), "{format:?}");
    }
}

#[test]
fn test_fixture_json_matches_serde_view() {
    let doc = parse(FIXTURE);
    let rendered: serde_json::Value = serde_json::from_str(&doc.to_json()).unwrap();
    assert_eq!(rendered, serde_json::to_value(&doc).unwrap());
}
