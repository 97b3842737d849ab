use super::*;

#[test]
fn test_encode_decode_round_trip() {
    for tag in [Tag::Out, Tag::Inside, Tag::begin("person"), Tag::begin("")] {
        assert_eq!(Tag::decode(&tag.encode()), Some(tag.clone()));
    }
}

#[test]
fn test_decode_wire_strings() {
    assert_eq!(Tag::decode("O"), Some(Tag::Out));
    assert_eq!(Tag::decode("I"), Some(Tag::Inside));
    assert_eq!(Tag::decode("B-x"), Some(Tag::begin("x")));
    // 空类别合法
    assert_eq!(Tag::decode("B-"), Some(Tag::begin("")));

    assert_eq!(Tag::decode(""), None);
    assert_eq!(Tag::decode("B"), None);
    assert_eq!(Tag::decode("X"), None);
    assert_eq!(Tag::decode("o"), None);
}

#[test]
fn test_category_chars() {
    assert!(Tag::is_category_char('a'));
    assert!(Tag::is_category_char('z'));
    assert!(Tag::is_category_char('A'));
    assert!(Tag::is_category_char('Z'));
    assert!(Tag::is_category_char('-'));
    assert!(Tag::is_category_char('_'));

    assert!(!Tag::is_category_char('1'));
    assert!(!Tag::is_category_char(' '));
    assert!(!Tag::is_category_char('\n'));
    assert!(!Tag::is_category_char('中'));
}

#[test]
fn test_opens_span() {
    assert!(Tag::begin("x").opens_span());
    assert!(Tag::begin("").opens_span());
    assert!(Tag::Inside.opens_span());
    assert!(!Tag::Out.opens_span());
}

#[test]
fn test_display_matches_wire_format() {
    assert_eq!(Tag::Out.to_string(), "O");
    assert_eq!(Tag::Inside.to_string(), "I");
    assert_eq!(Tag::begin("loc").to_string(), "B-loc");
}

#[test]
fn test_serde_as_plain_strings() {
    let row = vec![Some(Tag::begin("x")), None, Some(Tag::Out)];
    let json = serde_json::to_string(&row).unwrap();
    assert_eq!(json, r#"["B-x",null,"O"]"#);

    let back: Vec<Option<Tag>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);
}

#[test]
fn test_serde_rejects_malformed_tag() {
    assert!(serde_json::from_str::<Tag>("\"Z-bad\"").is_err());
    assert!(serde_json::from_str::<Tag>("\"\"").is_err());
    assert!(serde_json::from_str::<Tag>("3").is_err());
}
