use dotpath::{parse, parse_into, parse_lines, DotMap, Error, Value};

fn string(text: &str) -> Value {
    Value::String(text.to_string())
}

#[test]
fn test_parse_single_member() {
    let tree = parse("name=Felipe").unwrap();
    assert_eq!(tree.lookup("name"), Some(&string("Felipe")));
}

#[test]
fn test_parse_multiple_members() {
    let tree = parse("name=Felipe\nage=47").unwrap();
    assert_eq!(tree.lookup("name"), Some(&string("Felipe")));
    assert_eq!(tree.lookup("age"), Some(&string("47")));
}

#[test]
fn test_parse_nested_members() {
    let tree = parse("person.name=Felipe\nperson.address.city=Rio").unwrap();
    assert_eq!(tree.lookup("person.name"), Some(&string("Felipe")));
    assert_eq!(tree.lookup("person.address.city"), Some(&string("Rio")));
}

#[test]
fn test_parse_splits_on_first_equals_only() {
    let tree = parse("motto=a=b=c").unwrap();
    assert_eq!(tree.lookup("motto"), Some(&string("a=b=c")));
}

#[test]
fn test_parse_empty_value() {
    let tree = parse("note=").unwrap();
    assert_eq!(tree.lookup("note"), Some(&string("")));
}

#[test]
fn test_parse_preserves_whitespace_verbatim() {
    let tree = parse("a = 1").unwrap();
    let root = tree.as_object().unwrap();

    // No trimming: the key keeps its trailing space, the value its leading one
    assert_eq!(root.get("a "), Some(&string(" 1")));
    assert_eq!(root.get("a"), None);
}

#[test]
fn test_parse_simple_list() {
    let tree = parse("pets[0]=Nina\npets[1]=Bilu").unwrap();
    let pets = tree.lookup("pets").and_then(Value::as_array).unwrap();
    assert_eq!(pets.len(), 2);
    assert_eq!(pets[0], string("Nina"));
    assert_eq!(pets[1], string("Bilu"));
}

#[test]
fn test_parse_sparse_list_pads_with_nulls() {
    let tree = parse("a[2]=x").unwrap();
    let items = tree.lookup("a").and_then(Value::as_array).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::Null);
    assert_eq!(items[1], Value::Null);
    assert_eq!(items[2], string("x"));
}

#[test]
fn test_parse_out_of_order_indexes() {
    let tree = parse("a[2]=x\na[1]=y").unwrap();
    let items = tree.lookup("a").and_then(Value::as_array).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::Null);
    assert_eq!(items[1], string("y"));
    assert_eq!(items[2], string("x"));
}

#[test]
fn test_parse_list_of_maps() {
    let tree = parse("p[0].n=j\np[0].c[0]=k").unwrap();
    let people = tree.lookup("p").and_then(Value::as_array).unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(tree.lookup("p[0].n"), Some(&string("j")));

    let children = tree.lookup("p[0].c").and_then(Value::as_array).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0], string("k"));
}

#[test]
fn test_parse_objects_inside_lists() {
    let tree = parse("pets[0].name=Nina\npets[0].age=3\npets[1].name=Bilu").unwrap();
    assert_eq!(tree.lookup("pets[0].name"), Some(&string("Nina")));
    assert_eq!(tree.lookup("pets[0].age"), Some(&string("3")));
    assert_eq!(tree.lookup("pets[1].name"), Some(&string("Bilu")));
}

#[test]
fn test_double_index_segment_is_rejected() {
    // A segment carries at most one index; the split happens on the first
    // bracket, so everything after it must be numeric
    let err = parse("grid[1][0]=x").unwrap_err();
    assert!(matches!(err, Error::InvalidIndex { .. }));
}

#[test]
fn test_parse_last_write_wins() {
    let tree = parse("a.b=1\na.b=2").unwrap();
    assert_eq!(tree.lookup("a.b"), Some(&string("2")));
}

#[test]
fn test_parse_scalar_replaces_container() {
    let tree = parse("a.b=1\na=flat").unwrap();
    assert_eq!(tree.lookup("a"), Some(&string("flat")));
    assert_eq!(tree.lookup("a.b"), None);
}

#[test]
fn test_parse_container_replaces_scalar() {
    let tree = parse("a=flat\na.b=1").unwrap();
    assert_eq!(tree.lookup("a.b"), Some(&string("1")));
}

#[test]
fn test_parse_list_never_shrinks() {
    let tree = parse("a[5]=x\na[1]=y").unwrap();
    let items = tree.lookup("a").and_then(Value::as_array).unwrap();
    assert_eq!(items.len(), 6);
}

#[test]
fn test_parse_skips_empty_lines() {
    let tree = parse("a=1\n\nb=2\n").unwrap();
    assert_eq!(tree.lookup("a"), Some(&string("1")));
    assert_eq!(tree.lookup("b"), Some(&string("2")));
}

#[test]
fn test_parse_into_merges_roots() {
    let mut root = DotMap::new();
    parse_into("a=1\nshared.x=1", &mut root).unwrap();
    parse_into("b=2\nshared.y=2", &mut root).unwrap();

    assert_eq!(root.len(), 3);
    let shared = root.get("shared").and_then(Value::as_object).unwrap();
    assert_eq!(shared.len(), 2);
}

#[test]
fn test_parse_into_overwrites_on_merge() {
    let mut root = DotMap::new();
    parse_into("mode=debug", &mut root).unwrap();
    parse_into("mode=release", &mut root).unwrap();
    assert_eq!(root.get("mode"), Some(&string("release")));
}

#[test]
fn test_parse_lines_from_iterator() {
    let mut root = DotMap::new();
    let lines: Vec<String> = vec!["a[0]=x".to_string(), "a[1]=y".to_string()];
    parse_lines(&lines, &mut root).unwrap();

    let items = root.get("a").and_then(Value::as_array).unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn test_parse_preserves_insertion_order() {
    let tree = parse("zebra=1\napple=2\nmango=3").unwrap();
    let keys: Vec<&String> = tree.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
}

#[test]
fn test_missing_separator_is_rejected() {
    let err = parse("novalue").unwrap_err();
    assert_eq!(
        err,
        Error::MalformedLine {
            line: 1,
            text: "novalue".to_string(),
        }
    );
}

#[test]
fn test_whitespace_only_line_is_rejected() {
    let err = parse("a=1\n   \nb=2").unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
}

#[test]
fn test_error_reports_line_number() {
    let err = parse("a=1\nb=2\nbroken").unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_non_numeric_index_is_rejected() {
    let err = parse("a[x]=1").unwrap_err();
    assert_eq!(
        err,
        Error::InvalidIndex {
            line: 1,
            segment: "a[x]".to_string(),
            index: "x".to_string(),
        }
    );
}

#[test]
fn test_invalid_index_variants() {
    for text in ["a[-1]=1", "a[]=1", "a[1.5]=1", "a[ 1]=1", "a[1 ]=1"] {
        let err = parse(text).unwrap_err();
        assert!(
            matches!(err, Error::InvalidIndex { .. }),
            "{:?} should report an invalid index, got {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_oversized_index_is_rejected() {
    // Numerals that fit usize but exceed the i32::MAX index cap
    let inputs = [
        "a[2147483648]=x",
        "a[200000000000000000]=x",
        "a[18446744073709551615]=x",
    ];
    for text in inputs {
        let err = parse(text).unwrap_err();
        assert!(
            matches!(err, Error::InvalidIndex { .. }),
            "{:?} should report an invalid index, got {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_first_bad_line_stops_parsing() {
    let mut root = DotMap::new();
    let err = parse_into("a=1\nbroken\nb=2", &mut root).unwrap_err();

    assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
    // Lines before the failure stay applied
    assert_eq!(root.get("a"), Some(&string("1")));
    assert_eq!(root.get("b"), None);
}

#[test]
fn test_parse_value_text_may_contain_brackets_and_dots() {
    let tree = parse("path=/usr/local[1].bin").unwrap();
    assert_eq!(tree.lookup("path"), Some(&string("/usr/local[1].bin")));
}
