//! End-to-end grammar scenarios for builder-constructed queries
//!
//! Each scenario pins the exact text the serializer must emit for a built
//! tree, including the outer single quotes and the empty parameter list.

#![allow(clippy::unwrap_used)]

use jpb_core::{Any, BuildError, Operand, Path, render, root};

/// Render `path` and assert it matches `expected` wrapped in the outer
/// single quotes, with no parameters
fn assert_path(path: &Path, expected: &str) {
    let (text, params) = render(path);
    assert_eq!(text, format!("'{expected}'"));
    assert_eq!(params.len(), 0);
}

#[test]
fn test_simple_filter() {
    let p = root();
    let path = p.filter(p.equal("foo").unwrap()).unwrap();
    assert_path(&path, r#"$ ? (@ == "foo")"#);
}

#[test]
fn test_filter_on_sub_elements() {
    let p = root();
    let path = p
        .at("items")
        .unwrap()
        .at(Any)
        .unwrap()
        .filter(p.greater_than(50).unwrap())
        .unwrap();
    assert_path(&path, "$.items[*] ? (@ > 50)");

    let path = p
        .at("items")
        .unwrap()
        .at(2)
        .unwrap()
        .filter(p.equal(12).unwrap())
        .unwrap();
    assert_path(&path, "$.items[2] ? (@ == 12)");
}

#[test]
fn test_combined_filter() {
    let p = root();
    let combined = p.equal(1).unwrap().or(p.equal(3).unwrap());
    let path = p
        .at("items")
        .unwrap()
        .at(Any)
        .unwrap()
        .filter(combined)
        .unwrap();
    assert_path(&path, "$.items[*] ? ((@ == 1) || (@ == 3))");
}

#[test]
fn test_and_combination() {
    let p = root();
    let combined = p.greater_than(1).unwrap().and(p.less_than(9).unwrap());
    let path = p.filter(combined).unwrap();
    assert_path(&path, "$ ? ((@ > 1) && (@ < 9))");
}

#[test]
fn test_chained_filters() {
    let p = root();
    let items = p.at("items").unwrap().at(Any).unwrap();
    let path = p
        .filter(items.equal("k1").unwrap())
        .unwrap()
        .filter(items.equal("k3").unwrap())
        .unwrap();
    assert_path(&path, r#"$ ? (@.items[*] == "k1") ? (@.items[*] == "k3")"#);
}

#[test]
fn test_starts_with() {
    let p = root();
    let path = p
        .at("tags")
        .unwrap()
        .filter(p.at(0).unwrap().starts_with("od").unwrap())
        .unwrap();
    assert_path(&path, r#"$.tags ? (@[0] starts with "od")"#);
}

#[test]
fn test_like_regex() {
    let p = root();
    let path = p
        .at("name")
        .unwrap()
        .filter(p.like_regex("^a.*").unwrap())
        .unwrap();
    assert_path(&path, r#"$.name ? (@ like_regex "^a.*")"#);
}

#[test]
fn test_exists() {
    let p = root();
    let inner = p.filter(p.equal("prime").unwrap()).unwrap();
    let path = p.at("tags").unwrap().filter(Path::exists(inner)).unwrap();
    assert_path(&path, r#"$.tags ? (exists(@ ? (@ == "prime")))"#);
}

#[test]
fn test_function_call_on_trailing_key() {
    let p = root();
    let size = p.at("follow").unwrap().at("size").unwrap().call().unwrap();
    let path = p.at("meta").unwrap().filter(size.equal(0).unwrap()).unwrap();
    assert_path(&path, "$.meta ? (@.follow.size() == 0)");
}

#[test]
fn test_function_to_function_comparison() {
    let p = root();
    let precede = p.at("precede").unwrap().at("size").unwrap().call().unwrap();
    let follow = p.at("follow").unwrap().at("size").unwrap().call().unwrap();
    let path = p
        .at("meta")
        .unwrap()
        .filter(precede.less_than(follow).unwrap())
        .unwrap();
    assert_path(&path, "$.meta ? (@.precede.size() < @.follow.size())");
}

#[test]
fn test_multi_filter() {
    let p = root();
    let path = p
        .filter(
            p.at("intervals")
                .unwrap()
                .at(Any)
                .unwrap()
                .less_than(12)
                .unwrap(),
        )
        .unwrap()
        .filter(
            p.at("meta")
                .unwrap()
                .at("precede")
                .unwrap()
                .at(Any)
                .unwrap()
                .equal(3)
                .unwrap(),
        )
        .unwrap()
        .filter(
            p.at("meta")
                .unwrap()
                .at("follow")
                .unwrap()
                .at(Any)
                .unwrap()
                .equal(5)
                .unwrap(),
        )
        .unwrap();
    assert_path(
        &path,
        "$ ? (@.intervals[*] < 12) ? (@.meta.precede[*] == 3) ? (@.meta.follow[*] == 5)",
    );
}

#[test]
fn test_plain_keys_and_indexes() {
    assert_path(&root().at("k").unwrap(), "$.k");
    assert_path(&root().at("a b").unwrap(), r#"$."a b""#);
    assert_path(&root().at(3).unwrap(), "$[3]");
    assert_path(&root().at(-1).unwrap(), "$[-1]");
    assert_path(&root().at(Any).unwrap(), "$[*]");
}

#[test]
fn test_null_rhs() {
    let p = root();
    let path = p
        .at("meta")
        .unwrap()
        .filter(p.at("flag").unwrap().not_equal(Operand::Null).unwrap())
        .unwrap();
    assert_path(&path, "$.meta ? (@.flag != null)");
}

#[test]
fn test_string_rhs_is_embedded_verbatim() {
    let p = root();
    let path = p.filter(p.equal(r#"a"b"#).unwrap()).unwrap();
    assert_path(&path, r#"$ ? (@ == "a"b")"#);
}

#[test]
fn test_receivers_stay_valid_after_derivation() {
    let p = root();
    let items = p.at("items").unwrap();
    let first = items.at(0).unwrap();
    let second = items.at(1).unwrap();
    assert_path(&items, "$.items");
    assert_path(&first, "$.items[0]");
    assert_path(&second, "$.items[1]");
}

#[test]
fn test_float_element_rejected() {
    assert!(matches!(
        root().at(1.5),
        Err(BuildError::InvalidPathElement(_))
    ));
}

#[test]
fn test_filter_rejects_plain_values() {
    assert!(matches!(
        root().filter(5),
        Err(BuildError::InvalidFilterPredicate(_))
    ));
}

#[test]
fn test_call_on_index_rejected() {
    let path = root().at(0).unwrap();
    assert!(matches!(
        path.call(),
        Err(BuildError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_call_on_empty_path_rejected() {
    assert!(matches!(root().call(), Err(BuildError::EmptyPathCall)));
}

#[test]
fn test_float_and_bool_rhs_rejected() {
    assert!(matches!(
        root().equal(2.5),
        Err(BuildError::InvalidRhsValue(_))
    ));
    assert!(matches!(
        root().equal(true),
        Err(BuildError::InvalidRhsValue(_))
    ));
}
