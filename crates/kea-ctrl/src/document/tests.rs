//! Unit tests for checked composition.

use rstest::rstest;
use serde_json::json;

use super::*;
use crate::tests::RefuseNth;

#[test]
fn try_add_moves_child_into_parent() {
    let composer = Composer::new();
    let mut parent = Object::new();
    composer
        .try_add(&mut parent, "pool", text("192.0.2.10 - 192.0.2.20"))
        .expect("attach succeeds");
    assert_eq!(object(parent), json!({ "pool": "192.0.2.10 - 192.0.2.20" }));
}

#[test]
fn try_add_propagates_child_error_untouched() {
    let composer = Composer::new();
    let mut parent = Object::new();
    let error = composer
        .try_add(&mut parent, "subnet", required_text("subnet4", "subnet", ""))
        .expect_err("empty subnet must fail");
    assert_eq!(
        error,
        BuildError::MissingField {
            entity: "subnet4",
            field: "subnet",
        }
    );
    assert!(parent.is_empty());
}

#[test]
fn try_add_rejects_duplicate_keys() {
    let composer = Composer::new();
    let mut parent = Object::new();
    composer
        .try_add(&mut parent, "id", scalar(1))
        .expect("first attach succeeds");
    let error = composer
        .try_add(&mut parent, "id", scalar(2))
        .expect_err("second attach must fail");
    assert_eq!(error, BuildError::DuplicateKey { key: "id".into() });
    assert_eq!(parent.get("id"), Some(&json!(1)));
}

#[test]
fn refused_attach_leaves_parent_unchanged() {
    let composer = Composer::with_policy(RefuseNth::new(1));
    let mut parent = Object::new();
    composer
        .try_add(&mut parent, "name", text("domain-name-servers"))
        .expect("first attach is admitted");
    let error = composer
        .try_add(&mut parent, "data", text("192.0.2.1"))
        .expect_err("second attach is refused");
    assert_eq!(error, BuildError::Rejected { slot: "data".into() });
    assert_eq!(object(parent), json!({ "name": "domain-name-servers" }));
}

#[test]
fn try_add_some_skips_absent_children() {
    let composer = Composer::with_policy(RefuseNth::new(0));
    let mut parent = Object::new();
    composer
        .try_add_some(&mut parent, "hostname", None)
        .expect("absent child is not an attach");
    assert!(parent.is_empty());
    assert_eq!(composer.policy().attempts(), 0);
}

#[test]
fn try_push_refusal_names_the_index() {
    let composer = Composer::with_policy(RefuseNth::new(2));
    let error = composer
        .array(["a", "b", "c"], text)
        .expect_err("third push is refused");
    assert_eq!(error, BuildError::Rejected { slot: "[2]".into() });
}

#[rstest]
#[case::empty(Vec::new(), json!([]))]
#[case::two(vec!["eth0", "eth1"], json!(["eth0", "eth1"]))]
fn array_collects_children_in_order(#[case] items: Vec<&str>, #[case] expected: Value) {
    let built = Composer::new().array(items, text).expect("array builds");
    assert_eq!(built, expected);
}

#[test]
fn objects_keep_insertion_order() {
    let composer = Composer::new();
    let mut parent = Object::new();
    for key in ["subnet", "id", "pools", "option-data"] {
        composer
            .try_add(&mut parent, key, scalar(0))
            .expect("attach succeeds");
    }
    let keys: Vec<&str> = parent.keys().map(String::as_str).collect();
    assert_eq!(keys, ["subnet", "id", "pools", "option-data"]);
}
