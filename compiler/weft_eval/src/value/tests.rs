use pretty_assertions::assert_eq;

use super::*;

#[test]
fn value_truthy() {
    assert!(ResolvedValue::Bool(true).is_truthy());
    assert!(!ResolvedValue::Bool(false).is_truthy());
    assert!(ResolvedValue::Number(1.0).is_truthy());
    assert!(!ResolvedValue::Number(0.0).is_truthy());
    assert!(!ResolvedValue::Number(-0.0).is_truthy());
    assert!(!ResolvedValue::Number(f64::NAN).is_truthy());
    assert!(ResolvedValue::string("x").is_truthy());
    assert!(!ResolvedValue::string("").is_truthy());
    assert!(!ResolvedValue::Null.is_truthy());
    assert!(!ResolvedValue::Undefined.is_truthy());
    // Containers are truthy even when empty
    assert!(ResolvedValue::array(vec![]).is_truthy());
    assert!(ResolvedValue::map(OrderedMap::new()).is_truthy());
}

#[test]
fn factory_methods() {
    let s = ResolvedValue::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let arr = ResolvedValue::array(vec![ResolvedValue::Number(1.0), ResolvedValue::Bool(true)]);
    match &arr {
        ResolvedValue::Array(items) => assert_eq!(items.len(), 2),
        other => panic!("expected array, got {other:?}"),
    }

    let mut entries = OrderedMap::new();
    entries.insert("a", ResolvedValue::Number(1.0));
    let m = ResolvedValue::map(entries);
    match &m {
        ResolvedValue::Map(map) => assert_eq!(map.get("a"), Some(&ResolvedValue::Number(1.0))),
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn array_clone_shares_storage() {
    let arr = ResolvedValue::array(vec![ResolvedValue::Number(1.0)]);
    let copy = arr.clone();
    match (&arr, &copy) {
        (ResolvedValue::Array(a), ResolvedValue::Array(b)) => assert!(a.ptr_eq(b)),
        _ => panic!("expected arrays"),
    }
}

#[test]
fn type_names() {
    assert_eq!(ResolvedValue::Number(1.0).type_name(), "number");
    assert_eq!(ResolvedValue::string("").type_name(), "string");
    assert_eq!(ResolvedValue::Bool(false).type_name(), "boolean");
    assert_eq!(ResolvedValue::Null.type_name(), "null");
    assert_eq!(ResolvedValue::Undefined.type_name(), "undefined");
    assert_eq!(ResolvedValue::array(vec![]).type_name(), "array");
    assert_eq!(ResolvedValue::map(OrderedMap::new()).type_name(), "map");
    assert_eq!(ResolvedValue::Dynamic.type_name(), "dynamic");
}

#[test]
fn map_preserves_insertion_order() {
    let mut map = OrderedMap::new();
    map.insert("z", ResolvedValue::Number(1.0));
    map.insert("a", ResolvedValue::Number(2.0));
    map.insert("m", ResolvedValue::Number(3.0));

    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn map_overwrite_keeps_position() {
    let mut map = OrderedMap::new();
    map.insert("a", ResolvedValue::Number(1.0));
    map.insert("b", ResolvedValue::Number(2.0));
    map.insert("a", ResolvedValue::Number(9.0));

    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&ResolvedValue::Number(9.0)));
    assert_eq!(map.len(), 2);
}

#[test]
fn map_get_missing() {
    let map = OrderedMap::new();
    assert_eq!(map.get("nope"), None);
    assert!(!map.contains_key("nope"));
    assert!(map.is_empty());
}

#[test]
fn map_equality_ignores_index() {
    let mut a = OrderedMap::new();
    a.insert("x", ResolvedValue::Bool(true));
    let b: OrderedMap = [("x".to_string(), ResolvedValue::Bool(true))]
        .into_iter()
        .collect();
    assert_eq!(a, b);
}

#[test]
fn map_equality_is_order_sensitive() {
    let mut a = OrderedMap::new();
    a.insert("x", ResolvedValue::Number(1.0));
    a.insert("y", ResolvedValue::Number(2.0));

    let mut b = OrderedMap::new();
    b.insert("y", ResolvedValue::Number(2.0));
    b.insert("x", ResolvedValue::Number(1.0));

    assert_ne!(a, b);
}
