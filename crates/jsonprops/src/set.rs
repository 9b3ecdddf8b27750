//! Path-addressed mutation.
//!
//! Mutation never creates properties and never changes the shape of the resource: a leaf that
//! names a missing property, or that expects a different container than the one it reaches,
//! leaves the resource untouched.
use serde_json::Value;

use crate::{
    error::Condition,
    node::{Kind, NodeMut},
    path::{Path, Rendered, Segment, SegmentKind},
};

/// Writes `value` to every location addressed by `path` and reports how many values were written.
pub(crate) fn set(root: &mut Value, path: &Path, value: Value) -> Result<usize, Condition> {
    let Some((leaf, prefix)) = path.split_leaf() else {
        return Err(Condition::PathEmpty);
    };
    let parent = locate(root, prefix)?;
    tracing::trace!(prefix = %Rendered(prefix), kind = %Kind::of(parent), "Located parent");
    apply(parent, leaf, value)
}

/// Resolves the container a leaf segment applies to.
///
/// A fan-out segment inside the prefix stops the linear walk; the remaining segments are resolved
/// against the array itself, and the leaf then fans out over that array's items. As a result the
/// parent set is never larger than a single container.
pub(crate) fn locate<'v>(
    value: &'v mut Value,
    prefix: &[Segment],
) -> Result<&'v mut Value, Condition> {
    let mut current = value;
    for (idx, segment) in prefix.iter().enumerate() {
        match segment.kind() {
            SegmentKind::Object => {
                current = NodeMut::classify(current).property(segment.name())?;
            }
            SegmentKind::Array => return locate(current, &prefix[idx + 1..]),
        }
    }
    Ok(current)
}

fn apply(parent: &mut Value, leaf: &Segment, value: Value) -> Result<usize, Condition> {
    match (leaf.kind(), NodeMut::classify(parent)) {
        (SegmentKind::Object, node) => {
            *node.property(leaf.name())? = value;
            Ok(1)
        }
        (SegmentKind::Array, NodeMut::Array(items)) if leaf.is_array_itself() => {
            replace(items, value)
        }
        (SegmentKind::Array, NodeMut::Array(items)) => Ok(fan_out(items, leaf.name(), &value)),
        (SegmentKind::Array, node) => Err(Condition::kind_mismatch(Kind::Array, node.kind())),
    }
}

/// Replaces the items in place, so the container stays the same one the caller holds.
fn replace(items: &mut Vec<Value>, value: Value) -> Result<usize, Condition> {
    match value {
        Value::Array(new) => {
            items.clear();
            items.extend(new);
            Ok(items.len())
        }
        other => Err(Condition::kind_mismatch(Kind::Array, Kind::of(&other))),
    }
}

/// Overwrites `name` on every item that already owns it; other items are left alone.
fn fan_out(items: &mut [Value], name: &str, value: &Value) -> usize {
    let mut written = 0;
    for item in items {
        if let Ok(slot) = NodeMut::classify(item).property(name) {
            slot.clone_from(value);
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn run(mut resource: Value, path: &str, value: Value) -> (Value, Result<usize, Condition>) {
        let result = set(&mut resource, &Path::parse(path), value);
        (resource, result)
    }

    #[test_case(json!({"a": 1}), &[], json!({"a": 1}); "empty prefix")]
    #[test_case(json!({"a": {"b": 1}}), &[Segment::object("a")], json!({"b": 1}); "object")]
    #[test_case(json!({"a": [1]}), &[Segment::object("a"), Segment::array("")], json!([1]); "array itself")]
    #[test_case(
        json!({"top": [{"child": [1]}]}),
        &[Segment::object("top"), Segment::array("child")],
        json!([{"child": [1]}]);
        "named fan-out resolves to the array"
    )]
    fn locates(mut resource: Value, prefix: &[Segment], expected: Value) {
        let parent = locate(&mut resource, prefix).expect("Parent exists");
        assert_eq!(*parent, expected);
    }

    #[test_case(json!({"a": 1}), &[Segment::object("b")], Condition::property_missing("b"); "missing")]
    #[test_case(
        json!({"a": [1]}),
        &[Segment::object("a"), Segment::object("b")],
        Condition::kind_mismatch(Kind::Object, Kind::Array);
        "dot on array"
    )]
    #[test_case(
        json!({"a": null}),
        &[Segment::object("a"), Segment::object("b")],
        Condition::kind_mismatch(Kind::Object, Kind::Null);
        "null intermediate"
    )]
    #[test_case(
        json!({"a": []}),
        &[Segment::object("a"), Segment::array(""), Segment::object("b")],
        Condition::kind_mismatch(Kind::Object, Kind::Array);
        "empty array followed by a property"
    )]
    fn does_not_locate(mut resource: Value, prefix: &[Segment], expected: Condition) {
        assert_eq!(
            locate(&mut resource, prefix).expect_err("Should not locate"),
            expected
        );
    }

    #[test_case(json!({"foo": 1, "bar": 2}), "foo", json!({"foo": 9, "bar": 2}), Ok(1); "direct property")]
    #[test_case(json!({"foo": null}), "foo", json!({"foo": 9}), Ok(1); "null property")]
    #[test_case(json!({"foo": {"bar": 1}}), "foo.bar", json!({"foo": {"bar": 9}}), Ok(1); "nested property")]
    #[test_case(json!([{"a": 1}, {"a": 2}]), "@a", json!([{"a": 9}, {"a": 9}]), Ok(2); "root fan-out")]
    #[test_case(json!([{"a": 1}, {"b": 2}, 3]), "@a", json!([{"a": 9}, {"b": 2}, 3]), Ok(1); "partial fan-out")]
    #[test_case(json!([]), "@a", json!([]), Ok(0); "empty fan-out")]
    #[test_case(json!({"top": [{"foo": 1}, {"foo": 2}]}), "top@foo", json!({"top": [{"foo": 9}, {"foo": 9}]}), Ok(2); "nested fan-out")]
    fn writes(resource: Value, path: &str, expected: Value, count: Result<usize, Condition>) {
        let (resource, result) = run(resource, path, json!(9));
        assert_eq!(resource, expected);
        assert_eq!(result, count);
    }

    #[test_case(json!({"foo": 1}), "bar", Condition::property_missing("bar"); "missing property")]
    #[test_case(json!({"foo": 1}), "bar.foo", Condition::property_missing("bar"); "missing intermediate")]
    #[test_case(json!({"foo": {"a": 1}, "a": 2}), "missing.a", Condition::property_missing("missing"); "missing intermediate with a same-named sibling")]
    #[test_case(json!({"foo": 1}), "foo.bar", Condition::kind_mismatch(Kind::Object, Kind::Scalar); "scalar intermediate")]
    #[test_case(json!({"foo": 1}), "@", Condition::kind_mismatch(Kind::Array, Kind::Object); "replace an object")]
    #[test_case(json!({"foo": 1}), "@foo", Condition::kind_mismatch(Kind::Array, Kind::Object); "fan out over an object")]
    #[test_case(json!([{"a": 1}]), "a", Condition::kind_mismatch(Kind::Object, Kind::Array); "dot on an array")]
    #[test_case(json!({"foo": 1}), "foo.", Condition::kind_mismatch(Kind::Object, Kind::Scalar); "trailing dot")]
    #[test_case(json!({"": 1}), ".", Condition::property_missing(""); "unnamed property")]
    fn leaves_resource_untouched(resource: Value, path: &str, expected: Condition) {
        let (after, result) = run(resource.clone(), path, json!(9));
        assert_eq!(after, resource);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn replaces_array_in_place() {
        let mut resource = json!(["test foo", "test bar"]);
        let before = resource.as_array().expect("Array").as_ptr();
        let result = set(&mut resource, &Path::parse("@"), json!(["a"]));
        assert_eq!(result, Ok(1));
        assert_eq!(resource, json!(["a"]));
        // Shrinking never reallocates
        assert_eq!(resource.as_array().expect("Array").as_ptr(), before);
    }

    #[test]
    fn replace_requires_array_value() {
        let (resource, result) = run(json!([1, 2]), "@", json!("a"));
        assert_eq!(resource, json!([1, 2]));
        assert_eq!(
            result,
            Err(Condition::kind_mismatch(Kind::Array, Kind::Scalar))
        );
    }

    #[test]
    fn nested_fan_out_in_prefix_applies_to_outer_items() {
        // `child` is resolved against the `top` array itself, so the leaf fans out over `top`
        let (resource, result) = run(
            json!({"top": [{"child": [{"foo": 1}], "foo": 2}, {"child": []}]}),
            "top@child@foo",
            json!(9),
        );
        assert_eq!(
            resource,
            json!({"top": [{"child": [{"foo": 1}], "foo": 9}, {"child": []}]})
        );
        assert_eq!(result, Ok(1));
    }
}
