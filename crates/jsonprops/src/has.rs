//! Existence checks.
//!
//! Every array boundary quantifies universally: `foo@bar` holds only when each element of `foo`
//! owns `bar`, and holds vacuously for an empty array. Separators must match the container they
//! are applied to: `.` on an array or `@` on an object never resolves.
use serde_json::Value;

use crate::{
    error::Condition,
    node::{Kind, Node},
    path::{Path, Rendered, Segment, SegmentKind},
};

/// How to read the first segment passed to [`object_has`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Head {
    AsParsed,
    /// A named fan-out segment is checked against each array element as a plain property.
    Object,
}

pub(crate) fn has(root: &Value, path: &Path) -> bool {
    let segments = path.segments();
    match segments.first().map(Segment::kind) {
        Some(SegmentKind::Array) => array_has(root, segments),
        Some(SegmentKind::Object) => object_has(root, segments, Head::AsParsed),
        None => true,
    }
}

fn object_has(value: &Value, segments: &[Segment], head: Head) -> bool {
    let mut current = value;
    for (idx, segment) in segments.iter().enumerate() {
        let node = Node::classify(current);
        if let Node::Null = node {
            tracing::trace!(
                path = %Rendered(&segments[idx..]),
                "{}",
                Condition::IntermediateNull
            );
            return false;
        }
        let kind = if idx == 0 && head == Head::Object {
            SegmentKind::Object
        } else {
            segment.kind()
        };
        match kind {
            SegmentKind::Object => match node.property(segment.name()) {
                Ok(child) => current = child,
                Err(condition) => {
                    tracing::trace!(path = %Rendered(&segments[idx..]), "{condition}");
                    return false;
                }
            },
            // Quantification takes over from here
            SegmentKind::Array => return array_has(current, &segments[idx..]),
        }
    }
    true
}

fn array_has(value: &Value, segments: &[Segment]) -> bool {
    let Node::Array(items) = Node::classify(value) else {
        tracing::debug!(
            path = %Rendered(segments),
            "{}",
            Condition::kind_mismatch(Kind::Array, Kind::of(value))
        );
        return false;
    };
    let head = match segments.first() {
        Some(segment) if !segment.name().is_empty() => Head::Object,
        _ => Head::AsParsed,
    };
    for (index, item) in items.iter().enumerate() {
        if !object_has(item, segments, head) {
            tracing::debug!(
                path = %Rendered(segments),
                index,
                "Array item does not have the path"
            );
            return false;
        }
    }
    true
}
