use ahash::AHashSet;
use serde_json::{Map, Value};

use crate::node::Node;

/// Every concrete path in `root`, unique, in the order they are first discovered.
///
/// Array items contribute their properties under the array's own path, so `{"a": [{"b": 1}]}`
/// lists `a` and `a@b`. Scalars nested in arrays contribute nothing.
pub(crate) fn list(root: &Value) -> Vec<String> {
    let mut collector = Collector::default();
    match Node::classify(root) {
        Node::Array(items) => collector.collect_array(items, "@"),
        Node::Object(map) => collector.collect_object(map, ""),
        Node::Null | Node::Scalar(_) => {}
    }
    collector.paths
}

#[derive(Default)]
struct Collector {
    paths: Vec<String>,
    seen: AHashSet<String>,
}

impl Collector {
    fn push(&mut self, path: String) {
        if self.seen.insert(path.clone()) {
            self.paths.push(path);
        }
    }

    fn collect_object(&mut self, map: &Map<String, Value>, prefix: &str) {
        for (key, value) in map {
            let path = format!("{prefix}{key}");
            match Node::classify(value) {
                Node::Array(items) => {
                    let nested = format!("{path}@");
                    self.push(path);
                    self.collect_array(items, &nested);
                }
                Node::Object(inner) => {
                    let nested = format!("{path}.");
                    self.push(path);
                    self.collect_object(inner, &nested);
                }
                Node::Null | Node::Scalar(_) => self.push(path),
            }
        }
    }

    fn collect_array(&mut self, items: &[Value], prefix: &str) {
        tracing::trace!(prefix, items = items.len(), "Listing properties from array");
        for item in items {
            match Node::classify(item) {
                Node::Array(nested) => self.collect_array(nested, prefix),
                Node::Object(map) => self.collect_object(map, prefix),
                Node::Null | Node::Scalar(_) => {}
            }
        }
    }
}
