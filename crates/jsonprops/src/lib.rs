//! # jsonprops
//!
//! Check, update and list properties of schemaless JSON values with a small path syntax:
//!
//! - `.` descends into a named object property: `foo.bar`;
//! - `@` fans out over an array, optionally followed by a property of every item: `foo@bar`;
//! - a leading `@` makes the root value itself the array: `@bar`, or just `@`;
//! - the empty path addresses the whole value.
//!
//! Property names can not contain `.` or `@`; there is no escaping, indexing or filtering.
//!
//! ```rust
//! use serde_json::json;
//!
//! let mut resource = json!([{"a": 1}, {"a": 2, "b": 3}]);
//!
//! assert!(jsonprops::has(&resource, "@a"));
//! // Not every item owns `b`
//! assert!(!jsonprops::has(&resource, "@b"));
//!
//! jsonprops::set(&mut resource, "@a", 9);
//! assert_eq!(resource, json!([{"a": 9}, {"a": 9, "b": 3}]));
//!
//! assert_eq!(jsonprops::list(&resource), ["@a", "@b"]);
//! ```
//!
//! Lookups and updates never fail loudly: an unresolvable path makes [`has`] return `false` and
//! [`set`] leave the value untouched. [`try_set`] reports the reason as a [`Condition`].
mod error;
mod has;
mod list;
mod node;
mod path;
mod props;
mod set;

pub use error::Condition;
pub use node::{Kind, Node};
pub use path::{tokenize, Path, Segment, SegmentKind};
pub use props::Props;
use serde_json::Value;

/// Whether `path` resolves within `resource`.
///
/// Every array boundary is universally quantified: `foo@bar` holds when each item of `foo` owns
/// `bar`, including when `foo` is empty.
#[must_use]
pub fn has(resource: &Value, path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    has::has(resource, &Path::parse(path))
}

/// Overwrites existing values addressed by `path`, skipping anything that does not resolve.
pub fn set(resource: &mut Value, path: &str, value: impl Into<Value>) {
    if let Err(condition) = try_set(resource, path, value) {
        tracing::debug!(path, "Skipped update: {condition}");
    }
}

/// Overwrites existing values addressed by `path` and returns how many values were written.
///
/// # Errors
///
/// Returns the [`Condition`] that prevented the update; `resource` is left unchanged.
pub fn try_set(
    resource: &mut Value,
    path: &str,
    value: impl Into<Value>,
) -> Result<usize, Condition> {
    if path.is_empty() {
        return Err(Condition::PathEmpty);
    }
    set::set(resource, &Path::parse(path), value.into())
}

/// Every concrete path within `resource`, unique, in discovery order.
#[must_use]
pub fn list(resource: &Value) -> Vec<String> {
    list::list(resource)
}
