use serde_json::Value;

use crate::error::Condition;

/// A path-based view over a caller-owned JSON value.
///
/// The wrapper holds nothing but the reference: every call tokenizes its own path.
///
/// ```rust
/// use jsonprops::Props;
/// use serde_json::json;
///
/// let mut resource = json!({"top": [{"foo": 1}, {"foo": 2}]});
/// let mut props = Props::new(&mut resource);
///
/// assert!(props.has("top@foo"));
/// assert!(!props.has("top.foo"));
///
/// props.set("top@foo", 42);
/// assert_eq!(props.list(), ["top", "top@foo"]);
/// assert_eq!(resource, json!({"top": [{"foo": 42}, {"foo": 42}]}));
/// ```
#[derive(Debug)]
pub struct Props<'r> {
    resource: &'r mut Value,
}

impl<'r> Props<'r> {
    #[must_use]
    pub fn new(resource: &'r mut Value) -> Self {
        Self { resource }
    }

    /// Whether `path` resolves. Array fan-outs require every item to resolve the rest of the
    /// path; an empty array resolves anything, and the empty path always resolves.
    #[must_use]
    pub fn has(&self, path: &str) -> bool {
        crate::has(self.resource(), path)
    }

    /// Overwrites the existing value(s) addressed by `path`.
    ///
    /// Missing properties are never created and mismatched shapes are skipped, leaving the
    /// resource unchanged. Use [`Props::try_set`] to find out why nothing was written.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        crate::set(self.resource_mut(), path, value);
    }

    /// Like [`Props::set`], but reports how many values were written.
    ///
    /// A bare `@` leaf counts each item placed into the array.
    ///
    /// # Errors
    ///
    /// Returns the [`Condition`] that prevented the update. The resource is unchanged in that case.
    pub fn try_set(&mut self, path: &str, value: impl Into<Value>) -> Result<usize, Condition> {
        crate::try_set(self.resource_mut(), path, value)
    }

    /// Every concrete path present in the resource, without duplicates, in discovery order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        crate::list(self.resource())
    }

    #[must_use]
    pub fn resource(&self) -> &Value {
        &*self.resource
    }

    pub fn resource_mut(&mut self) -> &mut Value {
        &mut *self.resource
    }

    #[must_use]
    pub fn into_inner(self) -> &'r mut Value {
        self.resource
    }
}
