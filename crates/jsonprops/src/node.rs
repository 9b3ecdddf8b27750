use core::fmt;

use serde_json::{Map, Value};

use crate::error::Condition;

/// Shape of a JSON value as far as path traversal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    /// A string, a number or a boolean.
    Scalar,
    Object,
    Array,
}

impl Kind {
    #[must_use]
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Scalar => "scalar",
            Kind::Object => "object",
            Kind::Array => "array",
        })
    }
}

/// A borrowed JSON value classified into one of the four shapes every traversal matches on.
#[derive(Debug, Clone, Copy)]
pub enum Node<'v> {
    Null,
    Scalar(&'v Value),
    Object(&'v Map<String, Value>),
    Array(&'v [Value]),
}

impl<'v> Node<'v> {
    #[must_use]
    pub fn classify(value: &'v Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Node::Scalar(value),
            Value::Object(map) => Node::Object(map),
            Value::Array(items) => Node::Array(items),
        }
    }
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Scalar(_) => Kind::Scalar,
            Node::Object(_) => Kind::Object,
            Node::Array(_) => Kind::Array,
        }
    }
    /// Value of an own property of an object node.
    ///
    /// Properties with an empty name are never considered owned.
    pub(crate) fn property(self, name: &str) -> Result<&'v Value, Condition> {
        match self {
            Node::Object(map) => {
                if name.is_empty() {
                    return Err(Condition::property_missing(name));
                }
                map.get(name).ok_or_else(|| Condition::property_missing(name))
            }
            other => Err(Condition::kind_mismatch(Kind::Object, other.kind())),
        }
    }
}

impl<'v> From<&'v Value> for Node<'v> {
    fn from(value: &'v Value) -> Self {
        Node::classify(value)
    }
}

/// Mutable counterpart of [`Node`].
#[derive(Debug)]
pub(crate) enum NodeMut<'v> {
    Null,
    Scalar,
    Object(&'v mut Map<String, Value>),
    Array(&'v mut Vec<Value>),
}

impl<'v> NodeMut<'v> {
    pub(crate) fn classify(value: &'v mut Value) -> Self {
        match value {
            Value::Null => NodeMut::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => NodeMut::Scalar,
            Value::Object(map) => NodeMut::Object(map),
            Value::Array(items) => NodeMut::Array(items),
        }
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            NodeMut::Null => Kind::Null,
            NodeMut::Scalar => Kind::Scalar,
            NodeMut::Object(_) => Kind::Object,
            NodeMut::Array(_) => Kind::Array,
        }
    }

    /// Same ownership rules as [`Node::property`].
    pub(crate) fn property(self, name: &str) -> Result<&'v mut Value, Condition> {
        match self {
            NodeMut::Object(map) => {
                if name.is_empty() {
                    return Err(Condition::property_missing(name));
                }
                map.get_mut(name)
                    .ok_or_else(|| Condition::property_missing(name))
            }
            other => Err(Condition::kind_mismatch(Kind::Object, other.kind())),
        }
    }
}
