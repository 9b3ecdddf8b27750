use core::fmt;

use crate::node::Kind;

/// Reason a path did not resolve, or a mutation did not apply.
///
/// `has` reports these as `false` and `set` as a silent no-op; [`crate::Props::try_set`]
/// returns them to the caller. [`Condition::IntermediateNull`] only ever describes a failed
/// existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The path is empty and addresses the whole resource.
    PathEmpty,
    /// The container does not own the named property.
    PropertyMissing { name: Box<str> },
    /// The path expects one shape of container but found another, e.g. `.` applied to an array.
    KindMismatch { expected: Kind, found: Kind },
    /// A `null` was reached before the path was exhausted during an existence check.
    ///
    /// Updates report a `null` parent as [`Condition::KindMismatch`] with `found: Kind::Null`.
    IntermediateNull,
}

impl Condition {
    pub(crate) fn property_missing(name: &str) -> Condition {
        Condition::PropertyMissing { name: name.into() }
    }
    pub(crate) fn kind_mismatch(expected: Kind, found: Kind) -> Condition {
        Condition::KindMismatch { expected, found }
    }
}

impl std::error::Error for Condition {}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::PathEmpty => f.write_str("Path is empty"),
            Condition::PropertyMissing { name } => write!(f, "Property '{name}' is missing"),
            Condition::KindMismatch { expected, found } => {
                write!(f, "Expected {expected}, found {found}")
            }
            Condition::IntermediateNull => f.write_str("Can not descend into null"),
        }
    }
}
