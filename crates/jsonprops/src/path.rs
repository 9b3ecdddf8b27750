//! Property paths and their tokenizer.
//!
//! A path is a string where `.` descends into a named object property and `@` fans out over an
//! array, optionally followed by a property name applied to every element:
//!
//! - `foo.bar` - property `bar` of the object stored under `foo`;
//! - `foo@bar` - property `bar` of every element of the array stored under `foo`;
//! - `@bar` - property `bar` of every element of the root array;
//! - `@` - the root array itself.
use std::{convert::Infallible, fmt, str::FromStr};

/// How a segment reaches into its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Descend into a named object property.
    Object,
    /// Fan out over every element of an array.
    Array,
}

/// A single parsed unit of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    kind: SegmentKind,
    name: String,
}

impl Segment {
    #[must_use]
    pub fn new(kind: SegmentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(SegmentKind::Object, name)
    }
    #[must_use]
    pub fn array(name: impl Into<String>) -> Self {
        Self::new(SegmentKind::Array, name)
    }
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }
    /// Property name. Empty for a bare `@` and for the implicit leading segment of `.foo`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// A bare `@`: the segment addresses the array itself rather than a property of its items.
    #[must_use]
    pub fn is_array_itself(&self) -> bool {
        self.kind == SegmentKind::Array && self.name.is_empty()
    }
}

/// A tokenized property path.
///
/// Always holds at least one segment: tokenizing an empty string yields a single unnamed object
/// segment, which resolves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Tokenize `path`. Never fails; malformed paths produce empty-named segments that fail
    /// every lookup later on.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        tokenize(path)
    }
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    /// The segment a mutation writes to.
    #[must_use]
    pub fn leaf(&self) -> Option<&Segment> {
        self.segments.last()
    }
    /// Splits the path into its leaf and the prefix leading to the leaf's parent.
    #[must_use]
    pub fn split_leaf(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_last()
    }
}

/// Parses a path string into segments.
///
/// Unless the path starts with `@`, an unnamed object segment is prepended and receives the
/// leading property name. Every `.` opens an object segment, every `@` an array segment, any
/// other character extends the name of the current one.
#[must_use]
pub fn tokenize(path: &str) -> Path {
    let bytes = path.as_bytes();
    let separators = bytes.iter().filter(|b| matches!(b, b'.' | b'@')).count();
    let mut segments = Vec::with_capacity(separators + 1);
    // Separators are ASCII, so every split point is a char boundary.
    let (mut kind, mut start) = match bytes.first() {
        Some(b'@') => (SegmentKind::Array, 1),
        _ => (SegmentKind::Object, 0),
    };
    for (idx, byte) in bytes.iter().enumerate().skip(start) {
        let next = match byte {
            b'.' => SegmentKind::Object,
            b'@' => SegmentKind::Array,
            _ => continue,
        };
        segments.push(Segment::new(kind, &path[start..idx]));
        kind = next;
        start = idx + 1;
    }
    segments.push(Segment::new(kind, &path[start..]));
    Path { segments }
}

/// Renders a run of segments back into path syntax.
pub(crate) struct Rendered<'a>(pub(crate) &'a [Segment]);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.0.iter().enumerate() {
            match segment.kind {
                // The leading object segment is implicit
                SegmentKind::Object if idx == 0 => {}
                SegmentKind::Object => f.write_str(".")?,
                SegmentKind::Array => f.write_str("@")?,
            }
            f.write_str(&segment.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered(&self.segments), f)
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        tokenize(value)
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(tokenize(s))
    }
}
