//! Time window value types

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch
pub type TimeMillis = f64;

/// A span of time in milliseconds
pub type DurationMillis = f64;

/// The currently visible time window
///
/// The host application owns the committed value; zoom operations only
/// propose fresh ones. Every window produced by a ladder operation has
/// `start <= end`; the drag-select path can propagate an inverted pair,
/// which callers may pass through [`Domain::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: TimeMillis,
    pub end: TimeMillis,
}

impl Domain {
    pub fn new(start: TimeMillis, end: TimeMillis) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> DurationMillis {
        self.end - self.start
    }

    pub fn midpoint(&self) -> TimeMillis {
        (self.start + self.end) / 2.0
    }

    /// Whether the two windows overlap at all (endpoints included)
    pub fn intersects(&self, start: TimeMillis, end: TimeMillis) -> bool {
        let d = self.normalized();
        start <= d.end && end >= d.start
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// The same window with its endpoints in ascending order
    pub fn normalized(&self) -> Domain {
        if self.is_inverted() {
            Domain::new(self.end, self.start)
        } else {
            *self
        }
    }
}

/// The outermost allowable window
///
/// Committed ladder domains always lie within these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub start: TimeMillis,
    pub end: TimeMillis,
}

impl Bounds {
    pub fn new(start: TimeMillis, end: TimeMillis) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> DurationMillis {
        self.end - self.start
    }

    pub fn as_domain(&self) -> Domain {
        Domain::new(self.start, self.end)
    }

    /// A window of exactly `width` centered on `focal`, shifted (width kept)
    /// until it lies within the bounds
    ///
    /// If `width` covers the whole bound span, the full span is returned.
    /// A `focal` outside the bounds is valid input; the same centering and
    /// shifting rule applies.
    pub fn domain_centered_on(&self, focal: TimeMillis, width: DurationMillis) -> Domain {
        if width >= self.span() {
            return self.as_domain();
        }
        let mut start = focal - width / 2.0;
        let mut end = focal + width / 2.0;
        if start < self.start {
            end += self.start - start;
            start = self.start;
        } else if end > self.end {
            start -= end - self.end;
            end = self.end;
        }
        Domain::new(start, end)
    }
}
