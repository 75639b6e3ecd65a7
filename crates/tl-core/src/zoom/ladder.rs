//! The ladder of configured zoom levels

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DurationMillis;

const MILLIS_PER_MINUTE: f64 = 60.0 * 1000.0;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: f64 = 7.0 * MILLIS_PER_DAY;
const MILLIS_PER_MONTH: f64 = 30.0 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: f64 = 365.0 * MILLIS_PER_DAY;

/// One rung of the zoom ladder: a named, fixed span width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomLevel {
    pub name: String,
    pub width_millis: DurationMillis,
}

impl ZoomLevel {
    pub fn new(name: impl Into<String>, width_millis: DurationMillis) -> Self {
        Self {
            name: name.into(),
            width_millis,
        }
    }
}

/// Identity of one rung on the ladder
///
/// `Minimum` and `Maximum` are sentinels pinned to the ladder ends; they
/// resolve to the smallest and largest configured width. A selector that
/// yields `Minimum` as the next smaller rung is saying "already as fine as
/// it gets".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomScale {
    /// Below the finest configured level
    Minimum,
    /// A configured level, by ladder index (finest first)
    Level(usize),
    /// Above the coarsest configured level
    Maximum,
}

/// Error building a zoom ladder
#[derive(Debug, Error)]
pub enum LadderError {
    #[error("zoom level width must be positive, got {0}")]
    NonPositiveWidth(DurationMillis),
    #[error("zoom level widths must strictly increase, got {prev} followed by {next}")]
    NonIncreasingWidths {
        prev: DurationMillis,
        next: DurationMillis,
    },
}

/// Ordered ladder of zoom levels, finest (smallest width) first
///
/// Immutable once built. Widths must strictly increase; an empty ladder is
/// allowed and degrades every ladder operation to a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomLadder {
    levels: Vec<ZoomLevel>,
}

impl ZoomLadder {
    pub fn new(levels: Vec<ZoomLevel>) -> Result<Self, LadderError> {
        let mut prev: Option<DurationMillis> = None;
        for level in &levels {
            if level.width_millis <= 0.0 {
                return Err(LadderError::NonPositiveWidth(level.width_millis));
            }
            if let Some(prev) = prev {
                if level.width_millis <= prev {
                    return Err(LadderError::NonIncreasingWidths {
                        prev,
                        next: level.width_millis,
                    });
                }
            }
            prev = Some(level.width_millis);
        }
        Ok(Self { levels })
    }

    pub fn empty() -> Self {
        Self { levels: Vec::new() }
    }

    /// The stock calendar ladder, ten minutes up to twenty years
    pub fn standard() -> Self {
        let levels = vec![
            ZoomLevel::new("10 minutes", 10.0 * MILLIS_PER_MINUTE),
            ZoomLevel::new("1 hour", MILLIS_PER_HOUR),
            ZoomLevel::new("6 hours", 6.0 * MILLIS_PER_HOUR),
            ZoomLevel::new("1 day", MILLIS_PER_DAY),
            ZoomLevel::new("1 week", MILLIS_PER_WEEK),
            ZoomLevel::new("1 month", MILLIS_PER_MONTH),
            ZoomLevel::new("6 months", 6.0 * MILLIS_PER_MONTH),
            ZoomLevel::new("1 year", MILLIS_PER_YEAR),
            ZoomLevel::new("5 years", 5.0 * MILLIS_PER_YEAR),
            ZoomLevel::new("20 years", 20.0 * MILLIS_PER_YEAR),
        ];
        // Widths above are strictly increasing by construction.
        Self { levels }
    }

    pub fn levels(&self) -> &[ZoomLevel] {
        &self.levels
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The configured level a scale identifies, if any
    pub fn level(&self, scale: ZoomScale) -> Option<&ZoomLevel> {
        match scale {
            ZoomScale::Minimum => self.levels.first(),
            ZoomScale::Level(index) => self.levels.get(index),
            ZoomScale::Maximum => self.levels.last(),
        }
    }

    /// Fixed span width of a rung
    ///
    /// The sentinels resolve to the smallest and largest configured width.
    /// `None` only on an empty ladder (or a stale out-of-range index).
    pub fn width_of(&self, scale: ZoomScale) -> Option<DurationMillis> {
        self.level(scale).map(|level| level.width_millis)
    }

    /// The smallest configured level whose width is at least `width`,
    /// clamped to the ladder ends
    ///
    /// An exact width match resolves to that level. An empty ladder yields
    /// `Minimum`.
    pub fn scale_for_width(&self, width: DurationMillis) -> ZoomScale {
        if self.levels.is_empty() {
            return ZoomScale::Minimum;
        }
        match self
            .levels
            .iter()
            .position(|level| level.width_millis >= width)
        {
            Some(index) => ZoomScale::Level(index),
            None => ZoomScale::Level(self.levels.len() - 1),
        }
    }

    /// One notch toward `Minimum`; idempotent at the floor
    pub fn next_smaller(&self, scale: ZoomScale) -> ZoomScale {
        match scale {
            ZoomScale::Minimum => ZoomScale::Minimum,
            ZoomScale::Level(0) => ZoomScale::Minimum,
            ZoomScale::Level(index) => ZoomScale::Level(index - 1),
            ZoomScale::Maximum if self.levels.is_empty() => ZoomScale::Maximum,
            ZoomScale::Maximum => ZoomScale::Level(self.levels.len() - 1),
        }
    }

    /// One notch toward `Maximum`; idempotent at the ceiling
    pub fn next_bigger(&self, scale: ZoomScale) -> ZoomScale {
        match scale {
            ZoomScale::Maximum => ZoomScale::Maximum,
            ZoomScale::Minimum if self.levels.is_empty() => ZoomScale::Minimum,
            ZoomScale::Minimum => ZoomScale::Level(0),
            ZoomScale::Level(index) if index + 1 < self.levels.len() => ZoomScale::Level(index + 1),
            ZoomScale::Level(_) => ZoomScale::Maximum,
        }
    }
}
