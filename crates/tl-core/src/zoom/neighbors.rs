//! Current and adjacent zoom level selection

use crate::domain::Domain;

use super::ladder::{ZoomLadder, ZoomScale};

/// The rung containing the current domain, with its immediate neighbors
///
/// Pure and stateless: derive it again whenever the domain or the ladder
/// changes. Callers may memoize, but nothing here caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomNeighbors {
    pub current: ZoomScale,
    pub next_smaller: ZoomScale,
    pub next_bigger: ZoomScale,
}

impl ZoomNeighbors {
    pub fn of(domain: Domain, ladder: &ZoomLadder) -> Self {
        let current = ladder.scale_for_width(domain.width());
        Self {
            current,
            next_smaller: ladder.next_smaller(current),
            next_bigger: ladder.next_bigger(current),
        }
    }
}
