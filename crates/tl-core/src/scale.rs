//! Linear time/pixel mapping

use crate::domain::{Domain, TimeMillis};

/// Invertible linear mapping between time values and horizontal pixels
///
/// Captures the current domain and the widget's pixel range. It has no
/// identity of its own: recompute it whenever the domain or the viewport
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: Domain,
    left_px: f32,
    right_px: f32,
}

impl TimeScale {
    pub fn new(domain: Domain, left_px: f32, right_px: f32) -> Self {
        Self {
            domain,
            left_px,
            right_px,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn pixel_range(&self) -> (f32, f32) {
        (self.left_px, self.right_px)
    }

    /// Horizontal pixel position of a time value
    pub fn to_px(&self, t: TimeMillis) -> f32 {
        let width = self.domain.width();
        if width == 0.0 {
            return self.left_px;
        }
        let fraction = (t - self.domain.start) / width;
        self.left_px + (fraction * f64::from(self.right_px - self.left_px)) as f32
    }

    /// Time value under a pixel position (inverse of [`TimeScale::to_px`])
    pub fn to_time(&self, px: f32) -> TimeMillis {
        let px_span = f64::from(self.right_px - self.left_px);
        if px_span == 0.0 {
            return self.domain.start;
        }
        let fraction = f64::from(px - self.left_px) / px_span;
        self.domain.start + fraction * self.domain.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_onto_pixel_range() {
        let scale = TimeScale::new(Domain::new(0.0, 100_000.0), 0.0, 100.0);
        assert_eq!(scale.to_px(0.0), 0.0);
        assert_eq!(scale.to_px(50_000.0), 50.0);
        assert_eq!(scale.to_px(100_000.0), 100.0);
    }

    #[test]
    fn inverts_pixels_back_to_time() {
        let scale = TimeScale::new(Domain::new(0.0, 100_000.0), 0.0, 100.0);
        assert_eq!(scale.to_time(10.0), 10_000.0);
        assert_eq!(scale.to_time(50.0), 50_000.0);
        // Positions outside the pixel range extrapolate linearly.
        assert_eq!(scale.to_time(-10.0), -10_000.0);
    }

    #[test]
    fn round_trips_through_both_directions() {
        let scale = TimeScale::new(Domain::new(1_700_000_000_000.0, 1_700_086_400_000.0), 40.0, 840.0);
        for t in [1_700_000_000_000.0, 1_700_043_200_000.0, 1_700_086_400_000.0] {
            let back = scale.to_time(scale.to_px(t));
            assert!((back - t).abs() < 1_000.0, "{back} vs {t}");
        }
    }

    #[test]
    fn degenerate_ranges_do_not_divide_by_zero() {
        let point_domain = TimeScale::new(Domain::new(5.0, 5.0), 0.0, 100.0);
        assert_eq!(point_domain.to_px(123.0), 0.0);

        let point_pixels = TimeScale::new(Domain::new(0.0, 1_000.0), 50.0, 50.0);
        assert_eq!(point_pixels.to_time(75.0), 0.0);
    }
}
