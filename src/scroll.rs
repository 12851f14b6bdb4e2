/// Offset past which the nav bar switches to its compact, opaque style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub scrolled: bool,
    /// Always within `[0, 1]`.
    pub progress: f64,
}

/// Derives nav bar scroll state from the page offset.
///
/// Document and viewport heights are cached and only refreshed on resize, so `update`
/// does constant work and can run on every scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    document_height: f64,
    viewport_height: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            document_height: 0.0,
            viewport_height: 0.0,
        }
    }

    pub fn resize(&mut self, document_height: f64, viewport_height: f64) {
        self.document_height = finite_or_zero(document_height);
        self.viewport_height = finite_or_zero(viewport_height);
    }

    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    pub fn update(&self, offset: f64) -> ScrollSnapshot {
        let offset = finite_or_zero(offset);
        let range = self.scrollable_height();
        let progress = if range <= 0.0 {
            0.0
        } else {
            (offset / range).clamp(0.0, 1.0)
        };
        ScrollSnapshot {
            scrolled: offset > self.threshold,
            progress,
        }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn tracker(document: f64, viewport: f64) -> ScrollTracker {
        let mut t = ScrollTracker::default();
        t.resize(document, viewport);
        t
    }

    #[test]
    fn test_threshold() {
        let t = tracker(3000.0, 1000.0);
        assert!(!t.update(0.0).scrolled);
        assert!(!t.update(50.0).scrolled);
        assert!(t.update(50.5).scrolled);
    }

    #[test]
    fn test_progress_midpoint_and_end() {
        let t = tracker(3000.0, 1000.0);
        assert_eq!(t.update(1000.0).progress, 0.5);
        assert_eq!(t.update(2000.0).progress, 1.0);
        // overscroll bounce on touch devices
        assert_eq!(t.update(2400.0).progress, 1.0);
        assert_eq!(t.update(-80.0).progress, 0.0);
    }

    #[test]
    fn test_short_page_has_zero_progress() {
        let t = tracker(600.0, 900.0);
        assert_eq!(t.update(0.0).progress, 0.0);
        assert_eq!(t.update(300.0).progress, 0.0);
        let t = tracker(900.0, 900.0);
        assert_eq!(t.update(10.0).progress, 0.0);
    }

    #[test]
    fn test_resize_refreshes_range() {
        let mut t = tracker(2000.0, 1000.0);
        assert_eq!(t.update(500.0).progress, 0.5);
        t.resize(3000.0, 1000.0);
        assert_eq!(t.update(500.0).progress, 0.25);
    }

    #[test]
    fn test_non_finite_input() {
        let t = tracker(2000.0, 1000.0);
        assert_eq!(t.update(f64::NAN), ScrollSnapshot::default());
        let t = tracker(f64::INFINITY, 1000.0);
        assert_eq!(t.update(500.0).progress, 0.0);
    }

    proptest! {
        #[test]
        fn progress_stays_in_unit_range(
            offset in -1.0e7f64..1.0e7,
            document in 0.0f64..1.0e7,
            viewport in 0.0f64..1.0e5,
        ) {
            let t = tracker(document, viewport);
            let snap = t.update(offset);
            prop_assert!((0.0..=1.0).contains(&snap.progress));
            if document <= viewport {
                prop_assert_eq!(snap.progress, 0.0);
            }
        }
    }
}
