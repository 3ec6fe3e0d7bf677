use super::Rect;

/// Fraction of `element`'s own area that lies inside `viewport`.
///
/// Zero-sized elements are never visible.
pub fn visible_fraction(element: &Rect, viewport: &Rect) -> f64 {
    let area = element.area();
    if area <= 0.0 {
        return 0.0;
    }
    element
        .intersection(viewport)
        .map(|r| (r.area() / area).clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

/// When a viewport trigger fires.
///
/// `once` has no default: every call site states whether its reveal latches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerConfig {
    pub threshold: f64,
    pub once: bool,
}

impl TriggerConfig {
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once,
        }
    }

    fn qualifies(&self, fraction: f64) -> bool {
        fraction > 0.0 && fraction >= self.threshold
    }
}

/// Boolean "has entered view" signal for one mounted element.
#[derive(Debug, Clone, PartialEq)]
pub struct InViewLatch {
    config: TriggerConfig,
    in_view: bool,
    fired: bool,
}

impl InViewLatch {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            in_view: false,
            fired: false,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// True once the latch can no longer change.
    pub fn is_final(&self) -> bool {
        self.config.once && self.fired
    }

    /// Feed the latest visible fraction and return the resulting state.
    pub fn observe(&mut self, fraction: f64) -> bool {
        if self.is_final() {
            return true;
        }
        let hit = self.config.qualifies(fraction);
        if hit {
            self.fired = true;
        }
        self.in_view = hit;
        self.in_view
    }

    pub fn observe_rect(&mut self, element: &Rect, viewport: &Rect) -> bool {
        self.observe(visible_fraction(element, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    fn at(top: f64) -> Rect {
        Rect::new(100.0, top, 400.0, 200.0)
    }

    #[test]
    fn fraction_of_partly_visible_element() {
        assert_eq!(visible_fraction(&at(0.0), &VIEWPORT), 1.0);
        assert_eq!(visible_fraction(&at(700.0), &VIEWPORT), 0.5);
        assert_eq!(visible_fraction(&at(900.0), &VIEWPORT), 0.0);
        assert_eq!(visible_fraction(&at(-150.0), &VIEWPORT), 0.25);
    }

    #[test]
    fn tall_elements_use_their_own_area() {
        let tall = Rect::new(0.0, -400.0, 1000.0, 1600.0);
        assert_eq!(visible_fraction(&tall, &VIEWPORT), 0.5);
    }

    #[test]
    fn empty_element_is_never_visible() {
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(visible_fraction(&empty, &VIEWPORT), 0.0);
        let mut latch = InViewLatch::new(TriggerConfig::new(0.0, true));
        assert!(!latch.observe_rect(&empty, &VIEWPORT));
    }

    #[test]
    fn once_latches_after_scrolling_away() {
        let mut latch = InViewLatch::new(TriggerConfig::new(0.2, true));
        assert!(!latch.observe_rect(&at(900.0), &VIEWPORT));
        assert!(!latch.observe_rect(&at(790.0), &VIEWPORT));
        assert!(latch.observe_rect(&at(700.0), &VIEWPORT));
        assert!(latch.is_final());
        assert!(latch.observe_rect(&at(2000.0), &VIEWPORT));
        assert!(latch.observe(0.0));
        assert!(latch.in_view());
    }

    #[test]
    fn continuous_trigger_toggles_back() {
        let mut latch = InViewLatch::new(TriggerConfig::new(0.5, false));
        assert!(latch.observe(0.6));
        assert!(!latch.observe(0.3));
        assert!(!latch.is_final());
        assert!(latch.observe(0.5));
        assert!(!latch.observe_rect(&at(-500.0), &VIEWPORT));
    }

    #[test]
    fn nothing_observed_stays_false() {
        let latch = InViewLatch::new(TriggerConfig::new(0.3, true));
        assert!(!latch.in_view());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(TriggerConfig::new(3.0, true).threshold, 1.0);
        assert_eq!(TriggerConfig::new(-1.0, false).threshold, 0.0);
    }
}
