use super::{
    lerp,
    spring::{Spring, SpringConfig, SCROLL_SPRING},
};

/// A point on the tracked region paired with a point on the viewport.
///
/// Both are fractions along the vertical axis: 0 is the top edge, 1 the
/// bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEdge {
    pub region: f64,
    pub viewport: f64,
}

impl ScrollEdge {
    pub const fn new(region: f64, viewport: f64) -> Self {
        Self { region, viewport }
    }
}

/// The scroll span over which progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollEdge,
    pub end: ScrollEdge,
}

impl ScrollRange {
    /// From the region's top touching the viewport bottom until its bottom
    /// leaves through the viewport top.
    pub const ENTER_TO_EXIT: ScrollRange = ScrollRange {
        start: ScrollEdge::new(0.0, 1.0),
        end: ScrollEdge::new(1.0, 0.0),
    };

    /// From entry until the region's centre sits on the viewport centre.
    pub const ENTER_TO_CENTER: ScrollRange = ScrollRange {
        start: ScrollEdge::new(0.0, 1.0),
        end: ScrollEdge::new(0.5, 0.5),
    };

    /// Progress of a region whose top is `top` pixels below the viewport top.
    pub fn progress(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let travelled =
            -top - self.start.region * height + self.start.viewport * viewport_height;
        let span = (self.end.region - self.start.region) * height
            - (self.end.viewport - self.start.viewport) * viewport_height;
        if span <= 0.0 {
            return if travelled > 0.0 { 1.0 } else { 0.0 };
        }
        (travelled / span).clamp(0.0, 1.0)
    }
}

/// Progress of the whole document, for the reading-progress bar.
pub fn document_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Linear map of `[0, 1]` progress onto `(from, to)`.
pub fn map_progress(progress: f64, output: (f64, f64)) -> f64 {
    lerp(output.0, output.1, progress.clamp(0.0, 1.0))
}

/// What a scroll transform writes to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollProperty {
    TranslateY,
    TranslateX,
    Scale,
    Rotate,
}

impl ScrollProperty {
    pub fn to_css(self, value: f64) -> String {
        match self {
            ScrollProperty::TranslateY => format!("transform: translate3d(0, {value}px, 0);"),
            ScrollProperty::TranslateX => format!("transform: translate3d({value}px, 0, 0);"),
            ScrollProperty::Scale => format!("transform: scale({value});"),
            ScrollProperty::Rotate => format!("transform: rotate({value}deg);"),
        }
    }
}

/// Scroll progress mapped onto an output range and spring smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTransform {
    pub range: ScrollRange,
    pub property: ScrollProperty,
    pub output: (f64, f64),
    spring: Spring,
}

impl ScrollTransform {
    pub fn new(
        range: ScrollRange,
        property: ScrollProperty,
        output: (f64, f64),
        spring: SpringConfig,
    ) -> Self {
        Self {
            range,
            property,
            output,
            spring: Spring::new(spring.resting_for_span(output.1 - output.0), output.0),
        }
    }

    /// Vertical drift of `speed * ±100` px; negative speed drifts the other way.
    pub fn parallax(speed: f64) -> Self {
        Self::new(
            ScrollRange::ENTER_TO_EXIT,
            ScrollProperty::TranslateY,
            (speed * -100.0, speed * 100.0),
            SCROLL_SPRING,
        )
    }

    pub fn horizontal_parallax(speed: f64) -> Self {
        Self::new(
            ScrollRange::ENTER_TO_EXIT,
            ScrollProperty::TranslateX,
            (speed * -100.0, speed * 100.0),
            SCROLL_SPRING,
        )
    }

    pub fn scale(output: (f64, f64)) -> Self {
        Self::new(
            ScrollRange::ENTER_TO_CENTER,
            ScrollProperty::Scale,
            output,
            SCROLL_SPRING,
        )
    }

    pub fn rotate(output: (f64, f64)) -> Self {
        Self::new(
            ScrollRange::ENTER_TO_EXIT,
            ScrollProperty::Rotate,
            output,
            SCROLL_SPRING,
        )
    }

    pub fn value(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Feed fresh region geometry; returns the unsmoothed target.
    pub fn observe(&mut self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let progress = self.range.progress(top, height, viewport_height);
        let target = map_progress(progress, self.output);
        self.spring.set_target(target);
        target
    }

    /// Start from the current geometry without animating into it.
    pub fn jump(&mut self, top: f64, height: f64, viewport_height: f64) {
        let target = self.observe(top, height, viewport_height);
        self.spring.snap(target);
    }

    pub fn tick(&mut self, dt: f64) -> f64 {
        self.spring.step(dt)
    }

    pub fn css(&self) -> String {
        self.property.to_css(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn enter_to_exit_progress() {
        let range = ScrollRange::ENTER_TO_EXIT;
        assert_eq!(range.progress(800.0, 200.0, 800.0), 0.0);
        assert_eq!(range.progress(1200.0, 200.0, 800.0), 0.0);
        assert!(close(range.progress(300.0, 200.0, 800.0), 0.5));
        assert_eq!(range.progress(-200.0, 200.0, 800.0), 1.0);
        assert_eq!(range.progress(-900.0, 200.0, 800.0), 1.0);
    }

    #[test]
    fn enter_to_center_progress() {
        let range = ScrollRange::ENTER_TO_CENTER;
        assert_eq!(range.progress(800.0, 200.0, 800.0), 0.0);
        // centre of a 200px region on the 400px line means top at 300
        assert!(close(range.progress(300.0, 200.0, 800.0), 1.0));
        assert!(close(range.progress(550.0, 200.0, 800.0), 0.5));
    }

    #[test]
    fn progress_runs_backward_when_scrolling_up() {
        let range = ScrollRange::ENTER_TO_EXIT;
        let down = range.progress(200.0, 200.0, 800.0);
        let up = range.progress(400.0, 200.0, 800.0);
        assert!(up < down);
    }

    #[test]
    fn maps_onto_output_range() {
        assert_eq!(map_progress(0.0, (-50.0, 50.0)), -50.0);
        assert_eq!(map_progress(0.5, (-50.0, 50.0)), 0.0);
        assert_eq!(map_progress(1.0, (0.0, 360.0)), 360.0);
        assert_eq!(map_progress(4.0, (0.8, 1.0)), 1.0);
    }

    #[test]
    fn document_progress_handles_short_pages() {
        assert_eq!(document_progress(100.0, 500.0, 800.0), 0.0);
        assert_eq!(document_progress(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(document_progress(5000.0, 2000.0, 800.0), 1.0);
    }

    #[test]
    fn parallax_is_smoothed_and_continuous() {
        let mut parallax = ScrollTransform::parallax(0.5);
        parallax.jump(800.0, 200.0, 800.0);
        assert_eq!(parallax.value(), -50.0);

        let target = parallax.observe(300.0, 200.0, 800.0);
        assert!(close(target, 0.0));
        let first = parallax.tick(1.0 / 60.0);
        assert!(first > -50.0 && first < 0.0);
        for _ in 0..300 {
            parallax.tick(1.0 / 60.0);
        }
        assert!(parallax.is_settled());
        assert!(close(parallax.value(), 0.0));
    }

    #[test]
    fn small_scroll_steps_ease_instead_of_jumping() {
        let mut scale = ScrollTransform::scale((0.95, 1.0));
        scale.jump(800.0, 200.0, 800.0);
        // 20px of scrolling moves the target by about 0.002
        let target = scale.observe(780.0, 200.0, 800.0);
        assert!(target > 0.95 && target - 0.95 < 0.0025);
        assert!(!scale.is_settled());
        let first = scale.tick(1.0 / 60.0);
        assert!(first > 0.95 && first < target);
        for _ in 0..600 {
            scale.tick(1.0 / 60.0);
        }
        assert!(scale.is_settled());
        assert_eq!(scale.value(), target);
    }

    #[test]
    fn target_ignores_the_current_output() {
        let mut rotate = ScrollTransform::rotate((0.0, 360.0));
        rotate.jump(800.0, 200.0, 800.0);
        let first = rotate.observe(300.0, 200.0, 800.0);
        for _ in 0..30 {
            rotate.tick(1.0 / 60.0);
        }
        assert!(rotate.value() > 0.0);
        assert_eq!(rotate.observe(300.0, 200.0, 800.0), first);
    }

    #[test]
    fn css_per_property() {
        let scale = ScrollTransform::scale((0.95, 1.0));
        assert_eq!(scale.css(), "transform: scale(0.95);");
        assert_eq!(
            ScrollProperty::Rotate.to_css(90.0),
            "transform: rotate(90deg);"
        );
    }
}
