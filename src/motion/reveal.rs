use super::{
    easing::{CubicBezier, EASE_IN_OUT_STRONG, EASE_OUT, EASE_OUT_SOFT},
    viewport::TriggerConfig,
    Vec2,
};

/// Where hidden content starts from before sliding into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting offset for content that slides in travelling `self`.
    ///
    /// `Up` content starts below its resting place, `Left` starts to the right.
    pub fn offset(self, distance: f64) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, distance),
            Direction::Down => Vec2::new(0.0, -distance),
            Direction::Left => Vec2::new(distance, 0.0),
            Direction::Right => Vec2::new(-distance, 0.0),
            Direction::None => Vec2::ZERO,
        }
    }
}

/// One end of a reveal transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate: Vec2,
    pub blur: f64,
    pub scale: f64,
    pub rotate_x: f64,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        translate: Vec2::ZERO,
        blur: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}) rotateX({}deg); filter: blur({}px);",
            self.opacity, self.translate.x, self.translate.y, self.scale, self.rotate_x, self.blur
        )
    }
}

/// Configuration of one reveal wrapper.
///
/// Constructors carry the timing each wrapper kind uses; the `with_*`
/// methods adjust a single knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub direction: Direction,
    pub distance: f64,
    pub blur: f64,
    pub hidden_scale: f64,
    pub rotate_x: f64,
    pub duration: f64,
    pub delay: f64,
    pub stagger: f64,
    pub easing: CubicBezier,
    pub trigger: TriggerConfig,
}

impl Reveal {
    fn base(trigger: TriggerConfig) -> Self {
        Self {
            direction: Direction::None,
            distance: 0.0,
            blur: 0.0,
            hidden_scale: 1.0,
            rotate_x: 0.0,
            duration: 0.6,
            delay: 0.0,
            stagger: 0.0,
            easing: EASE_OUT_SOFT,
            trigger,
        }
    }

    /// Slide-and-fade of a single block.
    pub fn slide(direction: Direction, trigger: TriggerConfig) -> Self {
        Self {
            direction,
            distance: 60.0,
            ..Self::base(trigger)
        }
    }

    /// Each child slides in after the previous one.
    pub fn stagger(direction: Direction, trigger: TriggerConfig) -> Self {
        let direction = match direction {
            Direction::None => Direction::Up,
            d => d,
        };
        Self {
            direction,
            distance: 40.0,
            duration: 0.5,
            stagger: 0.1,
            ..Self::base(trigger)
        }
    }

    /// Word-by-word reveal that flips each word up from below.
    pub fn words(trigger: TriggerConfig) -> Self {
        Self {
            direction: Direction::Up,
            distance: 20.0,
            rotate_x: 90.0,
            duration: 0.5,
            stagger: 0.05,
            ..Self::base(trigger)
        }
    }

    /// Character-by-character reveal.
    pub fn chars(trigger: TriggerConfig) -> Self {
        Self {
            direction: Direction::Up,
            distance: 50.0,
            duration: 0.4,
            stagger: 0.02,
            ..Self::base(trigger)
        }
    }

    pub fn fade(trigger: TriggerConfig) -> Self {
        Self {
            easing: EASE_OUT,
            ..Self::base(trigger)
        }
    }

    pub fn blur(trigger: TriggerConfig) -> Self {
        Self {
            blur: 20.0,
            duration: 0.8,
            easing: EASE_OUT,
            ..Self::base(trigger)
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Start slightly shrunk and grow into place.
    pub fn with_scale(mut self, hidden_scale: f64) -> Self {
        self.hidden_scale = hidden_scale;
        self
    }

    pub fn hidden_style(&self) -> RevealStyle {
        RevealStyle {
            opacity: 0.0,
            translate: self.direction.offset(self.distance),
            blur: self.blur,
            scale: self.hidden_scale,
            rotate_x: self.rotate_x,
        }
    }

    /// Seconds after the trigger at which child `index` starts moving.
    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// CSS `transition` value that lets the browser run child `index`.
    pub fn transition_css(&self, index: usize) -> String {
        let easing = self.easing.to_css();
        let delay = self.child_delay(index);
        ["opacity", "transform", "filter"]
            .iter()
            .map(|prop| format!("{prop} {}s {easing} {delay}s", self.duration))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Inline style for child `index` given the trigger state.
    pub fn child_css(&self, in_view: bool, index: usize) -> String {
        let style = if in_view {
            RevealStyle::VISIBLE
        } else {
            self.hidden_style()
        };
        format!("{} transition: {};", style.to_css(), self.transition_css(index))
    }
}

/// Split text for a word-stagger reveal.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// A solid mask that sweeps across content, uncovering it halfway through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideMask {
    pub direction: Direction,
    pub duration: f64,
    pub delay: f64,
    pub easing: CubicBezier,
    pub trigger: TriggerConfig,
}

impl SlideMask {
    pub fn new(direction: Direction, trigger: TriggerConfig) -> Self {
        let direction = match direction {
            Direction::None => Direction::Left,
            d => d,
        };
        Self {
            direction,
            duration: 0.8,
            delay: 0.0,
            easing: EASE_IN_OUT_STRONG,
            trigger,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Mask translation in percent of its own size: (start, end).
    pub fn sweep(&self) -> (Vec2, Vec2) {
        match self.direction {
            Direction::Left | Direction::None => {
                (Vec2::new(-100.0, 0.0), Vec2::new(100.0, 0.0))
            }
            Direction::Right => (Vec2::new(100.0, 0.0), Vec2::new(-100.0, 0.0)),
            Direction::Up => (Vec2::new(0.0, 100.0), Vec2::new(0.0, -100.0)),
            Direction::Down => (Vec2::new(0.0, -100.0), Vec2::new(0.0, 100.0)),
        }
    }

    /// Seconds after the trigger at which the covered content appears.
    pub fn content_reveal_at(&self) -> f64 {
        self.delay + self.duration * 0.5
    }

    pub fn mask_css(&self, in_view: bool) -> String {
        let (start, end) = self.sweep();
        let at = if in_view { end } else { start };
        format!(
            "transform: translate({}%, {}%); transition: transform {}s {} {}s;",
            at.x,
            at.y,
            self.duration,
            self.easing.to_css(),
            self.delay
        )
    }

    pub fn content_css(&self, in_view: bool) -> String {
        format!(
            "opacity: {}; transition: opacity 0.01s linear {}s;",
            if in_view { 1 } else { 0 },
            self.content_reveal_at()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn once() -> TriggerConfig {
        TriggerConfig::new(0.2, true)
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Up.offset(60.0), Vec2::new(0.0, 60.0));
        assert_eq!(Direction::Down.offset(60.0), Vec2::new(0.0, -60.0));
        assert_eq!(Direction::Left.offset(60.0), Vec2::new(60.0, 0.0));
        assert_eq!(Direction::Right.offset(60.0), Vec2::new(-60.0, 0.0));
        assert_eq!(Direction::None.offset(60.0), Vec2::ZERO);
    }

    #[test]
    fn hidden_until_triggered_then_transitions_after_delay() {
        let reveal = Reveal::slide(Direction::Up, once()).with_delay(0.3);
        let hidden = reveal.child_css(false, 0);
        assert!(hidden.starts_with(
            "opacity: 0; transform: translate3d(0px, 60px, 0) scale(1) rotateX(0deg);"
        ));
        let shown = reveal.child_css(true, 0);
        assert!(shown.starts_with("opacity: 1; transform: translate3d(0px, 0px, 0)"));
        assert!(shown.contains("opacity 0.6s cubic-bezier(0.25, 0.4, 0.25, 1) 0.3s"));
    }

    #[test]
    fn stagger_offsets_each_child() {
        let reveal = Reveal::stagger(Direction::Left, once()).with_delay(0.2);
        assert_eq!(reveal.child_delay(0), 0.2);
        assert!((reveal.child_delay(3) - 0.5).abs() < 1e-9);
        assert!(reveal.transition_css(2).contains("transform 0.5s"));
    }

    #[test]
    fn stagger_never_uses_no_direction() {
        assert_eq!(
            Reveal::stagger(Direction::None, once()).direction,
            Direction::Up
        );
    }

    #[test]
    fn variant_hidden_styles() {
        let blur = Reveal::blur(once()).hidden_style();
        assert_eq!(blur.blur, 20.0);
        assert_eq!(blur.translate, Vec2::ZERO);

        let words = Reveal::words(once()).hidden_style();
        assert_eq!(words.rotate_x, 90.0);
        assert_eq!(words.translate, Vec2::new(0.0, 20.0));

        let scaled = Reveal::slide(Direction::None, once()).with_scale(0.9);
        assert_eq!(scaled.hidden_style().scale, 0.9);
    }

    #[test]
    fn negative_timings_are_clamped() {
        let reveal = Reveal::fade(once()).with_duration(-1.0).with_delay(-0.5);
        assert_eq!(reveal.duration, 0.0);
        assert_eq!(reveal.child_delay(0), 0.0);
        assert!(reveal.transition_css(0).starts_with("opacity 0s "));
    }

    #[test]
    fn words_split_on_spaces() {
        assert_eq!(split_words("Hello  there world"), vec!["Hello", "there", "world"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn transition_css_carries_child_delay() {
        let reveal = Reveal::chars(once());
        let css = reveal.transition_css(5);
        assert!(css.contains("opacity 0.4s"));
        assert!(css.contains(" 0.1s"));
        assert!(reveal.child_css(false, 0).starts_with("opacity: 0;"));
        assert!(reveal.child_css(true, 0).starts_with("opacity: 1;"));
    }

    #[test]
    fn slide_mask_uncovers_halfway() {
        let mask = SlideMask::new(Direction::Right, once()).with_delay(0.2);
        assert!((mask.content_reveal_at() - 0.6).abs() < 1e-9);
        let (start, end) = mask.sweep();
        assert_eq!(start, Vec2::new(100.0, 0.0));
        assert_eq!(end, Vec2::new(-100.0, 0.0));
        assert!(mask.mask_css(true).contains("translate(-100%, 0%)"));
    }
}
