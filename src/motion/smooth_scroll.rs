use super::{easing::ease_out_expo, lerp};

pub const DEFAULT_DURATION: f64 = 1.2;
/// Height of the fixed navbar, kept clear above every anchor target.
pub const HEADER_OFFSET: f64 = -80.0;
/// Pixels per line for wheels that report in lines.
const LINE_HEIGHT: f64 = 16.0;

/// Unit a wheel event reports its delta in, as `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelUnit {
    Pixel,
    Line,
    Page,
}

impl WheelUnit {
    pub fn from_delta_mode(mode: u32) -> Self {
        match mode {
            1 => WheelUnit::Line,
            2 => WheelUnit::Page,
            _ => WheelUnit::Pixel,
        }
    }

    /// `delta` converted to pixels.
    pub fn to_pixels(self, delta: f64, viewport_height: f64) -> f64 {
        match self {
            WheelUnit::Pixel => delta,
            WheelUnit::Line => delta * LINE_HEIGHT,
            WheelUnit::Page => delta * viewport_height,
        }
    }
}

/// Element id targeted by an in-page link, if `href` is one.
///
/// A bare `#` links to nothing.
pub fn anchor_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Drives the page scroll position toward an anchor over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroller {
    duration: f64,
    offset: f64,
    glide: Option<Glide>,
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, HEADER_OFFSET)
    }
}

impl SmoothScroller {
    pub fn new(duration: f64, offset: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            offset,
            glide: None,
        }
    }

    /// Where the glide will stop, if one is running.
    pub fn destination(&self) -> Option<f64> {
        self.glide.map(|g| g.to)
    }

    /// Start a glide from `current` toward a target whose top edge sits at
    /// `target_top` in document coordinates. Replaces any running glide.
    pub fn scroll_to(&mut self, current: f64, target_top: f64, max_scroll: f64) -> f64 {
        let to = (target_top + self.offset).clamp(0.0, max_scroll.max(0.0));
        self.glide = Some(Glide {
            from: current,
            to,
            elapsed: 0.0,
        });
        to
    }

    /// Push the destination by `delta` pixels of wheel travel.
    ///
    /// Deltas arriving mid-glide add onto the running destination, so a
    /// burst of wheel ticks becomes one glide. The new glide starts from
    /// `current` with the full duration.
    pub fn wheel(&mut self, current: f64, delta: f64, max_scroll: f64) -> f64 {
        let base = self.destination().unwrap_or(current);
        let to = (base + delta).clamp(0.0, max_scroll.max(0.0));
        self.glide = Some(Glide {
            from: current,
            to,
            elapsed: 0.0,
        });
        to
    }

    pub fn cancel(&mut self) {
        self.glide = None;
    }

    /// Advance by `dt` seconds and return the scroll position to apply, or
    /// `None` when idle. The final frame lands exactly on the destination.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        let glide = self.glide.as_mut()?;
        glide.elapsed += dt.max(0.0);
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (glide.elapsed / self.duration).min(1.0)
        };
        if t >= 1.0 {
            let to = glide.to;
            self.glide = None;
            return Some(to);
        }
        Some(lerp(glide.from, glide.to, ease_out_expo(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("#projects"), Some("projects"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/projects/one"), None);
    }

    #[test]
    fn glide_lands_under_header() {
        let mut scroller = SmoothScroller::default();
        let to = scroller.scroll_to(0.0, 1080.0, 5000.0);
        assert_eq!(to, 1000.0);

        let mut last = 0.0;
        let mut frames = 0;
        while let Some(y) = scroller.tick(1.0 / 60.0) {
            assert!(y >= last);
            last = y;
            frames += 1;
        }
        assert_eq!(last, 1000.0);
        assert!((70..=74).contains(&frames));
        assert_eq!(scroller.destination(), None);
    }

    #[test]
    fn decelerates() {
        let mut scroller = SmoothScroller::default();
        scroller.scroll_to(0.0, 1080.0, 5000.0);
        let early = scroller.tick(0.1).unwrap_or_default();
        assert!(early > 400.0);
    }

    #[test]
    fn destination_is_clamped_to_page() {
        let mut scroller = SmoothScroller::default();
        assert_eq!(scroller.scroll_to(500.0, 20.0, 3000.0), 0.0);
        assert_eq!(scroller.scroll_to(500.0, 9000.0, 3000.0), 3000.0);
        assert_eq!(scroller.destination(), Some(3000.0));
    }

    #[test]
    fn wheel_ticks_accumulate_into_one_glide() {
        let mut scroller = SmoothScroller::default();
        assert_eq!(scroller.wheel(200.0, 100.0, 3000.0), 300.0);
        let mid = scroller.tick(0.05).unwrap_or_default();
        assert!(mid > 200.0 && mid < 300.0);
        assert_eq!(scroller.wheel(mid, 100.0, 3000.0), 400.0);
        assert_eq!(scroller.wheel(mid, -50.0, 3000.0), 350.0);

        let mut last = mid;
        while let Some(y) = scroller.tick(1.0 / 60.0) {
            last = y;
        }
        assert_eq!(last, 350.0);
    }

    #[test]
    fn wheel_destination_stays_on_the_page() {
        let mut scroller = SmoothScroller::default();
        assert_eq!(scroller.wheel(2950.0, 120.0, 3000.0), 3000.0);
        assert_eq!(scroller.wheel(2990.0, 120.0, 3000.0), 3000.0);
        scroller.cancel();
        assert_eq!(scroller.wheel(30.0, -120.0, 3000.0), 0.0);
        assert_eq!(scroller.wheel(10.0, 40.0, -5.0), 0.0);
    }

    #[test]
    fn wheel_units_become_pixels() {
        assert_eq!(WheelUnit::from_delta_mode(0).to_pixels(53.0, 800.0), 53.0);
        assert_eq!(WheelUnit::from_delta_mode(1).to_pixels(3.0, 800.0), 48.0);
        assert_eq!(WheelUnit::from_delta_mode(2).to_pixels(-1.0, 800.0), -800.0);
    }

    #[test]
    fn cancelled_glide_is_idle() {
        let mut scroller = SmoothScroller::default();
        scroller.scroll_to(0.0, 800.0, 3000.0);
        scroller.cancel();
        assert_eq!(scroller.tick(0.016), None);
    }
}
