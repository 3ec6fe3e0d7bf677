use super::Vec2;

/// Stiffness and damping of a unit-mass spring.
///
/// `rest_delta` and `rest_speed` decide when the spring counts as settled
/// and snaps onto its target. They are absolute, so springs over small
/// output ranges need smaller values than the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: REST_DELTA,
            rest_speed: REST_SPEED,
        }
    }

    /// Rest thresholds proportional to an output range `span` units wide.
    pub fn resting_for_span(self, span: f64) -> Self {
        let rest = (span.abs() * REST_FRACTION).max(MIN_REST);
        Self {
            rest_delta: rest,
            rest_speed: rest,
            ..self
        }
    }
}

/// Smoothing used by every scroll-linked transform.
pub const SCROLL_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0);
/// Snappier spring used when a magnetic element is released.
pub const MAGNETIC_SPRING: SpringConfig = SpringConfig::new(150.0, 15.0);

const STEP: f64 = 1.0 / 240.0;
// a frame longer than this is treated as a stall, not as elapsed time
const MAX_FRAME: f64 = 0.064;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;
const REST_FRACTION: f64 = 1e-3;
const MIN_REST: f64 = 1e-6;

/// A damped second-order filter that chases a target value.
///
/// Integration is semi-implicit Euler on fixed sub-steps so the result does
/// not depend on the frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    // target moved since the last step
    retargeted: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            retargeted: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.retargeted = true;
        }
    }

    /// Jump straight to `value` with no motion left.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.retargeted = false;
    }

    pub fn is_settled(&self) -> bool {
        !self.retargeted && self.within_rest()
    }

    fn within_rest(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance by `dt` seconds and return the new value.
    ///
    /// A step that follows a target change always integrates; the spring
    /// only snaps to rest on later steps.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.value == self.target && self.velocity == 0.0 {
            self.retargeted = false;
            return self.value;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(STEP);
            let force = -self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if !self.retargeted && self.within_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.retargeted = false;
        self.value
    }
}

/// Two independent springs sharing one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap(&mut self, value: Vec2) {
        self.x.snap(value.x);
        self.y.snap(value.y);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    pub fn step(&mut self, dt: f64) -> Vec2 {
        Vec2::new(self.x.step(dt), self.y.step(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f64) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn settles_on_target() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(100.0);
        run(&mut spring, 3.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn moves_gradually_toward_target() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(50.0);
        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.0 && first < 50.0);
        let second = spring.step(1.0 / 60.0);
        assert!(second > first);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut spring = Spring::new(MAGNETIC_SPRING, 0.0);
        spring.set_target(10.0);
        let mut max: f64 = 0.0;
        for _ in 0..120 {
            max = max.max(spring.step(1.0 / 60.0));
        }
        assert!(max > 10.0);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(100.0);
        let v = spring.step(10.0);
        assert!(v < 100.0);
    }

    #[test]
    fn snap_clears_motion() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(5.0);
        spring.step(0.016);
        spring.snap(2.0);
        assert!(spring.is_settled());
        assert_eq!(spring.step(0.016), 2.0);
    }

    #[test]
    fn small_target_steps_are_still_smoothed() {
        let mut spring = Spring::new(SCROLL_SPRING.resting_for_span(0.05), 0.95);
        spring.set_target(0.958);
        assert!(!spring.is_settled());
        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.95 && first < 0.958);
        let second = spring.step(1.0 / 60.0);
        assert!(second > first && second < 0.958);
        run(&mut spring, 5.0);
        assert_eq!(spring.value(), 0.958);
    }

    #[test]
    fn default_thresholds_never_skip_the_first_step() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.30);
        spring.set_target(0.305);
        let first = spring.step(1.0 / 60.0);
        assert!(first > 0.30 && first < 0.305);
    }

    #[test]
    fn resting_thresholds_follow_the_span() {
        let small = SCROLL_SPRING.resting_for_span(0.05);
        assert!(small.rest_delta < 1e-4);
        let wide = SCROLL_SPRING.resting_for_span(360.0);
        assert!((wide.rest_delta - 0.36).abs() < 1e-12);
        assert_eq!(wide.stiffness, SCROLL_SPRING.stiffness);
        assert!(SCROLL_SPRING.resting_for_span(0.0).rest_delta > 0.0);
    }

    #[test]
    fn two_axis_spring_returns_home() {
        let mut spring = Spring2::new(MAGNETIC_SPRING, Vec2::ZERO);
        spring.snap(Vec2::new(20.0, -8.0));
        spring.set_target(Vec2::ZERO);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
        }
        assert_eq!(spring.value(), Vec2::ZERO);
    }
}
