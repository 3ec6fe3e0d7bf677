use serde::{Deserialize, Serialize};

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing curve, handed to the browser
/// in `transition` declarations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Soft deceleration used by every reveal wrapper.
pub const EASE_OUT_SOFT: CubicBezier = CubicBezier::new(0.25, 0.4, 0.25, 1.0);
/// Symmetric curve used by the slide mask sweep.
pub const EASE_IN_OUT_STRONG: CubicBezier = CubicBezier::new(0.76, 0.0, 0.24, 1.0);
/// CSS `ease-out`.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        EASE_OUT_SOFT
    }
}

/// `1 - (1 - p)^4`, used by the count-up counter.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Exponential ease-out for anchor glides: `min(1, 1.001 - 2^(-10t))`.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn bezier_renders_as_css_timing_function() {
        assert_eq!(EASE_OUT_SOFT.to_css(), "cubic-bezier(0.25, 0.4, 0.25, 1)");
        assert_eq!(EASE_IN_OUT_STRONG.to_css(), "cubic-bezier(0.76, 0, 0.24, 1)");
        assert_eq!(CubicBezier::default(), EASE_OUT_SOFT);
    }

    #[test]
    fn quart_and_expo_shapes() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(close(ease_out_quart(0.5), 0.9375));
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.0).abs() < 0.01);
        assert!(ease_out_expo(0.3) > 0.8);
    }
}
