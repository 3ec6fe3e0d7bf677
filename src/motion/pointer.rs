use super::{
    spring::{Spring2, SpringConfig},
    Rect, Vec2,
};

/// Offset of an element that leans toward the pointer.
///
/// `strength` 0 keeps it still, 1 puts its centre under the pointer.
pub fn magnetic_offset(rect: &Rect, pointer: Vec2, strength: f64) -> Vec2 {
    (pointer - rect.center()) * strength.clamp(0.0, 1.0)
}

/// Hover state of a magnetic button.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnetic {
    strength: f64,
    hovering: bool,
    spring: Spring2,
}

impl Magnetic {
    pub fn new(strength: f64, release: SpringConfig) -> Self {
        Self {
            strength,
            hovering: false,
            spring: Spring2::new(release, Vec2::ZERO),
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn offset(&self) -> Vec2 {
        self.spring.value()
    }

    /// Pointer moved to `pointer`; ignored when it is outside `rect`.
    pub fn pointer_move(&mut self, rect: &Rect, pointer: Vec2) -> Vec2 {
        if !rect.contains(pointer) {
            return self.offset();
        }
        self.hovering = true;
        let offset = magnetic_offset(rect, pointer, self.strength);
        self.spring.snap(offset);
        offset
    }

    pub fn pointer_leave(&mut self) {
        self.hovering = false;
        self.spring.set_target(Vec2::ZERO);
    }

    /// True while the element is still travelling home.
    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }

    pub fn tick(&mut self, dt: f64) -> Vec2 {
        self.spring.step(dt)
    }
}

/// 3D card tilt in degrees as `(rotate_x, rotate_y)`.
pub fn card_tilt(rect: &Rect, pointer: Vec2) -> (f64, f64) {
    let local = pointer - Vec2::new(rect.left, rect.top);
    let center = Vec2::new(rect.width / 2.0, rect.height / 2.0);
    ((local.y - center.y) / 10.0, (center.x - local.x) / 10.0)
}

/// Media query under which the replacement cursor runs and the native
/// one is hidden.
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

/// Selector for elements that always count as interactive, matched against
/// the hovered element and its ancestors.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

/// Whether the hovered element should enlarge the custom cursor.
pub fn is_interactive(inside_control: bool, cursor_style: &str) -> bool {
    inside_control || cursor_style == "pointer"
}

/// State of the replacement cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub position: Vec2,
    pub visible: bool,
    pub over_interactive: bool,
}

impl CursorState {
    pub const POINTER_SCALE: f64 = 1.5;

    pub fn moved(&mut self, position: Vec2) {
        self.position = position;
        self.visible = true;
    }

    pub fn left_window(&mut self) {
        self.visible = false;
    }

    pub fn entered_window(&mut self) {
        self.visible = true;
    }

    pub fn hovered(&mut self, inside_control: bool, cursor_style: &str) {
        self.over_interactive = is_interactive(inside_control, cursor_style);
    }

    pub fn scale(&self) -> f64 {
        if self.over_interactive {
            Self::POINTER_SCALE
        } else {
            1.0
        }
    }

    fn translate(&self) -> String {
        format!("translate({}px, {}px)", self.position.x, self.position.y)
    }

    /// Inline style of the dot that sits under the pointer.
    pub fn dot_css(&self) -> String {
        format!(
            "transform: {} scale({}); opacity: {};",
            self.translate(),
            self.scale(),
            if self.visible { 1.0 } else { 0.0 },
        )
    }

    /// Inline style of the ring that trails the dot at half opacity.
    pub fn ring_css(&self) -> String {
        format!(
            "transform: {} scale({}); opacity: {}; border-width: {}px;",
            self.translate(),
            self.scale(),
            if self.visible { 0.5 } else { 0.0 },
            if self.over_interactive { 2 } else { 1 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::spring::MAGNETIC_SPRING;

    fn button() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 60.0)
    }

    #[test]
    fn offset_scales_with_strength() {
        let rect = button();
        let pointer = rect.center() + Vec2::new(40.0, 0.0);
        assert_eq!(magnetic_offset(&rect, pointer, 0.5), Vec2::new(20.0, 0.0));
        assert_eq!(magnetic_offset(&rect, pointer, 0.0), Vec2::ZERO);
        assert_eq!(magnetic_offset(&rect, pointer, 1.0), Vec2::new(40.0, 0.0));
    }

    #[test]
    fn leaving_springs_back_home() {
        let rect = button();
        let mut magnetic = Magnetic::new(0.5, MAGNETIC_SPRING);
        let offset = magnetic.pointer_move(&rect, rect.center() + Vec2::new(40.0, 0.0));
        assert_eq!(offset, Vec2::new(20.0, 0.0));
        assert!(magnetic.is_hovering());

        magnetic.pointer_leave();
        assert!(magnetic.is_animating());
        let first = magnetic.tick(1.0 / 60.0);
        assert!(first.x < 20.0);
        for _ in 0..600 {
            magnetic.tick(1.0 / 60.0);
        }
        assert!(!magnetic.is_animating());
        assert_eq!(magnetic.offset(), Vec2::ZERO);
    }

    #[test]
    fn moves_outside_are_ignored() {
        let rect = button();
        let mut magnetic = Magnetic::new(0.3, MAGNETIC_SPRING);
        assert_eq!(magnetic.pointer_move(&rect, Vec2::new(0.0, 0.0)), Vec2::ZERO);
        assert!(!magnetic.is_hovering());
    }

    #[test]
    fn tilt_follows_pointer() {
        let rect = Rect::new(0.0, 0.0, 300.0, 400.0);
        assert_eq!(card_tilt(&rect, Vec2::new(150.0, 200.0)), (0.0, 0.0));
        assert_eq!(card_tilt(&rect, Vec2::new(0.0, 400.0)), (20.0, 15.0));
    }

    #[test]
    fn cursor_grows_over_controls() {
        let mut cursor = CursorState::default();
        cursor.moved(Vec2::new(5.0, 5.0));
        assert!(cursor.visible);
        // a span inside a button keeps the default cursor style
        cursor.hovered(true, "default");
        assert_eq!(cursor.scale(), 1.5);
        cursor.hovered(false, "pointer");
        assert_eq!(cursor.scale(), 1.5);
        cursor.hovered(false, "text");
        assert_eq!(cursor.scale(), 1.0);
        cursor.left_window();
        assert!(!cursor.visible);
    }

    #[test]
    fn trailing_ring_grows_and_thickens_over_controls() {
        let mut cursor = CursorState::default();
        cursor.moved(Vec2::new(40.0, 12.0));
        assert_eq!(
            cursor.ring_css(),
            "transform: translate(40px, 12px) scale(1); opacity: 0.5; border-width: 1px;"
        );
        cursor.hovered(true, "auto");
        assert_eq!(
            cursor.ring_css(),
            "transform: translate(40px, 12px) scale(1.5); opacity: 0.5; border-width: 2px;"
        );
        assert_eq!(
            cursor.dot_css(),
            "transform: translate(40px, 12px) scale(1.5); opacity: 1;"
        );
        cursor.left_window();
        assert!(cursor.ring_css().contains("opacity: 0;"));
        assert!(cursor.dot_css().ends_with("opacity: 0;"));
    }
}
