use crate::geometry::Point;
use crate::renderer;
use crate::surface::{Color, Surface, BLACK};
use crate::tools::ToolMode;

/// Largest stroke width the style inputs accept
pub const MAX_STROKE_WIDTH: u32 = 30;

/// Style parameters applied to a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: u32,
    /// Only meaningful for rectangles and circles
    pub filled: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 2,
            filled: false,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: u32, filled: bool) -> Self {
        Self {
            color,
            width: clamp_width(width),
            filled,
        }
    }
}

/// Keep a stroke width inside `1..=MAX_STROKE_WIDTH`
pub fn clamp_width(width: u32) -> u32 {
    width.clamp(1, MAX_STROKE_WIDTH)
}

/// The in-progress gesture between pointer-down and pointer-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeIntent {
    mode: ToolMode,
    anchor: Point,
    current: Point,
    style: StrokeStyle,
}

impl StrokeIntent {
    /// Start a gesture at `anchor` with a snapshot of the live style
    pub fn new(mode: ToolMode, anchor: Point, style: StrokeStyle) -> Self {
        Self {
            mode,
            anchor,
            current: anchor,
            style,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn move_to(&mut self, point: Point) {
        self.current = point;
    }

    /// Draw the gesture from its anchor to `endpoint` onto `surface`
    pub fn render_onto(&self, surface: &mut Surface, endpoint: Point, background: Color) {
        renderer::render(surface, self.mode, self.anchor, endpoint, &self.style, background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(StrokeStyle::new(BLACK, 0, false).width, 1);
        assert_eq!(StrokeStyle::new(BLACK, 99, false).width, MAX_STROKE_WIDTH);
        assert_eq!(StrokeStyle::new(BLACK, 7, false).width, 7);
    }

    #[test]
    fn test_intent_tracks_pointer() {
        let mut intent = StrokeIntent::new(ToolMode::Line, Point::new(1, 2), StrokeStyle::default());
        assert_eq!(intent.current(), Point::new(1, 2));
        intent.move_to(Point::new(9, 9));
        assert_eq!(intent.anchor(), Point::new(1, 2));
        assert_eq!(intent.current(), Point::new(9, 9));
    }
}
