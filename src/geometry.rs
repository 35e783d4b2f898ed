use egui::{Pos2, Rect};

/// A surface-local pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp into `0..width` x `0..height`
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        let max_x = width.saturating_sub(1).min(i32::MAX as u32) as i32;
        let max_y = height.saturating_sub(1).min(i32::MAX as u32) as i32;
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
        }
    }

    /// Map a screen position into the pixel grid of a surface displayed 1:1 at `canvas_rect`
    pub fn from_screen(pos: Pos2, canvas_rect: Rect) -> Self {
        let local = pos - canvas_rect.min;
        Self {
            x: local.x.floor() as i32,
            y: local.y.floor() as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Distance from `p` to the segment `a`-`b`, all in pixel-centre space
pub fn distance_to_segment(p: (f32, f32), a: Point, b: Point) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (bx, by) = (b.x as f32, b.y as f32);
    let (vx, vy) = (bx - ax, by - ay);
    let len_sq = vx * vx + vy * vy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - ax) * vx + (p.1 - ay) * vy) / len_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (ax + t * vx, ay + t * vy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}
