use image::Rgb;

use crate::stroke::{clamp_width, StrokeStyle};
use crate::surface::Color;
use crate::tools::ToolMode;

/// The live tool mode and style, edited by shortcuts and the style inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    mode: ToolMode,
    style: StrokeStyle,
}

impl SessionConfig {
    pub fn new(mode: ToolMode, style: StrokeStyle) -> Self {
        Self { mode, style }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    /// Snapshot of the current style
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Set the colour from three independent channels
    pub fn set_channels(&mut self, r: u8, g: u8, b: u8) {
        self.style.color = Rgb([r, g, b]);
    }

    pub fn width(&self) -> u32 {
        self.style.width
    }

    /// Out-of-range widths are clamped
    pub fn set_width(&mut self, width: u32) {
        self.style.width = clamp_width(width);
    }

    pub fn filled(&self) -> bool {
        self.style.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.style.filled = filled;
    }

    /// The status line drawn over the canvas
    pub fn hud_text(&self) -> String {
        format!(
            "Mode: {} | Fill: {}",
            self.mode.name().to_uppercase(),
            if self.style.filled { "ON" } else { "OFF" }
        )
    }
}
