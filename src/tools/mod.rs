use serde::{Deserialize, Serialize};

/// The closed set of drawing tools.
///
/// Every tool is a two-point gesture: the anchor is where the pointer went
/// down, the endpoint is where it currently is (or was released).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    /// Axis-aligned box spanning anchor and endpoint
    #[default]
    Rectangle,
    /// Circle centred on the anchor, passing through the endpoint
    Ellipse,
    /// Straight segment
    Line,
    /// Straight segment painted in the background colour
    Eraser,
}

impl ToolMode {
    pub const ALL: [ToolMode; 4] = [
        ToolMode::Rectangle,
        ToolMode::Ellipse,
        ToolMode::Line,
        ToolMode::Eraser,
    ];

    /// Return the name of the tool
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Circle",
            Self::Line => "Line",
            Self::Eraser => "Eraser",
        }
    }

    /// Whether the fill flag changes what this tool draws
    pub fn supports_fill(self) -> bool {
        matches!(self, Self::Rectangle | Self::Ellipse)
    }
}

impl std::fmt::Display for ToolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
