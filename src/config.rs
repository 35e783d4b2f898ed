use std::fs;
use std::path::{Path, PathBuf};

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::{BlankCanvas, SessionConfig};
use crate::stroke::StrokeStyle;
use crate::tools::ToolMode;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "raster_paint.json";

/// Start-up configuration of the drawing canvas.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Size of the blank canvas
    pub width: u32,
    pub height: u32,
    /// Colour of a blank or cleared canvas and of the eraser
    pub background: [u8; 3],
    /// Image to open at start-up
    pub image_path: Option<PathBuf>,
    /// Size an opened image is resampled to
    pub load_size: Option<[u32; 2]>,
    pub save_path: PathBuf,
    pub autosave_path: PathBuf,
    pub style: StyleConfig,
}

/// Initial tool and style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub mode: ToolMode,
    pub color: [u8; 3],
    pub width: u32,
    pub filled: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            background: [255, 255, 255],
            image_path: Some(PathBuf::from("image.jpg")),
            load_size: Some([800, 600]),
            save_path: PathBuf::from("drawing_saved.png"),
            autosave_path: PathBuf::from("drawing_autosave.png"),
            style: StyleConfig::default(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mode: ToolMode::Rectangle,
            color: [0, 0, 0],
            width: 2,
            filled: false,
        }
    }
}

impl CanvasConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load `path` if given, else the default file if present, else defaults.
    /// A broken file is logged and replaced by defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Using config {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn background_color(&self) -> Rgb<u8> {
        Rgb(self.background)
    }

    pub fn blank_canvas(&self) -> BlankCanvas {
        BlankCanvas {
            width: self.width,
            height: self.height,
            background: self.background_color(),
        }
    }

    pub fn load_size(&self) -> Option<(u32, u32)> {
        self.load_size.map(|[w, h]| (w, h))
    }

    /// The session style the canvas starts with
    pub fn session_config(&self) -> SessionConfig {
        let style = &self.style;
        SessionConfig::new(
            style.mode,
            StrokeStyle::new(Rgb(style.color), style.width, style.filled),
        )
    }
}
