#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod texture_manager;
pub mod tools;

pub use app::PaintApp;
pub use command::{Action, History, KeyBindings};
pub use config::CanvasConfig;
pub use error::{CodecError, ConfigError, HistoryError, PersistenceError};
pub use geometry::Point;
pub use input::{InputEvent, InputHandler};
pub use session::{DrawSession, Flow};
pub use state::{DrawState, FileStore, ImageStore, MemoryStore, Persistence, SessionConfig};
pub use stroke::{StrokeIntent, StrokeStyle};
pub use surface::{Color, Surface};
pub use tools::ToolMode;
