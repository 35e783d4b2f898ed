mod editor_state;
mod persistence;
mod session_config;

pub use editor_state::DrawState;
pub use persistence::{BlankCanvas, FileStore, ImageStore, MemoryStore, Persistence};
pub use session_config::SessionConfig;
