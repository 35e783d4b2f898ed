use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::surface::Surface;

/// Keeps the displayed surface uploaded as a single GPU texture.
///
/// The texture is only re-uploaded when the session revision changes.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    revision: Option<u64>,
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("uploaded", &self.handle.is_some())
            .field("revision", &self.revision)
            .finish()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload `surface` if `revision` differs from what is on the GPU
    pub fn update(&mut self, ctx: &Context, surface: &Surface, revision: u64) -> TextureId {
        let image = match (&self.handle, self.revision) {
            (Some(handle), Some(current)) if current == revision => return handle.id(),
            _ => surface.to_color_image(),
        };

        let handle = match self.handle.as_mut() {
            Some(handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle.clone()
            }
            None => {
                let handle = ctx.load_texture("canvas", image, TextureOptions::NEAREST);
                self.handle = Some(handle.clone());
                handle
            }
        };
        self.revision = Some(revision);
        handle.id()
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}
