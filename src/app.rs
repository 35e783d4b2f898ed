use egui::{Rect, TextureId};

use crate::command::Action;
use crate::config::CanvasConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::session::{DrawSession, Flow};
use crate::state::FileStore;
use crate::texture_manager::CanvasTexture;

/// The drawing window: feeds egui input into a [`DrawSession`] and shows its surface
pub struct PaintApp {
    session: DrawSession<FileStore>,
    input: InputHandler,
    texture: CanvasTexture,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &CanvasConfig) -> Self {
        Self::from_session(DrawSession::from_config(config, FileStore))
    }

    pub fn from_session(session: DrawSession<FileStore>) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
        }
    }

    pub fn session(&self) -> &DrawSession<FileStore> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawSession<FileStore> {
        &mut self.session
    }

    /// Run a toolbar action, closing the window if it ends the session
    pub fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        let flow = self.session.dispatch(action);
        self.follow(ctx, flow);
    }

    /// Translate this frame's input and feed it to the session
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        let size = self.session.surface().dimensions();
        for event in self.input.process_input(ctx, canvas_rect, size) {
            let flow = self.session.handle_event(event);
            self.follow(ctx, flow);
            if flow == Flow::Quit {
                break;
            }
        }
    }

    /// Texture of the surface currently on display
    pub fn canvas_texture_id(&mut self, ctx: &egui::Context) -> TextureId {
        self.texture
            .update(ctx, self.session.display_surface(), self.session.revision())
    }

    fn follow(&self, ctx: &egui::Context, flow: Flow) {
        if flow == Flow::Quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }

    /// Auto-save on the way out, whichever way the window was closed
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.session.exit();
    }
}
