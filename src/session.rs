use std::path::PathBuf;

use crate::command::{Action, History, KeyBindings};
use crate::config::CanvasConfig;
use crate::error::PersistenceResult;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::state::{DrawState, ImageStore, Persistence, SessionConfig};
use crate::stroke::StrokeIntent;
use crate::surface::{Color, Surface};
use crate::tools::ToolMode;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The drawing canvas and everything that edits it.
///
/// A session owns the committed surface, the undo/redo history, the live style,
/// and the gesture state. Events are applied strictly in arrival order through
/// [`DrawSession::handle_event`]; nothing here is shared or global.
#[derive(Debug)]
pub struct DrawSession<S: ImageStore> {
    surface: Surface,
    /// Throwaway copy shown while dragging; never committed
    preview: Option<Surface>,
    history: History,
    config: SessionConfig,
    state: DrawState,
    bindings: KeyBindings,
    /// Actions requested mid-drag, applied after the commit
    deferred: Vec<Action>,
    persistence: Persistence<S>,
    background: Color,
    revision: u64,
    status: Option<String>,
    exited: bool,
}

impl<S: ImageStore> DrawSession<S> {
    pub fn new(
        surface: Surface,
        config: SessionConfig,
        persistence: Persistence<S>,
        background: Color,
    ) -> Self {
        Self {
            surface,
            preview: None,
            history: History::new(),
            config,
            state: DrawState::Idle,
            bindings: KeyBindings::default(),
            deferred: Vec::new(),
            persistence,
            background,
            revision: 0,
            status: None,
            exited: false,
        }
    }

    /// Build a session from the canvas config, opening its start-up image if there is one
    pub fn from_config(canvas: &CanvasConfig, store: S) -> Self {
        let persistence = Persistence::new(store, &canvas.save_path, &canvas.autosave_path);
        let surface = persistence.load_or_blank(
            canvas.image_path.as_deref(),
            canvas.load_size(),
            canvas.blank_canvas(),
        );
        Self::new(
            surface,
            canvas.session_config(),
            persistence,
            canvas.background_color(),
        )
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// The committed surface
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// What should be on screen: the live preview while dragging, else the committed surface
    pub fn display_surface(&self) -> &Surface {
        self.preview.as_ref().unwrap_or(&self.surface)
    }

    pub fn preview(&self) -> Option<&Surface> {
        self.preview.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Style inputs write straight into the live config
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Actions waiting for the current drag to end
    pub fn deferred(&self) -> &[Action] {
        &self.deferred
    }

    /// Bumped whenever the displayed pixels may have changed
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Last user-facing message, e.g. "Undo" or a save failure
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Apply one event from the event pump
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::PointerDown(point) => {
                self.pointer_down(point);
                Flow::Continue
            }
            InputEvent::PointerMove(point) => {
                self.pointer_move(point);
                Flow::Continue
            }
            InputEvent::PointerUp(point) => self.pointer_up(point),
            InputEvent::Key(key) => match self.bindings.action_for(key) {
                Some(action) => self.dispatch(action),
                None => Flow::Continue,
            },
        }
    }

    /// Request an action. While dragging it is queued until the gesture commits.
    pub fn dispatch(&mut self, action: Action) -> Flow {
        if self.state.is_dragging() {
            log::debug!("Deferring {:?} until the drag ends", action);
            self.deferred.push(action);
            return Flow::Continue;
        }
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::SelectMode(mode) => self.select_mode(mode),
            Action::Clear => self.clear_canvas(),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Save => {
                // failures are already reported through the status line
                let _ = self.save();
            }
            Action::Quit => {
                self.exit();
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn pointer_down(&mut self, point: Point) {
        if self.state.is_dragging() {
            log::trace!("Ignoring pointer-down at {:?} while dragging", point);
            return;
        }

        self.history.checkpoint(&self.surface);
        let intent = StrokeIntent::new(self.config.mode(), point, self.config.style());
        log::debug!("Drag start: {} at {:?}", intent.mode(), point);
        self.state = DrawState::Dragging(intent);
    }

    fn pointer_move(&mut self, point: Point) {
        let Some(intent) = self.state.intent_mut() else {
            return;
        };
        intent.move_to(point);

        let mut preview = self.surface.clone();
        intent.render_onto(&mut preview, point, self.background);
        self.preview = Some(preview);
        self.revision += 1;
    }

    fn pointer_up(&mut self, point: Point) -> Flow {
        let Some(intent) = self.state.finish() else {
            return Flow::Continue;
        };

        intent.render_onto(&mut self.surface, point, self.background);
        log::debug!(
            "Committed {} from {:?} to {:?}",
            intent.mode(),
            intent.anchor(),
            point
        );
        self.preview = None;
        self.revision += 1;

        for action in std::mem::take(&mut self.deferred) {
            if self.apply(action) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn select_mode(&mut self, mode: ToolMode) {
        self.config.set_mode(mode);
        log::info!("Mode: {}", mode);
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    /// Replace the canvas with the background colour, as an undoable edit
    pub fn clear_canvas(&mut self) {
        self.history.checkpoint(&self.surface);
        self.surface.fill(self.background);
        self.revision += 1;
        log::info!("Canvas cleared");
        self.set_status("Canvas cleared".to_owned());
    }

    /// Step back one edit; an empty history is logged and ignored
    pub fn undo(&mut self) {
        match self.history.undo(&self.surface) {
            Ok(previous) => {
                self.surface = previous;
                self.revision += 1;
                log::info!("Undo");
                self.set_status("Undo".to_owned());
            }
            Err(err) => log::warn!("Undo ignored: {err}"),
        }
    }

    /// Step forward one undone edit; an empty history is logged and ignored
    pub fn redo(&mut self) {
        match self.history.redo(&self.surface) {
            Ok(next) => {
                self.surface = next;
                self.revision += 1;
                log::info!("Redo");
                self.set_status("Redo".to_owned());
            }
            Err(err) => log::warn!("Redo ignored: {err}"),
        }
    }

    /// Write the committed surface to the save target.
    /// A failure is reported in the status line and the session carries on.
    pub fn save(&mut self) -> PersistenceResult<PathBuf> {
        let result = self.persistence.save(&self.surface);
        match &result {
            Ok(path) => self.set_status(format!("Saved: {}", path.display())),
            Err(err) => {
                log::error!("Save failed: {err}");
                self.set_status(format!("Save failed: {err}"));
            }
        }
        result
    }

    /// End the session: auto-save the committed surface, once.
    ///
    /// A drag still in progress is abandoned rather than committed. Later calls do nothing.
    pub fn exit(&mut self) {
        if self.exited {
            return;
        }
        self.exited = true;

        if self.state.finish().is_some() {
            log::debug!("Abandoning drag in progress at exit");
            self.preview = None;
            self.deferred.clear();
        }

        if let Err(err) = self.persistence.autosave(&self.surface) {
            log::error!("Auto-save failed: {err}");
        }
    }
}
