use crate::command::Action;
use crate::stroke::MAX_STROKE_WIDTH;
use crate::tools::ToolMode;
use crate::PaintApp;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_mode = app.session().config().mode();
            for mode in ToolMode::ALL {
                if ui.selectable_label(active_mode == mode, mode.name()).clicked() {
                    log::info!("Tool selected from UI: {}", mode);
                    app.dispatch(ctx, Action::SelectMode(mode));
                }
            }
            ui.separator();

            // Style inputs are read every frame, like trackbars
            let config = app.session_mut().config_mut();
            let [mut r, mut g, mut b] = config.color().0;
            let mut width = config.width();
            let mut filled = config.filled();

            ui.add(egui::Slider::new(&mut r, 0..=255).text("R"));
            ui.add(egui::Slider::new(&mut g, 0..=255).text("G"));
            ui.add(egui::Slider::new(&mut b, 0..=255).text("B"));
            ui.add(egui::Slider::new(&mut width, 1..=MAX_STROKE_WIDTH).text("Thickness"));
            ui.checkbox(&mut filled, "Fill");

            config.set_channels(r, g, b);
            config.set_width(width);
            config.set_filled(filled);

            ui.separator();

            ui.horizontal(|ui| {
                let history = app.session().history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.dispatch(ctx, Action::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.dispatch(ctx, Action::Redo);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.dispatch(ctx, Action::Clear);
                }
                if ui.button("Save").clicked() {
                    app.dispatch(ctx, Action::Save);
                }
            });

            ui.separator();

            let history = app.session().history();
            ui.label(format!("Undo stack size: {}", history.undo_depth()));
            ui.label(format!("Redo stack size: {}", history.redo_depth()));

            ui.separator();
            ui.collapsing("Shortcuts", |ui| {
                for line in app.session().bindings().describe() {
                    ui.label(line);
                }
            });
        });
}
