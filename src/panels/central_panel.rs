use egui::{pos2, vec2, Color32, FontId, Rect, Sense};

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (width, height) = app.session().display_surface().dimensions();
        let (canvas_rect, _response) =
            ui.allocate_exact_size(vec2(width as f32, height as f32), Sense::click_and_drag());

        // Handle input before drawing so the preview is never a frame late
        app.handle_input(ctx, canvas_rect);

        let texture_id = app.canvas_texture_id(ctx);
        let painter = ui.painter_at(canvas_rect);
        painter.image(
            texture_id,
            canvas_rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        painter.text(
            canvas_rect.min + vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            app.session().config().hud_text(),
            FontId::proportional(20.0),
            Color32::from_gray(50),
        );

        if let Some(status) = app.session().status() {
            ui.label(status);
        }
    });
}
