
use egui::{Context, Visuals};
use crate::CourseApp;

pub fn top_panel(app: &mut CourseApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Borrar progreso y reiniciar").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(app: &mut CourseApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                    app.prefs.dark_mode = true;
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                    app.prefs.dark_mode = false;
                }
            }
        );

    });
}
