use crate::CourseApp;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_welcome(app: &mut CourseApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 230.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading("Big Breathing Adventure");
                        ui.add_space(8.0);
                        ui.label(
                            "Curso online de respiración para peques: los vídeos de \
                             cada semana se desbloquean al completar la anterior.",
                        );
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        // Botones
                        let btn_cont = if app.prefs.last_week.is_some() {
                            Some(ui.add_sized(
                                [btn_w, btn_h],
                                Button::new("▶ Continuar donde lo dejé"),
                            ))
                        } else {
                            None
                        };
                        ui.add_space(5.0);
                        let btn_weeks =
                            ui.add_sized([btn_w, btn_h], Button::new("📅 Ver las semanas"));

                        if let Some(b) = btn_cont {
                            if b.clicked() {
                                app.continuar_donde_lo_deje();
                            }
                        }
                        if btn_weeks.clicked() {
                            app.abrir_menu_semanal();
                        }

                        if !app.message.is_empty() {
                            ui.add_space(10.0);
                            ui.label(
                                RichText::new(&app.message)
                                    .color(egui::Color32::YELLOW)
                                    .strong(),
                            );
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
