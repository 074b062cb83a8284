use crate::CourseApp;
use egui::{Align, Button, CentralPanel, Context, RichText, Vec2};

pub fn ui_week_menu(app: &mut CourseApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 420.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 36.0;

        // Altura estimada para centrar
        let weeks_count = app.course.weeks.len() as f32;
        let estimated_h = 80.0 + (button_h + 8.0) * (weeks_count + 1.0);
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        // Precomputar datos de cada semana para no mantener el borrow en la iteración
        let week_infos: Vec<(usize, String, bool, bool, usize, usize)> = app
            .course
            .weeks
            .iter()
            .map(|wk| {
                let unlocked = app.lock.is_week_unlocked(wk.number);
                let completed = app.lock.is_week_completed(wk.number);
                let (done, total) = app.lock.week_progress(wk.number);
                (wk.number, wk.title.clone(), unlocked, completed, done, total)
            })
            .collect();

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("Selecciona una semana");
                        ui.add_space(20.0);

                        if !app.message.is_empty() {
                            ui.add_space(8.0);
                            ui.label(
                                RichText::new(&app.message)
                                    .color(egui::Color32::YELLOW)
                                    .strong(),
                            );
                            ui.add_space(8.0);
                        }

                        // Mostrar cada semana usando los datos precomputados
                        for (number, title, unlocked, completed, done, total) in &week_infos {
                            let label = if *completed {
                                format!("Semana {} — {} ✅", number, title)
                            } else if *unlocked {
                                format!("Semana {} — {} 🔓 ({}/{})", number, title, done, total)
                            } else {
                                format!("Semana {} — {} 🔒", number, title)
                            };

                            if ui
                                .add_enabled(
                                    *unlocked,
                                    Button::new(&label)
                                        .min_size(Vec2::new(content_width, button_h)),
                                )
                                .clicked()
                                && *unlocked
                            {
                                app.open_week(*number);
                            }

                            ui.add_space(8.0);
                        }

                        ui.add_space(16.0);
                        if ui
                            .add_sized(
                                [content_width, button_h],
                                Button::new("Volver al menú principal"),
                            )
                            .clicked()
                        {
                            app.volver_al_menu_principal();
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}
