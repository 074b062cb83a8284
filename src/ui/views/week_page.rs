use crate::CourseApp;
use crate::lock::ItemView;
use crate::ui::helpers::format_time;
use egui::{
    Align, Align2, CentralPanel, Color32, Context, CornerRadius, CursorIcon, FontId,
    ProgressBar, Rect, RichText, ScrollArea, Sense, Vec2,
};

const BADGE_GREEN: Color32 = Color32::from_rgb(16, 185, 129);

pub fn ui_week_page(app: &mut CourseApp, ctx: &Context) {
    let week = match app.lock.current_week() {
        Some(w) => w,
        None => return, // sin contexto de semana no hay página que pintar
    };
    let week_title = app
        .current_week_data()
        .map(|w| w.title.clone())
        .unwrap_or_default();
    let video_titles: Vec<String> = app
        .current_week_data()
        .map(|w| w.videos.iter().map(|v| v.title.clone()).collect())
        .unwrap_or_default();

    // Estado derivado de presentación, recalculado en cada frame
    let views = app.lock.item_views();
    let (done, total) = app.lock.week_progress(week);

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            let max_width = 520.0;
            let content_width = ui.available_width().min(max_width);

            ui.vertical_centered(|ui| {
                ui.set_width(content_width);

                // ---- Banner de la semana ----
                ui.add_space(12.0);
                ui.heading(format!("Semana {week} — {week_title}"));

                // ---- Indicador de progreso semanal, justo bajo el banner ----
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "Progreso de la Semana {week}: {done} de {total} vídeos completados"
                    ))
                    .strong(),
                );
                let fraction = if total > 0 { done as f32 / total as f32 } else { 0.0 };
                ui.add(ProgressBar::new(fraction).desired_width(content_width * 0.8));

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&app.message)
                            .color(Color32::YELLOW)
                            .strong(),
                    );
                }

                ui.add_space(12.0);

                // ---- Una tarjeta por vídeo ----
                for (i, view) in views.iter().enumerate() {
                    let title = video_titles.get(i).cloned().unwrap_or_default();
                    video_card(app, ui, i, view, &title, content_width);
                    ui.add_space(14.0);
                }

                // Atajo de QA para probar la progresión sin ver los vídeos
                if ui
                    .button("⚡ Marcar semana como completada (TEST)")
                    .clicked()
                {
                    app.lock.complete_week(week);
                }

                ui.add_space(8.0);
                if ui.button("Volver al menú de semanas").clicked() {
                    app.abrir_menu_semanal();
                }
                ui.add_space(12.0);
            });
        });
    });
}

fn video_card(
    app: &mut CourseApp,
    ui: &mut egui::Ui,
    idx: usize,
    view: &ItemView,
    title: &str,
    width: f32,
) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(width - 24.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Ejercicio {} — {}", view.exercise, title)).strong(),
                );
                // Insignia de completado: independiente del candado
                if view.completed {
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new("✔ Completado").color(BADGE_GREEN).strong());
                    });
                }
            });
            ui.add_space(6.0);

            // ---- Zona de "vídeo" ----
            let video_size = Vec2::new(width - 24.0, 150.0);
            let (rect, response) = ui.allocate_exact_size(video_size, Sense::click());
            let response = response.on_hover_cursor(if view.locked {
                CursorIcon::NotAllowed
            } else {
                CursorIcon::PointingHand
            });

            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, CornerRadius::same(6), Color32::from_gray(25));

            // Franja de posición en la base
            let played = rect.width() * app.players[idx].ratio();
            painter.rect_filled(
                Rect::from_min_size(
                    rect.left_bottom() - Vec2::new(0.0, 5.0),
                    Vec2::new(played, 5.0),
                ),
                CornerRadius::ZERO,
                BADGE_GREEN,
            );

            if view.locked {
                // Capa de bloqueo con candado y mensaje de prerequisito
                painter.rect_filled(rect, CornerRadius::same(6), Color32::from_black_alpha(160));
                painter.text(
                    rect.center() - Vec2::new(0.0, 14.0),
                    Align2::CENTER_CENTER,
                    "🔒",
                    FontId::proportional(28.0),
                    Color32::WHITE,
                );
                if let Some(msg) = &view.lock_message {
                    painter.text(
                        rect.center() + Vec2::new(0.0, 18.0),
                        Align2::CENTER_CENTER,
                        msg,
                        FontId::proportional(13.0),
                        Color32::WHITE,
                    );
                }
                if response.clicked() {
                    // Clic interceptado: aviso informativo, nada de reproducción
                    app.notify_locked_click(view.week);
                }
            } else if response.clicked() {
                // Clic sobre el vídeo = reproducir / pausar
                let player = &mut app.players[idx];
                if player.playing {
                    player.pause();
                } else if !player.finished() {
                    player.playing = true;
                }
            }

            ui.add_space(6.0);

            // ---- Controles (deshabilitados mientras esté bloqueado) ----
            let (position, duration, playing) = {
                let p = &app.players[idx];
                (p.position, p.duration, p.playing)
            };
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!view.locked, |ui| {
                    let play_label = if playing { "⏸ Pausa" } else { "▶ Reproducir" };
                    if ui.button(play_label).clicked() {
                        let player = &mut app.players[idx];
                        if playing {
                            player.pause();
                        } else if !player.finished() {
                            player.playing = true;
                        }
                    }

                    let mut pos = position;
                    if ui
                        .add(egui::Slider::new(&mut pos, 0.0..=duration).show_value(false))
                        .changed()
                    {
                        // Buscar en el vídeo también cuenta como tick de progreso
                        app.players[idx].position = pos;
                        app.lock.on_progress(&view.id, pos, duration);
                    }

                    ui.label(format!("{} / {}", format_time(pos), format_time(duration)));
                });
            });
        });
}
