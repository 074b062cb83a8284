use crate::CourseApp;
use egui::{Align2, Area, Color32, Context, CornerRadius, Id, Order, RichText, Vec2};

/// Avisos transitorios de desbloqueo, por encima de todo lo demás.
/// El desvanecimiento lo lleva cada aviso; aquí solo se pinta.
pub fn ui_unlock_toasts(app: &CourseApp, ctx: &Context, now: f64) {
    for toast in &app.toasts {
        let alpha = toast.alpha(now);
        if alpha <= 0.0 {
            continue;
        }

        Area::new(Id::new(("unlock_toast", toast.week)))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_opacity(alpha);
                egui::Frame::default()
                    .fill(Color32::from_rgb(16, 185, 129))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(32, 24))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("🎉").size(40.0));
                            ui.label(
                                RichText::new(format!(
                                    "¡Semana {} desbloqueada!",
                                    toast.week
                                ))
                                .color(Color32::WHITE)
                                .heading()
                                .strong(),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "¡Buen trabajo! Ya puedes acceder a los vídeos de la Semana {}.",
                                    toast.week
                                ))
                                .color(Color32::WHITE),
                            );
                        });
                    });
            });
    }
}
