mod helpers;
pub mod layout;
pub mod views;

use crate::app::CourseApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for CourseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        let dt = ctx.input(|i| i.stable_dt) as f64;

        // La "página" avanza: reproductores → guardián → avisos
        if matches!(self.state, AppState::WeekPage) {
            self.tick_players(dt);
        }
        self.drain_lock_events(now);
        self.prune_toasts(now);

        // BOTÓN SUPERIOR DE REINICIAR (solo dentro del curso)
        if matches!(self.state, AppState::WeekMenu | AppState::WeekPage) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por estado a las funciones en views/
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::WeekMenu => views::week_menu::ui_week_menu(self, ctx),
            AppState::WeekPage => views::week_page::ui_week_page(self, ctx),
        }

        // Avisos de desbloqueo por encima de todo
        views::notifications::ui_unlock_toasts(self, ctx, now);

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        // Mientras haya reproducción o avisos, seguimos repintando
        if self.any_player_playing() || !self.toasts.is_empty() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
