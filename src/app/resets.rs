use super::*;
use eframe::egui;

impl CourseApp {
    /// Borra todo el progreso y recarga la vista actual desde cero.
    /// Sólo se llega aquí desde el diálogo de confirmación.
    pub fn reset_progress(&mut self) {
        // 1) Vaciar el mapa y el almacén persistente
        self.lock.reset_all();
        self.toasts.clear();

        // 2) "Recargar la página": la reconciliación vuelve a correr
        //    sobre el estado vacío
        if let Some(week) = self.lock.current_week() {
            self.rebuild_week_view(week);
        }

        // 3) Limpiar las banderas de UI
        self.confirm_reset = false;
        self.message.clear();
        self.prefs.last_week = None;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todo el progreso de los vídeos? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn asking_for_confirmation_does_not_touch_progress() {
        let store = MemoryStore::new();
        let mut app = CourseApp::with_store(Box::new(store.clone()), UiPrefs::default());
        app.open_week(1);
        app.lock.complete_week(1);
        let saved = store.raw();
        assert!(saved.is_some());

        // El diálogo está en pantalla, pero nadie ha confirmado todavía
        app.confirm_reset = true;
        assert_eq!(store.raw(), saved);
        assert!(app.lock.is_week_unlocked(2));
    }

    #[test]
    fn confirmed_reset_relocks_everything_after_the_view_reload() {
        let store = MemoryStore::new();
        let mut app = CourseApp::with_store(Box::new(store.clone()), UiPrefs::default());
        app.open_week(1);
        app.lock.complete_week(1);
        app.open_week(2);
        assert!(app.lock.item_views().iter().all(|v| !v.locked));

        app.reset_progress();

        assert!(store.raw().is_none());
        assert!(app.lock.item_views().iter().all(|v| v.locked));
        assert!(!app.confirm_reset);
        // Los reproductores vuelven al principio, parados
        assert!(app.players.iter().all(|p| p.position == 0.0 && !p.playing));
    }
}
