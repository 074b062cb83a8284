use super::*;
use crate::lock::ProgressOutcome;

/// Reproductor simulado: hace el papel de un `<video>` del navegador.
/// Expone posición, duración y `pause()`, que es todo lo que el
/// guardián necesita de un elemento reproducible.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    pub id: String,
    pub duration: f64,
    pub position: f64,
    pub playing: bool,
}

impl SimulatedPlayer {
    pub fn new(id: String, duration: f64) -> Self {
        Self { id, duration, position: 0.0, playing: false }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn ratio(&self) -> f32 {
        if self.duration > 0.0 {
            (self.position / self.duration) as f32
        } else {
            0.0
        }
    }

    pub fn finished(&self) -> bool {
        self.position >= self.duration
    }
}

impl CourseApp {
    /// Avanza los reproductores un frame y encamina sus eventos al
    /// guardián, como la página hacía con `timeupdate` y `ended`.
    pub fn tick_players(&mut self, dt: f64) {
        let Self { players, lock, .. } = self;
        for player in players.iter_mut() {
            if !player.playing {
                continue;
            }
            player.position = (player.position + dt).min(player.duration);

            if lock.on_progress(&player.id, player.position, player.duration)
                == ProgressOutcome::Blocked
            {
                // No debería poder reproducirse bloqueado; por si acaso
                player.pause();
                continue;
            }

            if player.finished() {
                player.playing = false;
                lock.on_ended(&player.id);
            }
        }
    }

    pub fn any_player_playing(&self) -> bool {
        self.players.iter().any(|p| p.playing)
    }

    /// Clic en un vídeo bloqueado: se intercepta, no cambia ningún estado
    /// y se muestra un aviso informativo. No es un error.
    pub fn notify_locked_click(&mut self, week: usize) {
        self.message = format!(
            "Completa primero todos los vídeos de la Semana {} para desbloquear este contenido.",
            week - 1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn app_on_week(week: usize) -> CourseApp {
        let mut app =
            CourseApp::with_store(Box::new(MemoryStore::new()), UiPrefs::default());
        app.open_week(week);
        app
    }

    #[test]
    fn watching_a_video_to_the_end_completes_it() {
        let mut app = app_on_week(1);
        app.players[0].playing = true;
        let duration = app.players[0].duration;

        // Simula la reproducción entera a ticks de medio segundo
        let mut guard = 0;
        while app.players[0].playing {
            app.tick_players(0.5);
            guard += 1;
            assert!(guard < 10_000, "el reproductor nunca terminó");
        }

        assert!(app.lock.is_completed("week-1-exercise-1"));
        assert!(app.players[0].position <= duration);
    }

    #[test]
    fn a_playing_locked_video_is_paused_without_progress() {
        let mut app = app_on_week(2);
        // Forzamos el estado imposible: reproduciendo con la semana 2 cerrada
        app.players[0].playing = true;
        app.tick_players(1.0);

        assert!(!app.players[0].playing);
        assert!(!app.lock.is_completed("week-2-exercise-1"));
    }

    #[test]
    fn locked_click_notice_names_the_prerequisite_week() {
        let mut app = app_on_week(3);
        app.notify_locked_click(3);
        assert!(app.message.contains("Semana 2"));
    }
}
