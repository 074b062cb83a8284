use super::*;
use crate::lock::VideoItem;

impl CourseApp {
    pub fn abrir_menu_semanal(&mut self) {
        self.state = AppState::WeekMenu;
        self.message.clear();
    }

    pub fn volver_al_menu_principal(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }

    /// Equivale a cargar la página de una semana: fija el contexto,
    /// "descubre" sus vídeos y deja que la reconciliación visual corra
    /// sobre el estado derivado en el siguiente frame.
    pub fn open_week(&mut self, week: usize) {
        self.rebuild_week_view(week);
        self.state = AppState::WeekPage;
        self.prefs.last_week = Some(week);
        self.message.clear();
    }

    /// Si hay una semana guardada de la sesión anterior, continúa ahí.
    pub fn continuar_donde_lo_deje(&mut self) {
        match self.prefs.last_week {
            Some(week) if self.course.week(week).is_some() => self.open_week(week),
            _ => self.abrir_menu_semanal(),
        }
    }

    /// Reconstruye reproductores y descriptores de la semana dada.
    /// También es la "recarga" que sigue a un reinicio de progreso.
    pub(crate) fn rebuild_week_view(&mut self, week: usize) {
        let videos = self
            .course
            .week(week)
            .map(|w| w.videos.clone())
            .unwrap_or_default();

        let mut items = Vec::with_capacity(videos.len());
        let mut players = Vec::with_capacity(videos.len());
        for video in &videos {
            let item = VideoItem::new(video.week, video.exercise);
            players.push(SimulatedPlayer::new(item.id.clone(), video.duration_secs));
            items.push(item);
        }

        self.players = players;
        self.lock.set_view(items, Some(week));
        // Página nueva: los avisos de la anterior mueren con ella
        self.toasts.clear();
    }
}
