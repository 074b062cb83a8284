use super::*;

/// Resultado de un evento de reproducción, para que el host reconcilie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    /// La semana del vídeo sigue bloqueada: el host debe pausar el
    /// reproductor. Es la red de seguridad por si alguien esquiva la capa
    /// de bloqueo visual.
    Blocked,
    /// Este evento acaba de marcar el vídeo como completado.
    Completed,
    /// Nada que hacer: por debajo del umbral, o ya estaba completado.
    NoChange,
}

impl VideoLockSystem {
    /// Tick de progreso de reproducción (el `timeupdate` de la página).
    pub fn on_progress(&mut self, id: &str, current_time: f64, duration: f64) -> ProgressOutcome {
        let week = match self.week_of(id) {
            Some(w) => w,
            None => return ProgressOutcome::NoChange,
        };
        if !self.is_week_unlocked(week) {
            return ProgressOutcome::Blocked;
        }

        if duration > 0.0
            && current_time / duration >= COMPLETION_THRESHOLD
            && !self.is_completed(id)
        {
            self.mark_complete(id);
            return ProgressOutcome::Completed;
        }
        ProgressOutcome::NoChange
    }

    /// Fin natural de la reproducción. Cubre los vídeos en los que el
    /// umbral nunca llega a dispararse (clips muy cortos, redondeos).
    pub fn on_ended(&mut self, id: &str) -> ProgressOutcome {
        if self.mark_complete(id) {
            ProgressOutcome::Completed
        } else {
            ProgressOutcome::NoChange
        }
    }
}
