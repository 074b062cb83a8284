use super::*;

impl VideoLockSystem {
    /// Regla de desbloqueo: la semana 1 siempre está accesible; cualquier
    /// otra exige que *todos* los vídeos de la semana anterior (según la
    /// tabla, no según la vista) estén completados.
    pub fn is_week_unlocked(&self, week: usize) -> bool {
        if week <= 1 {
            return true;
        }
        self.schedule
            .expected_ids(week - 1)
            .iter()
            .all(|id| self.is_completed(id))
    }

    pub fn is_week_completed(&self, week: usize) -> bool {
        self.schedule
            .expected_ids(week)
            .iter()
            .all(|id| self.is_completed(id))
    }

    /// (completados, total) de una semana, contando sobre la tabla.
    pub fn week_progress(&self, week: usize) -> (usize, usize) {
        let ids = self.schedule.expected_ids(week);
        let done = ids.iter().filter(|id| self.is_completed(id)).count();
        (done, ids.len())
    }

    /// Marca un vídeo como completado. Idempotente: si ya lo estaba no hay
    /// escritura ni notificación duplicada. Devuelve si hubo cambio.
    pub fn mark_complete(&mut self, id: &str) -> bool {
        if self.is_completed(id) {
            return false;
        }
        let week = match self.week_of(id) {
            Some(w) => w,
            None => {
                log::warn!("id de vídeo con formato desconocido: {id}");
                return false;
            }
        };

        let next_week = week + 1;
        let was_unlocked = self.is_week_unlocked(next_week);

        // 1) Actualizar el mapa y persistir inmediatamente
        self.progress.insert(id.to_string(), true);
        self.save_progress();
        log::info!("vídeo completado: {id}");

        // 2) ¿Esta escritura acaba de desbloquear la semana siguiente?
        if !was_unlocked && self.is_week_unlocked(next_week) {
            self.events.push(LockEvent::WeekUnlocked(next_week));
        }
        true
    }

    /// Atajo de QA: completa todos los vídeos esperados de una semana por
    /// la vía normal, para probar la progresión sin ver los vídeos.
    pub fn complete_week(&mut self, week: usize) {
        for id in self.schedule.expected_ids(week) {
            self.mark_complete(&id);
        }
    }
}
