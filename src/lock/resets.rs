use super::*;

impl VideoLockSystem {
    /// Borra el progreso persistido y el mapa en memoria. La confirmación
    /// del usuario es responsabilidad del host: aquí ya no se pregunta.
    /// Tras esto el host debe reconstruir la vista entera desde cero.
    pub fn reset_all(&mut self) {
        if let Err(e) = self.store.clear() {
            log::error!("no se pudo borrar el progreso guardado: {e}");
        }
        self.progress.clear();
        self.events.clear();
        log::info!("progreso del curso reiniciado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeekSchedule;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    #[test]
    fn reset_clears_memory_and_store() {
        let store = MemoryStore::new();
        let schedule = WeekSchedule::new(HashMap::from([(1, 2), (2, 1)]), 2);
        let items = vec![VideoItem::new(1, 1), VideoItem::new(1, 2)];
        let mut system =
            VideoLockSystem::new(items, schedule, Box::new(store.clone()), Some(1));

        system.complete_week(1);
        assert!(system.is_week_unlocked(2));
        assert!(store.raw().is_some());

        system.reset_all();
        assert_eq!(store.clears(), 1);
        assert!(store.raw().is_none());
        assert!(!system.is_completed("week-1-exercise-1"));
        assert!(!system.is_week_unlocked(2));
        // Los avisos pendientes mueren con el reinicio
        assert!(system.take_events().is_empty());
    }
}
