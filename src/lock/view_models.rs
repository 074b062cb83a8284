use super::*;

/// Estado derivado de presentación para un vídeo de la vista actual.
///
/// `completed` y `locked` son independientes: un vídeo completado cuya
/// semana volviera a bloquearse (si cambia la tabla) muestra la insignia
/// y el candado a la vez.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub week: usize,
    pub exercise: usize,
    pub completed: bool,
    pub locked: bool,
    pub lock_message: Option<String>,
}

impl VideoLockSystem {
    pub fn item_views(&self) -> Vec<ItemView> {
        self.items
            .iter()
            .map(|item| {
                let locked = item.week > 1 && !self.is_week_unlocked(item.week);
                ItemView {
                    id: item.id.clone(),
                    week: item.week,
                    exercise: item.exercise,
                    completed: self.is_completed(&item.id),
                    locked,
                    lock_message: locked.then(|| lock_message(item.week)),
                }
            })
            .collect()
    }
}

/// Mensaje de la capa de bloqueo, nombrando la semana prerequisito.
pub fn lock_message(week: usize) -> String {
    format!("Completa todos los vídeos de la Semana {} para desbloquear", week - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeekSchedule;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    fn schedule() -> WeekSchedule {
        WeekSchedule::new(HashMap::from([(1, 2), (2, 1)]), 2)
    }

    #[test]
    fn locked_items_carry_the_prerequisite_message() {
        let items = vec![VideoItem::new(2, 1)];
        let system =
            VideoLockSystem::new(items, schedule(), Box::new(MemoryStore::new()), Some(2));

        let views = system.item_views();
        assert!(views[0].locked);
        assert_eq!(
            views[0].lock_message.as_deref(),
            Some("Completa todos los vídeos de la Semana 1 para desbloquear")
        );
    }

    #[test]
    fn completion_badge_is_independent_of_lock_state() {
        // Progreso sembrado con la semana 2 vista, pero la 1 incompleta:
        // el vídeo de la semana 2 queda completado Y bloqueado a la vez.
        let store = MemoryStore::with_value(r#"{ "week-2-exercise-1": true }"#);
        let items = vec![VideoItem::new(2, 1)];
        let system = VideoLockSystem::new(items, schedule(), Box::new(store), Some(2));

        let views = system.item_views();
        assert!(views[0].completed);
        assert!(views[0].locked);
    }

    #[test]
    fn week_one_items_never_lock() {
        let items = vec![VideoItem::new(1, 1), VideoItem::new(1, 2)];
        let system =
            VideoLockSystem::new(items, schedule(), Box::new(MemoryStore::new()), Some(1));
        assert!(system.item_views().iter().all(|v| !v.locked));
    }
}
