use crate::model::{WeekSchedule, parse_video_id, video_id};
use crate::storage::ProgressStore;
use std::collections::HashMap;

// Submódulos
pub mod completion;
pub mod events;
pub mod resets;
pub mod view_models;

pub use events::ProgressOutcome;
pub use view_models::ItemView;

/// Clave única bajo la que se persiste el mapa de progreso. Compartida
/// con la versión web del curso: el progreso ya guardado sigue valiendo.
pub const PROGRESS_KEY: &str = "bba_video_progress";

/// Fracción del vídeo que hay que ver para darlo por completado.
pub const COMPLETION_THRESHOLD: f64 = 0.95;

/// Descriptor de un vídeo presente en la vista actual.
///
/// El descubrimiento (qué vídeos hay en pantalla) es cosa del host; el
/// sistema de bloqueo sólo recibe la lista ya construida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoItem {
    pub week: usize,
    pub exercise: usize,
    pub id: String,
}

impl VideoItem {
    pub fn new(week: usize, exercise: usize) -> Self {
        Self { week, exercise, id: video_id(week, exercise) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    /// Una semana acaba de pasar de bloqueada a desbloqueada.
    WeekUnlocked(usize),
}

/// El guardián de progreso: mapa de completados + regla de desbloqueo.
///
/// Se construye explícitamente con sus colaboradores (vídeos de la vista,
/// tabla de semanas, almacenamiento) en lugar de rebuscarlos en un estado
/// global, para poder probarlo aislado.
pub struct VideoLockSystem {
    schedule: WeekSchedule,
    store: Box<dyn ProgressStore>,
    progress: HashMap<String, bool>,
    items: Vec<VideoItem>,
    current_week: Option<usize>,
    events: Vec<LockEvent>,
}

impl VideoLockSystem {
    /// Carga el progreso guardado una única vez. Un valor corrupto o un
    /// fallo de lectura degradan a "nada completado", nunca a un error.
    pub fn new(
        items: Vec<VideoItem>,
        schedule: WeekSchedule,
        store: Box<dyn ProgressStore>,
        current_week: Option<usize>,
    ) -> Self {
        let progress = load_progress(store.as_ref());
        Self { schedule, store, progress, items, current_week, events: Vec::new() }
    }

    /// Cambia la vista actual (navegación entre páginas de semana) sin
    /// perder el mapa en memoria.
    pub fn set_view(&mut self, items: Vec<VideoItem>, current_week: Option<usize>) {
        self.items = items;
        self.current_week = current_week;
    }

    pub fn current_week(&self) -> Option<usize> {
        self.current_week
    }

    pub fn items(&self) -> &[VideoItem] {
        &self.items
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.progress.get(id).copied().unwrap_or(false)
    }

    /// El host drena aquí las notificaciones pendientes (p. ej. para
    /// mostrar el aviso de "semana desbloqueada").
    pub fn take_events(&mut self) -> Vec<LockEvent> {
        std::mem::take(&mut self.events)
    }

    /// Semana a la que pertenece un id: primero entre los vídeos de la
    /// vista, si no, del propio formato del id.
    pub(crate) fn week_of(&self, id: &str) -> Option<usize> {
        self.items
            .iter()
            .find(|it| it.id == id)
            .map(|it| it.week)
            .or_else(|| parse_video_id(id).map(|(week, _)| week))
    }

    pub(crate) fn save_progress(&mut self) {
        let raw = match serde_json::to_string(&self.progress) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("no se pudo serializar el progreso: {e}");
                return;
            }
        };
        // Un fallo de escritura se registra y ya está: el estado en memoria
        // sigue mandando durante el resto de la sesión.
        if let Err(e) = self.store.save(&raw) {
            log::error!("no se pudo guardar el progreso: {e}");
        }
    }
}

fn load_progress(store: &dyn ProgressStore) -> HashMap<String, bool> {
    match store.load() {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("progreso guardado ilegible, se parte de cero: {e}");
                HashMap::new()
            }
        },
        Ok(None) => HashMap::new(),
        Err(e) => {
            log::warn!("no se pudo leer el progreso guardado: {e}");
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashMap as Map;

    fn schedule() -> WeekSchedule {
        WeekSchedule::new(Map::from([(1, 2), (2, 1), (3, 2)]), 2)
    }

    fn week_items(week: usize, count: usize) -> Vec<VideoItem> {
        (1..=count).map(|n| VideoItem::new(week, n)).collect()
    }

    #[test]
    fn corrupt_stored_value_degrades_to_empty_map() {
        let store = MemoryStore::with_value("esto no es json {{{");
        let system = VideoLockSystem::new(
            week_items(1, 2),
            schedule(),
            Box::new(store),
            Some(1),
        );
        assert!(!system.is_completed("week-1-exercise-1"));
        assert!(system.is_week_unlocked(1));
        assert!(!system.is_week_unlocked(2));
    }

    #[test]
    fn progress_round_trips_through_the_store() {
        let store = MemoryStore::new();
        let mut system = VideoLockSystem::new(
            week_items(1, 2),
            schedule(),
            Box::new(store.clone()),
            Some(1),
        );
        system.mark_complete("week-1-exercise-1");
        system.mark_complete("week-1-exercise-2");

        // Una "recarga de página": sistema nuevo sobre el mismo store
        let reloaded =
            VideoLockSystem::new(week_items(2, 1), schedule(), Box::new(store), Some(2));
        assert!(reloaded.is_completed("week-1-exercise-1"));
        assert!(reloaded.is_completed("week-1-exercise-2"));
        assert!(reloaded.is_week_unlocked(2));
    }

    #[test]
    fn unknown_keys_in_stored_json_are_preserved() {
        let store = MemoryStore::with_value(r#"{"week-9-exercise-9":true,"week-1-exercise-1":true}"#);
        let mut system = VideoLockSystem::new(
            week_items(1, 2),
            schedule(),
            Box::new(store.clone()),
            Some(1),
        );
        system.mark_complete("week-1-exercise-2");

        let raw = store.raw().expect("algo guardado");
        assert!(raw.contains("week-9-exercise-9"));
        assert!(raw.contains("week-1-exercise-2"));
    }

    #[test]
    fn week_of_falls_back_to_parsing_the_id() {
        let system = VideoLockSystem::new(
            week_items(1, 2),
            schedule(),
            Box::new(MemoryStore::new()),
            Some(1),
        );
        assert_eq!(system.week_of("week-1-exercise-2"), Some(1));
        assert_eq!(system.week_of("week-4-exercise-1"), Some(4)); // no está en la vista
        assert_eq!(system.week_of("cualquier-cosa"), None);
    }
}
