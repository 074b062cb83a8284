use crate::data::read_course_embedded;
use crate::lock::{PROGRESS_KEY, VideoLockSystem};
use crate::model::{AppState, CourseData, WeekData, WeekSchedule};
use crate::storage::{self, ProgressStore};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod navigation;
pub mod notifications;
pub mod players;
pub mod resets;

pub use notifications::UnlockToast;
pub use players::SimulatedPlayer;

/// Preferencias ligeras que viajan por el almacén de eframe. El mapa de
/// progreso NO va aquí: tiene su propio [`crate::storage::ProgressStore`].
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct UiPrefs {
    pub last_week: Option<usize>,
    pub dark_mode: bool,
}

pub struct CourseApp {
    pub course: CourseData,
    pub lock: VideoLockSystem,
    pub players: Vec<SimulatedPlayer>,
    pub state: AppState,
    pub message: String,
    pub toasts: Vec<UnlockToast>,
    pub confirm_reset: bool,
    pub prefs: UiPrefs,
}

impl CourseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();
        if prefs.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        }
        Self::with_store(storage::default_store(PROGRESS_KEY), prefs)
    }

    /// Constructor sin eframe: lo usan los tests para inyectar un store
    /// en memoria en lugar del de la plataforma.
    pub fn with_store(store: Box<dyn ProgressStore>, prefs: UiPrefs) -> Self {
        let course = read_course_embedded();
        let schedule = WeekSchedule::from_course(&course);

        // Se arranca fuera de una página de semana: sin contexto de semana,
        // el indicador de progreso queda suprimido pero nada más.
        let lock = VideoLockSystem::new(Vec::new(), schedule, store, None);

        Self {
            course,
            lock,
            players: Vec::new(),
            state: AppState::Welcome,
            message: String::new(),
            toasts: Vec::new(),
            confirm_reset: false,
            prefs,
        }
    }

    pub fn current_week_data(&self) -> Option<&WeekData> {
        self.lock.current_week().and_then(|w| self.course.week(w))
    }
}
