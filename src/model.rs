use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Un vídeo del curso tal y como aparece en el YAML embebido.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VideoSpec {
    pub week: usize,
    pub exercise: usize, // ordinal 1-based dentro de la semana
    pub title: String,
    pub duration_secs: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeekData {
    pub number: usize,
    pub title: String,
    pub videos: Vec<VideoSpec>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CourseData {
    pub weeks: Vec<WeekData>,
}

impl CourseData {
    pub fn week(&self, number: usize) -> Option<&WeekData> {
        self.weeks.iter().find(|w| w.number == number)
    }
}

/// Identificador estable de un vídeo: `week-<W>-exercise-<N>`.
/// Es la clave del mapa de progreso persistido, así que el formato
/// no puede cambiar entre versiones.
pub fn video_id(week: usize, exercise: usize) -> String {
    format!("week-{week}-exercise-{exercise}")
}

/// Inversa de [`video_id`]. Devuelve `None` si la cadena no tiene el formato esperado.
pub fn parse_video_id(id: &str) -> Option<(usize, usize)> {
    let rest = id.strip_prefix("week-")?;
    let (week, rest) = rest.split_once("-exercise-")?;
    let week = week.parse().ok()?;
    let exercise = rest.parse().ok()?;
    Some((week, exercise))
}

/// Tabla de ejercicios esperados por semana.
///
/// El desbloqueo de la semana N depende de *todos* los vídeos de la semana
/// N−1 según esta tabla, no solo de los que estén renderizados en la vista
/// actual. Para semanas que no aparecen en la tabla se usa `default_count`.
#[derive(Debug, Clone)]
pub struct WeekSchedule {
    exercises_per_week: HashMap<usize, usize>,
    default_count: usize,
}

impl WeekSchedule {
    pub fn new(exercises_per_week: HashMap<usize, usize>, default_count: usize) -> Self {
        Self { exercises_per_week, default_count }
    }

    /// Construye la tabla a partir del contenido embebido del curso.
    pub fn from_course(course: &CourseData) -> Self {
        let exercises_per_week = course
            .weeks
            .iter()
            .map(|w| (w.number, w.videos.len()))
            .collect();
        Self::new(exercises_per_week, 2)
    }

    pub fn expected_count(&self, week: usize) -> usize {
        *self.exercises_per_week.get(&week).unwrap_or(&self.default_count)
    }

    /// Todos los ids esperados de una semana, en orden de ejercicio.
    pub fn expected_ids(&self, week: usize) -> Vec<String> {
        (1..=self.expected_count(week))
            .map(|n| video_id(week, n))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AppState {
    Welcome,
    WeekMenu,
    WeekPage,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_matches_persisted_format() {
        assert_eq!(video_id(1, 2), "week-1-exercise-2");
        assert_eq!(parse_video_id("week-3-exercise-1"), Some((3, 1)));
        assert_eq!(parse_video_id("semana-3"), None);
        assert_eq!(parse_video_id("week-x-exercise-1"), None);
    }

    #[test]
    fn schedule_falls_back_to_default_count_for_unknown_weeks() {
        let schedule = WeekSchedule::new(HashMap::from([(1, 2), (2, 1)]), 2);
        assert_eq!(schedule.expected_count(2), 1);
        assert_eq!(schedule.expected_count(7), 2);
        assert_eq!(
            schedule.expected_ids(7),
            vec!["week-7-exercise-1", "week-7-exercise-2"]
        );
    }
}
