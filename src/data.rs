// src/data.rs

use crate::model::CourseData;
use serde_yaml;

/// Carga el contenido del curso desde el YAML embebido
pub fn read_course_embedded() -> CourseData {
    // Ajusta la ruta si pones tu yaml en otra carpeta
    let file_content = include_str!("data/course_videos.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el YAML del curso")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeekSchedule;

    #[test]
    fn embedded_course_parses_and_matches_exercise_table() {
        let course = read_course_embedded();
        assert_eq!(course.weeks.len(), 6);

        // Semanas impares con 2 ejercicios, pares con 1
        let expected = [(1, 2), (2, 1), (3, 2), (4, 1), (5, 2), (6, 1)];
        for (week, count) in expected {
            let data = course.week(week).expect("semana presente");
            assert_eq!(data.videos.len(), count, "semana {week}");
        }

        let schedule = WeekSchedule::from_course(&course);
        assert_eq!(schedule.expected_count(3), 2);
        assert_eq!(schedule.expected_count(6), 1);
    }

    #[test]
    fn every_video_carries_its_own_week_and_ordinal() {
        let course = read_course_embedded();
        for week in &course.weeks {
            for (i, video) in week.videos.iter().enumerate() {
                assert_eq!(video.week, week.number);
                assert_eq!(video.exercise, i + 1);
                assert!(video.duration_secs > 0.0);
            }
        }
    }
}
