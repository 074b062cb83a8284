// src/ui/helpers.rs

/// Formatea segundos como `m:ss` para los marcadores de tiempo.
pub fn format_time(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(150.0), "2:30");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
