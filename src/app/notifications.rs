use super::*;
use crate::lock::LockEvent;

/// Cuánto vive el aviso a plena opacidad.
pub const TOAST_SECS: f64 = 3.0;
/// Duración de la animación de salida.
pub const TOAST_FADE_SECS: f64 = 0.5;

/// Aviso transitorio de "semana desbloqueada". Es puramente cosmético:
/// no toca ningún estado y puede morir con la navegación sin más.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockToast {
    pub week: usize,
    pub born: f64, // reloj de egui, en segundos
}

impl UnlockToast {
    pub fn new(week: usize, now: f64) -> Self {
        Self { week, born: now }
    }

    /// Opacidad actual: plena durante [`TOAST_SECS`], luego cae a cero.
    pub fn alpha(&self, now: f64) -> f32 {
        let age = now - self.born;
        if age <= TOAST_SECS {
            1.0
        } else {
            (1.0 - (age - TOAST_SECS) / TOAST_FADE_SECS).clamp(0.0, 1.0) as f32
        }
    }

    pub fn expired(&self, now: f64) -> bool {
        now - self.born >= TOAST_SECS + TOAST_FADE_SECS
    }
}

impl CourseApp {
    /// Convierte las notificaciones del guardián en avisos en pantalla.
    pub fn drain_lock_events(&mut self, now: f64) {
        for event in self.lock.take_events() {
            match event {
                LockEvent::WeekUnlocked(week) => {
                    self.toasts.push(UnlockToast::new(week, now));
                }
            }
        }
    }

    pub fn prune_toasts(&mut self, now: f64) {
        self.toasts.retain(|t| !t.expired(now));
    }
}
