//! Almacenamiento duradero del mapa de progreso.
//!
//! El sistema de bloqueo sólo conoce el trait [`ProgressStore`]: una única
//! entrada clave-valor con el JSON del mapa. En escritorio es un fichero en
//! el directorio de datos del usuario; en la web es `localStorage`, igual
//! que en la versión web del curso.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("el almacenamiento del navegador no está disponible")]
    Unavailable,
}

pub trait ProgressStore {
    /// Devuelve el valor crudo guardado, o `None` si nunca se guardó nada.
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, raw: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// El backend por defecto de la plataforma actual.
pub fn default_store(key: &str) -> Box<dyn ProgressStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileStore::for_key(key))
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorageStore::new(key))
    }
}

// ---------- Escritorio: fichero JSON en el directorio de datos ----------

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "breathing_videos";

#[cfg(not(target_arch = "wasm32"))]
fn app_data_dir() -> std::path::PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join(APP_DIR)
    } else {
        std::path::PathBuf::from(".")
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn for_key(key: &str) -> Self {
        Self { path: app_data_dir().join(format!("{key}.json")) }
    }

    /// Útil en tests: un fichero en una ruta arbitraria.
    pub fn at_path(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ProgressStore for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&mut self, raw: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

// ---------- Web: localStorage, la misma clave que usaba la página ----------

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let storage = Self::local_storage()?;
        storage.get_item(&self.key).map_err(|_| StorageError::Unavailable)
    }

    fn save(&mut self, raw: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage()?;
        storage.set_item(&self.key, raw).map_err(|_| StorageError::Unavailable)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        let storage = Self::local_storage()?;
        storage.remove_item(&self.key).map_err(|_| StorageError::Unavailable)
    }
}

// ---------- En memoria: tests y último recurso ----------

#[derive(Default)]
struct MemoryInner {
    value: Option<String>,
    saves: usize,
    clears: usize,
}

/// Guarda el valor en memoria. Clonar el store comparte el mismo contenido,
/// así un test puede conservar un asa para inspeccionar lo escrito.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(raw: &str) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().value = Some(raw.to_string());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.inner.borrow().value.clone()
    }

    /// Número de escrituras realizadas (no cuenta el valor inicial).
    pub fn saves(&self) -> usize {
        self.inner.borrow().saves
    }

    pub fn clears(&self) -> usize {
        self.inner.borrow().clears
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().value.clone())
    }

    fn save(&mut self, raw: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        inner.value = Some(raw.to_string());
        inner.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        inner.value = None;
        inner.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_counts_saves_and_clears() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.save("{}").unwrap();
        handle.save("{\"a\":true}").unwrap();
        assert_eq!(store.saves(), 2);
        assert_eq!(store.raw().as_deref(), Some("{\"a\":true}"));

        handle.clear().unwrap();
        assert_eq!(store.clears(), 1);
        assert_eq!(store.raw(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trips_and_clears() {
        let path = std::env::temp_dir()
            .join(format!("breathing_videos_test_{}", std::process::id()))
            .join("progress.json");
        let mut store = FileStore::at_path(path.clone());

        assert!(store.load().unwrap().is_none());
        store.save("{\"week-1-exercise-1\":true}").unwrap();
        assert_eq!(
            store.load().unwrap().as_deref(),
            Some("{\"week-1-exercise-1\":true}")
        );

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
