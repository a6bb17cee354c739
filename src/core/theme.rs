//! Theme persistence and the reactive theme context.
//!
//! The persisted value is the theme's lowercase name stored under a single
//! key. Anything missing, unreadable or unrecognized falls back to the
//! configured default without surfacing an error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::core::error::StorageError;
use crate::models::Theme;
use crate::utils::dom;

// =============================================================================
// Storage Backends
// =============================================================================

/// Key-value store the theme is persisted in.
pub trait ThemeStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry.
    pub fn with_item(self, key: &str, value: &str) -> Self {
        let _ = self.save(key, value);
        self
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted theme, falling back to `default`.
pub fn load_theme(storage: &dyn ThemeStorage, key: &str, default: Theme) -> Theme {
    match storage.load(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!(%key, value = %raw, "ignoring unrecognized persisted theme");
            default
        }),
        None => default,
    }
}

// =============================================================================
// Theme Context
// =============================================================================

/// Current theme plus its setter, shared through the application context.
#[derive(Clone)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    storage: Arc<dyn ThemeStorage>,
    key: &'static str,
}

impl ThemeContext {
    /// Initialize from storage, or `default` when nothing valid is stored.
    pub fn new(storage: Arc<dyn ThemeStorage>, key: &'static str, default: Theme) -> Self {
        let initial = load_theme(storage.as_ref(), key, default);
        tracing::debug!(theme = %initial, "theme initialized");
        Self {
            theme: RwSignal::new(initial),
            storage,
            key,
        }
    }

    /// Reactive read of the current theme.
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Non-tracking read.
    pub fn current(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Persist and publish a new theme.
    ///
    /// A failed write is logged; the in-memory value still changes so the
    /// UI reflects the choice for this session.
    pub fn set(&self, theme: Theme) {
        if let Err(e) = self.storage.save(self.key, theme.as_str()) {
            tracing::warn!(error = %e, "could not persist theme");
        }
        self.theme.set(theme);
    }

    /// Storage key the theme lives under.
    pub fn storage_key(&self) -> &'static str {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "bhai-dns-theme";

    struct FailingStorage;

    impl ThemeStorage for FailingStorage {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed(key.to_string()))
        }
    }

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn test_load_theme_defaults() {
        let empty = MemoryStorage::new();
        assert_eq!(load_theme(&empty, KEY, Theme::Dark), Theme::Dark);

        let garbage = MemoryStorage::new().with_item(KEY, "neon");
        assert_eq!(load_theme(&garbage, KEY, Theme::Dark), Theme::Dark);

        let stored = MemoryStorage::new().with_item(KEY, "system");
        assert_eq!(load_theme(&stored, KEY, Theme::Dark), Theme::System);
    }

    #[test]
    fn test_first_load_then_select_light_persists() {
        with_owner(|| {
            let storage = MemoryStorage::new();
            let ctx = ThemeContext::new(Arc::new(storage.clone()), KEY, Theme::Dark);
            assert_eq!(ctx.current(), Theme::Dark);

            ctx.set(Theme::Light);
            assert_eq!(ctx.current(), Theme::Light);
            assert_eq!(storage.load(KEY).as_deref(), Some("light"));

            let reloaded = ThemeContext::new(Arc::new(storage), KEY, Theme::Dark);
            assert_eq!(reloaded.current(), Theme::Light);
        });
    }

    #[test]
    fn test_every_theme_round_trips_through_storage() {
        with_owner(|| {
            let storage = MemoryStorage::new();
            let ctx = ThemeContext::new(Arc::new(storage.clone()), KEY, Theme::Dark);
            for theme in Theme::ALL {
                ctx.set(theme);
                let fresh = ThemeContext::new(Arc::new(storage.clone()), KEY, Theme::Dark);
                assert_eq!(fresh.current(), theme);
            }
        });
    }

    #[test]
    fn test_write_failure_still_updates_value() {
        with_owner(|| {
            let ctx = ThemeContext::new(Arc::new(FailingStorage), KEY, Theme::Dark);
            ctx.set(Theme::System);
            assert_eq!(ctx.current(), Theme::System);
        });
    }
}
