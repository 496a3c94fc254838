//! Two-state theme toggle backed by the preference store.
//!
//! The controller owns the current theme and persists every change. The
//! composition root is responsible for broadcasting the change notification
//! to any listeners; `toggle`/`set` return the new theme for that purpose.

use tracing::warn;

use shared::domain::Theme;

use crate::prefs::PreferenceStore;

pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    /// Reads the persisted preference once; invalid or absent values start
    /// the session in light mode.
    pub fn load(store: &PreferenceStore) -> Self {
        Self {
            current: store.load_theme(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self, store: &PreferenceStore) -> Theme {
        self.set(self.current.opposite(), store)
    }

    pub fn set(&mut self, theme: Theme, store: &PreferenceStore) -> Theme {
        self.current = theme;
        if let Err(err) = store.save_theme(theme) {
            warn!(%err, "could not persist theme preference");
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::PreferenceStore;

    #[test]
    fn starts_from_the_persisted_preference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PreferenceStore::at_dir(dir.path());
        store.save_theme(Theme::Dark).expect("save");
        let controller = ThemeController::load(&store);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_the_persisted_preference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PreferenceStore::at_dir(dir.path());
        store.save_theme(Theme::Dark).expect("save");

        let mut controller = ThemeController::load(&store);
        assert_eq!(controller.toggle(&store), Theme::Light);
        assert_eq!(store.load_theme(), Theme::Light);
        assert_eq!(controller.toggle(&store), Theme::Dark);
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn persist_failures_keep_the_in_memory_state() {
        let store = PreferenceStore::disabled();
        let mut controller = ThemeController::load(&store);
        assert_eq!(controller.toggle(&store), Theme::Dark);
        assert_eq!(controller.current(), Theme::Dark);
    }
}
