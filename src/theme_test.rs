use std::cell::{Cell, RefCell};

use super::*;

/// In-memory storage and recorded DOM writes.
#[derive(Default)]
struct FakeBackend {
    stored: RefCell<Option<String>>,
    prefers_dark: Cell<bool>,
    storage_broken: bool,
    applied: RefCell<Vec<Theme>>,
    toggles: RefCell<Vec<(String, String)>>,
}

impl FakeBackend {
    fn with_stored(value: &str) -> Self {
        Self { stored: RefCell::new(Some(value.to_owned())), ..Self::default() }
    }
}

impl ThemeBackend for FakeBackend {
    fn stored(&self) -> Result<Option<String>, UiError> {
        if self.storage_broken {
            return Err(UiError::Storage("localStorage disabled".into()));
        }
        Ok(self.stored.borrow().clone())
    }

    fn store(&self, value: &str) -> Result<(), UiError> {
        if self.storage_broken {
            return Err(UiError::Storage("quota exceeded".into()));
        }
        *self.stored.borrow_mut() = Some(value.to_owned());
        Ok(())
    }

    fn apply(&self, theme: Theme) -> Result<(), UiError> {
        self.applied.borrow_mut().push(theme);
        Ok(())
    }

    fn update_toggle(&self, icon: &str, tooltip: &str) -> Result<(), UiError> {
        self.toggles.borrow_mut().push((icon.to_owned(), tooltip.to_owned()));
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}

fn stored(toggle: &ThemeToggle<FakeBackend>) -> Option<String> {
    toggle.backend.stored.borrow().clone()
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_round_trips_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn theme_parse_rejects_other_values() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_opposite() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
}

#[test]
fn toggle_face_advertises_other_theme() {
    assert_eq!(Theme::Dark.toggle_face(), (ICON_TO_LIGHT, TOOLTIP_TO_LIGHT));
    assert_eq!(Theme::Light.toggle_face(), (ICON_TO_DARK, TOOLTIP_TO_DARK));
}

// =============================================================
// set_theme
// =============================================================

#[test]
fn set_theme_persists_applies_and_updates_toggle() {
    let mut toggle = ThemeToggle::new(FakeBackend::default());
    toggle.set_theme(Theme::Dark);

    assert_eq!(stored(&toggle).as_deref(), Some("dark"));
    assert_eq!(*toggle.backend.applied.borrow(), vec![Theme::Dark]);
    assert_eq!(toggle.backend.toggles.borrow()[0].1, TOOLTIP_TO_LIGHT);
    assert_eq!(toggle.current(), Some(Theme::Dark));
}

#[test]
fn set_theme_applies_even_when_storage_fails() {
    let mut toggle = ThemeToggle::new(FakeBackend { storage_broken: true, ..FakeBackend::default() });
    toggle.set_theme(Theme::Light);
    assert_eq!(*toggle.backend.applied.borrow(), vec![Theme::Light]);
    assert_eq!(toggle.current(), Some(Theme::Light));
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_from_dark_yields_light() {
    let mut toggle = ThemeToggle::new(FakeBackend::with_stored("dark"));
    assert_eq!(toggle.toggle_theme(), Theme::Light);
    assert_eq!(stored(&toggle).as_deref(), Some("light"));
}

#[test]
fn toggle_from_light_yields_dark() {
    let mut toggle = ThemeToggle::new(FakeBackend::with_stored("light"));
    assert_eq!(toggle.toggle_theme(), Theme::Dark);
}

#[test]
fn toggle_with_nothing_stored_yields_dark() {
    let mut toggle = ThemeToggle::new(FakeBackend::default());
    assert_eq!(toggle.toggle_theme(), Theme::Dark);
    assert_eq!(stored(&toggle).as_deref(), Some("dark"));
}

#[test]
fn toggle_ignores_os_preference_when_unset() {
    let backend = FakeBackend::default();
    backend.prefers_dark.set(true);
    let mut toggle = ThemeToggle::new(backend);
    assert_eq!(toggle.toggle_theme(), Theme::Dark);
}

#[test]
fn toggle_with_garbage_stored_yields_dark() {
    let mut toggle = ThemeToggle::new(FakeBackend::with_stored("purple"));
    assert_eq!(toggle.toggle_theme(), Theme::Dark);
}

#[test]
fn toggle_twice_returns_to_start() {
    let mut toggle = ThemeToggle::new(FakeBackend::with_stored("light"));
    toggle.toggle_theme();
    assert_eq!(toggle.toggle_theme(), Theme::Light);
}

// =============================================================
// load_saved_theme
// =============================================================

#[test]
fn load_applies_persisted_theme() {
    let mut toggle = ThemeToggle::new(FakeBackend::with_stored("dark"));
    assert_eq!(toggle.load_saved_theme(), Theme::Dark);
    assert_eq!(*toggle.backend.applied.borrow(), vec![Theme::Dark]);
}

#[test]
fn load_persisted_light_beats_dark_os() {
    let backend = FakeBackend::with_stored("light");
    backend.prefers_dark.set(true);
    let mut toggle = ThemeToggle::new(backend);
    assert_eq!(toggle.load_saved_theme(), Theme::Light);
}

#[test]
fn load_without_persisted_follows_os() {
    let backend = FakeBackend::default();
    backend.prefers_dark.set(true);
    let mut toggle = ThemeToggle::new(backend);
    assert_eq!(toggle.load_saved_theme(), Theme::Dark);

    let mut toggle = ThemeToggle::new(FakeBackend::default());
    assert_eq!(toggle.load_saved_theme(), Theme::Light);
}

#[test]
fn load_does_not_persist_os_choice() {
    let mut toggle = ThemeToggle::new(FakeBackend::default());
    toggle.load_saved_theme();
    assert_eq!(stored(&toggle), None);
}

#[test]
fn load_with_garbage_falls_back_to_os() {
    let backend = FakeBackend::with_stored("blue");
    backend.prefers_dark.set(true);
    let mut toggle = ThemeToggle::new(backend);
    assert_eq!(toggle.load_saved_theme(), Theme::Dark);
}

#[test]
fn load_with_unreadable_storage_falls_back_to_os() {
    let backend = FakeBackend { storage_broken: true, ..FakeBackend::default() };
    backend.prefers_dark.set(true);
    let mut toggle = ThemeToggle::new(backend);
    assert_eq!(toggle.load_saved_theme(), Theme::Dark);
}

// =============================================================
// system_preference_changed
// =============================================================

#[test]
fn os_change_applies_while_unset() {
    let mut toggle = ThemeToggle::new(FakeBackend::default());
    toggle.load_saved_theme();
    assert_eq!(toggle.system_preference_changed(true), Some(Theme::Dark));
    assert_eq!(toggle.current(), Some(Theme::Dark));
    assert_eq!(stored(&toggle), None);
}

#[test]
fn os_change_ignored_once_persisted() {
    let mut toggle = ThemeToggle::new(FakeBackend::default());
    toggle.set_theme(Theme::Light);
    assert_eq!(toggle.system_preference_changed(true), None);
    assert_eq!(toggle.current(), Some(Theme::Light));
}

#[test]
fn os_change_ignored_after_toggle() {
    let mut toggle = ThemeToggle::new(FakeBackend::default());
    toggle.toggle_theme();
    assert_eq!(toggle.system_preference_changed(false), None);
    assert_eq!(toggle.current(), Some(Theme::Dark));
}
