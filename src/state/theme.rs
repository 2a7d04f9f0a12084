use crate::state::store::PreferenceStore;

/// Storage key for the dark mode flag. The stored value is the literal
/// string "true" or "false".
pub const DARK_MODE_KEY: &str = "darkMode";

/// Attribute set on the document element so page chrome outside the
/// app root (body background, scrollbars) can follow the theme.
pub const THEME_ATTR: &str = "data-theme";

/// Reads the persisted dark mode flag. Exactly "true" means dark,
/// exactly "false" means light, and anything else (missing key,
/// unavailable storage, corrupt value) falls back to light. The stored
/// preference is the only input: the OS or browser theme is never
/// consulted.
pub fn initialize(store: &dyn PreferenceStore) -> bool {
    match store.read(DARK_MODE_KEY).as_deref() {
        Some("true") => true,
        Some("false") | None => false,
        Some(other) => {
            log::warn!("ignoring unrecognized {DARK_MODE_KEY} value {other:?}");
            false
        }
    }
}

/// Writes the flag back to the store. Persistence is best effort: a
/// failed write is logged and the session keeps its in-memory theme.
pub fn persist(store: &dyn PreferenceStore, dark: bool) {
    let value = if dark { "true" } else { "false" };
    if !store.write(DARK_MODE_KEY, value) {
        log::warn!("could not persist {DARK_MODE_KEY}={value}, theme will reset next visit");
    }
}

/// Mirrors the flag onto `<html data-theme="...">`. The app root
/// carries the same attribute from render state; this echo is for
/// styling outside that root and is a no-op off the browser.
pub fn apply_root_marker(dark: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(THEME_ATTR, theme_name(dark));
    }
}

/// Value side of the `data-theme` attribute.
pub const fn theme_name(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

/// Colors handed to chart markup, which paints SVG strokes and fills
/// directly and cannot pick them up from CSS variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Primary series and bar fill.
    pub ink: &'static str,
    /// Comparison series and the rotated axis caption.
    pub muted: &'static str,
    /// Axis tick labels.
    pub axis: &'static str,
    /// Gridlines and axis baselines.
    pub grid: &'static str,
}

pub const LIGHT: Palette = Palette {
    ink: "#111827",
    muted: "#6B7280",
    axis: "#374151",
    grid: "#E5E7EB",
};

pub const DARK: Palette = Palette {
    ink: "#F9FAFB",
    muted: "#9CA3AF",
    axis: "#D1D5DB",
    grid: "#374151",
};

/// Single lookup point for theme-dependent chart colors.
pub const fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::MemoryStore;

    /// Store whose reads miss and whose writes fail, like localStorage
    /// in a private window.
    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_initialize_defaults_to_light_when_nothing_stored() {
        let store = MemoryStore::new();
        assert!(!initialize(&store));
    }

    #[test]
    fn test_initialize_reads_stored_true_as_dark() {
        let store = MemoryStore::new();
        store.write(DARK_MODE_KEY, "true");
        assert!(initialize(&store));
    }

    #[test]
    fn test_initialize_reads_stored_false_as_light() {
        let store = MemoryStore::new();
        store.write(DARK_MODE_KEY, "false");
        assert!(!initialize(&store));
    }

    #[test]
    fn test_initialize_ignores_unrecognized_values() {
        let store = MemoryStore::new();
        for garbage in ["sometimes", "TRUE", "1", ""] {
            store.write(DARK_MODE_KEY, garbage);
            assert!(!initialize(&store), "{garbage:?} should fall back to light");
        }
    }

    #[test]
    fn test_initialize_survives_unavailable_storage() {
        assert!(!initialize(&UnavailableStore));
    }

    #[test]
    fn test_persist_round_trips_through_initialize() {
        let store = MemoryStore::new();
        persist(&store, true);
        assert_eq!(store.read(DARK_MODE_KEY), Some("true".to_string()));
        assert!(initialize(&store));
        persist(&store, false);
        assert_eq!(store.read(DARK_MODE_KEY), Some("false".to_string()));
        assert!(!initialize(&store));
    }

    #[test]
    fn test_persist_swallows_write_failure() {
        // Must not panic, the session keeps its in-memory flag.
        persist(&UnavailableStore, true);
    }

    #[test]
    fn test_theme_name_values() {
        assert_eq!(theme_name(false), "light");
        assert_eq!(theme_name(true), "dark");
    }

    #[test]
    fn test_palette_lookup_switches_with_flag() {
        assert_eq!(palette(false), &LIGHT);
        assert_eq!(palette(true), &DARK);
        assert_ne!(LIGHT.ink, DARK.ink);
        assert_ne!(LIGHT.grid, DARK.grid);
    }
}
