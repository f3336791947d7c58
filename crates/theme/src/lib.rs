//! Theme system for wordsquad.
//!
//! Provides color theme management with support for custom TOML themes.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::load_theme;

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

// Embed theme files at compile time
const THEME_DARK_TOML: &str = include_str!("../themes/dark.toml");
const THEME_LIGHT_TOML: &str = include_str!("../themes/light.toml");

// Static theme instances
static THEME_DARK: OnceLock<Theme> = OnceLock::new();
static THEME_LIGHT: OnceLock<Theme> = OnceLock::new();

// Cache for user-loaded themes
static USER_THEMES: OnceLock<Mutex<HashMap<String, &'static Theme>>> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

/// Get themes directory path.
fn get_themes_dir() -> Option<&'static PathBuf> {
    THEMES_DIR.get()
}

/// Hardcoded fallback theme in case of parse errors.
fn get_hardcoded_fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Black,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        tile_correct: Color::Green,
        tile_present: Color::Yellow,
        tile_absent: Color::DarkGray,
    }
}

/// Load theme from embedded TOML content.
fn load_theme_from_toml(content: &str, name: &'static str) -> Theme {
    match loader::load_theme_from_str(content, name) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name, e
            );
            get_hardcoded_fallback_theme(name)
        }
    }
}

fn get_dark_theme() -> &'static Theme {
    THEME_DARK.get_or_init(|| load_theme_from_toml(THEME_DARK_TOML, "dark"))
}

fn get_light_theme() -> &'static Theme {
    THEME_LIGHT.get_or_init(|| load_theme_from_toml(THEME_LIGHT_TOML, "light"))
}

/// Try to load user theme from config directory.
fn try_load_user_theme(name: &str) -> Option<&'static Theme> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    // Check if theme is already cached
    {
        let cache_lock = cache.lock().ok()?;
        if let Some(theme) = cache_lock.get(name) {
            return Some(*theme);
        }
    }

    // Try to load from file
    let themes_dir = get_themes_dir()?;
    let theme_path = themes_dir.join(format!("{}.toml", name));

    if !theme_path.exists() {
        return None;
    }

    let theme = load_theme(&theme_path).ok()?;

    // Leak the theme to get 'static reference
    let static_theme: &'static Theme = Box::leak(Box::new(theme));

    // Cache it (ignore if mutex is poisoned - theme already loaded, just won't be cached)
    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), static_theme);
    }

    Some(static_theme)
}

impl Theme {
    /// Get theme by name.
    ///
    /// First tries to load from user's config directory.
    /// If not found, falls back to built-in themes.
    pub fn get_by_name(name: &str) -> &'static Theme {
        // Try to load user theme first
        if let Some(theme) = try_load_user_theme(name) {
            return theme;
        }

        // Fall back to built-in themes
        match name {
            "dark" => get_dark_theme(),
            "light" => get_light_theme(),
            _ => get_dark_theme(),
        }
    }

    /// Get list of all theme names.
    pub fn all_theme_names() -> &'static [&'static str] {
        &["dark", "light"]
    }

    /// Name of the theme following `name` in the built-in rotation.
    pub fn next_theme_name(name: &str) -> &'static str {
        let names = Self::all_theme_names();
        let current = names.iter().position(|n| *n == name).unwrap_or(0);
        names[(current + 1) % names.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_loading() {
        let dark = Theme::get_by_name("dark");
        assert_eq!(dark.name, "dark");

        let light = Theme::get_by_name("light");
        assert_eq!(light.name, "light");

        // Test fallback for unknown theme
        let unknown = Theme::get_by_name("nonexistent");
        assert_eq!(unknown.name, "dark");
    }

    #[test]
    fn test_embedded_themes_parse() {
        // Embedded themes must never hit the hardcoded fallback
        let dark = get_dark_theme();
        assert_ne!(dark.tile_correct, dark.tile_absent);

        let light = get_light_theme();
        assert_ne!(light.bg, dark.bg);
    }

    #[test]
    fn test_next_theme_name_cycles() {
        let first = Theme::all_theme_names()[0];
        let mut name = first;
        for _ in 0..Theme::all_theme_names().len() {
            name = Theme::next_theme_name(name);
        }
        assert_eq!(name, first);
        assert_eq!(Theme::next_theme_name("nonexistent"), "light");
    }
}
