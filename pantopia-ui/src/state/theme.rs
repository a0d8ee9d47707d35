//! Theme State
//!
//! Light/dark mode as a reactive signal, remembered in local storage.

use leptos::*;

use crate::api;

const THEME_KEY: &str = "pantopia_theme";

/// Dashboard color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Switch label shown next to the toggle
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light mode",
            Theme::Dark => "Dark mode",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

/// Handle to the current theme
#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
}

impl ThemeController {
    /// Start from the stored preference, else `initial`
    pub fn new(initial: Theme) -> Self {
        let theme = api::stored(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(initial);

        let controller = Self {
            theme: create_rw_signal(theme),
        };
        controller.apply_to_document();
        controller
    }

    /// Read-only view for components and resources
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        api::store(THEME_KEY, theme.as_str());
        self.apply_to_document();

        spawn_local(async move {
            if let Err(e) = api::set_theme(theme).await {
                web_sys::console::warn_1(&format!("Failed to store theme: {}", e).into());
            }
        });
    }

    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }

    /// Mirror the theme on `<html data-theme>` for the stylesheet
    fn apply_to_document(&self) {
        let theme = self.theme.get_untracked();
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}
