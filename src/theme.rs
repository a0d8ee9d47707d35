//! Theme
//!
//! Light/dark flag and the color constants each theme selects. Nothing here
//! renders; widgets receive a `Palette` and use its values as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Dashboard color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label shown next to the theme switch
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light mode",
            Theme::Dark => "Dark mode",
        }
    }

    /// Icon shown next to the theme switch
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "sun",
            Theme::Dark => "moon",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Invalid theme: {}. Use light or dark", other)),
        }
    }
}

/// Colors for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub chart_background: &'static str,
    pub bar: &'static str,
    pub text: &'static str,
    pub label: &'static str,
    pub secondary_text: &'static str,
    pub tooltip_background: &'static str,
    pub axis: &'static str,
    pub pie_label: &'static str,
    pub sidebar_background: &'static str,
    pub active_item_background: &'static str,
    pub active_item_text: &'static str,
    pub item_text: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    chart_background: "#ffffff",
    bar: "#3b82f6",
    text: "#374151",
    label: "#374151",
    secondary_text: "#6b7280",
    tooltip_background: "#f3f4f6",
    axis: "#e5e7eb",
    pie_label: "#333333",
    sidebar_background: "#ffffff",
    active_item_background: "#dbeafe",
    active_item_text: "#1d4ed8",
    item_text: "#374151",
};

pub const DARK_PALETTE: Palette = Palette {
    chart_background: "#100e24",
    bar: "#1a91ff",
    text: "#ffffff",
    label: "#f3f4f6",
    secondary_text: "#9ca3af",
    tooltip_background: "#1e1b4b",
    axis: "#333333",
    pie_label: "#ffffff",
    sidebar_background: "#17162e",
    active_item_background: "#201e3d",
    active_item_text: "#ffffff",
    item_text: "#f5f5f5",
};

/// Shared dark-mode flag.
///
/// Cloning yields another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    current: Arc<RwLock<Theme>>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.current.read().await
    }

    pub async fn set(&self, theme: Theme) {
        *self.current.write().await = theme;
    }

    /// Flip the theme and return the new value
    pub async fn toggle(&self) -> Theme {
        let mut current = self.current.write().await;
        let next = current.toggled();
        *current = next;
        tracing::info!(theme = %next, "Theme toggled");
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_palette_selection() {
        assert_eq!(Theme::Dark.palette().bar, "#1a91ff");
        assert_eq!(Theme::Light.palette().bar, "#3b82f6");
        assert_eq!(Theme::Dark.palette().chart_background, "#100e24");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.label(), "Dark mode");
        assert_eq!(Theme::Light.label(), "Light mode");
        assert_eq!(Theme::Dark.icon(), "moon");
    }

    #[tokio::test]
    async fn test_toggle_shared_between_handles() {
        let state = ThemeState::new(Theme::Light);
        let other = state.clone();

        assert_eq!(state.toggle().await, Theme::Dark);
        assert_eq!(other.current().await, Theme::Dark);

        other.set(Theme::Light).await;
        assert_eq!(state.current().await, Theme::Light);
    }
}
