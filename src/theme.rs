//! Theme
//!
//! Light/dark mode. The choice is kept in memory only and applied as a
//! `data-theme` attribute on `<html>`.

use crate::assets::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon on the toggle button: the theme you would switch to
    pub fn toggle_icon(&self) -> Icon {
        match self {
            Theme::Light => Icon::Moon,
            Theme::Dark => Icon::Sun,
        }
    }

    /// Configured preference wins, then the system setting
    pub fn initial(configured: Option<bool>) -> Self {
        Self::resolve(configured, system_prefers_dark)
    }

    fn resolve(configured: Option<bool>, system: impl FnOnce() -> bool) -> Self {
        Self::from_dark(configured.unwrap_or_else(system))
    }
}

/// `prefers-color-scheme: dark`, false outside a browser
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Set `data-theme` on the document element
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(err) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("[THEME] Failed to apply {}: {:?}", theme.as_str(), err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_toggle_icon() {
        assert_eq!(Theme::Light.toggle_icon(), Icon::Moon);
        assert_eq!(Theme::Dark.toggle_icon(), Icon::Sun);
    }

    #[test]
    fn test_configured_preference_wins() {
        assert_eq!(Theme::resolve(Some(true), || false), Theme::Dark);
        assert_eq!(Theme::resolve(Some(false), || true), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(Theme::resolve(None, || true), Theme::Dark);
        assert_eq!(Theme::resolve(None, || false), Theme::Light);
    }

    #[test]
    fn test_initial_outside_browser_is_light() {
        assert_eq!(Theme::initial(None), Theme::Light);
    }
}
