use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// Process-wide colour mode. Starts light; handlers read it when rendering and
/// flip it through `toggle`.
#[derive(Clone, Default)]
pub struct ThemeState {
    dark: Arc<AtomicBool>,
}

impl ThemeState {
    pub fn mode(&self) -> ColorMode {
        if self.dark.load(Ordering::Relaxed) {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Returns the mode now in effect.
    pub fn toggle(&self) -> ColorMode {
        let was_dark = self.dark.fetch_xor(true, Ordering::Relaxed);
        if was_dark {
            ColorMode::Light
        } else {
            ColorMode::Dark
        }
    }
}
