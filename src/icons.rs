//! Icon service for the action bar
//!
//! Provides the glyphs used around buttons and dropdowns, with a Unicode
//! theme and an ASCII fallback for limited terminals.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Caret shown after a closed group trigger
    pub fn disclosure(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "▾",
            IconTheme::Ascii => "v",
        }
    }

    /// Caret shown after an open group trigger
    pub fn disclosure_open(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "▴",
            IconTheme::Ascii => "^",
        }
    }

    /// Marker in front of the selected dropdown entry
    pub fn selection(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "›",
            IconTheme::Ascii => ">",
        }
    }

    /// Marker for disabled entries
    pub fn disabled(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Unicode => "⊘",
            IconTheme::Ascii => "x",
        }
    }
}
