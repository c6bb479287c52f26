// src/config/state.rs
use std::collections::HashMap;

use super::options::AppOptions;
use crate::board::SectionState;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Expanded/collapsed per syndicate heading; missing = initial state.
    pub sections: HashMap<String, SectionState>,

    /// Re-run the board on a timer
    pub auto_refresh: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            sections: HashMap::new(),
            auto_refresh: false,
            window_w: 1100,
            window_h: 700,
        }
    }
}

impl GuiState {
    pub fn section(&self, syndicate: &str) -> SectionState {
        self.sections.get(syndicate).copied().unwrap_or_default()
    }

    /// Every section back to its initial state. Called when a new pass starts.
    pub fn reset_sections(&mut self) {
        self.sections.clear();
    }

    /// Flip one section. Purely local; never triggers a fetch.
    pub fn toggle_section(&mut self, syndicate: &str) -> SectionState {
        let state = self.sections.entry(syndicate.to_string()).or_default();
        state.toggle();
        *state
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
