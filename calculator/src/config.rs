//! Window configuration

use calccore::ThemeState;

use crate::page::PageState;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_size: [f32; 2],
    pub initial_theme: ThemeState,
    pub initial_page: PageState,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Calculator".to_string(),
            inner_size: [400.0, 500.0],
            min_size: [260.0, 360.0],
            initial_theme: ThemeState::Light,
            initial_page: PageState::Calculator,
        }
    }
}

impl WindowConfig {
    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_inner_size(self.inner_size)
            .with_min_inner_size(self.min_size)
            .with_title(&self.title)
    }
}
