//! Calculator application

use calccore::theme::consume_special_keys;
use calccore::widgets::{display_field, KeyButton};
use calccore::{CalcTheme, ThemeState};
use egui::Context;

use crate::config::WindowConfig;
use crate::display::DisplayController;
use crate::keypad::{self, GRID_COLS, GRID_ROWS};
use crate::page::{Navigator, PageState, TUTORIAL_TEXT};

pub struct CalculatorView {
    display: DisplayController,
    navigator: Navigator,
    theme_state: ThemeState,
    theme: CalcTheme,
    /// Set when the installed egui style no longer matches `theme_state`.
    style_stale: bool,
}

impl CalculatorView {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            display: DisplayController::new(),
            navigator: Navigator::new(config.initial_page),
            theme_state: config.initial_theme,
            theme: CalcTheme::default(),
            style_stale: true,
        }
    }

    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    pub fn page(&self) -> PageState {
        self.navigator.current()
    }

    pub fn theme_state(&self) -> ThemeState {
        self.theme_state
    }

    /// Button press or mapped key, both land here.
    pub fn press(&mut self, label: &str) {
        self.display.handle(label);
        tracing::debug!(label = %label, display = %self.display_text(), "key");
    }

    pub fn switch_to(&mut self, page: PageState) {
        self.navigator.switch_to(page);
    }

    pub fn toggle_theme(&mut self) {
        self.theme_state = self.theme_state.toggle();
        self.style_stale = true;
        tracing::info!(theme = self.theme_state.name(), "theme toggled");
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        // the keypad only listens while it is on screen
        if self.page() != PageState::Calculator {
            return;
        }

        let labels: Vec<&'static str> = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|event| match event {
                    egui::Event::Text(text) => keypad::labels_for_text(text),
                    egui::Event::Key { key, pressed: true, .. } => {
                        keypad::label_for_key(*key).into_iter().collect()
                    }
                    _ => Vec::new(),
                })
                .collect()
        });

        for label in labels {
            self.press(label);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Toggle Theme").clicked() {
                self.toggle_theme();
            }
            if ui.button("Tutorials").clicked() {
                self.switch_to(PageState::Tutorial);
            }
        });
    }

    fn render_calculator(&mut self, ui: &mut egui::Ui) {
        let table = self.theme_state.style();
        display_field(ui, self.display.text(), table, &self.theme);
        ui.add_space(self.theme.item_spacing);

        // rows 1..GRID_ROWS; row 0 is the display above
        let area = ui.available_rect_before_wrap();
        let gap = self.theme.item_spacing;
        let cols = GRID_COLS as f32;
        let rows = (GRID_ROWS - 1) as f32;
        let cell = egui::vec2(
            ((area.width() - gap * (cols - 1.0)) / cols).max(1.0),
            ((area.height() - gap * (rows - 1.0)) / rows).max(1.0),
        );

        let mut pressed = None;
        for spec in &keypad::BUTTONS {
            let min = area.min
                + egui::vec2(
                    spec.col as f32 * (cell.x + gap),
                    (spec.row - 1) as f32 * (cell.y + gap),
                );
            let rect = egui::Rect::from_min_size(min, cell);
            let response = ui
                .put(rect, KeyButton::new(spec.label, table, &self.theme))
                .on_hover_text(spec.tooltip());
            if response.clicked() {
                pressed = Some(spec.label);
            }
        }

        if let Some(label) = pressed {
            self.press(label);
        }
    }

    fn render_tutorial(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.padding);
            ui.label(TUTORIAL_TEXT);
            ui.add_space(self.theme.padding * 2.0);
            if ui.button("Back to Calculator").clicked() {
                self.switch_to(PageState::Calculator);
            }
        });
    }

    /// One frame: restyle if needed, route keys, draw the visible page.
    pub fn show(&mut self, ctx: &Context) {
        if self.style_stale {
            self.theme.apply(ctx, self.theme_state());
            self.style_stale = false;
        }

        self.handle_keys(ctx);

        egui::TopBottomPanel::top("controls")
            .frame(self.theme.page_frame(self.theme_state))
            .show(ctx, |ui| self.render_controls(ui));

        egui::CentralPanel::default()
            .frame(self.theme.page_frame(self.theme_state))
            .show(ctx, |ui| {
                calccore::safety::catch_or((), || match self.page() {
                    PageState::Calculator => self.render_calculator(ui),
                    PageState::Tutorial => self.render_tutorial(ui),
                });
            });
    }
}

impl eframe::App for CalculatorView {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
