//! Calculator theme — two fixed style tables, light and dark
//!
//! The active theme is an explicit [`ThemeState`]; every colour the window
//! uses is looked up from the matching [`StyleTable`].

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Which of the two style tables is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    pub fn style(self) -> &'static StyleTable {
        match self {
            ThemeState::Light => &LIGHT,
            ThemeState::Dark => &DARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }
}

/// Colours for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    pub window_bg: Color32,
    pub text: Color32,
    pub button_bg: Color32,
    pub button_hover: Color32,
    pub button_pressed: Color32,
    pub border: Color32,
    pub display_bg: Color32,
    pub display_text: Color32,
    pub dark_base: bool,
}

pub static LIGHT: StyleTable = StyleTable {
    window_bg: Color32::from_rgb(0xf0, 0xf0, 0xf0),
    text: Color32::from_rgb(0x00, 0x00, 0x00),
    button_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    button_hover: Color32::from_rgb(0xe0, 0xe0, 0xe0),
    button_pressed: Color32::from_rgb(0xd0, 0xd0, 0xd0),
    border: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    display_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    display_text: Color32::from_rgb(0x00, 0x00, 0x00),
    dark_base: false,
};

pub static DARK: StyleTable = StyleTable {
    window_bg: Color32::from_rgb(0x33, 0x33, 0x33),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    button_bg: Color32::from_rgb(0x44, 0x44, 0x44),
    button_hover: Color32::from_rgb(0x55, 0x55, 0x55),
    button_pressed: Color32::from_rgb(0x66, 0x66, 0x66),
    border: Color32::from_rgb(0x55, 0x55, 0x55),
    display_bg: Color32::from_rgb(0x66, 0x66, 0x66),
    display_text: Color32::from_rgb(0xff, 0xff, 0xff),
    dark_base: true,
};

/// Sizes shared by both themes
#[derive(Debug, Clone, PartialEq)]
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_display: f32,
    pub font_size_heading: f32,
    pub corner_radius: f32,
    pub padding: f32,
    pub item_spacing: f32,
    pub display_height: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_button: 16.0,
            font_size_display: 24.0,
            font_size_heading: 20.0,
            corner_radius: 5.0,
            padding: 10.0,
            item_spacing: 6.0,
            display_height: 50.0,
        }
    }
}

impl CalcTheme {
    /// Build the egui style for `state` without installing it.
    pub fn style_for(&self, state: ThemeState) -> Style {
        let table = state.style();
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if table.dark_base { Visuals::dark() } else { Visuals::light() };

        visuals.override_text_color = Some(table.text);
        visuals.window_fill = table.window_bg;
        visuals.panel_fill = table.window_bg;
        visuals.faint_bg_color = table.window_bg;
        visuals.extreme_bg_color = table.display_bg;

        let rounding = Rounding::same(self.corner_radius);
        visuals.window_rounding = rounding;
        visuals.menu_rounding = rounding;
        visuals.window_stroke = Stroke::new(1.0, table.border);

        let paint = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, table.border);
            ws.fg_stroke = Stroke::new(1.0, table.text);
            ws.rounding = rounding;
        };
        paint(&mut visuals.widgets.noninteractive, table.window_bg);
        paint(&mut visuals.widgets.inactive, table.button_bg);
        paint(&mut visuals.widgets.hovered, table.button_hover);
        paint(&mut visuals.widgets.active, table.button_pressed);
        paint(&mut visuals.widgets.open, table.button_pressed);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(self.padding, self.padding / 2.0);

        style
    }

    /// Install the style for `state` on the whole window.
    pub fn apply(&self, ctx: &egui::Context, state: ThemeState) {
        ctx.set_style(self.style_for(state));
    }

    /// Frame for the central panel: window background plus padding.
    pub fn page_frame(&self, state: ThemeState) -> egui::Frame {
        egui::Frame::none()
            .fill(state.style().window_bg)
            .inner_margin(egui::Margin::same(self.padding))
    }
}

/// Consume key events that would fight the keypad.
/// Call this at the start of your app's update() function.
/// - Tab: no focus cycling, so Enter never activates a focused button
/// - Cmd+/Cmd-/Cmd=: no zoom scaling while `+`, `-` and `=` are calculator keys
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } if modifiers.command => {
                !matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
            }
            _ => true,
        });
    });
}
