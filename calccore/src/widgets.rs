//! Custom widgets — keypad buttons and the read-only display field

use egui::{Response, Sense, Stroke, Ui, Widget};
use crate::theme::{CalcTheme, StyleTable};

/// A keypad button: filled with the theme's button colour, 1px border,
/// hover and pressed fills taken from the same [`StyleTable`].
///
/// Sizes itself to the space it is given, so place it with [`Ui::put`].
pub struct KeyButton<'a> {
    label: &'a str,
    table: &'a StyleTable,
    font_size: f32,
    rounding: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, table: &'a StyleTable, theme: &CalcTheme) -> Self {
        Self {
            label,
            table,
            font_size: theme.font_size_button,
            rounding: theme.corner_radius,
        }
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.is_pointer_button_down_on() {
                self.table.button_pressed
            } else if response.hovered() {
                self.table.button_hover
            } else {
                self.table.button_bg
            };

            let painter = ui.painter();
            painter.rect(rect, self.rounding, fill, Stroke::new(1.0, self.table.border));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                self.table.text,
            );
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// Right-aligned, read-only display showing `text` verbatim.
pub fn display_field(ui: &mut Ui, text: &str, table: &StyleTable, theme: &CalcTheme) -> Response {
    egui::Frame::none()
        .fill(table.display_bg)
        .stroke(Stroke::new(1.0, table.border))
        .rounding(theme.corner_radius)
        .inner_margin(egui::Margin::symmetric(theme.padding, 4.0))
        .show(ui, |ui| {
            ui.set_min_height(theme.display_height);
            ui.set_max_height(theme.display_height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(egui::FontId::proportional(theme.font_size_display))
                        .color(table.display_text),
                );
            });
        })
        .response
}
