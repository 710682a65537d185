use eframe::egui::{RichText, Ui};

use super::common::{card_frame, UiColors};

/// Datenstruktur für die Systeminformationen
pub struct AboutMenuData {
    title: String,
    polling_rate_hz: f64,
}

impl AboutMenuData {
    pub fn new(title: String, polling_rate_hz: f64) -> Self {
        Self {
            title,
            polling_rate_hz,
        }
    }

    /// Rendert die Systeminformationen
    pub fn render(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(self.title.to_uppercase()).size(36.0).strong());
            ui.label(RichText::new("Input Dashboard").color(UiColors::HIGHLIGHT));
            ui.add_space(16.0);
            ui.label(
                "Shows the live state of the first connected controller, lets you record \
                 which buttons trigger the edit and instant reset actions, and reports which \
                 action is currently held.",
            );
            ui.add_space(16.0);

            ui.columns(2, |columns| {
                stat_card(
                    &mut columns[0],
                    &format!("{:.1}", self.polling_rate_hz),
                    "Polling Rate (Hz)",
                );
                stat_card(&mut columns[1], "1", "Controllers Tracked");
            });
        });
    }
}

fn stat_card(ui: &mut Ui, value: &str, caption: &str) {
    card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).size(28.0).strong().color(UiColors::ACCENT));
            ui.label(RichText::new(caption).small().color(UiColors::MUTED));
        });
    });
}
