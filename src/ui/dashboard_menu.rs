use eframe::egui::{self, RichText, Ui};

use super::common::{card_frame, UiColors};
use super::visualizer;
use crate::controller::DashboardState;
use crate::status::StatusLabel;

/// Rendert das Dashboard: Controller-Vorschau und Status-Monitor
pub fn render(ui: &mut Ui, state: &DashboardState) {
    ui.vertical(|ui| {
        ui.heading("Interactive Preview");
        visualizer::render(ui, &state.snapshot, &state.highlight_indices());

        ui.add_space(8.0);

        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("OPERATIONS MONITOR").small().color(UiColors::MUTED));
            ui.label(
                RichText::new(state.status.as_str())
                    .size(22.0)
                    .strong()
                    .color(status_color(state.status)),
            );
        });

        ui.add_space(8.0);

        ui.columns(2, |columns| {
            feature_card(
                &mut columns[0],
                "Auto-Edit Macro",
                "Edit button mapped to index",
                state.mapping.edit_button,
            );
            feature_card(
                &mut columns[1],
                "Instant Reset",
                "Reset button mapped to index",
                state.mapping.reset_button,
            );
        });
    });
}

fn status_color(status: StatusLabel) -> egui::Color32 {
    match status {
        StatusLabel::Recording => UiColors::HIGHLIGHT,
        StatusLabel::EngineIdle => UiColors::INACTIVE,
        StatusLabel::EditMacroActive | StatusLabel::InstantResetActive => UiColors::ACCENT,
        StatusLabel::WaitingForInput => egui::Color32::WHITE,
    }
}

fn feature_card(ui: &mut Ui, title: &str, caption: &str, index: usize) {
    card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(title).strong().size(16.0));
        ui.label(RichText::new(format!("{}: [ {} ]", caption, index)).color(UiColors::MUTED));
    });
}
