use eframe::egui::{vec2, Align, Button, Layout, RichText, Slider, Ui};
use tracing::debug;

use super::common::{card_frame, UiColors};
use crate::controller::{ControllerCommand, DashboardState};
use crate::mapping::{MappingSlot, MAX_CONFIRM_DELAY_MS};

/// Hinweistext für den zuletzt aufgenommenen Button
pub fn capture_notice(state: &DashboardState) -> Option<String> {
    state
        .last_capture
        .map(|(slot, index)| format!("Captured button {} for {}", index, slot.label()))
}

/// Rendert das Mapping-Menü und gibt die ausgelösten Kommandos zurück
pub fn render(ui: &mut Ui, state: &DashboardState) -> Vec<ControllerCommand> {
    let mut commands = Vec::new();

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Button Mapping");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Factory Reset").clicked() {
                    commands.push(ControllerCommand::FactoryReset);
                }
            });
        });
        ui.label(
            RichText::new("Record your controller buttons for the best performance.")
                .color(UiColors::MUTED),
        );

        if let Some(notice) = capture_notice(state) {
            ui.label(RichText::new(notice).color(UiColors::ACTIVE));
        }

        ui.add_space(8.0);

        let width = ui.available_width() - 20.0;
        for slot in MappingSlot::ALL {
            render_slot(ui, state, slot, width, &mut commands);
        }

        ui.add_space(8.0);
        render_delay(ui, state, &mut commands);
    });

    commands
}

fn render_slot(
    ui: &mut Ui,
    state: &DashboardState,
    slot: MappingSlot,
    width: f32,
    commands: &mut Vec<ControllerCommand>,
) {
    let recording = state.recording == Some(slot);
    ui.label(RichText::new(slot.label()).small().color(UiColors::MUTED));

    let text = if recording {
        RichText::new("Press the button on your controller now...").color(UiColors::HIGHLIGHT)
    } else {
        RichText::new(format!("Current button: [ {} ]", state.mapping.get(slot)))
    };
    let fill = if recording {
        UiColors::ACCENT
    } else {
        UiColors::INNER_BG
    };

    ui.horizontal(|ui| {
        let button = Button::new(text.strong()).fill(fill).min_size(vec2(width * 0.8, 36.0));
        if ui.add(button).clicked() && !recording {
            commands.push(ControllerCommand::Arm(slot));
        }
        if recording && ui.button("Cancel").clicked() {
            debug!("Recording for {} slot cancelled from settings", slot);
            commands.push(ControllerCommand::CancelRecording);
        }
    });
    ui.add_space(4.0);
}

fn render_delay(
    ui: &mut Ui,
    state: &DashboardState,
    commands: &mut Vec<ControllerCommand>,
) {
    card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new(format!(
                "Response delay: {}ms",
                state.mapping.confirm_delay
            ))
            .strong(),
        );

        let mut delay = state.mapping.confirm_delay;
        if ui
            .add(Slider::new(&mut delay, 0..=MAX_CONFIRM_DELAY_MS).suffix(" ms"))
            .changed()
        {
            commands.push(ControllerCommand::SetConfirmDelay(delay));
        }

        ui.horizontal(|ui| {
            ui.label(RichText::new("0ms (Extreme)").small().color(UiColors::MUTED));
            ui.label(RichText::new("25ms (Competitive)").small().color(UiColors::MUTED));
            ui.label(RichText::new("50ms (Safe Mode)").small().color(UiColors::MUTED));
        });
    });
}
