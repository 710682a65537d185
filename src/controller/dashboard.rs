//! Dashboard controller: the single owner of all sampling and mapping state.
//!
//! Mutation only happens through [`DashboardController::tick`] (poll results) and
//! [`DashboardController::apply`] (user commands). Views receive an immutable
//! [`DashboardState`] copy after every change.

use chrono::Local;
use tracing::{debug, info};

use super::snapshot::GamepadSnapshot;
use super::source::RawGamepad;
use crate::mapping::{ControllerMapping, MappingSlot, MappingStore, Recorder};
use crate::status::{derive_status, StatusLabel};

/// User actions sent from the views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerCommand {
    /// Record the next pressed button into `slot`
    Arm(MappingSlot),
    CancelRecording,
    SetConfirmDelay(u8),
    FactoryReset,
    ToggleEngine,
}

/// Read-only state handed to the display layer
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub snapshot: GamepadSnapshot,
    pub mapping: ControllerMapping,
    /// Slot the recorder is listening for, if any
    pub recording: Option<MappingSlot>,
    pub engine_active: bool,
    pub status: StatusLabel,
    /// Last button captured by the recorder, cleared on re-arm and factory reset
    pub last_capture: Option<(MappingSlot, usize)>,
}

impl DashboardState {
    pub fn highlight_indices(&self) -> [usize; 4] {
        self.mapping.highlight_indices()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardController::new().state()
    }
}

#[derive(Debug)]
pub struct DashboardController {
    store: MappingStore,
    recorder: Recorder,
    snapshot: GamepadSnapshot,
    engine_active: bool,
    status: StatusLabel,
    last_capture: Option<(MappingSlot, usize)>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardController {
    pub fn new() -> Self {
        let mut controller = Self {
            store: MappingStore::new(),
            recorder: Recorder::Idle,
            snapshot: GamepadSnapshot::default(),
            engine_active: true,
            status: StatusLabel::default(),
            last_capture: None,
        };
        controller.refresh_status(false);
        controller
    }

    /// One poll tick with the host reading for this frame.
    pub fn tick(&mut self, reading: Option<RawGamepad>) {
        // The press that completes a recording must not count as an action on the same tick
        let was_recording = self.recorder.is_armed();

        if let Some(reading) = &reading {
            let buttons: Vec<bool> = reading.buttons.iter().map(|b| b.pressed).collect();
            if let Some((slot, index)) = self.recorder.observe(&buttons, &mut self.store) {
                info!("Captured button {} for {} slot", index, slot);
                self.last_capture = Some((slot, index));
            }
        }

        self.snapshot.update(reading.as_ref(), Local::now());
        self.refresh_status(was_recording);
    }

    pub fn apply(&mut self, command: ControllerCommand) {
        debug!("Applying command: {:?}", command);
        match command {
            ControllerCommand::Arm(slot) => {
                self.last_capture = None;
                self.recorder.arm(slot);
            }
            // No-op when a capture already disarmed the recorder
            ControllerCommand::CancelRecording => self.recorder.cancel(),
            ControllerCommand::SetConfirmDelay(delay_ms) => self.store.set_confirm_delay(delay_ms),
            ControllerCommand::FactoryReset => {
                self.last_capture = None;
                self.store.factory_reset();
            }
            ControllerCommand::ToggleEngine => self.toggle_engine(),
        }
        self.refresh_status(false);
    }

    pub fn state(&self) -> DashboardState {
        DashboardState {
            snapshot: self.snapshot.clone(),
            mapping: self.store.mapping(),
            recording: self.recorder.armed_slot(),
            engine_active: self.engine_active,
            status: self.status,
            last_capture: self.last_capture,
        }
    }

    pub fn status(&self) -> StatusLabel {
        self.status
    }

    pub fn mapping(&self) -> ControllerMapping {
        self.store.mapping()
    }

    pub fn recorder(&self) -> Recorder {
        self.recorder
    }

    pub fn snapshot(&self) -> &GamepadSnapshot {
        &self.snapshot
    }

    fn toggle_engine(&mut self) {
        self.engine_active = !self.engine_active;
        info!(
            "Engine {}",
            if self.engine_active { "activated" } else { "stopped" }
        );
    }

    fn refresh_status(&mut self, was_recording: bool) {
        // A disconnected pad contributes no pressed buttons
        let buttons: &[bool] = if self.snapshot.connected {
            &self.snapshot.buttons
        } else {
            &[]
        };
        let status = derive_status(
            buttons,
            &self.store.mapping(),
            self.engine_active,
            was_recording || self.recorder.is_armed(),
        );
        if status != self.status {
            debug!("Status: {} -> {}", self.status, status);
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::source::RawButton;

    fn pad(pressed: &[usize]) -> RawGamepad {
        RawGamepad {
            id: "Test Pad (Vendor: 0001 Product: 0002)".to_string(),
            buttons: (0..17)
                .map(|i| RawButton {
                    pressed: pressed.contains(&i),
                })
                .collect(),
            axes: vec![0.0; 4],
        }
    }

    #[test]
    fn starts_waiting_with_factory_mapping() {
        let controller = DashboardController::new();
        let state = controller.state();
        assert_eq!(state.status, StatusLabel::WaitingForInput);
        assert_eq!(state.mapping, ControllerMapping::FACTORY_DEFAULT);
        assert!(state.engine_active);
        assert_eq!(state.recording, None);
        assert!(!state.snapshot.connected);
    }

    #[test]
    fn recording_captures_lowest_index_and_disarms() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Reset));

        controller.tick(Some(pad(&[2, 5])));

        assert_eq!(controller.mapping().reset_button, 2);
        assert_eq!(controller.recorder(), Recorder::Idle);
        assert_eq!(controller.state().recording, None);
    }

    #[test]
    fn capture_tick_still_reports_recording() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Reset));

        // Button 0 is the edit slot; it must not be read as an action while recording
        controller.tick(Some(pad(&[0])));
        assert_eq!(controller.status(), StatusLabel::Recording);

        controller.tick(Some(pad(&[0])));
        assert_eq!(controller.status(), StatusLabel::EditMacroActive);
    }

    #[test]
    fn armed_recorder_survives_idle_ticks() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Edit));

        controller.tick(Some(pad(&[])));
        controller.tick(None);
        controller.tick(Some(pad(&[])));

        assert_eq!(controller.recorder(), Recorder::Armed(MappingSlot::Edit));
        assert_eq!(controller.mapping(), ControllerMapping::FACTORY_DEFAULT);
        assert_eq!(controller.status(), StatusLabel::Recording);
    }

    #[test]
    fn arming_switches_status_immediately() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Select));
        assert_eq!(controller.status(), StatusLabel::Recording);

        controller.apply(ControllerCommand::CancelRecording);
        assert_eq!(controller.status(), StatusLabel::WaitingForInput);
    }

    #[test]
    fn edit_has_priority_over_reset() {
        let mut controller = DashboardController::new();
        controller.tick(Some(pad(&[0, 1])));
        assert_eq!(controller.status(), StatusLabel::EditMacroActive);

        controller.tick(Some(pad(&[1])));
        assert_eq!(controller.status(), StatusLabel::InstantResetActive);
    }

    #[test]
    fn stopped_engine_suppresses_actions_but_keeps_polling() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::ToggleEngine);

        controller.tick(Some(pad(&[0])));

        assert_eq!(controller.status(), StatusLabel::EngineIdle);
        assert!(controller.snapshot().connected);
        assert!(controller.snapshot().is_pressed(0));

        controller.apply(ControllerCommand::ToggleEngine);
        assert_eq!(controller.status(), StatusLabel::EditMacroActive);
    }

    #[test]
    fn cancel_after_capture_keeps_the_captured_button() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Edit));

        // The press lands before the cancel reaches the loop
        controller.tick(Some(pad(&[4])));
        controller.apply(ControllerCommand::CancelRecording);

        let state = controller.state();
        assert_eq!(state.mapping.edit_button, 4);
        assert_eq!(state.last_capture, Some((MappingSlot::Edit, 4)));
        assert_eq!(state.recording, None);
    }

    #[test]
    fn cancelled_recording_reports_no_capture() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Reset));
        controller.tick(Some(pad(&[])));
        controller.apply(ControllerCommand::CancelRecording);

        assert_eq!(controller.state().last_capture, None);

        // A later capture is still reported
        controller.apply(ControllerCommand::Arm(MappingSlot::Reset));
        controller.tick(Some(pad(&[9])));
        assert_eq!(controller.state().last_capture, Some((MappingSlot::Reset, 9)));
    }

    #[test]
    fn capturing_the_current_button_is_still_reported() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Reset));
        controller.tick(Some(pad(&[1])));

        assert_eq!(controller.mapping(), ControllerMapping::FACTORY_DEFAULT);
        assert_eq!(controller.state().last_capture, Some((MappingSlot::Reset, 1)));
    }

    #[test]
    fn rearm_and_factory_reset_clear_the_capture() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Select));
        controller.tick(Some(pad(&[3])));
        assert!(controller.state().last_capture.is_some());

        controller.apply(ControllerCommand::Arm(MappingSlot::Edit));
        assert_eq!(controller.state().last_capture, None);

        controller.tick(Some(pad(&[2])));
        controller.apply(ControllerCommand::FactoryReset);
        assert_eq!(controller.state().last_capture, None);
    }

    #[test]
    fn disconnect_degrades_status_to_waiting() {
        let mut controller = DashboardController::new();
        controller.tick(Some(pad(&[0])));
        assert_eq!(controller.status(), StatusLabel::EditMacroActive);

        controller.tick(None);

        let state = controller.state();
        assert!(!state.snapshot.connected);
        assert!(state.snapshot.is_pressed(0));
        assert_eq!(state.status, StatusLabel::WaitingForInput);
    }

    #[test]
    fn reconnect_overwrites_preserved_reading() {
        let mut controller = DashboardController::new();
        controller.tick(Some(pad(&[4])));
        controller.tick(None);

        let mut other = pad(&[9]);
        other.id = "Other Pad".to_string();
        other.buttons.truncate(10);
        controller.tick(Some(other));

        let snapshot = controller.snapshot();
        assert!(snapshot.connected);
        assert_eq!(snapshot.id.as_deref(), Some("Other Pad"));
        assert_eq!(snapshot.buttons.len(), 10);
        assert!(!snapshot.is_pressed(4));
        assert!(snapshot.is_pressed(9));
    }

    #[test]
    fn factory_reset_and_delay_commands_update_mapping() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Edit));
        controller.tick(Some(pad(&[6])));
        controller.apply(ControllerCommand::SetConfirmDelay(35));

        let mapping = controller.mapping();
        assert_eq!(mapping.edit_button, 6);
        assert_eq!(mapping.confirm_delay, 35);

        controller.apply(ControllerCommand::FactoryReset);
        controller.apply(ControllerCommand::FactoryReset);
        assert_eq!(controller.mapping(), ControllerMapping::FACTORY_DEFAULT);
    }

    #[test]
    fn remapped_edit_button_drives_status() {
        let mut controller = DashboardController::new();
        controller.apply(ControllerCommand::Arm(MappingSlot::Edit));
        controller.tick(Some(pad(&[3])));
        controller.tick(Some(pad(&[])));

        controller.tick(Some(pad(&[0])));
        assert_eq!(controller.status(), StatusLabel::WaitingForInput);

        controller.tick(Some(pad(&[3])));
        assert_eq!(controller.status(), StatusLabel::EditMacroActive);
    }
}
