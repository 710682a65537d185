//! Status derivation for the operations monitor.
//!
//! A pure function from the current button array, the mapping and the two mode flags
//! to one of five fixed labels. Only the edit and reset slots take part; select and
//! in-game reset are display-only.

use std::fmt;

use crate::mapping::ControllerMapping;

/// Label shown in the operations monitor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusLabel {
    /// A mapping slot is armed
    Recording,
    /// Engine toggled off
    EngineIdle,
    EditMacroActive,
    InstantResetActive,
    #[default]
    WaitingForInput,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Recording => "Recording mode active...",
            StatusLabel::EngineIdle => "Engine is asleep",
            StatusLabel::EditMacroActive => "Macro Edit active: (Reset -> Select -> Confirm)",
            StatusLabel::InstantResetActive => "Instant Reset active: (Edit -> Reset -> Confirm)",
            StatusLabel::WaitingForInput => "Waiting for input...",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the status label. Priority: recording, engine idle, edit, reset, waiting.
///
/// Indices past the end of `buttons` read as not pressed.
pub fn derive_status(
    buttons: &[bool],
    mapping: &ControllerMapping,
    engine_active: bool,
    recording_active: bool,
) -> StatusLabel {
    if recording_active {
        StatusLabel::Recording
    } else if !engine_active {
        StatusLabel::EngineIdle
    } else if is_pressed(buttons, mapping.edit_button) {
        StatusLabel::EditMacroActive
    } else if is_pressed(buttons, mapping.reset_button) {
        StatusLabel::InstantResetActive
    } else {
        StatusLabel::WaitingForInput
    }
}

pub fn is_pressed(buttons: &[bool], index: usize) -> bool {
    buttons.get(index).copied().unwrap_or(false)
}
