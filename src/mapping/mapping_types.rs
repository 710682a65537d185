//! Gemeinsame Datentypen für das Button-Mapping
//!
//! Definiert den Mapping-Datensatz (welcher Controller-Button welche Aktion auslöst)
//! sowie die adressierbaren Mapping-Slots, die der Recorder neu belegen kann.

use std::fmt;

/// Upper bound of the confirm delay slider in milliseconds.
pub const MAX_CONFIRM_DELAY_MS: u8 = 50;

/// Action to button index assignment.
///
/// Button indices follow the standard gamepad layout (0 = South/Cross,
/// 1 = East/Circle, ...). No uniqueness between slots is enforced; two slots may
/// point at the same button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerMapping {
    /// Button that signals the "edit macro" action
    pub edit_button: usize,
    /// Button that signals the "instant reset" action
    pub reset_button: usize,
    /// In-game select button (display only)
    pub select_button: usize,
    /// In-game reset button (display only)
    pub fortnite_reset_button: usize,
    /// Response delay in milliseconds, 0..=50. Stored, not enforced.
    pub confirm_delay: u8,
}

impl ControllerMapping {
    /// Factory assignment: Cross/A edits, Circle/B resets, R2/RT selects, R3/RS resets in-game.
    pub const FACTORY_DEFAULT: ControllerMapping = ControllerMapping {
        edit_button: 0,
        reset_button: 1,
        select_button: 7,
        fortnite_reset_button: 11,
        confirm_delay: 10,
    };

    /// Reads the button index stored in `slot`.
    pub fn get(&self, slot: MappingSlot) -> usize {
        match slot {
            MappingSlot::Edit => self.edit_button,
            MappingSlot::Reset => self.reset_button,
            MappingSlot::Select => self.select_button,
            MappingSlot::FortniteReset => self.fortnite_reset_button,
        }
    }

    /// Replaces the button index of `slot`, leaving every other field untouched.
    pub fn set(&mut self, slot: MappingSlot, index: usize) {
        match slot {
            MappingSlot::Edit => self.edit_button = index,
            MappingSlot::Reset => self.reset_button = index,
            MappingSlot::Select => self.select_button = index,
            MappingSlot::FortniteReset => self.fortnite_reset_button = index,
        }
    }

    /// Indices the visualizer rings, in slot order.
    pub fn highlight_indices(&self) -> [usize; 4] {
        MappingSlot::ALL.map(|slot| self.get(slot))
    }
}

impl Default for ControllerMapping {
    fn default() -> Self {
        Self::FACTORY_DEFAULT
    }
}

/// One of the four named button fields of [`ControllerMapping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingSlot {
    Edit,
    Reset,
    Select,
    FortniteReset,
}

impl MappingSlot {
    pub const ALL: [MappingSlot; 4] = [
        MappingSlot::Edit,
        MappingSlot::Reset,
        MappingSlot::Select,
        MappingSlot::FortniteReset,
    ];

    /// Label shown next to the record button in the settings view
    pub fn label(&self) -> &'static str {
        match self {
            MappingSlot::Edit => "Main macro button (Edit / Hold)",
            MappingSlot::Reset => "Quick restart button (Instant Reset)",
            MappingSlot::Select => "Select button (R2 / RT)",
            MappingSlot::FortniteReset => "In-game reset button (R3 / RS)",
        }
    }
}

impl fmt::Display for MappingSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MappingSlot::Edit => "edit",
            MappingSlot::Reset => "reset",
            MappingSlot::Select => "select",
            MappingSlot::FortniteReset => "fortnite_reset",
        };
        write!(f, "{}", name)
    }
}
