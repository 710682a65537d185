//! Recorder: nimmt den nächsten gedrückten Button auf und schreibt ihn in einen Mapping-Slot.

use tracing::{debug, info};

use super::mapping_types::MappingSlot;
use super::store::MappingStore;

/// Recording state for slot reassignment.
///
/// `Armed` waits without timeout for the next pressed button. Arming again while
/// armed replaces the slot; there is no queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recorder {
    #[default]
    Idle,
    Armed(MappingSlot),
}

impl Recorder {
    pub fn arm(&mut self, slot: MappingSlot) {
        if let Recorder::Armed(previous) = self {
            if *previous != slot {
                debug!("Recorder re-armed: {} replaces {}", slot, previous);
            }
        }
        info!("Recording next button press for {} slot", slot);
        *self = Recorder::Armed(slot);
    }

    pub fn cancel(&mut self) {
        if let Recorder::Armed(slot) = self {
            info!("Recording for {} slot cancelled", slot);
        }
        *self = Recorder::Idle;
    }

    pub fn armed_slot(&self) -> Option<MappingSlot> {
        match self {
            Recorder::Idle => None,
            Recorder::Armed(slot) => Some(*slot),
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Recorder::Armed(_))
    }

    /// Feeds one button snapshot to the recorder.
    ///
    /// When armed and any button is pressed, the lowest pressed index is written into
    /// the armed slot and the recorder returns to `Idle`. Returns the captured
    /// assignment, if any.
    pub fn observe(
        &mut self,
        buttons: &[bool],
        store: &mut MappingStore,
    ) -> Option<(MappingSlot, usize)> {
        let slot = self.armed_slot()?;
        let index = first_pressed(buttons)?;

        store.assign(slot, index);
        *self = Recorder::Idle;
        Some((slot, index))
    }
}

/// Lowest pressed button index, scanning from 0 upward.
pub fn first_pressed(buttons: &[bool]) -> Option<usize> {
    buttons.iter().position(|pressed| *pressed)
}
