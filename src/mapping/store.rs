//! Mapping-Store: hält die aktuelle Button-Belegung und die Verzögerungseinstellung.

use tracing::{debug, info, warn};

use super::mapping_types::{ControllerMapping, MappingSlot, MAX_CONFIRM_DELAY_MS};

/// Owner of the current [`ControllerMapping`].
///
/// Every write replaces exactly one field (or, for a factory reset, the whole record).
/// Duplicate assignments between slots are accepted silently.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    mapping: ControllerMapping,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mapping(&self) -> ControllerMapping {
        self.mapping
    }

    /// Restores the factory record. Applying it repeatedly yields the same mapping.
    pub fn factory_reset(&mut self) {
        info!("Restoring factory mapping");
        self.mapping = ControllerMapping::FACTORY_DEFAULT;
    }

    pub fn assign(&mut self, slot: MappingSlot, index: usize) {
        let previous = self.mapping.get(slot);
        self.mapping.set(slot, index);
        info!("Mapped {} slot: button {} -> {}", slot, previous, index);

        if let Some(other) = MappingSlot::ALL
            .into_iter()
            .find(|other| *other != slot && self.mapping.get(*other) == index)
        {
            debug!("Button {} is shared by {} and {} slots", index, slot, other);
        }
    }

    /// Sets the confirm delay, clamped into the 0..=50 ms slider range.
    pub fn set_confirm_delay(&mut self, delay_ms: u8) {
        let clamped = delay_ms.min(MAX_CONFIRM_DELAY_MS);
        if clamped != delay_ms {
            warn!(
                "Confirm delay {}ms exceeds {}ms, clamping",
                delay_ms, MAX_CONFIRM_DELAY_MS
            );
        }
        self.mapping.confirm_delay = clamped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_reset_is_idempotent() {
        let mut store = MappingStore::new();
        store.assign(MappingSlot::Edit, 9);
        store.set_confirm_delay(42);

        store.factory_reset();
        let once = store.mapping();
        store.factory_reset();
        let twice = store.mapping();

        assert_eq!(once, twice);
        assert_eq!(twice, ControllerMapping::FACTORY_DEFAULT);
    }

    #[test]
    fn duplicate_assignments_are_accepted() {
        let mut store = MappingStore::new();
        store.assign(MappingSlot::Reset, 0);

        let mapping = store.mapping();
        assert_eq!(mapping.edit_button, 0);
        assert_eq!(mapping.reset_button, 0);
    }

    #[test]
    fn out_of_range_indices_are_stored_as_given() {
        let mut store = MappingStore::new();
        store.assign(MappingSlot::FortniteReset, 99);
        assert_eq!(store.mapping().fortnite_reset_button, 99);
    }

    #[test]
    fn confirm_delay_is_clamped_to_slider_range() {
        let mut store = MappingStore::new();

        store.set_confirm_delay(0);
        assert_eq!(store.mapping().confirm_delay, 0);

        store.set_confirm_delay(50);
        assert_eq!(store.mapping().confirm_delay, 50);

        store.set_confirm_delay(200);
        assert_eq!(store.mapping().confirm_delay, 50);
    }

    #[test]
    fn confirm_delay_write_keeps_button_slots() {
        let mut store = MappingStore::new();
        store.assign(MappingSlot::Edit, 4);
        store.set_confirm_delay(25);

        let mapping = store.mapping();
        assert_eq!(mapping.edit_button, 4);
        assert_eq!(mapping.confirm_delay, 25);
    }
}
