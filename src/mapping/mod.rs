//! Modul für die Belegung der Aktions-Buttons.
//!
//! Enthält den Mapping-Datensatz (`ControllerMapping`), den Store, der ihn besitzt,
//! und den Recorder, der einen Slot mit dem nächsten gedrückten Button neu belegt.

pub mod mapping_types;
pub mod recorder;
pub mod store;

// Re-exports für einfacheren Zugriff
pub use mapping_types::{ControllerMapping, MappingSlot, MAX_CONFIRM_DELAY_MS};
pub use recorder::Recorder;
pub use store::MappingStore;
