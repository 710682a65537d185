use chrono::{DateTime, Local};

use super::source::RawGamepad;

/// Number of buttons shown before the first controller reports in
pub const INITIAL_BUTTON_COUNT: usize = 16;

/// Per-frame view of the controller.
///
/// Fully replaced on every connected tick. A disconnected tick only clears
/// `connected` and keeps the last known id, buttons and axes for display continuity.
#[derive(Clone, Debug, PartialEq)]
pub struct GamepadSnapshot {
    pub connected: bool,
    pub id: Option<String>,
    pub buttons: Vec<bool>,
    pub axes: Vec<f32>,
    /// Time of the last connected reading
    pub captured_at: Option<DateTime<Local>>,
}

impl Default for GamepadSnapshot {
    fn default() -> Self {
        Self {
            connected: false,
            id: None,
            buttons: vec![false; INITIAL_BUTTON_COUNT],
            axes: Vec::new(),
            captured_at: None,
        }
    }
}

impl GamepadSnapshot {
    /// Builds a connected snapshot.
    pub fn from_reading(reading: &RawGamepad, captured_at: DateTime<Local>) -> Self {
        Self {
            connected: true,
            id: Some(reading.id.clone()),
            buttons: reading.buttons.iter().map(|b| b.pressed).collect(),
            axes: reading.axes.clone(),
            captured_at: Some(captured_at),
        }
    }

    /// Applies one poll result.
    pub fn update(&mut self, reading: Option<&RawGamepad>, now: DateTime<Local>) {
        match reading {
            Some(reading) => *self = Self::from_reading(reading, now),
            None => self.connected = false,
        }
    }

    /// Device name without the vendor/product suffix the host appends in parentheses.
    pub fn display_name(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(|id| id.split('(').next().unwrap_or(id).trim())
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::source::RawButton;

    fn reading(id: &str, pressed: &[usize], len: usize) -> RawGamepad {
        RawGamepad {
            id: id.to_string(),
            buttons: (0..len)
                .map(|i| RawButton {
                    pressed: pressed.contains(&i),
                })
                .collect(),
            axes: vec![0.25, -0.5, 0.0, 1.0],
        }
    }

    #[test]
    fn starts_disconnected_with_sixteen_released_buttons() {
        let snapshot = GamepadSnapshot::default();
        assert!(!snapshot.connected);
        assert_eq!(snapshot.id, None);
        assert_eq!(snapshot.buttons, vec![false; 16]);
        assert!(snapshot.axes.is_empty());
    }

    #[test]
    fn disconnect_preserves_last_reading_and_reconnect_overwrites() {
        let mut snapshot = GamepadSnapshot::default();
        let first = reading("Pad A (Vendor: 054c Product: 0ce6)", &[3], 17);
        snapshot.update(Some(&first), Local::now());
        assert!(snapshot.connected);

        let before = snapshot.clone();
        snapshot.update(None, Local::now());

        assert!(!snapshot.connected);
        assert_eq!(snapshot.id, before.id);
        assert_eq!(snapshot.buttons, before.buttons);
        assert_eq!(snapshot.axes, before.axes);
        assert_eq!(snapshot.captured_at, before.captured_at);

        let second = reading("Pad B", &[0], 12);
        snapshot.update(Some(&second), Local::now());

        assert!(snapshot.connected);
        assert_eq!(snapshot.id.as_deref(), Some("Pad B"));
        assert_eq!(snapshot.buttons.len(), 12);
        assert!(snapshot.buttons[0]);
        assert!(!snapshot.is_pressed(3));
    }

    #[test]
    fn display_name_strips_parenthesised_suffix() {
        let pad = reading("Wireless Controller (STANDARD GAMEPAD Vendor: 054c)", &[], 1);
        let snapshot = GamepadSnapshot::from_reading(&pad, Local::now());
        assert_eq!(snapshot.display_name(), Some("Wireless Controller"));

        let plain = GamepadSnapshot::from_reading(&reading("Xbox Pad", &[], 1), Local::now());
        assert_eq!(plain.display_name(), Some("Xbox Pad"));

        assert_eq!(GamepadSnapshot::default().display_name(), None);
    }

    #[test]
    fn out_of_range_button_reads_released() {
        let snapshot = GamepadSnapshot::from_reading(&reading("Pad", &[0], 2), Local::now());
        assert!(!snapshot.is_pressed(99));
    }
}
