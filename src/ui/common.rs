//! # UI Common Components and Utilities
//!
//! Shared tab state, the dark purple color palette and frame helpers used by every
//! dashboard screen.
//!
//! ## Key Abstractions
//!
//! ### Tab Navigation
//! [`Tab`] is the navigation state of the side panel. Any tab can be reached from any
//! other tab, so a plain enum is enough.
//!
//! ### Theme
//! [`UiColors`] holds compile-time color constants so that every screen draws with the
//! same palette.

use eframe::egui::{Color32, Frame, Stroke};

/// Currently selected screen in the side panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Live controller preview and operations monitor
    #[default]
    Dashboard,
    /// Button recording and delay slider
    Settings,
    /// Static system information
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Settings, Tab::About];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Settings => "Button Mapping",
            Tab::About => "System Info",
        }
    }
}

/// Creates a styled card frame.
pub fn card_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(12)
        .outer_margin(4)
}

/// Centralized color palette for the dashboard dark theme.
///
/// ## Color Hierarchy
/// - **Background Colors**: EXTREME_BG → INNER_BG → MAIN_BG (darkest to lightest)
/// - **Accent**: ACCENT for pressed buttons and the armed recorder, HIGHLIGHT for mapped rings
/// - **Status Colors**: ACTIVE (green) for connected/enabled, INACTIVE (red) for disconnected/stopped
pub struct UiColors;

impl UiColors {
    /// Primary background color for main content areas (RGB: 24, 24, 27)
    pub const MAIN_BG: Color32 = Color32::from_rgb(24, 24, 27);

    /// Secondary background color for cards (RGB: 18, 18, 21)
    pub const INNER_BG: Color32 = Color32::from_rgb(18, 18, 21);

    /// Deepest background color (RGB: 9, 9, 11)
    pub const EXTREME_BG: Color32 = Color32::from_rgb(9, 9, 11);

    /// Border color for component separation (RGB: 39, 39, 42)
    pub const BORDER: Color32 = Color32::from_rgb(39, 39, 42);

    /// Muted text and released buttons (RGB: 113, 113, 122)
    pub const MUTED: Color32 = Color32::from_rgb(113, 113, 122);

    /// Pressed buttons and recording state (RGB: 147, 51, 234) - Purple
    pub const ACCENT: Color32 = Color32::from_rgb(147, 51, 234);

    /// Ring around mapped buttons (RGB: 192, 132, 252) - Light purple
    pub const HIGHLIGHT: Color32 = Color32::from_rgb(192, 132, 252);

    /// Active/connected status indicator color (RGB: 34, 197, 94) - Green
    pub const ACTIVE: Color32 = Color32::from_rgb(34, 197, 94);

    /// Inactive/disconnected status indicator color (RGB: 239, 68, 68) - Red
    pub const INACTIVE: Color32 = Color32::from_rgb(239, 68, 68);
}
