//! Controller subsystem: input sampling and mapping
//!
//! Implements a frame-driven pipeline:
//!
//! 1. [`source`] - Host query for the first connected gamepad (gilrs)
//! 2. [`dashboard`] - Snapshot, recorder, mapping store and status owned by one object
//! 3. [`poller`] - Frame loop that ticks the dashboard and publishes its state
//! 4. [`controller_handle`] - Task lifecycle, commands and cancellation
//!
//! # Architecture
//!
//! ```text
//! Gamepad ──► Source ──► Poller ──► DashboardController ──► watch<DashboardState> ──► UI
//!                          ▲
//!                          └── mpsc<ControllerCommand> ◄── UI
//! ```
//!
//! The loop runs on a single task at the display refresh rate (16ms by default).

pub mod controller_handle;
pub mod dashboard;
pub mod poller;
pub mod snapshot;
pub mod source;

pub use controller_handle::{CommandSender, ControllerError, ControllerHandle, ControllerSettings};
pub use dashboard::{ControllerCommand, DashboardController, DashboardState};
pub use snapshot::GamepadSnapshot;
pub use source::{GamepadSource, GilrsSource, RawButton, RawGamepad, SourceError};
