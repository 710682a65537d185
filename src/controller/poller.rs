use statum::{machine, state};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::dashboard::{ControllerCommand, DashboardController, DashboardState};
use super::source::GamepadSource;

// Poller settings
#[derive(Clone, Debug)]
pub struct PollerSettings {
    pub frame_interval_ms: u64,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
        }
    }
}

// Define poller states using statum's state macro
#[state]
#[derive(Debug, Clone)]
pub enum PollingState {
    Initializing,
    Polling,
}

#[machine]
#[derive(Debug)]
pub struct GamepadPoller<S: PollingState> {
    // Host query for the first connected controller
    source: Box<dyn GamepadSource>,

    // Owner of mapping, recorder, snapshot and status
    controller: DashboardController,

    settings: PollerSettings,

    // User actions from the views
    command_receiver: mpsc::Receiver<ControllerCommand>,

    // Latest state for the views
    state_sender: watch::Sender<DashboardState>,

    cancel: CancellationToken,
}

impl<S: PollingState> GamepadPoller<S> {
    fn publish(&self) {
        self.state_sender.send_replace(self.controller.state());
    }
}

impl GamepadPoller<Initializing> {
    pub fn create(
        source: Box<dyn GamepadSource>,
        settings: Option<PollerSettings>,
        command_receiver: mpsc::Receiver<ControllerCommand>,
        state_sender: watch::Sender<DashboardState>,
        cancel: CancellationToken,
    ) -> Self {
        let settings = settings.unwrap_or_default();
        debug!("Creating Gamepad Poller with settings: {:?}", settings);

        Self::new(
            source,
            DashboardController::new(),
            settings,
            command_receiver,
            state_sender,
            cancel,
        )
    }

    // Publish the factory state and transition to Polling
    pub fn initialize(self) -> GamepadPoller<Polling> {
        info!(
            "Gamepad Poller initialized, polling every {}ms",
            self.settings.frame_interval_ms
        );
        self.publish();
        self.transition()
    }
}

impl GamepadPoller<Polling> {
    /// One frame: read the host, update the controller, publish.
    pub fn poll_once(&mut self) {
        let reading = self.source.first_connected();
        self.controller.tick(reading);
        self.publish();
    }

    pub fn handle_command(&mut self, command: ControllerCommand) {
        self.controller.apply(command);
        self.publish();
    }

    /// Runs until the cancellation token fires.
    pub async fn run(mut self) {
        info!("Starting Gamepad Poller loop");

        let cancel = self.cancel.clone();
        let mut ticker = interval(Duration::from_millis(self.settings.frame_interval_ms.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut commands_open = true;

        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    info!("Gamepad Poller cancelled, releasing frame timer");
                    break;
                }
                command = self.command_receiver.recv(), if commands_open => {
                    match command {
                        Some(command) => self.handle_command(command),
                        None => {
                            warn!("Command channel closed, continuing read-only");
                            commands_open = false;
                        }
                    }
                }
                _ = ticker.tick() => self.poll_once(),
            }
        }
    }
}
