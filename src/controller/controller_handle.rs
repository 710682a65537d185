//! Controller Handle - owner of the polling loop task
//!
//! Spawns the [`GamepadPoller`] on the tokio runtime and keeps the three things the
//! rest of the application needs: the state receiver for the views, the command
//! sender for user actions and the cancellation token that stops the frame loop.
//!

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::dashboard::{ControllerCommand, DashboardState};
use super::poller::{GamepadPoller, PollerSettings};
use super::source::{GamepadSource, GilrsSource, SourceError};

/// Capacity of the command channel between views and the poll loop
const COMMAND_BUFFER: usize = 100;

/// Configuration settings for the controller subsystem
#[derive(Clone, Debug)]
pub struct ControllerSettings {
    /// Delay between two poll ticks in milliseconds
    ///
    /// 16ms matches a 60 Hz display refresh.
    pub frame_interval_ms: u64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
        }
    }
}

/// Errors that can occur during controller initialization or operation
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The gamepad backend could not be opened
    #[error("Source error: {0}")]
    SourceError(#[from] SourceError),

    /// The poll loop is gone or its command buffer is full
    #[error("Channel error: {0}")]
    ChannelError(String),

    /// The poll loop task panicked or was aborted
    #[error("Task error: {0}")]
    TaskError(String),
}

/// Cloneable sender for user commands towards the poll loop.
#[derive(Clone, Debug)]
pub struct CommandSender {
    inner: mpsc::Sender<ControllerCommand>,
}

impl CommandSender {
    /// Queues a user command without blocking.
    pub fn send(&self, command: ControllerCommand) -> Result<(), ControllerError> {
        self.inner
            .try_send(command)
            .map_err(|e| ControllerError::ChannelError(e.to_string()))
    }
}

/// Handle for the running poll loop.
///
/// Dropping the handle cancels the loop; [`ControllerHandle::shutdown`] additionally
/// waits for the task to finish.
pub struct ControllerHandle {
    state_receiver: watch::Receiver<DashboardState>,
    command_sender: CommandSender,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ControllerHandle {
    /// Spawns the poll loop over `source`. Must be called from within a tokio runtime.
    pub fn spawn(
        settings: Option<ControllerSettings>,
        source: Box<dyn GamepadSource>,
    ) -> Result<Self, ControllerError> {
        info!(
            "Initializing Controller system with settings: {:?}",
            settings
        );
        let settings = settings.unwrap_or_default();
        let poller_settings = PollerSettings {
            frame_interval_ms: settings.frame_interval_ms,
        };

        let (command_tx, command_receiver) = mpsc::channel(COMMAND_BUFFER);
        let (state_sender, state_receiver) = watch::channel(DashboardState::default());
        let cancel = CancellationToken::new();
        debug!("Created command channel with buffer capacity {}", COMMAND_BUFFER);

        let poller = GamepadPoller::create(
            source,
            Some(poller_settings),
            command_receiver,
            state_sender,
            cancel.child_token(),
        )
        .initialize();

        let task = tokio::spawn(poller.run());
        info!("Gamepad Poller spawned successfully");

        Ok(Self {
            state_receiver,
            command_sender: CommandSender { inner: command_tx },
            cancel,
            task: Some(task),
        })
    }

    /// Spawns the poll loop over the first gilrs gamepad.
    pub fn spawn_gilrs(settings: Option<ControllerSettings>) -> Result<Self, ControllerError> {
        let source = GilrsSource::new()?;
        Self::spawn(settings, Box::new(source))
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        debug!("New subscriber to dashboard state");
        self.state_receiver.clone()
    }

    pub fn command_sender(&self) -> CommandSender {
        self.command_sender.clone()
    }

    /// Cancels the loop and waits for the task to exit.
    pub async fn shutdown(mut self) -> Result<(), ControllerError> {
        info!("Shutting down controller system");
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|e| ControllerError::TaskError(e.to_string()))?;
        }
        Ok(())
    }
}

impl Drop for ControllerHandle {
    fn drop(&mut self) {
        if !self.cancel.is_cancelled() {
            warn!("Controller handle dropped without shutdown, cancelling poll loop");
            self.cancel.cancel();
        }
    }
}
