//! # Ray Controller User Interface Module
//!
//! Native dashboard built with eframe/egui. The UI never owns sampling state: every
//! frame it reads the latest [`DashboardState`] from the controller's watch channel,
//! and every user action is sent back as a [`ControllerCommand`].
//!
//! ## Layout
//! - **Side Panel**: title, tab navigation and the engine on/off toggle
//! - **Top Panel**: connection indicator, device name and last sample time
//! - **Central Panel**: the selected tab (dashboard, button mapping, system info)
//!
//! ## Frame Rate Management
//! Requests a repaint after every poll interval so the preview follows the controller
//! at the same cadence the poll loop samples it.

pub mod about_menu;
pub mod common;
pub mod dashboard_menu;
pub mod settings_menu;
pub mod visualizer;

use eframe::egui::{self, Button, RichText, Vec2};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::controller::{CommandSender, ControllerCommand, DashboardState, GamepadSnapshot};

use self::about_menu::AboutMenuData;
use self::common::{Tab, UiColors};

/// Top-level egui application.
pub struct RayControllerUI {
    /// Current active tab
    tab: Tab,

    /// Latest state published by the poll loop
    state_receiver: watch::Receiver<DashboardState>,

    /// User actions towards the poll loop
    command_sender: CommandSender,

    about_menu_data: AboutMenuData,

    title: String,

    /// Repaint cadence, equal to the poll interval
    frame_interval: Duration,
}

impl RayControllerUI {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state_receiver: watch::Receiver<DashboardState>,
        command_sender: CommandSender,
        title: String,
        frame_interval: Duration,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        let polling_rate_hz = 1000.0 / frame_interval.as_millis().max(1) as f64;

        RayControllerUI {
            tab: Tab::default(),
            state_receiver,
            command_sender,
            about_menu_data: AboutMenuData::new(title.clone(), polling_rate_hz),
            title,
            frame_interval,
        }
    }

}

/// Text for the connection indicator in the top panel.
pub fn connection_text(snapshot: &GamepadSnapshot) -> String {
    match (snapshot.connected, snapshot.display_name()) {
        (true, Some(name)) => format!("Connected: {}", name),
        (true, None) => "Connected".to_string(),
        (false, _) => "Waiting for controller...".to_string(),
    }
}

impl eframe::App for RayControllerUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(self.frame_interval);

        let state = self.state_receiver.borrow().clone();
        let mut commands = Vec::new();

        egui::SidePanel::left("side_panel")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&self.title).size(22.0).strong());
                    ui.label(RichText::new("Macro Engine").small().color(UiColors::ACCENT));
                });
                ui.add_space(24.0);

                let width = ui.available_width();
                for tab in Tab::ALL {
                    let button = Button::new(tab.title())
                        .selected(self.tab == tab)
                        .min_size(Vec2 { x: width, y: 36.0 });
                    if ui.add(button).clicked() {
                        info!("Switching to {:?} tab", tab);
                        self.tab = tab;
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(12.0);
                    let (label, color) = if state.engine_active {
                        ("Active", UiColors::ACTIVE)
                    } else {
                        ("Stopped", UiColors::INACTIVE)
                    };
                    let toggle = Button::new(RichText::new(label).strong().color(color))
                        .min_size(Vec2 { x: width, y: 40.0 });
                    if ui.add(toggle).clicked() {
                        commands.push(ControllerCommand::ToggleEngine);
                    }
                });
            });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let dot_color = if state.snapshot.connected {
                    UiColors::ACTIVE
                } else {
                    UiColors::INACTIVE
                };
                ui.label(RichText::new("●").color(dot_color));
                ui.label(connection_text(&state.snapshot));

                if let Some(captured_at) = state.snapshot.captured_at {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "Last sample {}",
                                captured_at.format("%H:%M:%S%.3f")
                            ))
                            .small()
                            .color(UiColors::MUTED),
                        );
                    });
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Dashboard => dashboard_menu::render(ui, &state),
            Tab::Settings => commands.extend(settings_menu::render(ui, &state)),
            Tab::About => self.about_menu_data.render(ui),
        });

        for command in commands {
            if let Err(e) = self.command_sender.send(command) {
                warn!("Dropping command {:?}: {}", command, e);
            }
        }
    }
}
