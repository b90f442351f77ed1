#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::daemon;

use crate::core::orchestrators::app::MonitorApp;
use crate::global_constants::{APPLICATION_NAME, LOG_TAG_APP};

fn main() -> iced::Result {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_APP, APPLICATION_NAME);

    daemon(
        MonitorApp::build,
        MonitorApp::handle_update,
        MonitorApp::render_view,
    )
    .title(MonitorApp::window_title)
    .style(MonitorApp::app_style)
    .subscription(MonitorApp::handle_subscription)
    .run()
}
