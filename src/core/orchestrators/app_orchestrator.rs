use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::{button, column, container, text};
use iced::window::{self, Id};
use iced::{Alignment, Background, Color, Element, Length, Point, Size, Task};

use crate::core::models::{MonitorError, MonitorEvent, ScreenRegion, UserSettings};
use crate::core::orchestrators::change_sampler::MonitoringSession;
use crate::core::ports::{MousePositionProvider, ScreenCapturer};
use crate::global_constants::{
    APPLICATION_TITLE, BUTTON_CLEAR_DATA, BUTTON_START_MONITORING, LOG_TAG_ORCHESTRATOR,
    MAIN_WINDOW_HEIGHT, MAIN_WINDOW_WIDTH, OVERLAY_TITLE, STATUS_MONITORING_STOPPED,
    STATUS_READY, STATUS_SELECTING, STATUS_SELECTION_CANCELLED,
};
use crate::presentation::app_theme;
use crate::presentation::{MetricPanes, SelectionOverlayMessage, SelectionOverlayView};

pub enum AppWindow {
    Main,
    SelectionOverlay(SelectionOverlayView),
}

pub struct AppOrchestrator {
    screen_capturer: Arc<dyn ScreenCapturer>,
    mouse_provider: Arc<dyn MousePositionProvider>,
    windows: HashMap<Id, AppWindow>,
    main_window_id: Option<Id>,
    overlay_window_id: Option<Id>,
    session: Option<MonitoringSession>,
    session_number: u64,
    active_session: Option<u64>,
    session_failed: bool,
    metric_panes: MetricPanes,
    status: String,
    settings: UserSettings,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    StartMonitoring,
    SelectionOverlayMessage(Id, SelectionOverlayMessage),
    Monitor(u64, MonitorEvent),
    MonitoringEnded(u64),
    ClearData,
    WindowClosed(Id),
}

impl AppOrchestrator {
    pub fn build(
        screen_capturer: Arc<dyn ScreenCapturer>,
        mouse_provider: Arc<dyn MousePositionProvider>,
        settings: UserSettings,
    ) -> Self {
        Self {
            screen_capturer,
            mouse_provider,
            windows: HashMap::new(),
            main_window_id: None,
            overlay_window_id: None,
            session: None,
            session_number: 0,
            active_session: None,
            session_failed: false,
            metric_panes: MetricPanes::build(settings.history_limit),
            status: STATUS_READY.to_string(),
            settings,
        }
    }

    pub fn get_window_title(&self, window_id: Id) -> String {
        match self.windows.get(&window_id) {
            Some(AppWindow::SelectionOverlay(_)) => OVERLAY_TITLE.to_string(),
            _ => APPLICATION_TITLE.to_string(),
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match &message {
            OrchestratorMessage::Monitor(..) | OrchestratorMessage::SelectionOverlayMessage(..) => {
                log::trace!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message)
            }
            _ => log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message),
        }

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::StartMonitoring => self.handle_start_monitoring(),
            OrchestratorMessage::SelectionOverlayMessage(window_id, overlay_msg) => {
                self.handle_selection_overlay_message(window_id, overlay_msg)
            }
            OrchestratorMessage::Monitor(session_number, event) => {
                self.handle_monitor_event(session_number, event)
            }
            OrchestratorMessage::MonitoringEnded(session_number) => {
                self.handle_monitoring_ended(session_number)
            }
            OrchestratorMessage::ClearData => {
                log::info!("{} Clearing all panes", LOG_TAG_ORCHESTRATOR);
                self.metric_panes.clear();
                Task::none()
            }
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        match self.windows.get(&window_id) {
            Some(AppWindow::Main) => self.render_main_window(),
            Some(AppWindow::SelectionOverlay(overlay_view)) => overlay_view
                .render_ui()
                .map(move |msg| OrchestratorMessage::SelectionOverlayMessage(window_id, msg)),
            None => text("Loading...").into(),
        }
    }

    pub fn is_monitoring(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| !session.is_finished())
            .unwrap_or(false)
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if let Some(id) = self.main_window_id {
            if self.windows.contains_key(&id) {
                log::warn!("{} Main window already open", LOG_TAG_ORCHESTRATOR);
                return Task::none();
            }
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        self.windows.insert(id, AppWindow::Main);
        log::info!("{} Main window created with ID: {:?}", LOG_TAG_ORCHESTRATOR, id);
        task.discard()
    }

    fn handle_start_monitoring(&mut self) -> Task<OrchestratorMessage> {
        if self.overlay_window_id.is_some() {
            log::warn!("{} Selection overlay already open", LOG_TAG_ORCHESTRATOR);
            return Task::none();
        }

        self.stop_session();

        let (mouse_x, mouse_y) = match self.mouse_provider.get_current_mouse_position() {
            Ok(position) => (position.x, position.y),
            Err(_) => (0, 0),
        };

        let geometry = match self.screen_capturer.monitor_geometry_at(mouse_x, mouse_y) {
            Ok(geometry) => geometry,
            Err(error) => {
                log::error!("{} Failed to get monitor: {:#}", LOG_TAG_ORCHESTRATOR, error);
                self.status = format!("Monitor error: {}", error);
                return Task::none();
            }
        };

        let (id, task) = window::open(window::Settings {
            position: window::Position::Specific(Point::new(geometry.x as f32, geometry.y as f32)),
            size: Size::new(geometry.width as f32, geometry.height as f32),
            transparent: true,
            decorations: false,
            resizable: false,
            level: window::Level::AlwaysOnTop,
            ..Default::default()
        });

        let overlay_view = SelectionOverlayView::build(geometry, self.settings.overlay_opacity);
        self.windows
            .insert(id, AppWindow::SelectionOverlay(overlay_view));
        self.overlay_window_id = Some(id);
        self.status = STATUS_SELECTING.to_string();
        log::info!(
            "{} Selection overlay opened on monitor {:?}",
            LOG_TAG_ORCHESTRATOR,
            geometry
        );

        task.discard().chain(window::gain_focus(id))
    }

    fn handle_selection_overlay_message(
        &mut self,
        window_id: Id,
        overlay_msg: SelectionOverlayMessage,
    ) -> Task<OrchestratorMessage> {
        let Some(AppWindow::SelectionOverlay(overlay_view)) = self.windows.get_mut(&window_id)
        else {
            log::warn!("{} Overlay window {:?} not found", LOG_TAG_ORCHESTRATOR, window_id);
            return Task::none();
        };

        let is_cancel = overlay_msg == SelectionOverlayMessage::CancelRequested;
        let finished_region = overlay_view.update(overlay_msg);

        if is_cancel || finished_region.is_some() {
            return window::close(window_id);
        }
        Task::none()
    }

    /// The overlay's outcome is read once its window is gone, whichever way
    /// it was closed.
    fn finish_selection(&mut self, overlay_view: SelectionOverlayView) -> Task<OrchestratorMessage> {
        match overlay_view.into_selection() {
            Ok(region) => self.start_session(region),
            Err(MonitorError::SelectionAborted) => {
                log::info!("{} Region selection aborted", LOG_TAG_ORCHESTRATOR);
                self.status = STATUS_SELECTION_CANCELLED.to_string();
                Task::none()
            }
            Err(error) => {
                self.status = error.to_string();
                Task::none()
            }
        }
    }

    fn start_session(&mut self, region: ScreenRegion) -> Task<OrchestratorMessage> {
        self.stop_session();
        self.session_number += 1;
        self.session_failed = false;
        let session_number = self.session_number;
        self.active_session = Some(session_number);

        match MonitoringSession::spawn(
            Arc::clone(&self.screen_capturer),
            region,
            self.settings.poll_throttle(),
        ) {
            Ok((session, event_receiver)) => {
                self.status = format!("Monitoring {}", session.region());
                self.session = Some(session);

                Task::run(event_receiver, move |event| {
                    OrchestratorMessage::Monitor(session_number, event)
                })
                .chain(Task::done(OrchestratorMessage::MonitoringEnded(
                    session_number,
                )))
            }
            Err(error) => {
                log::error!(
                    "{} Failed to start monitoring: {:#}",
                    LOG_TAG_ORCHESTRATOR,
                    error
                );
                self.active_session = None;
                self.status = format!("Failed to start monitoring: {}", error);
                Task::none()
            }
        }
    }

    /// Late events from a stopped session are dropped from here on.
    fn stop_session(&mut self) {
        self.active_session = None;
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
    }

    fn handle_monitor_event(
        &mut self,
        session_number: u64,
        event: MonitorEvent,
    ) -> Task<OrchestratorMessage> {
        if self.active_session != Some(session_number) {
            log::debug!(
                "{} Ignoring event from superseded session {}",
                LOG_TAG_ORCHESTRATOR,
                session_number
            );
            return Task::none();
        }

        if event.is_failure() {
            self.session_failed = true;
            self.status = format!("Monitoring failed: {}", event.display_text());
        }
        self.metric_panes.record(&event);
        Task::none()
    }

    fn handle_monitoring_ended(&mut self, session_number: u64) -> Task<OrchestratorMessage> {
        if self.active_session != Some(session_number) {
            return Task::none();
        }

        self.active_session = None;
        self.session = None;
        if !self.session_failed {
            self.status = STATUS_MONITORING_STOPPED.to_string();
        }
        Task::none()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("{} Window closed: {:?}", LOG_TAG_ORCHESTRATOR, id);

        if Some(id) == self.main_window_id {
            self.windows.remove(&id);
            self.main_window_id = None;
            if let Some(session) = self.session.take() {
                let exit = session.stop_and_join();
                log::info!("{} Sampler finished with {:?}", LOG_TAG_ORCHESTRATOR, exit);
            }
            log::info!("{} Main window closed, exiting", LOG_TAG_ORCHESTRATOR);
            return iced::exit();
        }

        if Some(id) == self.overlay_window_id {
            self.overlay_window_id = None;
            if let Some(AppWindow::SelectionOverlay(overlay_view)) = self.windows.remove(&id) {
                return self.finish_selection(overlay_view);
            }
        }

        self.windows.remove(&id);
        Task::none()
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);

        let start_btn = button(text(BUTTON_START_MONITORING).size(16))
            .padding([10, 20])
            .width(Length::Fill)
            .style(app_theme::primary_button_style)
            .on_press(OrchestratorMessage::StartMonitoring);

        let clear_btn = button(text(BUTTON_CLEAR_DATA).size(16))
            .padding([10, 20])
            .width(Length::Fill)
            .style(app_theme::secondary_button_style)
            .on_press(OrchestratorMessage::ClearData);

        let status_color = if self.session_failed {
            Color::from_rgb(1.0, 0.3, 0.3)
        } else if self.is_monitoring() {
            Color::from_rgb(0.2, 0.9, 0.4)
        } else {
            Color::from_rgba(0.6, 0.6, 0.6, 1.0)
        };
        let status_line = text(&self.status)
            .size(13)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(status_color),
            });

        let content = column![
            start_btn,
            self.metric_panes.render_ui(&self.settings.theme_mode),
            clear_btn,
            status_line,
        ]
        .spacing(10)
        .padding(12)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{EmittedMetric, Frame, MonitorGeometry, WindowPeriod};
    use crate::core::ports::MousePosition;

    struct MockScreenCapturer;
    impl ScreenCapturer for MockScreenCapturer {
        fn capture_region(&self, _region: &ScreenRegion) -> anyhow::Result<Frame> {
            Ok(Frame::build_from_raw_data(4, 4, vec![255u8; 4 * 4 * 4]))
        }

        fn monitor_geometry_at(&self, _x: i32, _y: i32) -> anyhow::Result<MonitorGeometry> {
            Ok(MonitorGeometry {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            })
        }
    }

    struct MockMouseProvider;
    impl MousePositionProvider for MockMouseProvider {
        fn get_current_mouse_position(&self) -> Result<MousePosition, String> {
            Ok(MousePosition { x: 10, y: 10 })
        }
    }

    fn create_test_orchestrator() -> AppOrchestrator {
        AppOrchestrator::build(
            Arc::new(MockScreenCapturer),
            Arc::new(MockMouseProvider),
            UserSettings::default(),
        )
    }

    fn metric(period: WindowPeriod, change_fraction: f64) -> MonitorEvent {
        MonitorEvent::Metric(EmittedMetric {
            period,
            change_fraction,
            sample_count: 4,
        })
    }

    fn open_overlay(orchestrator: &mut AppOrchestrator) -> Id {
        let _ = orchestrator.update(OrchestratorMessage::StartMonitoring);
        orchestrator
            .overlay_window_id
            .expect("overlay should be open")
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator();

        assert_eq!(orchestrator.windows.len(), 0);
        assert!(orchestrator.main_window_id.is_none());
        assert!(orchestrator.session.is_none());
        assert!(!orchestrator.is_monitoring());
        assert_eq!(orchestrator.status, STATUS_READY);
    }

    #[test]
    fn test_start_monitoring_opens_selection_overlay() {
        let mut orchestrator = create_test_orchestrator();

        let overlay_id = open_overlay(&mut orchestrator);

        assert!(matches!(
            orchestrator.windows.get(&overlay_id),
            Some(AppWindow::SelectionOverlay(_))
        ));
        assert_eq!(orchestrator.status, STATUS_SELECTING);
        assert_eq!(orchestrator.get_window_title(overlay_id), OVERLAY_TITLE);
    }

    #[test]
    fn test_closing_overlay_without_gesture_does_not_start_monitoring() {
        let mut orchestrator = create_test_orchestrator();
        let overlay_id = open_overlay(&mut orchestrator);

        let _ = orchestrator.update(OrchestratorMessage::WindowClosed(overlay_id));

        assert!(orchestrator.session.is_none());
        assert!(orchestrator.overlay_window_id.is_none());
        assert_eq!(orchestrator.session_number, 0);
        assert_eq!(orchestrator.status, STATUS_SELECTION_CANCELLED);
    }

    #[test]
    fn test_escape_on_overlay_cancels_selection() {
        let mut orchestrator = create_test_orchestrator();
        let overlay_id = open_overlay(&mut orchestrator);
        let _ = orchestrator.update(OrchestratorMessage::SelectionOverlayMessage(
            overlay_id,
            SelectionOverlayMessage::GestureStarted(5, 5),
        ));

        let _ = orchestrator.update(OrchestratorMessage::SelectionOverlayMessage(
            overlay_id,
            SelectionOverlayMessage::CancelRequested,
        ));
        let _ = orchestrator.update(OrchestratorMessage::WindowClosed(overlay_id));

        assert!(orchestrator.session.is_none());
        assert_eq!(orchestrator.status, STATUS_SELECTION_CANCELLED);
    }

    fn select_region(orchestrator: &mut AppOrchestrator, overlay_id: Id) {
        for overlay_msg in [
            SelectionOverlayMessage::GestureStarted(10, 20),
            SelectionOverlayMessage::GestureDragged(50, 60),
            SelectionOverlayMessage::GestureFinished(110, 70),
        ] {
            let _ = orchestrator.update(OrchestratorMessage::SelectionOverlayMessage(
                overlay_id,
                overlay_msg,
            ));
        }
        let _ = orchestrator.update(OrchestratorMessage::WindowClosed(overlay_id));
    }

    #[test]
    fn test_completed_gesture_starts_session_when_overlay_closes() {
        let mut orchestrator = create_test_orchestrator();
        let overlay_id = open_overlay(&mut orchestrator);

        select_region(&mut orchestrator, overlay_id);

        let session = orchestrator.session.as_ref().expect("session should start");
        assert_eq!(session.region(), ScreenRegion::from_corners(10, 20, 110, 70));
        assert_eq!(orchestrator.session_number, 1);
        assert_eq!(orchestrator.status, "Monitoring 100x50 at (10, 20)");

        orchestrator.stop_session();
    }

    #[test]
    fn test_restarting_drops_late_events_from_stopped_session() {
        let mut orchestrator = create_test_orchestrator();
        let first_overlay_id = open_overlay(&mut orchestrator);
        select_region(&mut orchestrator, first_overlay_id);
        assert_eq!(orchestrator.active_session, Some(1));

        let _ = orchestrator.update(OrchestratorMessage::StartMonitoring);
        let _ = orchestrator.update(OrchestratorMessage::Monitor(
            1,
            metric(WindowPeriod::TwoSeconds, 0.5),
        ));
        let _ = orchestrator.update(OrchestratorMessage::MonitoringEnded(1));

        assert!(orchestrator.session.is_none());
        assert!(orchestrator.active_session.is_none());
        assert!(orchestrator
            .metric_panes
            .lines(WindowPeriod::TwoSeconds)
            .is_empty());
        assert_eq!(orchestrator.status, STATUS_SELECTING);
    }

    #[test]
    fn test_session_after_restart_gets_next_number() {
        let mut orchestrator = create_test_orchestrator();
        let first_overlay_id = open_overlay(&mut orchestrator);
        select_region(&mut orchestrator, first_overlay_id);

        let second_overlay_id = open_overlay(&mut orchestrator);
        select_region(&mut orchestrator, second_overlay_id);
        let _ = orchestrator.update(OrchestratorMessage::Monitor(
            2,
            metric(WindowPeriod::TenSeconds, 0.75),
        ));

        assert_eq!(orchestrator.active_session, Some(2));
        assert_eq!(
            orchestrator.metric_panes.lines(WindowPeriod::TenSeconds),
            vec!["0.75"]
        );

        orchestrator.stop_session();
    }

    #[test]
    fn test_monitor_events_are_prepended_per_pane() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.active_session = Some(3);

        let _ = orchestrator.update(OrchestratorMessage::Monitor(
            3,
            metric(WindowPeriod::TwoSeconds, 0.5),
        ));
        let _ = orchestrator.update(OrchestratorMessage::Monitor(
            3,
            metric(WindowPeriod::TwoSeconds, 0.25),
        ));

        assert_eq!(
            orchestrator.metric_panes.lines(WindowPeriod::TwoSeconds),
            vec!["0.25", "0.50"]
        );
    }

    #[test]
    fn test_events_from_superseded_session_are_ignored() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.active_session = Some(2);

        let _ = orchestrator.update(OrchestratorMessage::Monitor(
            1,
            metric(WindowPeriod::FiveSeconds, 1.0),
        ));

        assert!(orchestrator
            .metric_panes
            .lines(WindowPeriod::FiveSeconds)
            .is_empty());
    }

    #[test]
    fn test_failure_event_updates_status_and_survives_session_end() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.active_session = Some(1);

        for period in WindowPeriod::ALL {
            let _ = orchestrator.update(OrchestratorMessage::Monitor(
                1,
                MonitorEvent::Failed {
                    period,
                    error: MonitorError::CaptureFailure("display lost".to_string()),
                },
            ));
        }
        let _ = orchestrator.update(OrchestratorMessage::MonitoringEnded(1));

        assert_eq!(
            orchestrator.status,
            "Monitoring failed: Capture failed: display lost"
        );
        for period in WindowPeriod::ALL {
            assert_eq!(
                orchestrator.metric_panes.lines(period),
                vec!["Capture failed: display lost"]
            );
        }
    }

    #[test]
    fn test_monitoring_ended_without_failure_reports_stopped() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.active_session = Some(1);

        let _ = orchestrator.update(OrchestratorMessage::MonitoringEnded(1));

        assert_eq!(orchestrator.status, STATUS_MONITORING_STOPPED);
    }

    #[test]
    fn test_clear_data_empties_all_panes() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.active_session = Some(0);
        for period in WindowPeriod::ALL {
            let _ = orchestrator.update(OrchestratorMessage::Monitor(0, metric(period, 0.5)));
        }

        let _ = orchestrator.update(OrchestratorMessage::ClearData);

        for period in WindowPeriod::ALL {
            assert!(orchestrator.metric_panes.lines(period).is_empty());
        }
    }

    #[test]
    fn test_get_window_title_for_unknown_window_is_app_title() {
        let orchestrator = create_test_orchestrator();

        assert_eq!(orchestrator.get_window_title(Id::unique()), APPLICATION_TITLE);
    }
}
