pub const APPLICATION_NAME: &str = "orderflow-speed";
pub const APPLICATION_TITLE: &str = "ORDERFLOWSPEED";
pub const OVERLAY_TITLE: &str = "Select region";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_SAMPLER: &str = "[SAMPLER]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_OVERLAY: &str = "[OVERLAY]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_MOUSE: &str = "[MOUSE]";
pub const LOG_TAG_WINDOW: &str = "[WINDOW]";
pub const LOG_TAG_SELECTION: &str = "[SELECTION]";
pub const LOG_TAG_SCREEN_REGION: &str = "[SCREEN_REGION]";

pub const SAMPLER_THREAD_NAME: &str = "change-sampler";

pub const MESSAGE_MOUSE_POSITION_FAILED: &str = "failed to get mouse position, using (0,0)";

pub const ERROR_CONTEXT_FIND_MONITOR: &str = "Unable to find a monitor for the selected region";
pub const ERROR_CONTEXT_MONITOR_GEOMETRY: &str = "Unable to read monitor geometry";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture Monitor";

pub const STATUS_READY: &str = "Ready - press start monitoring";
pub const STATUS_SELECTING: &str = "Drag to select a region, Escape to cancel";
pub const STATUS_SELECTION_CANCELLED: &str = "Selection cancelled";
pub const STATUS_MONITORING_STOPPED: &str = "Monitoring stopped";

pub const BUTTON_START_MONITORING: &str = "start monitoring";
pub const BUTTON_CLEAR_DATA: &str = "clear data";

pub const DEFAULT_POLL_THROTTLE_MICROS: u64 = 1_000;
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.3;
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

pub const MAIN_WINDOW_WIDTH: f32 = 320.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 900.0;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_tags_are_bracketed_and_unique() {
        let tags = [
            LOG_TAG_APP,
            LOG_TAG_ORCHESTRATOR,
            LOG_TAG_SAMPLER,
            LOG_TAG_CAPTURE,
            LOG_TAG_OVERLAY,
            LOG_TAG_SETTINGS,
            LOG_TAG_MOUSE,
            LOG_TAG_WINDOW,
            LOG_TAG_SELECTION,
            LOG_TAG_SCREEN_REGION,
        ];

        for tag in tags {
            assert!(tag.starts_with('[') && tag.ends_with(']'), "{}", tag);
        }
        let unique: std::collections::HashSet<&str> = tags.iter().copied().collect();
        assert_eq!(unique.len(), tags.len());
    }
}
