use std::fmt;

use crate::core::models::{EmittedMetric, MonitorError, WindowPeriod};

/// What the sampling worker reports to the display for one window.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    Metric(EmittedMetric),
    Failed {
        period: WindowPeriod,
        error: MonitorError,
    },
}

impl MonitorEvent {
    pub fn period(&self) -> WindowPeriod {
        match self {
            MonitorEvent::Metric(metric) => metric.period,
            MonitorEvent::Failed { period, .. } => *period,
        }
    }

    /// Text shown in the period's pane: the value, or the error text.
    pub fn display_text(&self) -> String {
        match self {
            MonitorEvent::Metric(metric) => metric.formatted_value(),
            MonitorEvent::Failed { error, .. } => error.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, MonitorEvent::Failed { .. })
    }
}

impl fmt::Display for MonitorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.period(), self.display_text())
    }
}
