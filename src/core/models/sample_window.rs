use std::fmt;
use std::time::{Duration, Instant};

use crate::global_constants::LOG_TAG_WINDOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowPeriod {
    TwoSeconds,
    FiveSeconds,
    TenSeconds,
}

impl WindowPeriod {
    pub const ALL: [WindowPeriod; 3] = [
        WindowPeriod::TwoSeconds,
        WindowPeriod::FiveSeconds,
        WindowPeriod::TenSeconds,
    ];

    pub fn seconds(&self) -> u64 {
        match self {
            WindowPeriod::TwoSeconds => 2,
            WindowPeriod::FiveSeconds => 5,
            WindowPeriod::TenSeconds => 10,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds())
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindowPeriod::TwoSeconds => "2s",
            WindowPeriod::FiveSeconds => "5s",
            WindowPeriod::TenSeconds => "10s",
        }
    }
}

impl fmt::Display for WindowPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seconds())
    }
}

/// Fraction of samples in one window period that saw a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmittedMetric {
    pub period: WindowPeriod,
    pub change_fraction: f64,
    pub sample_count: usize,
}

impl EmittedMetric {
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.change_fraction)
    }
}

impl fmt::Display for EmittedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.period, self.formatted_value())
    }
}

/// Accumulates samples for a single period and emits their mean once the
/// period has elapsed.
///
/// Each window keeps its own clock. Windows started at the same instant are
/// never resynchronized, so their resets drift relative to each other.
#[derive(Debug)]
pub struct SampleWindow {
    period: WindowPeriod,
    samples: Vec<bool>,
    started_at: Instant,
}

impl SampleWindow {
    pub fn start(period: WindowPeriod, now: Instant) -> Self {
        Self {
            period,
            samples: Vec::new(),
            started_at: now,
        }
    }

    #[cfg(test)]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn absorb(&mut self, changed: bool, now: Instant) -> Option<EmittedMetric> {
        self.samples.push(changed);
        self.flush_if_due(now)
    }

    /// Emits and resets when the period has elapsed. A window with no
    /// samples at its deadline resets without emitting.
    pub fn flush_if_due(&mut self, now: Instant) -> Option<EmittedMetric> {
        if now.saturating_duration_since(self.started_at) < self.period.duration() {
            return None;
        }

        let metric = self.compute_mean();
        self.reset(now);
        metric
    }

    fn compute_mean(&self) -> Option<EmittedMetric> {
        if self.samples.is_empty() {
            log::debug!(
                "{} {}s window reached its deadline with no samples",
                LOG_TAG_WINDOW,
                self.period
            );
            return None;
        }

        let changed_count = self.samples.iter().filter(|changed| **changed).count();

        Some(EmittedMetric {
            period: self.period,
            change_fraction: changed_count as f64 / self.samples.len() as f64,
            sample_count: self.samples.len(),
        })
    }

    fn reset(&mut self, now: Instant) {
        self.samples.clear();
        self.started_at = now;
    }
}
