use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::Context;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::models::{
    Frame, MonitorError, MonitorEvent, SampleWindow, ScreenRegion, WindowPeriod,
};
use crate::core::ports::ScreenCapturer;
use crate::global_constants::{LOG_TAG_SAMPLER, SAMPLER_THREAD_NAME};

#[derive(Debug, Clone, PartialEq)]
pub enum SamplerExit {
    Stopped,
    DisplayClosed,
    Failed(MonitorError),
}

/// Polls one region and feeds every comparison into the 2s, 5s and 10s
/// windows. Runs until stopped, until the display goes away, or until the
/// first capture or comparison error.
pub struct ChangeSampler {
    screen_capturer: Arc<dyn ScreenCapturer>,
    region: ScreenRegion,
    poll_throttle: Duration,
    stop_requested: Arc<AtomicBool>,
    event_sender: UnboundedSender<MonitorEvent>,
}

impl ChangeSampler {
    pub fn build(
        screen_capturer: Arc<dyn ScreenCapturer>,
        region: ScreenRegion,
        poll_throttle: Duration,
        stop_requested: Arc<AtomicBool>,
        event_sender: UnboundedSender<MonitorEvent>,
    ) -> Self {
        Self {
            screen_capturer,
            region,
            poll_throttle,
            stop_requested,
            event_sender,
        }
    }

    pub fn run(self) -> SamplerExit {
        log::info!("{} Sampling region {}", LOG_TAG_SAMPLER, self.region);

        let mut previous_frame = match self.capture_frame() {
            Ok(frame) => frame,
            Err(error) => return self.fail(error),
        };
        if previous_frame.is_empty() {
            log::warn!(
                "{} Region has zero area, every sample will report no change",
                LOG_TAG_SAMPLER
            );
        }

        let started_at = Instant::now();
        let mut windows = WindowPeriod::ALL.map(|period| SampleWindow::start(period, started_at));
        let mut iterations: u64 = 0;

        loop {
            if self.stop_requested.load(Ordering::Relaxed) {
                log::info!(
                    "{} Stop requested after {} samples",
                    LOG_TAG_SAMPLER,
                    iterations
                );
                return SamplerExit::Stopped;
            }
            if self.event_sender.is_closed() {
                log::info!("{} Display closed, ending sampling", LOG_TAG_SAMPLER);
                return SamplerExit::DisplayClosed;
            }

            let changed = match self.sample_once(&mut previous_frame) {
                Ok(changed) => changed,
                Err(error) => return self.fail(error),
            };
            iterations += 1;

            let now = Instant::now();
            for window in windows.iter_mut() {
                if let Some(metric) = window.absorb(changed, now) {
                    log::debug!(
                        "{} {} ({} samples)",
                        LOG_TAG_SAMPLER,
                        metric,
                        metric.sample_count
                    );
                    if self.event_sender.unbounded_send(MonitorEvent::Metric(metric)).is_err() {
                        log::info!("{} Display closed, ending sampling", LOG_TAG_SAMPLER);
                        return SamplerExit::DisplayClosed;
                    }
                }
            }

            if !self.poll_throttle.is_zero() {
                thread::sleep(self.poll_throttle);
            }
        }
    }

    fn sample_once(&self, previous_frame: &mut Frame) -> Result<bool, MonitorError> {
        let current_frame = self.capture_frame()?;
        let changed = current_frame.detect_change(previous_frame)?;
        *previous_frame = current_frame;
        Ok(changed)
    }

    fn capture_frame(&self) -> Result<Frame, MonitorError> {
        self.screen_capturer
            .capture_region(&self.region)
            .map_err(|error| MonitorError::from_capture_error(&error))
    }

    fn fail(&self, error: MonitorError) -> SamplerExit {
        log::error!("{} Sampling stopped: {}", LOG_TAG_SAMPLER, error);

        for period in WindowPeriod::ALL {
            let event = MonitorEvent::Failed {
                period,
                error: error.clone(),
            };
            if self.event_sender.unbounded_send(event).is_err() {
                log::warn!(
                    "{} Could not report failure to the {}s pane",
                    LOG_TAG_SAMPLER,
                    period
                );
            }
        }

        SamplerExit::Failed(error)
    }
}

/// Handle to a sampler running on its own thread.
pub struct MonitoringSession {
    region: ScreenRegion,
    stop_requested: Arc<AtomicBool>,
    worker: Option<JoinHandle<SamplerExit>>,
}

impl MonitoringSession {
    pub fn spawn(
        screen_capturer: Arc<dyn ScreenCapturer>,
        region: ScreenRegion,
        poll_throttle: Duration,
    ) -> anyhow::Result<(Self, UnboundedReceiver<MonitorEvent>)> {
        let (event_sender, event_receiver) = mpsc::unbounded();
        let stop_requested = Arc::new(AtomicBool::new(false));

        let sampler = ChangeSampler::build(
            screen_capturer,
            region,
            poll_throttle,
            Arc::clone(&stop_requested),
            event_sender,
        );

        let worker = thread::Builder::new()
            .name(SAMPLER_THREAD_NAME.to_string())
            .spawn(move || sampler.run())
            .context("Failed to start sampling thread")?;

        log::info!("{} Monitoring session started for {}", LOG_TAG_SAMPLER, region);

        Ok((
            Self {
                region,
                stop_requested,
                worker: Some(worker),
            },
            event_receiver,
        ))
    }

    pub fn region(&self) -> ScreenRegion {
        self.region
    }

    /// Asks the worker to finish after its current iteration. Does not wait.
    pub fn stop(&mut self) {
        if !self.stop_requested.swap(true, Ordering::Relaxed) {
            log::info!("{} Stopping monitoring session for {}", LOG_TAG_SAMPLER, self.region);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.worker
            .as_ref()
            .map(|worker| worker.is_finished())
            .unwrap_or(true)
    }

    /// Stops the worker and waits for its exit reason.
    pub fn stop_and_join(mut self) -> Option<SamplerExit> {
        self.stop();
        let worker = self.worker.take()?;
        match worker.join() {
            Ok(exit) => Some(exit),
            Err(_) => {
                log::error!("{} Sampling thread panicked", LOG_TAG_SAMPLER);
                None
            }
        }
    }
}

impl Drop for MonitoringSession {
    fn drop(&mut self) {
        self.stop();
    }
}
