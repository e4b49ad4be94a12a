//! Interval-gated sensor poller.
//!
//! The host loop calls [`Poller::poll`] as often as it likes; the poller only
//! touches hardware once the configured interval has elapsed since the last
//! attempt. Accessors return cached values and never perform I/O.

pub mod cache;
pub mod report;

pub use cache::MetricCache;
pub use report::{Metric, MetricStatus, PollReport};

use crate::clock::{Clock, elapsed_ms};
use crate::config::{PollerConfig, SensorKind};
use crate::error::SensorError;
use crate::sensor::HumiditySensor;

#[cfg(feature = "async")]
use crate::sensor::AsyncHumiditySensor;

/// Non-blocking poller caching the last valid temperature and humidity.
///
/// Generic over:
/// - `S`: Sensor driver ([`HumiditySensor`], or `AsyncHumiditySensor` with `async`)
/// - `C`: Millisecond clock
#[derive(Debug)]
pub struct Poller<S, C> {
    sensor: S,
    clock: C,
    config: PollerConfig,
    last_poll_ms: u32,
    temperature: MetricCache,
    humidity: MetricCache,
}

impl<S, C: Clock> Poller<S, C> {
    /// Create a poller. No hardware access happens until `initialize()` or a due poll.
    pub fn new(sensor: S, clock: C, config: PollerConfig) -> Self {
        if config.is_faster_than_sensor() {
            warn!(
                "poll interval {} ms is shorter than {} sampling period of {} ms",
                config.interval_ms(),
                config.kind(),
                config.kind().min_interval_ms()
            );
        }

        Self {
            sensor,
            clock,
            config,
            last_poll_ms: 0,
            temperature: MetricCache::new(),
            humidity: MetricCache::new(),
        }
    }

    /// Last valid temperature in degrees Celsius, `None` if never read successfully.
    pub fn temperature(&self) -> Option<f32> {
        self.temperature.value()
    }

    /// Last valid temperature converted to degrees Fahrenheit.
    pub fn temperature_fahrenheit(&self) -> Option<f32> {
        self.temperature.value().map(|c| c * 1.8 + 32.0)
    }

    /// Last valid relative humidity in percent, `None` if never read successfully.
    pub fn humidity(&self) -> Option<f32> {
        self.humidity.value()
    }

    /// Cached value for a single metric.
    pub fn value(&self, metric: Metric) -> Option<f32> {
        match metric {
            Metric::Temperature => self.temperature(),
            Metric::Humidity => self.humidity(),
        }
    }

    /// Configuration this poller was built with.
    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Hardware pin.
    pub fn pin(&self) -> u8 {
        self.config.pin()
    }

    /// Sensor model.
    pub fn kind(&self) -> SensorKind {
        self.config.kind()
    }

    /// Minimum milliseconds between hardware reads.
    pub fn interval_ms(&self) -> u32 {
        self.config.interval_ms()
    }

    /// Timestamp of the last poll attempt (0 before the first one).
    pub fn last_poll_ms(&self) -> u32 {
        self.last_poll_ms
    }

    /// True if a poll at `now_ms` would touch hardware.
    pub fn is_due_at(&self, now_ms: u32) -> bool {
        elapsed_ms(now_ms, self.last_poll_ms) >= self.config.interval_ms()
    }

    /// Get mutable reference to the sensor driver.
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Get mutable reference to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Tear down the poller, returning the driver and clock.
    pub fn release(self) -> (S, C) {
        (self.sensor, self.clock)
    }

    /// Claim the poll slot at `now_ms` if the interval has elapsed.
    fn begin_attempt(&mut self, now_ms: u32) -> bool {
        if !self.is_due_at(now_ms) {
            return false;
        }
        self.last_poll_ms = now_ms;
        true
    }

    /// Store both raw readings and build the report.
    fn record(&mut self, now_ms: u32, temperature: Option<f32>, humidity: Option<f32>) -> PollReport {
        let report = PollReport {
            at_ms: now_ms,
            temperature: self.temperature.accept(temperature),
            humidity: self.humidity.accept(humidity),
        };

        if !report.any_valid() {
            debug!("poll at {} ms: no valid readings", now_ms);
        } else {
            trace!(
                "poll at {} ms: temperature valid={} humidity valid={}",
                now_ms,
                report.temperature.is_updated(),
                report.humidity.is_updated()
            );
        }

        report
    }
}

impl<S: HumiditySensor, C: Clock> Poller<S, C> {
    /// One-time hardware setup. Driver failures are logged, not returned.
    pub fn initialize(&mut self) {
        if self.try_initialize().is_err() {
            warn!("{} on pin {}: init failed", self.config.kind(), self.config.pin());
        }
    }

    /// One-time hardware setup, surfacing driver failure.
    pub fn try_initialize(&mut self) -> Result<(), SensorError<S::Error>> {
        self.sensor.init()?;
        debug!("{} on pin {} initialized", self.config.kind(), self.config.pin());
        Ok(())
    }

    /// Poll the sensor if the interval has elapsed.
    ///
    /// Returns `true` if a hardware read was attempted, whether or not it
    /// produced valid data. Use [`Poller::poll_report`] to see what changed.
    pub fn poll(&mut self) -> bool {
        self.poll_report().is_some()
    }

    /// `poll()` with an explicit timestamp instead of the clock.
    pub fn poll_at(&mut self, now_ms: u32) -> bool {
        self.poll_report_at(now_ms).is_some()
    }

    /// Poll the sensor if due, reporting per-metric outcome.
    ///
    /// Returns `None` if the interval has not elapsed (no hardware access).
    pub fn poll_report(&mut self) -> Option<PollReport> {
        let now_ms = self.clock.now_ms();
        self.poll_report_at(now_ms)
    }

    /// `poll_report()` with an explicit timestamp instead of the clock.
    pub fn poll_report_at(&mut self, now_ms: u32) -> Option<PollReport> {
        if !self.begin_attempt(now_ms) {
            return None;
        }

        let temperature = self.sensor.read_temperature().ok();
        let humidity = self.sensor.read_humidity().ok();

        Some(self.record(now_ms, temperature, humidity))
    }
}

#[cfg(feature = "async")]
impl<S: AsyncHumiditySensor, C: Clock> Poller<S, C> {
    /// Async one-time hardware setup. Driver failures are logged, not returned.
    pub async fn initialize_async(&mut self) {
        if self.try_initialize_async().await.is_err() {
            warn!("{} on pin {}: init failed", self.config.kind(), self.config.pin());
        }
    }

    /// Async one-time hardware setup, surfacing driver failure.
    pub async fn try_initialize_async(&mut self) -> Result<(), SensorError<S::Error>> {
        self.sensor.init().await?;
        debug!("{} on pin {} initialized", self.config.kind(), self.config.pin());
        Ok(())
    }

    /// Async `poll()`: same gating and caching rules.
    pub async fn poll_async(&mut self) -> bool {
        self.poll_report_async().await.is_some()
    }

    /// Async `poll_report()`.
    pub async fn poll_report_async(&mut self) -> Option<PollReport> {
        let now_ms = self.clock.now_ms();
        self.poll_report_async_at(now_ms).await
    }

    /// Async `poll_report_at()`.
    pub async fn poll_report_async_at(&mut self, now_ms: u32) -> Option<PollReport> {
        if !self.begin_attempt(now_ms) {
            return None;
        }

        let temperature = self.sensor.read_temperature().await.ok();
        let humidity = self.sensor.read_humidity().await.ok();

        Some(self.record(now_ms, temperature, humidity))
    }
}
