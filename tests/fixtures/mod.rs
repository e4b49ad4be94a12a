//! Test fixtures for dht-poller integration tests.
//!
//! Provides:
//! - `MockSensor`: HumiditySensor that records every call
//! - `MockError`: driver error type
//! - `SharedClock`: clock the test can move while the poller owns it

#![allow(dead_code)]

use dht_poller::{Clock, HumiditySensor};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

// ============================================================================
// MockSensor - Test Driver Implementation
// ============================================================================

/// Driver error produced by `MockSensor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Bus did not answer
    Timeout,
    /// Checksum mismatch on the frame
    Checksum,
}

/// Hardware call recorded by `MockSensor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init,
    Temperature,
    Humidity,
}

/// Mock sensor driver.
///
/// Uses `std` types (VecDeque, Vec) since tests run with std support.
#[derive(Debug, Default)]
pub struct MockSensor {
    temperatures: VecDeque<Result<f32, MockError>>,
    humidities: VecDeque<Result<f32, MockError>>,
    init_result: Option<MockError>,
    calls: Vec<Call>,
}

impl MockSensor {
    /// Create a mock with nothing queued. Reads return NaN when queues are empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next temperature and humidity values.
    pub fn queue(&mut self, temperature: f32, humidity: f32) {
        self.temperatures.push_back(Ok(temperature));
        self.humidities.push_back(Ok(humidity));
    }

    /// Queue a driver error for the next temperature and humidity read.
    pub fn queue_error(&mut self, error: MockError) {
        self.temperatures.push_back(Err(error));
        self.humidities.push_back(Err(error));
    }

    /// Make `init()` fail with `error`.
    pub fn fail_init_with(&mut self, error: MockError) {
        self.init_result = Some(error);
    }

    /// All recorded hardware calls.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of temperature/humidity reads.
    pub fn read_count(&self) -> usize {
        self.calls.iter().filter(|c| **c != Call::Init).count()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl HumiditySensor for MockSensor {
    type Error = MockError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Init);
        match self.init_result {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        self.calls.push(Call::Temperature);
        self.temperatures.pop_front().unwrap_or(Ok(f32::NAN))
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        self.calls.push(Call::Humidity);
        self.humidities.pop_front().unwrap_or(Ok(f32::NAN))
    }
}

#[cfg(feature = "async")]
impl dht_poller::AsyncHumiditySensor for MockSensor {
    type Error = MockError;

    async fn init(&mut self) -> Result<(), Self::Error> {
        HumiditySensor::init(self)
    }

    async fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        HumiditySensor::read_temperature(self)
    }

    async fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        HumiditySensor::read_humidity(self)
    }
}

// ============================================================================
// SharedClock - Clock Handle Kept by the Test
// ============================================================================

/// Millisecond counter shared between the test and the poller.
#[derive(Debug, Clone, Default)]
pub struct SharedClock(Rc<Cell<u32>>);

impl SharedClock {
    pub fn new(start_ms: u32) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn set(&self, now_ms: u32) {
        self.0.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u32) {
        self.0.set(self.0.get().wrapping_add(delta_ms));
    }
}

impl Clock for SharedClock {
    fn now_ms(&mut self) -> u32 {
        self.0.get()
    }
}
