//! Replay doubles for host tests and bench runs.
//!
//! `ScriptedSensor` plays back a fixed-capacity queue of raw readings and
//! counts hardware accesses; `ManualClock` is a clock the caller moves by hand.
//! Both are `no_std` and allocation-free.

use core::fmt;

use heapless::Deque;

use crate::clock::Clock;
use crate::sensor::HumiditySensor;

/// Failure injected by [`ScriptedSensor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptError {
    /// `init()` was told to fail
    InitFailed,
    /// Scripted bus error for one read
    BusError,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::InitFailed => write!(f, "Init failed"),
            ScriptError::BusError => write!(f, "Bus error"),
        }
    }
}

/// Sensor driver replaying queued readings.
///
/// Each metric has its own queue holding up to `N` entries. A `None` entry
/// plays back as a bus error; an exhausted queue plays back as NaN, which is
/// what vendor drivers return when the sensor does not answer.
#[derive(Debug)]
pub struct ScriptedSensor<const N: usize> {
    temperatures: Deque<Option<f32>, N>,
    humidities: Deque<Option<f32>, N>,
    init_calls: usize,
    hardware_reads: usize,
    fail_init: bool,
}

impl<const N: usize> ScriptedSensor<N> {
    /// Create a sensor with empty queues.
    pub const fn new() -> Self {
        Self {
            temperatures: Deque::new(),
            humidities: Deque::new(),
            init_calls: 0,
            hardware_reads: 0,
            fail_init: false,
        }
    }

    /// Queue one temperature/humidity pair. NaN values are played back as-is.
    ///
    /// Returns the pair back if either queue is full.
    pub fn push(&mut self, temperature: f32, humidity: f32) -> Result<(), (f32, f32)> {
        self.push_raw(Some(temperature), Some(humidity))
            .map_err(|_| (temperature, humidity))
    }

    /// Queue a bus error for both metrics.
    pub fn push_bus_error(&mut self) -> Result<(), ()> {
        self.push_raw(None, None).map_err(|_| ())
    }

    /// Queue raw entries; `None` is a bus error.
    pub fn push_raw(
        &mut self,
        temperature: Option<f32>,
        humidity: Option<f32>,
    ) -> Result<(), (Option<f32>, Option<f32>)> {
        if self.temperatures.is_full() || self.humidities.is_full() {
            return Err((temperature, humidity));
        }
        let _ = self.temperatures.push_back(temperature);
        let _ = self.humidities.push_back(humidity);
        Ok(())
    }

    /// Make subsequent `init()` calls fail.
    pub fn fail_init(&mut self, fail: bool) {
        self.fail_init = fail;
    }

    /// Number of `init()` calls so far.
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    /// Number of temperature and humidity reads so far.
    pub fn hardware_reads(&self) -> usize {
        self.hardware_reads
    }

    /// Pairs still queued (the longer of the two queues).
    pub fn pending(&self) -> usize {
        self.temperatures.len().max(self.humidities.len())
    }

    fn do_init(&mut self) -> Result<(), ScriptError> {
        self.init_calls += 1;
        if self.fail_init {
            Err(ScriptError::InitFailed)
        } else {
            Ok(())
        }
    }

    fn next(queue: &mut Deque<Option<f32>, N>, reads: &mut usize) -> Result<f32, ScriptError> {
        *reads += 1;
        match queue.pop_front() {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(ScriptError::BusError),
            None => Ok(f32::NAN),
        }
    }
}

impl<const N: usize> Default for ScriptedSensor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HumiditySensor for ScriptedSensor<N> {
    type Error = ScriptError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.do_init()
    }

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        Self::next(&mut self.temperatures, &mut self.hardware_reads)
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        Self::next(&mut self.humidities, &mut self.hardware_reads)
    }
}

#[cfg(feature = "async")]
impl<const N: usize> crate::sensor::AsyncHumiditySensor for ScriptedSensor<N> {
    type Error = ScriptError;

    async fn init(&mut self) -> Result<(), Self::Error> {
        self.do_init()
    }

    async fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        Self::next(&mut self.temperatures, &mut self.hardware_reads)
    }

    async fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        Self::next(&mut self.humidities, &mut self.hardware_reads)
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u32,
}

impl ManualClock {
    /// Clock starting at 0 ms.
    pub const fn new() -> Self {
        Self { now_ms: 0 }
    }

    /// Clock starting at `now_ms`.
    pub const fn starting_at(now_ms: u32) -> Self {
        Self { now_ms }
    }

    /// Jump to an absolute time.
    pub fn set(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
    }

    /// Move forward, wrapping at `u32::MAX` like a hardware counter.
    pub fn advance(&mut self, delta_ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(delta_ms);
    }

    /// Current time without going through the `Clock` trait.
    pub const fn now(&self) -> u32 {
        self.now_ms
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> u32 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_playback() {
        let mut sensor: ScriptedSensor<4> = ScriptedSensor::new();
        sensor.push(21.5, 40.0).unwrap();
        sensor.push_bus_error().unwrap();
        assert_eq!(sensor.pending(), 2);

        assert_eq!(sensor.read_temperature(), Ok(21.5));
        assert_eq!(sensor.read_humidity(), Ok(40.0));
        assert_eq!(sensor.read_temperature(), Err(ScriptError::BusError));
        assert_eq!(sensor.read_humidity(), Err(ScriptError::BusError));

        // Exhausted queue reads as NaN
        assert!(sensor.read_temperature().unwrap().is_nan());
        assert_eq!(sensor.hardware_reads(), 5);
    }

    #[test]
    fn test_scripted_capacity() {
        let mut sensor: ScriptedSensor<1> = ScriptedSensor::new();
        sensor.push(1.0, 2.0).unwrap();
        assert_eq!(sensor.push(3.0, 4.0), Err((3.0, 4.0)));
        assert_eq!(sensor.push_bus_error(), Err(()));
    }

    #[test]
    fn test_scripted_init() {
        let mut sensor: ScriptedSensor<1> = ScriptedSensor::default();
        assert_eq!(sensor.init(), Ok(()));
        sensor.fail_init(true);
        assert_eq!(sensor.init(), Err(ScriptError::InitFailed));
        assert_eq!(sensor.init_calls(), 2);
    }

    #[test]
    fn test_manual_clock_wraps() {
        let mut clock = ManualClock::starting_at(u32::MAX - 9);
        clock.advance(20);
        assert_eq!(clock.now_ms(), 10);

        clock.set(500);
        assert_eq!(clock.now(), 500);
    }
}
