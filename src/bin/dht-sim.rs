//! Host simulator for dht-poller.
//!
//! Drives a `Poller` against a simulated DHT sensor on a simulated clock and
//! prints what the host loop would have seen.
//!
//! Usage: `dht-sim [config.toml]`
//!
//! ```toml
//! [poller]
//! pin = 4
//! kind = "dht22"
//! interval_ms = 2000      # optional, defaults to the sensor's sampling period
//!
//! [simulation]
//! start_ms = 0            # set near 4294967295 to exercise counter wraparound
//! duration_ms = 60000
//! tick_ms = 100
//! temperature_c = 21.5
//! humidity_percent = 55.0
//! noise = 0.5
//! dropout_percent = 10
//! ```
//!
//! Set `RUST_LOG=debug` to see every poll attempt.

use std::fmt;
use std::fs;
use std::process::ExitCode;

use dht_poller::{ConfigError, HumiditySensor, ManualClock, Poller, PollerConfig, SensorKind};
use serde::Deserialize;

// ============================================================================
// Configuration File
// ============================================================================

#[derive(Debug, Deserialize)]
struct SimFile {
    poller: PollerSection,
    #[serde(default)]
    simulation: SimulationSection,
}

#[derive(Debug, Deserialize)]
struct PollerSection {
    pin: u8,
    kind: SensorKind,
    interval_ms: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SimulationSection {
    start_ms: u32,
    duration_ms: u32,
    tick_ms: u32,
    temperature_c: f32,
    humidity_percent: f32,
    noise: f32,
    dropout_percent: u8,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            start_ms: 0,
            duration_ms: 60_000,
            tick_ms: 100,
            temperature_c: 21.5,
            humidity_percent: 55.0,
            noise: 0.5,
            dropout_percent: 10,
        }
    }
}

impl Default for SimFile {
    fn default() -> Self {
        Self {
            poller: PollerSection {
                pin: 4,
                kind: SensorKind::Dht22,
                interval_ms: None,
            },
            simulation: SimulationSection::default(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
enum SimError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    Config(ConfigError),
    ZeroTick,
    Entropy(getrandom::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Read(e) => write!(f, "Cannot read config file: {}", e),
            SimError::Parse(e) => write!(f, "Invalid config file: {}", e),
            SimError::Config(e) => write!(f, "Invalid poller config: {}", e),
            SimError::ZeroTick => write!(f, "simulation.tick_ms must be non-zero"),
            SimError::Entropy(e) => write!(f, "Entropy source failed: {}", e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}

// ============================================================================
// Simulated Sensor
// ============================================================================

/// Sensor producing jittered readings with random NaN dropouts.
struct SimulatedSensor {
    temperature_c: f32,
    humidity_percent: f32,
    noise: f32,
    dropout_percent: u8,
}

impl SimulatedSensor {
    fn random_u32() -> Result<u32, getrandom::Error> {
        let mut buf = [0u8; 4];
        getrandom::fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn sample(&self, base: f32) -> Result<f32, getrandom::Error> {
        if (Self::random_u32()? % 100) < u32::from(self.dropout_percent) {
            return Ok(f32::NAN);
        }
        // Uniform in [-1.0, 1.0]
        let unit = (Self::random_u32()? as f64 / u32::MAX as f64) * 2.0 - 1.0;
        Ok(base + self.noise * unit as f32)
    }
}

impl HumiditySensor for SimulatedSensor {
    type Error = getrandom::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        // Probe the entropy source so a broken one shows up at init time
        Self::random_u32().map(|_| ())
    }

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        self.sample(self.temperature_c)
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        self.sample(self.humidity_percent).map(|h| h.clamp(0.0, 100.0))
    }
}

// ============================================================================
// Run
// ============================================================================

#[derive(Debug, Default)]
struct Summary {
    ticks: u32,
    attempts: u32,
    valid_temperature: u32,
    valid_humidity: u32,
    changed: u32,
}

fn load(path: Option<&str>) -> Result<SimFile, SimError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(SimError::Read)?;
            toml::from_str(&text).map_err(SimError::Parse)
        }
        None => Ok(SimFile::default()),
    }
}

fn run(file: SimFile) -> Result<(), SimError> {
    let sim = file.simulation;
    if sim.tick_ms == 0 {
        return Err(SimError::ZeroTick);
    }

    let config = match file.poller.interval_ms {
        Some(interval_ms) => PollerConfig::new(file.poller.pin, file.poller.kind, interval_ms)?,
        None => PollerConfig::for_kind(file.poller.pin, file.poller.kind),
    };

    let sensor = SimulatedSensor {
        temperature_c: sim.temperature_c,
        humidity_percent: sim.humidity_percent,
        noise: sim.noise,
        dropout_percent: sim.dropout_percent.min(100),
    };

    let mut poller = Poller::new(sensor, ManualClock::starting_at(sim.start_ms), config);
    poller.try_initialize().map_err(|e| SimError::Entropy(e.into_inner()))?;

    log::info!(
        "Simulating {} on pin {} every {} ms for {} ms",
        poller.kind(),
        poller.pin(),
        poller.interval_ms(),
        sim.duration_ms
    );

    let mut summary = Summary::default();
    let mut elapsed: u32 = 0;

    while elapsed <= sim.duration_ms {
        summary.ticks += 1;

        if let Some(report) = poller.poll_report() {
            summary.attempts += 1;
            summary.valid_temperature += u32::from(report.temperature.is_updated());
            summary.valid_humidity += u32::from(report.humidity.is_updated());
            summary.changed += u32::from(report.changed());

            log::debug!(
                "t={} ms: temperature={:?} humidity={:?}",
                report.at_ms,
                poller.temperature(),
                poller.humidity()
            );
        }

        poller.clock_mut().advance(sim.tick_ms);
        elapsed = match elapsed.checked_add(sim.tick_ms) {
            Some(next) => next,
            None => break,
        };
    }

    println!("ticks:             {}", summary.ticks);
    println!("poll attempts:     {}", summary.attempts);
    println!("valid temperature: {}", summary.valid_temperature);
    println!("valid humidity:    {}", summary.valid_humidity);
    println!("changed:           {}", summary.changed);
    match poller.temperature() {
        Some(t) => println!("temperature:       {:.1} °C", t),
        None => println!("temperature:       n/a"),
    }
    match poller.humidity() {
        Some(h) => println!("humidity:          {:.1} %", h),
        None => println!("humidity:          n/a"),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args().nth(1);
    let result = load(path.as_deref()).and_then(run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
