//! # dht-poller
//!
//! Non-blocking, interval-gated poller for DHT-family humidity/temperature sensors.
//!
//! **Key features:**
//! - **Never blocks the control loop** - hardware is read at most once per interval
//! - **Per-metric caching** - an invalid reading keeps the last valid value
//! - **Wraparound-safe** - millisecond counter overflow is handled
//! - **Driver-agnostic** - any bus implementation behind the `HumiditySensor` trait
//!
//! ```ignore
//! let config = PollerConfig::for_kind(4, SensorKind::Dht22);
//! let mut poller = Poller::new(driver, || millis(), config);
//! poller.initialize();
//!
//! loop {
//!     if poller.poll() {
//!         if let Some(t) = poller.temperature() { /* ... */ }
//!     }
//!     // other work
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `log` (default) - Diagnostics through the `log` facade
//! - `defmt` - Diagnostics through `defmt`, `defmt::Format` on public types
//! - `async` - Async driver trait and `poll_async`
//! - `serde` - `Deserialize` for `SensorKind`
//! - `sim` - Host simulator binary `dht-sim` (std)
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// Must come first so the logging macros are visible to later modules
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod config;
pub mod error;
pub mod poller;
pub mod replay;
pub mod sensor;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Driver seams
pub use clock::Clock;
pub use sensor::HumiditySensor;

#[cfg(feature = "async")]
pub use sensor::AsyncHumiditySensor;

// Configuration
pub use config::{MAX_INTERVAL_MS, PollerConfig, SensorKind};

// Error types
pub use error::{ConfigError, SensorError};

// Poller
pub use poller::{Metric, MetricStatus, PollReport, Poller};

// Test doubles
pub use replay::{ManualClock, ScriptError, ScriptedSensor};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
