//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use dht_poller::{Poller, PollerConfig, SensorKind};
pub use fixtures::{Call, MockError, MockSensor, SharedClock};

/// Test pin used by every helper-built poller.
pub const TEST_PIN: u8 = 4;

// ============================================================================
// Poller Creation Helpers
// ============================================================================

/// Create an initialized DHT22 poller and a handle to its clock (starting at 0 ms).
pub fn create_test_poller(interval_ms: u32) -> (Poller<MockSensor, SharedClock>, SharedClock) {
    create_test_poller_at(interval_ms, 0)
}

/// Create an initialized DHT22 poller whose clock starts at `start_ms`.
pub fn create_test_poller_at(
    interval_ms: u32,
    start_ms: u32,
) -> (Poller<MockSensor, SharedClock>, SharedClock) {
    let clock = SharedClock::new(start_ms);
    let config = PollerConfig::new(TEST_PIN, SensorKind::Dht22, interval_ms).unwrap();
    let mut poller = Poller::new(MockSensor::new(), clock.clone(), config);
    poller.initialize();
    poller.sensor_mut().clear_calls();
    (poller, clock)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that a gated poll returned false and did not touch hardware.
pub fn assert_skipped(poller: &mut Poller<MockSensor, SharedClock>) {
    let before = poller.sensor_mut().read_count();
    let last = poller.last_poll_ms();

    assert!(!poller.poll(), "poll should have been gated");
    assert_eq!(
        poller.sensor_mut().read_count(),
        before,
        "gated poll must not read hardware"
    );
    assert_eq!(poller.last_poll_ms(), last, "gated poll must not move timestamp");
}
