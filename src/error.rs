//! Error types.
//!
//! Invalid sensor readings are not errors: the poller absorbs them and keeps the
//! previous cached value. These types cover configuration mistakes and the one
//! driver failure callers can opt into seeing (`Poller::try_initialize`).

use core::fmt;

/// Configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Interval exceeds half the millisecond counter range
    IntervalTooLong {
        /// Requested interval
        interval_ms: u32,
        /// Largest accepted interval
        max_ms: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IntervalTooLong {
                interval_ms,
                max_ms,
            } => write!(
                f,
                "Poll interval {} ms exceeds maximum of {} ms",
                interval_ms, max_ms
            ),
        }
    }
}

/// Error surfaced from the underlying sensor driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorError<E> {
    /// Driver reported a failure
    Driver(E),
}

impl<E> SensorError<E> {
    /// Unwrap the driver's own error.
    pub fn into_inner(self) -> E {
        match self {
            SensorError::Driver(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Driver(e) => write!(f, "Sensor driver error: {:?}", e),
        }
    }
}

impl<E> From<E> for SensorError<E> {
    fn from(e: E) -> Self {
        SensorError::Driver(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        let err = ConfigError::IntervalTooLong {
            interval_ms: 5,
            max_ms: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Poll interval 5 ms exceeds maximum of 4 ms"
        );

        let err: SensorError<&str> = SensorError::Driver("bus timeout");
        assert_eq!(format!("{}", err), "Sensor driver error: \"bus timeout\"");
    }

    #[test]
    fn test_sensor_error_conversion() {
        let err: SensorError<u8> = 3u8.into();
        assert_eq!(err, SensorError::Driver(3));
        assert_eq!(err.into_inner(), 3);
    }
}
