//! Sensor driver abstraction.
//!
//! The `HumiditySensor` trait is the seam between the poller and whatever library
//! speaks the sensor's bus protocol. The poller never touches the bus directly.

/// Blocking humidity/temperature sensor driver.
///
/// Reads may block for the duration of one bus transaction (a few milliseconds
/// on DHT-family sensors) but must not block indefinitely.
pub trait HumiditySensor {
    /// Platform-specific error type
    type Error;

    /// One-time hardware setup (pin mode, pull-ups, warm-up).
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Read temperature in degrees Celsius.
    ///
    /// Returns:
    /// - `Ok(value)` with a real number on success
    /// - `Ok(f32::NAN)` if the driver uses the NaN convention for a failed read
    /// - `Err(Self::Error)` on bus error
    fn read_temperature(&mut self) -> Result<f32, Self::Error>;

    /// Read relative humidity in percent. Same conventions as `read_temperature()`.
    fn read_humidity(&mut self) -> Result<f32, Self::Error>;
}

impl<S: HumiditySensor + ?Sized> HumiditySensor for &mut S {
    type Error = S::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        (**self).init()
    }

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        (**self).read_temperature()
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        (**self).read_humidity()
    }
}

/// Async humidity/temperature sensor driver (requires `async` feature).
///
/// Same contract as [`HumiditySensor`]. Uses `async fn` without Send bounds for
/// both single and multi-threaded executors.
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncHumiditySensor {
    /// Platform-specific error type
    type Error;

    /// One-time hardware setup.
    async fn init(&mut self) -> Result<(), Self::Error>;

    /// Read temperature in degrees Celsius (NaN on failed read).
    async fn read_temperature(&mut self) -> Result<f32, Self::Error>;

    /// Read relative humidity in percent (NaN on failed read).
    async fn read_humidity(&mut self) -> Result<f32, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSensor {
        reads: usize,
    }

    impl HumiditySensor for FixedSensor {
        type Error = ();

        fn init(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn read_temperature(&mut self) -> Result<f32, Self::Error> {
            self.reads += 1;
            Ok(20.0)
        }

        fn read_humidity(&mut self) -> Result<f32, Self::Error> {
            self.reads += 1;
            Err(())
        }
    }

    #[test]
    fn test_borrowed_sensor_forwards() {
        let mut sensor = FixedSensor { reads: 0 };
        {
            let mut borrowed = &mut sensor;
            assert_eq!(borrowed.init(), Ok(()));
            assert_eq!(borrowed.read_temperature(), Ok(20.0));
            assert_eq!(borrowed.read_humidity(), Err(()));
        }
        assert_eq!(sensor.reads, 2);
    }
}
