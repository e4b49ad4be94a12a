#![no_std]
#![no_main]

use dht_poller::{HumiditySensor, Poller, PollerConfig, SensorKind};
use core::sync::atomic::{AtomicU32, Ordering};
use panic_halt as _;

// Minimal sensor implementation - measures only poller code size
pub struct MinimalSensor;

impl HumiditySensor for MinimalSensor {
    type Error = ();

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        Ok(core::hint::black_box(21.5))
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        Ok(core::hint::black_box(f32::NAN))
    }
}

// Free-running counter standing in for a hardware millisecond timer
static TICKS: AtomicU32 = AtomicU32::new(0);

fn millis() -> u32 {
    let now = TICKS.load(Ordering::Relaxed).wrapping_add(1);
    TICKS.store(now, Ordering::Relaxed);
    now
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let config = PollerConfig::for_kind(4, SensorKind::Dht22);
    let mut poller = Poller::new(MinimalSensor, millis, config);

    poller.initialize();

    // Keep poller alive and exercise the poll path
    loop {
        if core::hint::black_box(poller.poll()) {
            core::hint::black_box(poller.temperature());
            core::hint::black_box(poller.humidity());
        }
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
