use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use power_supply_monitor::{PowerReadings, PowerSupplyMonitor};

use crate::constants::SAMPLE_RATE;
use crate::voltage::SaadcSampler;

static SHARED: Signal<ThreadModeRawMutex, PowerReadings> = Signal::new();

/// Wait for the next snapshot published by [`run`].
pub async fn read() -> PowerReadings {
    SHARED.wait().await
}

/// Owns the monitor; nothing else touches the SAADC.
#[embassy_executor::task]
pub async fn run(mut monitor: PowerSupplyMonitor<SaadcSampler<'static>>) -> ! {
    loop {
        let readings = monitor.read_all().await;
        SHARED.signal(readings);
        Timer::after(SAMPLE_RATE).await;
    }
}
