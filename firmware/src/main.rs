#![no_std]
#![no_main]

mod constants;
mod power;
mod voltage;

use {defmt_rtt as _, embassy_nrf as _, panic_probe as _};

use defmt::unwrap;
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    config::LfclkSource,
    saadc::{self, Saadc},
};
use power_supply_monitor::PowerSupplyMonitor;

use crate::constants::CALIBRATION;
use crate::voltage::SaadcSampler;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    defmt::info!("Power supply monitor start");
    defmt::info!(
        "Firmware version {}, built for {} by {}.",
        built_info::PKG_VERSION,
        built_info::TARGET,
        built_info::RUSTC_VERSION
    );
    if let (Some(version), Some(hash), Some(dirty)) = (
        built_info::GIT_VERSION,
        built_info::GIT_COMMIT_HASH_SHORT,
        built_info::GIT_DIRTY,
    ) {
        defmt::info!("Git version: {} ({}) dirty: {}", version, hash, dirty);
    }

    let mut config = embassy_nrf::config::Config::default();
    config.lfclk_source = LfclkSource::ExternalXtal;
    let p = embassy_nrf::init(config);

    // Slot order must match Channel::ALL
    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_12BIT;
    let mut battery = saadc::ChannelConfig::single_ended(p.P0_02);
    battery.time = saadc::Time::_40US;
    let mut panel = saadc::ChannelConfig::single_ended(p.P0_03);
    panel.time = saadc::Time::_40US;
    let vsys = saadc::ChannelConfig::single_ended(saadc::VddhDiv5Input);
    let saadc = Saadc::new(p.SAADC, Irqs, adc_config, [battery, panel, vsys]);

    // ADC start-up failures are not recoverable
    let monitor = unwrap!(PowerSupplyMonitor::new(SaadcSampler::new(saadc), CALIBRATION).await);
    unwrap!(spawner.spawn(power::run(monitor)));

    loop {
        let readings = power::read().await;
        for (key, measurement) in readings.iter() {
            defmt::info!(
                "{}: {} {} (raw {})",
                key,
                measurement.value,
                measurement.unit_label(),
                measurement.raw
            );
        }
    }
}

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
