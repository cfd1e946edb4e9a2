use core::convert::Infallible;

use embassy_nrf::saadc::Saadc;
use power_supply_monitor::{sample, Channel, Sampler};

use crate::constants::ADC_RESOLUTION;

/// The three supply channels configured on the SAADC, in [`Channel::ALL`] order.
pub struct SaadcSampler<'d> {
    saadc: Saadc<'d, 3>,
}

impl<'d> SaadcSampler<'d> {
    pub fn new(saadc: Saadc<'d, 3>) -> Self {
        Self { saadc }
    }
}

impl Sampler for SaadcSampler<'_> {
    type Error = Infallible;

    async fn start(&mut self) -> Result<(), Self::Error> {
        self.saadc.calibrate().await;
        Ok(())
    }

    async fn read_u16(&mut self, channel: Channel) -> u16 {
        // a scan converts every configured input, keep the one asked for
        let mut buf = [0; 3];
        self.saadc.sample(&mut buf).await;
        let raw = buf[channel.index()];
        let sample = sample::widen(raw.into(), ADC_RESOLUTION);
        defmt::debug!("{}: raw = {}, widened = {}", channel, raw, sample);
        sample
    }
}
