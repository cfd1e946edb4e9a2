use core::fmt;

use crate::calibration::{Calibration, CalibrationError};
use crate::channel::Channel;
use crate::measurement::{Measurement, PowerReadings};

/// Source of raw samples for the three supply channels.
///
/// Implementations own the ADC peripheral and its channel bindings. Each call
/// to [`read_u16`](Sampler::read_u16) runs one fresh conversion.
#[allow(async_fn_in_trait)]
pub trait Sampler {
    type Error;

    /// Bring the peripheral up before the first conversion.
    async fn start(&mut self) -> Result<(), Self::Error>;

    /// Convert `channel` and return the result scaled to 16 bits.
    async fn read_u16(&mut self, channel: Channel) -> u16;
}

/// What [`PowerSupplyMonitor::read_one`] should measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Selector {
    BatteryVoltage = 0,
    PanelVoltage = 1,
    SystemVoltage = 2,
    BatteryPercentage = 3,
}

impl Selector {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownSelector(pub u8);

impl TryFrom<u8> for Selector {
    type Error = UnknownSelector;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Selector::BatteryVoltage),
            1 => Ok(Selector::PanelVoltage),
            2 => Ok(Selector::SystemVoltage),
            3 => Ok(Selector::BatteryPercentage),
            _ => Err(UnknownSelector(code)),
        }
    }
}

/// Construction failure. Either one is fatal: there is no retry path.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Calibration(CalibrationError),
    Hardware(E),
}

impl<E> From<CalibrationError> for Error<E> {
    fn from(err: CalibrationError) -> Self {
        Error::Calibration(err)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Calibration(err) => write!(f, "invalid calibration: {err}"),
            Error::Hardware(err) => write!(f, "ADC start-up failed: {err}"),
        }
    }
}

pub struct PowerSupplyMonitor<S> {
    sampler: S,
    calibration: Calibration,
}

impl<S: Sampler> PowerSupplyMonitor<S> {
    /// Check `calibration` and start the sampler.
    pub async fn new(mut sampler: S, calibration: Calibration) -> Result<Self, Error<S::Error>> {
        calibration.validate()?;
        sampler.start().await.map_err(Error::Hardware)?;
        debug!("power supply monitor started");
        Ok(Self {
            sampler,
            calibration,
        })
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Take the sampler back, e.g. to power the ADC down.
    pub fn release(self) -> S {
        self.sampler
    }

    /// Sample every channel once.
    ///
    /// Channels are converted one after the other, so the three voltages are
    /// not simultaneous. The percentage reuses the battery sample.
    pub async fn read_all(&mut self) -> PowerReadings {
        let battery_voltage = self.voltage(Channel::Battery).await;
        let solar_panel_voltage = self.voltage(Channel::SolarPanel).await;
        let vsys_voltage = self.voltage(Channel::Vsys).await;
        let battery_percentage = self.charge(&battery_voltage);

        PowerReadings {
            battery_voltage,
            solar_panel_voltage,
            vsys_voltage,
            battery_percentage,
        }
    }

    pub async fn read_one(&mut self, selector: Selector) -> Measurement {
        match selector {
            Selector::BatteryVoltage => self.voltage(Channel::Battery).await,
            Selector::PanelVoltage => self.voltage(Channel::SolarPanel).await,
            Selector::SystemVoltage => self.voltage(Channel::Vsys).await,
            Selector::BatteryPercentage => {
                let battery = self.voltage(Channel::Battery).await;
                self.charge(&battery)
            }
        }
    }

    /// [`read_one`](Self::read_one) by numeric [`Selector`] code.
    ///
    /// An unknown code samples nothing and yields [`Measurement::INERT`].
    pub async fn read_code(&mut self, code: u8) -> Measurement {
        match Selector::try_from(code) {
            Ok(selector) => self.read_one(selector).await,
            Err(UnknownSelector(code)) => {
                warn!("unknown selector {}", code);
                Measurement::INERT
            }
        }
    }

    async fn voltage(&mut self, channel: Channel) -> Measurement {
        let raw = self.sampler.read_u16(channel).await;
        let value = self.calibration.convert(channel, raw);
        trace!("{}: raw = {}, converted = {}", channel, raw, value);
        Measurement::volts(raw, value)
    }

    fn charge(&self, battery: &Measurement) -> Measurement {
        let value = self.calibration.battery_range().percentage(battery.value);
        Measurement::percent(battery.raw.unwrap_or_default(), value)
    }
}
