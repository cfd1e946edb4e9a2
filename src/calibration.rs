use core::fmt;

use crate::channel::Channel;

/// Upper bound of the normalized sample space. Every sampler reports 16-bit
/// samples whatever the converter's native depth.
pub const FULL_SCALE: f32 = u16::MAX as f32;

/// Gain correction for an input sitting behind a voltage divider.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Divider {
    correction: f32,
}

impl Divider {
    /// Input wired straight to the ADC pin.
    pub const DIRECT: Divider = Divider { correction: 1.0 };

    /// Divider made of `top_ohms` from the source to the pin and
    /// `bottom_ohms` from the pin to ground.
    pub const fn from_resistors(top_ohms: f32, bottom_ohms: f32) -> Self {
        Self {
            correction: (top_ohms + bottom_ohms) / bottom_ohms,
        }
    }

    /// Fixed attenuation, e.g. `3.0` for a rail divided by three on the board.
    pub const fn from_ratio(ratio: f32) -> Self {
        Self { correction: ratio }
    }

    pub const fn correction(self) -> f32 {
        self.correction
    }
}

/// Battery voltages mapped to 0% and 100%.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryRange {
    pub min_voltage: f32,
    pub max_voltage: f32,
}

impl BatteryRange {
    /// Single Li-ion cell.
    pub const LI_ION: BatteryRange = BatteryRange::new(2.8, 4.2);

    pub const fn new(min_voltage: f32, max_voltage: f32) -> Self {
        Self {
            min_voltage,
            max_voltage,
        }
    }

    /// Linear charge estimate, clamped to `0.0..=100.0`.
    pub fn percentage(&self, voltage: f32) -> f32 {
        let fraction = (voltage - self.min_voltage) / (self.max_voltage - self.min_voltage);
        (100.0 * fraction).clamp(0.0, 100.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// The conversion factor of this channel is zero, negative or not finite.
    InvalidFactor(Channel),
    /// Battery maximum is not above the minimum.
    EmptyBatteryRange,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::InvalidFactor(channel) => {
                write!(f, "conversion factor of the {} channel must be positive", channel.name())
            }
            CalibrationError::EmptyBatteryRange => {
                f.write_str("battery max voltage must be above the min voltage")
            }
        }
    }
}

/// Volts per sample unit for every channel, plus the battery range.
///
/// Built once from board constants, usually in a `const`, and handed to
/// [`PowerSupplyMonitor::new`](crate::PowerSupplyMonitor::new).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    factors: [f32; 3],
    battery_range: BatteryRange,
}

impl Calibration {
    /// `reference_voltage` is the input voltage read as a full scale sample.
    pub const fn new(
        reference_voltage: f32,
        battery: Divider,
        solar_panel: Divider,
        vsys: Divider,
        battery_range: BatteryRange,
    ) -> Self {
        let volts_per_unit = reference_voltage / FULL_SCALE;
        Self {
            factors: [
                battery.correction() * volts_per_unit,
                solar_panel.correction() * volts_per_unit,
                vsys.correction() * volts_per_unit,
            ],
            battery_range,
        }
    }

    pub fn validate(&self) -> Result<(), CalibrationError> {
        for channel in Channel::ALL {
            let factor = self.factor(channel);
            if !(factor.is_finite() && factor > 0.0) {
                return Err(CalibrationError::InvalidFactor(channel));
            }
        }
        let span = self.battery_range.max_voltage - self.battery_range.min_voltage;
        if !(span.is_finite() && span > 0.0) {
            return Err(CalibrationError::EmptyBatteryRange);
        }
        Ok(())
    }

    pub fn factor(&self, channel: Channel) -> f32 {
        self.factors[channel.index()]
    }

    pub fn battery_range(&self) -> BatteryRange {
        self.battery_range
    }

    /// Voltage at the source side of `channel`'s divider.
    pub fn convert(&self, channel: Channel, raw: u16) -> f32 {
        convert(raw, self.factor(channel))
    }
}

pub fn convert(raw: u16, factor: f32) -> f32 {
    raw as f32 * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn pico() -> Calibration {
        Calibration::new(
            3.3,
            Divider::from_resistors(100e3, 100e3),
            Divider::from_resistors(330e3, 100e3),
            Divider::from_ratio(3.0),
            BatteryRange::LI_ION,
        )
    }

    #[test]
    fn direct_channel_half_scale() {
        let factor = 3.3 / FULL_SCALE;
        assert!((factor - 5.0355e-5).abs() < 1e-8);
        assert!((convert(32768, factor) - 1.6502).abs() < 5e-4);
    }

    #[test]
    fn conversion_is_monotonic() {
        let calibration = pico();
        for channel in Channel::ALL {
            let mut previous = calibration.convert(channel, 0);
            assert_eq!(previous, 0.0);
            for raw in (1..=u16::MAX).step_by(97).chain([u16::MAX]) {
                let voltage = calibration.convert(channel, raw);
                assert!(voltage >= previous, "{channel:?} decreased at {raw}");
                previous = voltage;
            }
        }
    }

    #[test]
    fn divider_corrections() {
        assert_eq!(Divider::DIRECT.correction(), 1.0);
        assert_eq!(Divider::from_resistors(100e3, 100e3).correction(), 2.0);
        assert!((Divider::from_resistors(330e3, 100e3).correction() - 4.3).abs() < EPSILON);

        let calibration = pico();
        let base = 3.3 / FULL_SCALE;
        assert!((calibration.factor(Channel::Battery) - 2.0 * base).abs() < 1e-9);
        assert!((calibration.factor(Channel::Vsys) - 3.0 * base).abs() < 1e-9);
        // full scale on the battery pin is twice the reference
        assert!((calibration.convert(Channel::Battery, u16::MAX) - 6.6).abs() < EPSILON);
    }

    #[test]
    fn percentage_clamps() {
        let range = BatteryRange::LI_ION;
        assert_eq!(range.percentage(4.2), 100.0);
        assert_eq!(range.percentage(5.0), 100.0);
        assert_eq!(range.percentage(2.8), 0.0);
        assert_eq!(range.percentage(2.0), 0.0);
        assert!((range.percentage(3.5) - 50.0).abs() < EPSILON);
    }

    #[test]
    fn validate_rejects_bad_constants() {
        assert_eq!(pico().validate(), Ok(()));

        let zero_ref = Calibration::new(
            0.0,
            Divider::DIRECT,
            Divider::DIRECT,
            Divider::DIRECT,
            BatteryRange::LI_ION,
        );
        assert_eq!(
            zero_ref.validate(),
            Err(CalibrationError::InvalidFactor(Channel::Battery))
        );

        let negative_panel = Calibration::new(
            3.3,
            Divider::DIRECT,
            Divider::from_ratio(-1.0),
            Divider::DIRECT,
            BatteryRange::LI_ION,
        );
        assert_eq!(
            negative_panel.validate(),
            Err(CalibrationError::InvalidFactor(Channel::SolarPanel))
        );

        let inverted = Calibration::new(
            3.3,
            Divider::DIRECT,
            Divider::DIRECT,
            Divider::DIRECT,
            BatteryRange::new(4.2, 4.2),
        );
        assert_eq!(inverted.validate(), Err(CalibrationError::EmptyBatteryRange));
    }
}
