#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    Volts,
    Percent,
}

impl Unit {
    pub const fn label(self) -> &'static str {
        match self {
            Unit::Volts => "V",
            Unit::Percent => "%",
        }
    }
}

/// A single calibrated reading.
///
/// `raw` is the 16-bit sample the value was computed from. Both `raw` and
/// `unit` are empty only on [`Measurement::INERT`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub raw: Option<u16>,
    pub value: f32,
    pub unit: Option<Unit>,
}

impl Measurement {
    /// Answer to a selector nobody knows about.
    pub const INERT: Measurement = Measurement {
        raw: None,
        value: 0.0,
        unit: None,
    };

    pub const fn volts(raw: u16, value: f32) -> Self {
        Self {
            raw: Some(raw),
            value,
            unit: Some(Unit::Volts),
        }
    }

    pub const fn percent(raw: u16, value: f32) -> Self {
        Self {
            raw: Some(raw),
            value,
            unit: Some(Unit::Percent),
        }
    }

    pub fn is_inert(&self) -> bool {
        *self == Self::INERT
    }

    /// "V", "%" or "" for the inert record.
    pub fn unit_label(&self) -> &'static str {
        self.unit.map_or("", Unit::label)
    }
}

pub const BATTERY_VOLTAGE: &str = "battery_voltage";
pub const SOLAR_PANEL_VOLTAGE: &str = "solar_panel_voltage";
pub const VSYS_VOLTAGE: &str = "vsys_voltage";
pub const BATTERY_PERCENTAGE: &str = "battery_percentage";

/// All four measurements taken by one [`read_all`](crate::PowerSupplyMonitor::read_all).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerReadings {
    pub battery_voltage: Measurement,
    pub solar_panel_voltage: Measurement,
    pub vsys_voltage: Measurement,
    pub battery_percentage: Measurement,
}

impl PowerReadings {
    pub const KEYS: [&'static str; 4] = [
        BATTERY_VOLTAGE,
        SOLAR_PANEL_VOLTAGE,
        VSYS_VOLTAGE,
        BATTERY_PERCENTAGE,
    ];

    pub fn get(&self, key: &str) -> Option<&Measurement> {
        match key {
            BATTERY_VOLTAGE => Some(&self.battery_voltage),
            SOLAR_PANEL_VOLTAGE => Some(&self.solar_panel_voltage),
            VSYS_VOLTAGE => Some(&self.vsys_voltage),
            BATTERY_PERCENTAGE => Some(&self.battery_percentage),
            _ => None,
        }
    }

    /// `(key, measurement)` pairs in [`PowerReadings::KEYS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Measurement)> + '_ {
        [
            &self.battery_voltage,
            &self.solar_panel_voltage,
            &self.vsys_voltage,
            &self.battery_percentage,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, measurement)| (Self::KEYS[i], measurement))
    }
}
