use embassy_time::Duration;
use power_supply_monitor::{BatteryRange, Calibration, Divider};

// SAADC with the internal 0.6V reference and 1/6 gain
pub const ADC_REF_VOLTAGE: f32 = 0.6;
pub const ADC_GAIN: f32 = 6.0;
pub const ADC_RESOLUTION: u32 = 12;

// Board dividers, in ohms
const BATTERY_DIV_TOP: f32 = 100e3;
const BATTERY_DIV_BOTTOM: f32 = 100e3;
const PANEL_DIV_TOP: f32 = 330e3;
const PANEL_DIV_BOTTOM: f32 = 100e3;
// VDDH is read through the SAADC's internal VDDHDIV5 input
const VSYS_DIV: f32 = 5.0;

pub const CALIBRATION: Calibration = Calibration::new(
    ADC_REF_VOLTAGE * ADC_GAIN,
    Divider::from_resistors(BATTERY_DIV_TOP, BATTERY_DIV_BOTTOM),
    Divider::from_resistors(PANEL_DIV_TOP, PANEL_DIV_BOTTOM),
    Divider::from_ratio(VSYS_DIV),
    BatteryRange::LI_ION,
);

// Debug timmings
#[cfg(debug_assertions)]
pub static SAMPLE_RATE: Duration = Duration::from_secs(1);

// Production timmings for power saving
#[cfg(not(debug_assertions))]
pub static SAMPLE_RATE: Duration = Duration::from_secs(30);
