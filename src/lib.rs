//! Calibrated readings of a solar-charged board's supply rails.
//!
//! Three ADC channels (battery, solar panel and the system rail) are sampled
//! through a [`Sampler`] and scaled to volts with factors fixed at build
//! time. The battery voltage is also reported as a clamped charge percentage.
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod calibration;
pub mod channel;
pub mod measurement;
pub mod monitor;
pub mod sample;

pub use calibration::{BatteryRange, Calibration, CalibrationError, Divider};
pub use channel::Channel;
pub use measurement::{Measurement, PowerReadings, Unit};
pub use monitor::{Error, PowerSupplyMonitor, Sampler, Selector, UnknownSelector};
