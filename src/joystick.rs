//! # Joystick Module
//!
//! Raw two-axis readings and their normalization to the unit square.
//!
//! The hardware sampler lives in [`crate::adc_reader`]; everything here is pure
//! so the axis math can be checked on the host.

use crate::constants::adc;

/// One raw reading of both joystick axes, each in `0..adc::RANGE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

/// Joystick position in the unit square, Y pointing up
///
/// Not clamped: ADC spread can push either axis slightly past ±1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct AxisPosition {
    pub x: f32,
    pub y: f32,
}

impl AxisSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Both axes at the midpoint
    pub const fn centered() -> Self {
        Self::new(adc::MIDPOINT, adc::MIDPOINT)
    }

    /// Convert to a unit-range position (X as read, Y inverted)
    pub fn normalize(&self) -> AxisPosition {
        AxisPosition {
            x: normalize_x(self.x),
            y: normalize_y(self.y),
        }
    }
}

impl AxisPosition {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };
}

/// `(raw - M) / M`
pub fn normalize_x(raw: u16) -> f32 {
    let mid = adc::MIDPOINT as f32;
    (raw as f32 - mid) / mid
}

/// `(M - raw) / M`; a rising raw value moves the marker up the screen
pub fn normalize_y(raw: u16) -> f32 {
    let mid = adc::MIDPOINT as f32;
    (mid - raw as f32) / mid
}

/// Anything that can produce one joystick sample on demand
///
/// Reads never fail from the caller's point of view; implementations decide
/// what to substitute when the converter reports an error.
#[allow(async_fn_in_trait)]
pub trait AxisSource {
    async fn sample(&mut self) -> AxisSample;
}
