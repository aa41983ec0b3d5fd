//! # Hardware Constants Module
//!
//! Compile-time configuration for the joystick panel, organized by functional
//! area. Wiring follows the BitDogLab-style Pico 2 board: joystick on ADC0/ADC1,
//! RGB status LED on GPIO 11-13, SSD1306 on I2C1.

/// ADC (Analog-to-Digital Converter) Constants
pub mod adc {
    /// Exclusive upper bound of a 12-bit conversion (samples lie in `0..RANGE`)
    pub const RANGE: u16 = 4096;

    /// Midpoint of the conversion range, the joystick rest position
    pub const MIDPOINT: u16 = RANGE / 2;
}

/// Joystick Constants
pub mod joystick {
    /// Dead zone around the midpoint, in raw ADC units
    pub const NEUTRAL_ZONE: u16 = 200;
}

/// PWM (Pulse Width Modulation) Constants
pub mod pwm {
    /// Highest LED level; also used as the PWM wrap value
    pub const LEVEL_MAX: u16 = 255;

    /// Integer clock divider applied to every LED slice
    pub const CLOCK_DIVIDER: u8 = 4;
}

/// OLED Display Constants
pub mod display {
    /// SSD1306 panel width in pixels
    pub const WIDTH: u32 = 128;

    /// SSD1306 panel height in pixels
    pub const HEIGHT: u32 = 64;

    /// Side length of the joystick marker square
    pub const MARKER_SIZE: u32 = 8;

    /// Side length of each corner square in the `Corners` border style
    pub const CORNER_SIZE: u32 = 10;
}

/// Timing Constants
pub mod timing {
    /// Delay after each control loop cycle (50ms = 20Hz)
    pub const LOOP_PERIOD_MS: u64 = 50;

    /// Refractory window after an accepted button edge
    pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

    /// Emit one telemetry line every this many cycles (~1 second)
    pub const TELEMETRY_EVERY_CYCLES: u32 = (1000 / LOOP_PERIOD_MS) as u32;
}

/// I2C Communication Constants
pub mod i2c {
    /// Fast I2C frequency (400kHz)
    pub const FAST_FREQUENCY_HZ: u32 = 400_000;

    /// SSD1306 7-bit address with SA0 tied low
    pub const SSD1306_ADDR: u8 = 0x3C;
}

/// GPIO assignments, informational only (peripherals are taken by name in `main`)
pub mod pins {
    pub const BUTTON_A: u8 = 5;
    pub const JOYSTICK_BUTTON: u8 = 22;
    pub const JOYSTICK_Y: u8 = 26; // ADC0
    pub const JOYSTICK_X: u8 = 27; // ADC1
    pub const LED_GREEN: u8 = 11;
    pub const LED_BLUE: u8 = 12;
    pub const LED_RED: u8 = 13;
    pub const I2C_SDA: u8 = 14;
    pub const I2C_SCL: u8 = 15;
}
