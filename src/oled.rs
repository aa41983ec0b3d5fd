//! # OLED Module
//!
//! SSD1306 128x64 monochrome display on I2C1, in buffered graphics mode.
//!
//! ## Wiring
//!
//! - SDA -> GPIO 14 (I2C1 SDA)
//! - SCL -> GPIO 15 (I2C1 SCL)
//! - VCC -> 3.3V, GND -> GND
//!
//! The compositor draws into the driver's RAM buffer; [`Panel::flush_frame`]
//! pushes the whole buffer over I2C.

use display_interface::DisplayError;
use embassy_rp::i2c::{Blocking, Config as I2cConfig, I2c};
use embassy_rp::peripherals::{I2C1, PIN_14, PIN_15};
use embassy_rp::Peri;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::compositor::Panel;
use crate::constants::{display, i2c, pins};
use crate::log_info;

pub type OledDisplay = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

impl Panel for OledDisplay {
    fn flush_frame(&mut self) -> Result<(), Self::Error> {
        self.flush()
    }
}

/// Bring up I2C1 and the panel. An error here means no display is attached.
pub fn init_display(
    i2c_peripheral: Peri<'static, I2C1>,
    sda_pin: Peri<'static, PIN_14>,
    scl_pin: Peri<'static, PIN_15>,
) -> Result<OledDisplay, DisplayError> {
    let mut config = I2cConfig::default();
    config.frequency = i2c::FAST_FREQUENCY_HZ;

    let bus = I2c::new_blocking(i2c_peripheral, scl_pin, sda_pin, config);
    let interface = I2CDisplayInterface::new_custom_address(bus, i2c::SSD1306_ADDR);

    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    oled.init()?;

    log_info!(
        "SSD1306 {}x{} at {:#x} on SDA=GPIO{} SCL=GPIO{}",
        display::WIDTH,
        display::HEIGHT,
        i2c::SSD1306_ADDR,
        pins::I2C_SDA,
        pins::I2C_SCL
    );

    Ok(oled)
}
