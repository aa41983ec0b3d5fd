//! # ADC Reader Module
//!
//! Joystick sampling on the RP2350 ADC. Y is on GPIO 26 (ADC0), X on GPIO 27
//! (ADC1); every sample reads Y first, then X.
//!
//! A conversion error does not abort the cycle: the failing axis reports the
//! midpoint, which maps to a centered marker and a dark LED.

use embassy_rp::adc::{Adc, Async, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{ADC, PIN_26, PIN_27};
use embassy_rp::{bind_interrupts, Peri};

use crate::constants::{adc, pins};
use crate::joystick::{AxisSample, AxisSource};
use crate::{log_info, log_warn};

bind_interrupts!(pub struct AdcIrqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

pub struct JoystickSampler<'d> {
    adc: Adc<'d, Async>,
    x_axis: Channel<'d>,
    y_axis: Channel<'d>,
}

impl<'d> JoystickSampler<'d> {
    pub fn new(
        adc_peripheral: Peri<'d, ADC>,
        y_pin: Peri<'d, PIN_26>,
        x_pin: Peri<'d, PIN_27>,
    ) -> Self {
        let adc = Adc::new(adc_peripheral, AdcIrqs, AdcConfig::default());

        // Joystick pots drive the pins directly; no pulls
        let y_axis = Channel::new_pin(y_pin, Pull::None);
        let x_axis = Channel::new_pin(x_pin, Pull::None);

        log_info!(
            "Joystick sampler ready: Y=GPIO{} X=GPIO{}",
            pins::JOYSTICK_Y,
            pins::JOYSTICK_X
        );

        Self { adc, x_axis, y_axis }
    }

    async fn read_axis(adc: &mut Adc<'d, Async>, channel: &mut Channel<'d>, name: &str) -> u16 {
        match adc.read(channel).await {
            Ok(raw) => raw,
            Err(e) => {
                log_warn!("ADC read failed on {} axis: {}", name, e);
                adc::MIDPOINT
            }
        }
    }
}

impl AxisSource for JoystickSampler<'_> {
    async fn sample(&mut self) -> AxisSample {
        let y = Self::read_axis(&mut self.adc, &mut self.y_axis, "Y").await;
        let x = Self::read_axis(&mut self.adc, &mut self.x_axis, "X").await;
        AxisSample::new(x, y)
    }
}
