//! # PWM Controller Module
//!
//! Drives the RGB status LED from [`LedLevels`].
//!
//! ## Pin Configuration
//!
//! ```text
//! LED    | GPIO | PWM slice / channel | Driven by
//! -------|------|---------------------|-----------------
//! Green  | 11   | PWM_SLICE5 / B      | indicator flag
//! Blue   | 12   | PWM_SLICE6 / A      | Y axis
//! Red    | 13   | PWM_SLICE6 / B      | X axis
//! ```
//!
//! Both slices wrap at `pwm::LEVEL_MAX`, so an LED level is written straight
//! into the compare register without rescaling.

use crate::actuator::LedLevels;

/// Output stage for the three status LEDs
pub trait LedBank {
    fn apply(&mut self, levels: &LedLevels);
}

#[cfg(target_os = "none")]
pub use rp::StatusLeds;

#[cfg(target_os = "none")]
mod rp {
    use embassy_rp::peripherals::{PIN_11, PIN_12, PIN_13, PWM_SLICE5, PWM_SLICE6};
    use embassy_rp::pwm::{Config as PwmConfig, Pwm};
    use embassy_rp::Peri;

    use super::LedBank;
    use crate::actuator::LedLevels;
    use crate::constants::pwm;
    use crate::log_info;

    /// PWM config shared by both LED slices, all channels dark
    fn led_pwm_config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.divider = pwm::CLOCK_DIVIDER.into();
        config.top = pwm::LEVEL_MAX;
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = true;
        config
    }

    pub struct StatusLeds<'d> {
        indicator: Pwm<'d>, // slice 5: green on B
        axes: Pwm<'d>,      // slice 6: blue on A, red on B
        indicator_config: PwmConfig,
        axes_config: PwmConfig,
    }

    impl<'d> StatusLeds<'d> {
        pub fn new(
            indicator_slice: Peri<'d, PWM_SLICE5>,
            green: Peri<'d, PIN_11>,
            axes_slice: Peri<'d, PWM_SLICE6>,
            blue: Peri<'d, PIN_12>,
            red: Peri<'d, PIN_13>,
        ) -> Self {
            let indicator_config = led_pwm_config();
            let axes_config = led_pwm_config();

            let indicator = Pwm::new_output_b(indicator_slice, green, indicator_config.clone());
            let axes = Pwm::new_output_ab(axes_slice, blue, red, axes_config.clone());

            log_info!(
                "Status LEDs ready (divider {}, wrap {})",
                pwm::CLOCK_DIVIDER,
                pwm::LEVEL_MAX
            );

            Self {
                indicator,
                axes,
                indicator_config,
                axes_config,
            }
        }
    }

    impl LedBank for StatusLeds<'_> {
        fn apply(&mut self, levels: &LedLevels) {
            self.axes_config.compare_a = levels.y_axis.min(pwm::LEVEL_MAX);
            self.axes_config.compare_b = levels.x_axis.min(pwm::LEVEL_MAX);
            self.axes.set_config(&self.axes_config);

            self.indicator_config.compare_b = levels.indicator.min(pwm::LEVEL_MAX);
            self.indicator.set_config(&self.indicator_config);
        }
    }
}
