#![no_std]

#[cfg(test)]
extern crate std;

mod logging;

pub mod actuator;
pub mod compositor;
pub mod constants;
pub mod control;
pub mod debouncer;
pub mod joystick;
pub mod mode;
pub mod pwm_controller;

#[cfg(target_os = "none")]
pub mod adc_reader;
#[cfg(target_os = "none")]
pub mod buttons;
#[cfg(target_os = "none")]
pub mod oled;
