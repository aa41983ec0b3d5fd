#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_os = "none")]
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Program metadata for `picotool info`.
#[cfg(target_os = "none")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"Joystick OLED Panel"),
    embassy_rp::binary_info::rp_program_description!(
        c"Joystick-driven OLED marker and status LEDs with debounced mode buttons"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_os = "none")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) {
    use defmt::*;
    use embassy_time::{Duration, Timer};

    use rp_pico2_joystick_oled::adc_reader::JoystickSampler;
    use rp_pico2_joystick_oled::buttons::{button_input, button_task};
    use rp_pico2_joystick_oled::constants::{pins, timing};
    use rp_pico2_joystick_oled::control::ControlLoop;
    use rp_pico2_joystick_oled::mode::{Button, ModeState};
    use rp_pico2_joystick_oled::oled;
    use rp_pico2_joystick_oled::pwm_controller::StatusLeds;

    static MODE: ModeState = ModeState::new();

    let p = embassy_rp::init(Default::default());
    info!("Joystick OLED panel starting");

    info!("Pin connections:");
    info!("  Joystick Y/X: GPIO {} (ADC0) / GPIO {} (ADC1)", pins::JOYSTICK_Y, pins::JOYSTICK_X);
    info!("  Buttons: A=GPIO {} joystick=GPIO {}", pins::BUTTON_A, pins::JOYSTICK_BUTTON);
    info!(
        "  LEDs: red=GPIO {} blue=GPIO {} green=GPIO {}",
        pins::LED_RED,
        pins::LED_BLUE,
        pins::LED_GREEN
    );
    info!("  OLED: SDA=GPIO {} SCL=GPIO {}", pins::I2C_SDA, pins::I2C_SCL);

    let leds = StatusLeds::new(p.PWM_SLICE5, p.PIN_11, p.PWM_SLICE6, p.PIN_12, p.PIN_13);
    let sampler = JoystickSampler::new(p.ADC, p.PIN_26, p.PIN_27);

    let panel = match oled::init_display(p.I2C1, p.PIN_14, p.PIN_15) {
        Ok(panel) => panel,
        Err(e) => {
            error!("Display init failed: {}", Debug2Format(&e));
            loop {
                Timer::after(Duration::from_secs(5)).await;
                error!("No display, control loop not started");
            }
        }
    };

    unwrap!(spawner.spawn(button_task(button_input(p.PIN_5), Button::A, &MODE)));
    unwrap!(spawner.spawn(button_task(
        button_input(p.PIN_22),
        Button::Joystick,
        &MODE
    )));

    info!("Control loop running every {}ms", timing::LOOP_PERIOD_MS);
    ControlLoop::new(sampler, leds, panel, &MODE)
        .run(Duration::from_millis(timing::LOOP_PERIOD_MS))
        .await
}

/// Host builds exist only so the library and its tests compile under `std`.
#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("firmware image: build with `--target thumbv8m.main-none-eabihf`");
}
