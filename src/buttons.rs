//! Mode buttons.
//!
//! One task per button waits on the pin's falling-edge interrupt, timestamps
//! the edge with the monotonic clock and hands it to its [`ButtonController`].
//! The task owns its debounce timer; the only state it shares is [`ModeState`].

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use embassy_time::Instant;

use crate::mode::{Button, ButtonController, ModeState};
use crate::{log_debug, log_info};

/// Active-low button input with the internal pull-up enabled
pub fn button_input<'d>(pin: Peri<'d, impl Pin>) -> Input<'d> {
    Input::new(pin, Pull::Up)
}

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut input: Input<'static>, button: Button, mode: &'static ModeState) -> ! {
    let mut controller = ButtonController::new(button);
    log_info!("Button task started for {}", controller.button());

    loop {
        input.wait_for_falling_edge().await;
        let now_us = Instant::now().as_micros();

        match controller.on_falling_edge(now_us, mode) {
            Some(after) => log_info!("[{}] accepted -> {}", controller.button(), after),
            None => log_debug!("[{}] bounce ignored at {}us", controller.button(), now_us),
        }
    }
}
