//! # Control Loop
//!
//! One cycle: snapshot the mode, sample the joystick, map, drive the LEDs and
//! redraw the display. `run` repeats that forever with a fixed delay after each
//! cycle (a cadence, not a deadline).
//!
//! ```text
//! ModeState ──snapshot──┐
//!                       v
//! AxisSource -> AxisSample -> MapperConfig::map -> LedBank::apply
//!                                              \-> compositor::compose -> Panel
//! ```

use crate::actuator::{ActuatorState, LedLevels, MapperConfig};
use crate::compositor::{self, Panel};
use crate::constants::timing;
use crate::joystick::{AxisPosition, AxisSource};
use crate::mode::ModeState;
use crate::pwm_controller::LedBank;
use crate::{log_debug, log_warn};

pub struct ControlLoop<'m, S, L, P> {
    sampler: S,
    leds: L,
    panel: P,
    mode: &'m ModeState,
    config: MapperConfig,
    cycles: u32,
}

impl<'m, S, L, P> ControlLoop<'m, S, L, P>
where
    S: AxisSource,
    L: LedBank,
    P: Panel,
{
    pub fn new(sampler: S, leds: L, panel: P, mode: &'m ModeState) -> Self {
        Self {
            sampler,
            leds,
            panel,
            mode,
            config: MapperConfig::default(),
            cycles: 0,
        }
    }

    /// LEDs dark, marker centered, current border
    pub fn show_idle_frame(&mut self) {
        self.leds.apply(&LedLevels::OFF);

        let surface = self.panel.bounding_box().size;
        let marker = self.config.marker_position(AxisPosition::CENTER, surface);
        let border = self.mode.snapshot().border_style;
        if compositor::compose(&mut self.panel, marker, self.config.marker_size, border).is_err() {
            log_warn!("idle frame could not be drawn");
        }
    }

    /// Run a single sample -> map -> render pass
    pub async fn cycle(&mut self) -> ActuatorState {
        let mode = self.mode.snapshot();
        let sample = self.sampler.sample().await;

        let surface = self.panel.bounding_box().size;
        let state = self.config.map(sample, &mode, surface);

        self.leds.apply(&state.leds);

        if compositor::compose(&mut self.panel, state.marker, self.config.marker_size, mode.border_style)
            .is_err()
        {
            log_warn!("display update failed, frame dropped");
        }

        if self.cycles % timing::TELEMETRY_EVERY_CYCLES == 0 {
            log_debug!(
                "[JOYSTICK] raw=({}, {}) marker=({}, {}) leds={} mode={}",
                sample.x,
                sample.y,
                state.marker.x,
                state.marker.y,
                state.leds,
                mode
            );
        }
        self.cycles = self.cycles.wrapping_add(1);

        state
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Idle frame, then cycle forever with `period` between cycles
    #[cfg(target_os = "none")]
    pub async fn run(mut self, period: embassy_time::Duration) -> ! {
        self.show_idle_frame();
        loop {
            self.cycle().await;
            embassy_time::Timer::after(period).await;
        }
    }
}
